// Copyright (c) 2025 Merge Layers Inc.
//
// This source code is licensed under the Business Source License 1.1
// (the "License"); you may not use this file except in compliance with the
// License. You may obtain a copy of the License at
//
//     https://github.com/malda-protocol/malda-zk-coprocessor/blob/main/LICENSE-BSL
//
// See the License for the specific language governing permissions and
// limitations under the License.
//
//
//! Splitting a padded buffer into 512-bit blocks.

use crate::constants::BLOCK_LEN;
use crate::error::{HashError, HashResult};

/// One 512-bit compression unit.
pub type Block = [u8; BLOCK_LEN];

/// Views a padded buffer as its ordered blocks without copying.
///
/// A length that is not a multiple of [`BLOCK_LEN`] means the padder is broken;
/// it is reported as [`HashError::InvariantViolation`].
pub fn split_blocks(padded: &[u8]) -> HashResult<&[Block]> {
    bytemuck::try_cast_slice(padded)
        .map_err(|_| HashError::InvariantViolation { len: padded.len() })
}
