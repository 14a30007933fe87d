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
use tracing::{debug, trace};

use crate::block::split_blocks;
use crate::compress::compress;
use crate::digest::{Digest, HashState};
use crate::error::HashResult;
use crate::padding::pad;
use crate::schedule::expand;
use crate::Sha256;

/// Portable implementation of SHA-256 built from the FIPS 180-2 stages.
///
/// Stateless: every call owns its own [`HashState`], so one value can be shared
/// freely between threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftSha256;

impl Sha256 for SoftSha256 {
    fn digest(&self, input: &[u8]) -> HashResult<Digest> {
        let padded = pad(input)?;
        let blocks = split_blocks(&padded)?;
        debug!(len = input.len(), blocks = blocks.len(), "hashing message");

        let mut state = HashState::new();
        for (index, block) in blocks.iter().enumerate() {
            let schedule = expand(block);
            let working = compress(state.words(), &schedule);
            state.accumulate(&working);
            trace!(index, "compressed block");
        }

        Ok(state.finalize())
    }
}
