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
//! Message padding (FIPS 180-2 section 5.1.1).

use crate::constants::{BLOCK_LEN, LENGTH_OFFSET, PAD_MARKER};
use crate::error::{HashError, HashResult};
use crate::message::bit_length;

/// Length in bytes of a message of `len` bytes once padded, or
/// `LengthOverflow` when the message or its padded form is too long.
pub fn padded_len(len: usize) -> HashResult<usize> {
    bit_length(len)?;
    // marker byte + 8 length bytes, rounded up to whole blocks
    len.checked_add(1 + 8)
        .and_then(|n| n.checked_next_multiple_of(BLOCK_LEN))
        .ok_or(HashError::LengthOverflow { len })
}

/// Pads `message` to a whole number of blocks: a `0x80` marker, zeros up to
/// 56 mod 64, then the original bit length as a big-endian `u64`.
pub fn pad(message: &[u8]) -> HashResult<Vec<u8>> {
    let bits = bit_length(message.len())?;

    let mut padded = Vec::with_capacity(padded_len(message.len())?);
    padded.extend_from_slice(message);
    padded.push(PAD_MARKER);
    let zeros = (LENGTH_OFFSET + BLOCK_LEN - padded.len() % BLOCK_LEN) % BLOCK_LEN;
    padded.resize(padded.len() + zeros, 0);
    padded.extend_from_slice(&bits.to_be_bytes());

    Ok(padded)
}
