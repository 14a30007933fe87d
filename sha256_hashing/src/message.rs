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
//! Encoded messages: the byte view every later stage consumes.

use crate::constants::BLOCK_LEN;
use crate::error::{HashError, HashResult};
use crate::padding::padded_len;

/// A borrowed, already-encoded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message<'a> {
    bytes: &'a [u8],
}

impl<'a> Message<'a> {
    /// Wraps raw bytes as-is.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Encodes text as UTF-8. Rust strings are UTF-8 already, so this never
    /// copies.
    pub fn from_text(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
        }
    }

    /// Accepts bytes that claim to be text, rejecting invalid UTF-8.
    pub fn from_utf8(bytes: &'a [u8]) -> HashResult<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Message length in bits, as written into the padding length field.
    pub fn bit_len(&self) -> HashResult<u64> {
        bit_length(self.bytes.len())
    }

    /// Number of 64-byte blocks the padded message occupies.
    pub fn block_count(&self) -> HashResult<usize> {
        Ok(padded_len(self.bytes.len())? / BLOCK_LEN)
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Self::from_text(text)
    }
}

impl<'a> From<&'a [u8]> for Message<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Bit length of a message of `len` bytes, or `LengthOverflow` when it does not
/// fit in 64 bits.
pub fn bit_length(len: usize) -> HashResult<u64> {
    u64::try_from(len)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(HashError::LengthOverflow { len })
}
