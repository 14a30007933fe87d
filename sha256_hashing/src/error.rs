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
//! Error types for hashing operations.

use std::str::Utf8Error;

use derive_more::Display;

/// All the ways a digest computation can fail.
///
/// Hashing is a pure function, so every variant is permanent for the input that
/// produced it.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum HashError {
    /// Text input was not valid UTF-8.
    #[display("input is not valid UTF-8: {_0}")]
    Encoding(Utf8Error),
    /// The message bit length does not fit the 64-bit length field.
    #[display("message of {len} bytes exceeds the 2^64-1 bit length limit")]
    LengthOverflow { len: usize },
    /// A padded buffer reached the block splitter with a length that is not a
    /// multiple of the block size. Always a padding bug.
    #[display("padded buffer of {len} bytes is not a whole number of blocks")]
    InvariantViolation { len: usize },
}

impl std::error::Error for HashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HashError::Encoding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Utf8Error> for HashError {
    fn from(e: Utf8Error) -> Self {
        HashError::Encoding(e)
    }
}

/// Convenience alias for Results in this crate.
pub type HashResult<T> = Result<T, HashError>;
