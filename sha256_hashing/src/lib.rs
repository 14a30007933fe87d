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
//! One-shot SHA-256 as specified by FIPS 180-2.
//!
//! The pipeline runs in fixed stages: the message is padded to whole 512-bit
//! blocks, each block is expanded into a 64-word schedule and compressed
//! against the running state, and the final state is serialized as the digest.
//! Only whole-message hashing is offered; there is no streaming context.

/// FIPS 180-2 constants
pub mod constants;

/// Word functions used by the schedule and the rounds
pub mod ops;

/// Error type shared by every stage
pub mod error;

/// Encoded message view and bit length
pub mod message;

/// Padding to whole 512-bit blocks
pub mod padding;

/// Splitting padded buffers into blocks
pub mod block;

/// Message schedule expansion
pub mod schedule;

/// The 64-round compression function
pub mod compress;

/// Running hash state and the finished digest
pub mod digest;

mod soft_impl;

pub use constants::{BLOCK_LEN, HASH_LEN};
pub use digest::{Digest, HashState};
pub use error::{HashError, HashResult};
pub use message::Message;
pub use soft_impl::SoftSha256;

/// A one-shot SHA-256 function.
pub trait Sha256 {
    /// Hashes `input` into its digest.
    fn digest(&self, input: &[u8]) -> HashResult<Digest>;

    fn hash(&self, input: &[u8]) -> HashResult<Vec<u8>> {
        self.digest(input).map(Into::into)
    }

    fn hash_fixed(&self, input: &[u8]) -> HashResult<[u8; HASH_LEN]> {
        self.digest(input).map(Into::into)
    }
}

/// Returns the digest of `input` as a `Vec<u8>`.
pub fn hash(input: &[u8]) -> HashResult<Vec<u8>> {
    SoftSha256.hash(input)
}

/// Returns the digest of `input` as a fixed-size array.
pub fn hash_fixed(input: &[u8]) -> HashResult<[u8; HASH_LEN]> {
    SoftSha256.hash_fixed(input)
}

/// Computes the digest of an already-encoded message.
pub fn digest<'a>(message: impl Into<Message<'a>>) -> HashResult<Digest> {
    SoftSha256.digest(message.into().as_bytes())
}

/// Computes the digest of `text` encoded as UTF-8.
pub fn digest_str(text: &str) -> HashResult<Digest> {
    digest(Message::from_text(text))
}

/// Computes the digest of bytes that must be valid UTF-8 text.
pub fn digest_utf8(bytes: &[u8]) -> HashResult<Digest> {
    digest(Message::from_utf8(bytes)?)
}

/// Lowercase hex rendering of the digest of `input`.
pub fn hex_digest(input: &[u8]) -> HashResult<String> {
    SoftSha256.digest(input).map(|d| d.to_hex())
}
