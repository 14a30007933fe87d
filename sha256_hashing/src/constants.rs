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
//! Fixed parameters of SHA-256 as published in FIPS 180-2.
//!
//! None of these are configurable. They are shared read-only by every
//! hashing call.

/// Length of a SHA-256 digest in bytes.
pub const HASH_LEN: usize = 32;

/// Length of a message block in bytes (512 bits).
pub const BLOCK_LEN: usize = 64;

/// Number of words in the message schedule, and rounds per block.
pub const ROUNDS: usize = 64;

/// Number of 32-bit words read straight out of each block.
pub const BLOCK_WORDS: usize = BLOCK_LEN / 4;

/// Offset within a block where the 64-bit length field must start.
pub const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Marker byte holding the single `1` bit appended after the message.
pub const PAD_MARKER: u8 = 0x80;

/// Initial hash value H(0): first 32 bits of the fractional parts of the square
/// roots of the first 8 primes.
pub const INITIAL_STATE: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants K: first 32 bits of the fractional parts of the cube roots of
/// the first 64 primes.
pub static K: [u32; ROUNDS] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];
