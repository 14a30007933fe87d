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
//! The running hash state and the digest it finalizes into.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::compress::Registers;
use crate::constants::{HASH_LEN, INITIAL_STATE};

/// The persistent 8-word accumulator of one hashing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashState {
    words: Registers,
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl HashState {
    /// A fresh state holding the initial hash value.
    pub fn new() -> Self {
        Self {
            words: INITIAL_STATE,
        }
    }

    pub fn words(&self) -> &Registers {
        &self.words
    }

    /// Folds one block's working registers into the state.
    pub fn accumulate(&mut self, working: &Registers) {
        for (word, add) in self.words.iter_mut().zip(working) {
            *word = word.wrapping_add(*add);
        }
    }

    /// Serializes the state words big-endian into the digest.
    pub fn finalize(self) -> Digest {
        let mut out = [0u8; HASH_LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Digest(out)
    }
}

/// A SHA-256 digest. The raw bytes are canonical; the hex form is a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; HASH_LEN]);

impl Digest {
    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Lowercase, 64 characters, no separators.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Digest> for [u8; HASH_LEN] {
    fn from(d: Digest) -> Self {
        d.0
    }
}

impl From<[u8; HASH_LEN]> for Digest {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for Vec<u8> {
    fn from(d: Digest) -> Self {
        d.0.to_vec()
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&hex::encode(self.0))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl FromStr for Digest {
    type Err = hex::FromHexError;

    /// Parses a 64-character hex digest, either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = [0u8; HASH_LEN];
        hex::decode_to_slice(s.trim(), &mut out)?;
        Ok(Self(out))
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_initial_hash_value() {
        assert_eq!(HashState::new().words(), &INITIAL_STATE);
        assert_eq!(HashState::default(), HashState::new());
    }

    #[test]
    fn accumulate_adds_with_wraparound() {
        let mut state = HashState::new();
        state.accumulate(&[u32::MAX; 8]);
        let expected: Vec<u32> = INITIAL_STATE.iter().map(|w| w.wrapping_sub(1)).collect();
        assert_eq!(state.words().to_vec(), expected);
    }

    #[test]
    fn finalize_is_big_endian() {
        let digest = HashState::new().finalize();
        assert_eq!(&digest.as_bytes()[..4], &[0x6a, 0x09, 0xe6, 0x67]);
        assert_eq!(&digest.as_bytes()[28..], &[0x5b, 0xe0, 0xcd, 0x19]);
        assert_eq!(
            digest.to_hex(),
            "6a09e667bb67ae853c6ef372a54ff53a510e527f9b05688c1f83d9ab5be0cd19"
        );
    }

    #[test]
    fn hex_views_agree() {
        let digest = Digest::from_bytes([0xab; HASH_LEN]);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(hex, digest.to_string());
        assert_eq!(hex, format!("{digest:x}"));
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn formatting_honours_width_and_alignment() {
        let digest = Digest::from_bytes([0xcd; HASH_LEN]);
        let hex = digest.to_hex();
        assert_eq!(format!("{digest:>70}"), format!("      {hex}"));
        assert_eq!(format!("[{digest:<66}]"), format!("[{hex}  ]"));
        assert_eq!(format!("{digest:x}"), hex);
    }

    #[test]
    fn parse_accepts_either_case() {
        let lower = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
        let digest: Digest = lower.parse().unwrap();
        assert_eq!(digest.to_hex(), lower);
        let upper: Digest = lower.to_uppercase().parse().unwrap();
        assert_eq!(upper, digest);
    }

    #[test]
    fn parse_rejects_wrong_length_and_garbage() {
        assert!("abcd".parse::<Digest>().is_err());
        assert!("zz".repeat(32).parse::<Digest>().is_err());
    }

    #[test]
    fn serde_uses_hex_strings() {
        let digest = Digest::from_bytes([0x01; HASH_LEN]);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
