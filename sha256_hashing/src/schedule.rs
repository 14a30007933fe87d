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
//! Message schedule expansion (FIPS 180-2 section 6.2.2, step 1).

use crate::block::Block;
use crate::constants::{BLOCK_WORDS, ROUNDS};
use crate::ops::{small_sigma0, small_sigma1};

/// The 64 words fed to the rounds of one block.
pub type Schedule = [u32; ROUNDS];

/// Expands one block into its message schedule.
pub fn expand(block: &Block) -> Schedule {
    let mut w = [0u32; ROUNDS];

    for (word, bytes) in w[..BLOCK_WORDS].iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    for t in BLOCK_WORDS..ROUNDS {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::split_blocks;
    use crate::padding::pad;

    fn abc_schedule() -> Schedule {
        let padded = pad(b"abc").unwrap();
        expand(&split_blocks(&padded).unwrap()[0])
    }

    #[test]
    fn first_sixteen_words_are_big_endian_block_words() {
        let w = abc_schedule();
        assert_eq!(w[0], 0x6162_6380);
        assert!(w[1..15].iter().all(|&x| x == 0));
        assert_eq!(w[15], 0x0000_0018);
    }

    #[test]
    fn recurrence_matches_reference_words() {
        let w = abc_schedule();
        assert_eq!(w[16], 0x6162_6380);
        assert_eq!(w[17], 0x000f_0000);
        assert_eq!(w[18], 0x7da8_6405);
        assert_eq!(w[19], 0x6000_03c6);
        assert_eq!(w[63], 0x12b1_edeb);
    }

    #[test]
    fn additions_wrap() {
        let block = [0xff; 64];
        let w = expand(&block);
        let expected = small_sigma1(u32::MAX)
            .wrapping_add(u32::MAX)
            .wrapping_add(small_sigma0(u32::MAX))
            .wrapping_add(u32::MAX);
        assert_eq!(w[16], expected);
    }
}
