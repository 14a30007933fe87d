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
//! The 64-round compression function (FIPS 180-2 section 6.2.2, steps 2-3).

use crate::constants::K;
use crate::ops::{big_sigma0, big_sigma1, ch, maj};
use crate::schedule::Schedule;

/// Working registers `a..h`.
pub type Registers = [u32; 8];

/// Runs every round of one block starting from `state` and returns the final
/// working registers. `state` itself is left untouched; folding the result back
/// in is the accumulator's job.
pub fn compress(state: &Registers, w: &Schedule) -> Registers {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (k, word) in K.iter().zip(w.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*word);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    [a, b, c, d, e, f, g, h]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::split_blocks;
    use crate::constants::INITIAL_STATE;
    use crate::padding::pad;
    use crate::schedule::expand;

    fn abc_schedule() -> Schedule {
        let padded = pad(b"abc").unwrap();
        expand(&split_blocks(&padded).unwrap()[0])
    }

    #[test]
    fn abc_registers_after_final_round() {
        let out = compress(&INITIAL_STATE, &abc_schedule());
        assert_eq!(
            out,
            [
                0x506e3058, 0xd39a2165, 0x04d24d6c, 0xb85e2ce9, 0x5ef50f24, 0xfb121210, 0x948d25b6,
                0x961f4894,
            ]
        );
    }

    #[test]
    fn input_state_is_not_modified() {
        let state = INITIAL_STATE;
        let _ = compress(&state, &abc_schedule());
        assert_eq!(state, INITIAL_STATE);
    }

    #[test]
    fn depends_on_every_schedule_word() {
        let base = abc_schedule();
        let reference = compress(&INITIAL_STATE, &base);
        for t in [0, 31, 63] {
            let mut w = base;
            w[t] ^= 1;
            assert_ne!(compress(&INITIAL_STATE, &w), reference, "word {t}");
        }
    }
}
