/*
 * Copyright (c) 2024 K--Aethiax
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * Alternatively, the contents of this file may be used under the terms of
 * the MIT license as described below.
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! MurmurHash3_x86_128: 16-byte blocks, four coupled 32-bit lanes, 128-bit digest.
//!
//! Not the same function as [`x64_128`](crate::x64_128), the digests differ.

use super::*;
use crate::carry::Carry;
use crate::mix::{fmix32, rotl32};

const BLOCK: usize = 16;
const DIGEST: usize = 16;

const C1: u32 = 0x239b961b;
const C2: u32 = 0xab0e9789;
const C3: u32 = 0x38b34ae5;
const C4: u32 = 0xa1e38b93;

type State = [u32; 4];

#[inline(always)]
const fn mix_k(mut k: u32, c: u32, r: u32, c_next: u32) -> u32 {
    k = k.wrapping_mul(c);
    k = rotl32(k, r);
    k.wrapping_mul(c_next)
}
#[inline(always)]
const fn mix_k1(k1: u32) -> u32 {
    mix_k(k1, C1, 15, C2)
}
#[inline(always)]
const fn mix_k2(k2: u32) -> u32 {
    mix_k(k2, C2, 16, C3)
}
#[inline(always)]
const fn mix_k3(k3: u32) -> u32 {
    mix_k(k3, C3, 17, C4)
}
#[inline(always)]
const fn mix_k4(k4: u32) -> u32 {
    mix_k(k4, C4, 18, C1)
}

#[inline(always)]
fn _block([mut h1, mut h2, mut h3, mut h4]: State, bytes: &[u8]) -> State {
    h1 ^= mix_k1(read_u32(&bytes[0..]));
    h1 = rotl32(h1, 19).wrapping_add(h2);
    h1 = h1.wrapping_mul(5).wrapping_add(0x561ccd1b);

    h2 ^= mix_k2(read_u32(&bytes[4..]));
    h2 = rotl32(h2, 17).wrapping_add(h3);
    h2 = h2.wrapping_mul(5).wrapping_add(0x0bcaa747);

    h3 ^= mix_k3(read_u32(&bytes[8..]));
    h3 = rotl32(h3, 15).wrapping_add(h4);
    h3 = h3.wrapping_mul(5).wrapping_add(0x96cd1c35);

    h4 ^= mix_k4(read_u32(&bytes[12..]));
    h4 = rotl32(h4, 13).wrapping_add(h1);
    h4 = h4.wrapping_mul(5).wrapping_add(0x32ac3b17);

    [h1, h2, h3, h4]
}
/// Lanes are filled by byte position and folded from `k4` down to `k1`.
#[inline(always)]
fn _tail([mut h1, mut h2, mut h3, mut h4]: State, bytes: &[u8]) -> State {
    let len = bytes.len();
    debug_assert!(len < BLOCK);
    if len > 12 {
        h4 ^= mix_k4(read_partial_u32(&bytes[12..]));
    }
    if len > 8 {
        h3 ^= mix_k3(read_partial_u32(&bytes[8..len.min(12)]));
    }
    if len > 4 {
        h2 ^= mix_k2(read_partial_u32(&bytes[4..len.min(8)]));
    }
    if len > 0 {
        h1 ^= mix_k1(read_partial_u32(&bytes[..len.min(4)]));
    }
    [h1, h2, h3, h4]
}
#[inline(always)]
const fn _cross([mut h1, mut h2, mut h3, mut h4]: State) -> State {
    h1 = h1.wrapping_add(h2).wrapping_add(h3).wrapping_add(h4);
    h2 = h2.wrapping_add(h1);
    h3 = h3.wrapping_add(h1);
    h4 = h4.wrapping_add(h1);
    [h1, h2, h3, h4]
}
#[inline(always)]
fn _finalize(state: State, tot_len: u64) -> u128 {
    let len = tot_len as u32;
    let state = _cross(state.map(|h| h ^ len));
    u32s_to_u128(_cross(state.map(fmix32)))
}

/// One-shot MurmurHash3_x86_128.
///
/// The result is `u128::from_le_bytes` of the reference digest, so `h1` sits in the low 32 bits.
#[inline]
pub fn hash(bytes: &[u8], seed: u32) -> u128 {
    let blocks = bytes.chunks_exact(BLOCK);
    let tail = blocks.remainder();
    let state = blocks.fold([seed; 4], _block);
    _finalize(_tail(state, tail), bytes.len() as u64)
}

/// Streamed MurmurHash3_x86_128 hasher.
#[derive(Clone)]
pub struct Hasher {
    carry: Carry<BLOCK>,
    tot_len: u64,
    seed: u32,
    state: State,
}
#[allow(missing_docs)]
impl Hasher {
    pub const fn new() -> Self {
        Self::with_seed(0)
    }
    pub const fn with_seed(seed: u32) -> Self {
        Self {
            carry: Carry::new(),
            tot_len: 0,
            seed,
            state: [seed; 4],
        }
    }

    pub const fn seed(&self) -> u32 {
        self.seed
    }
    pub const fn total_len(&self) -> u64 {
        self.tot_len
    }

    pub fn update(&mut self, bytes: &[u8]) {
        self.tot_len = self.tot_len.wrapping_add(bytes.len() as u64);
        let mut state = self.state;
        self.carry.absorb(bytes, |block| state = _block(state, block));
        self.state = state;
    }

    /// Hash of everything fed so far, without consuming the hasher.
    pub fn finish(&self) -> u128 {
        _finalize(_tail(self.state, self.carry.pending()), self.tot_len)
    }
    pub fn finalize(self) -> [u8; DIGEST] {
        self.finish().to_le_bytes()
    }
    pub fn finalize_reset(&mut self) -> [u8; DIGEST] {
        let digest = self.finish().to_le_bytes();
        self.reset(self.seed);
        digest
    }
    pub fn reset(&mut self, seed: u32) {
        *self = Self::with_seed(seed);
    }
}

#[cfg(test)]
mod test_vectors {
    use super::*;
    use crate::testing::random_split;
    extern crate std;
    use std::{vec, vec::Vec};

    #[test]
    fn one_shot_eq_streamed() {
        (0..1024).map(|n| (n, vec![0xAB; n])).for_each(|(i, bytes)| {
            let one_shot = hash(&bytes, 42);
            let streamed = {
                let mut hasher = Hasher::with_seed(42);
                let (x, y, z) = random_split(&bytes);
                hasher.update(x);
                hasher.update(y);
                hasher.update(z);
                hasher.finish()
            };
            assert_eq!((i, one_shot), (i, streamed));
        })
    }

    #[test]
    fn every_split_point() {
        let msg = (0..=255u8).rev().collect::<Vec<_>>();
        for len in 0..=2 * BLOCK + 1 {
            let expected = hash(&msg[..len], 0x9747b28c);
            for cut in 0..=len {
                let mut hasher = Hasher::with_seed(0x9747b28c);
                hasher.update(&msg[..cut]);
                hasher.update(&msg[cut..len]);
                assert_eq!(hasher.finish(), expected, "len {len}, cut {cut}");
            }
        }
    }

    #[test]
    fn known_digests() {
        assert_eq!(hash(b"", 0), 0);
        assert_eq!(
            Hasher::new().finalize(),
            [0; DIGEST],
        );
        let mut hasher = Hasher::new();
        hasher.update(b"hello");
        assert_eq!(
            hasher.finalize(),
            [0xa0, 0x44, 0x24, 0x2b, 0xf7, 0xde, 0x91, 0xdb, 0xb6, 0x31, 0xdb, 0x9a, 0xb6, 0x31, 0xdb, 0x9a],
        );
        assert_eq!(
            hash(b"The quick brown fox jumps over the lazy dog", 0).to_le_bytes(),
            [0xc3, 0x83, 0x15, 0x2f, 0x67, 0x2c, 0xee, 0xec, 0x6c, 0xf6, 0x7b, 0x5d, 0x2c, 0x1d, 0xe9, 0xe5],
        );
    }

    #[test]
    fn test_hash() {
        #[rustfmt::skip] const RESULTS: &[u128] = &[
            0x00000000000000000000000000000000, 0x49fc33d349fc33d349fc33d3252d814f, 0xf0daa1c1f0daa1c1f0daa1c19991310b, 0x095f2468095f2468095f24681f324290, 0x30cfd01e30cfd01e30cfd01e42475ef1, 0x613b0790613b079051abb80d4f2527dd, 0x20c66b7220c66b723fcda11c3f003478, 0x92a7a49592a7a49532f3afc42b097e70,
            0xad90891cad90891c87df61421097127b, 0x0a8214a2b154f4766531f327d3b38c83, 0xd9cf385d6fd97ac6f627196e62a704b2, 0x26c75c68b1d88e4938cb481e53ef802e, 0xe6b9789ffc79b8dabda2ae574e0b3418, 0x42cac9938420373b7bd18344b76c93ac, 0xffab3d8dab4c5afb821ef402cfcf0c95, 0x5784ea1b98527b5cd9df0243837b828a,
            0x60c9b9d0f778b86e627783b8b8601dad, 0xbe706dc864fac61c366aee08609f482c, 0x19d6e78c6f39d6eda2fcd7bdacb416a9, 0x5d68069599b24cbcd447b1737c92e2b7, 0xbf282071ba9f9f583deba431656620cd, 0xc04110090c3bf351d1cd0989581eb350, 0x42aa7be6742534e54c444803f9a73519, 0xc07714e979fd0f9f67366afe9615b35e,
            0xbf919c6640ec6d08c404154d4a951d42, 0x2902e3af7232813cd6932a0258acaf5c, 0x8adfb3b623c380648e554d7f9c8ce435, 0x5af1cebcd8bb0824f61b68c0491ef846, 0xe8f19d63874bfe3d1cdb170af62afaf9, 0x3d6b3bf142d9d01e74f05decaeae78b7, 0x37c727016ad1528fb5ed8b1522013f91, 0x750ce6eed6e45515ca087a94b5ee5439,
            0x0e787c7ec380b2dee954937340b1de48, 0x025a01dd7c2011327c172cddd685c54d, 0xd54115cbae9cc145ec59d4730dfbb29f, 0x43466bbada9c9ace7bbea85fc74a6861, 0x3b937fcd9cf41db1eca1c4346e303782, 0xb904ad7f8249009cbd89c07664ce047d, 0x446f16955f2868bacccdd790e348790a, 0x985587aa1da8cd407108d1e30ac289b8,
            0xd29f0ae638fe15e7ca4bf1631f7cb42d, 0x85ade166237671adc773f6810013f247, 0x6a1e15823df127461db526493602c2c2, 0x72b92705c1bc01c9897dad37481b286a, 0x4a29d9999c0db38433749e0836928954, 0x4e6d7d8c82a52fa821d8caa4a71f7141, 0x5de51fd236cb7efcedd16a27f6518ac2, 0x32aec23a21235c86cbbdb20f0a785249,
            0x8f7bf351effd1bb778e2e63e83c72f3d, 0x057fb6b0720941eeb5fafe218964a25c, 0x393a035250a77789c227b47023965abb, 0xbbbf8aa56dfa5492d0476eefae92de43, 0x86e6e35ab6e3f82fcca63b0fc889bd17, 0x157a8c4942b6ff5a55d1c38ba52c6ad0, 0xa7276a066e5ed4094bbf3950cd161739, 0xecb4b27bf17dcaa258de36cc2c46977b,
            0xf2a037b100b7eed8b7e8b550f16c40e2, 0x9e8743e986074475d76ea99dcdc7f159, 0xb113d7f2bf13c9ea702a59deceb1973a, 0x4c6ffc1028b53f92108344c85c237e1b, 0x06bf08542f2bb4aec16e08cced22a20f, 0xa5655b08da53951b28dffd250a446284, 0xb72e479f200a58dd9b9d7df6b0dfe7c6, 0x2368190ee3cb6c60829da41ff391c64e,
        ];
        let msgs = (0..RESULTS.len()).map(|n| vec![0xAB; n]).collect::<Vec<_>>();
        let ans = msgs.iter().map(|msg| hash(msg, 0)).collect::<Vec<_>>();
        std::println!("{:032x?}", ans);
        RESULTS.iter().zip(ans).for_each(|(e, a)| assert_eq!(*e, a));
    }
}
