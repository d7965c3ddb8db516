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

//! MurmurHash3_x64_128: 16-byte blocks, two coupled 64-bit lanes, 128-bit digest.

use super::*;
use crate::carry::Carry;
use crate::mix::{fmix64, rotl64};

const BLOCK: usize = 16;
const DIGEST: usize = 16;

const C1: u64 = 0x87c37b91114253d5;
const C2: u64 = 0x4cf5ad432745937f;

type State = (u64, u64);

#[inline(always)]
const fn mix_k1(mut k1: u64) -> u64 {
    k1 = k1.wrapping_mul(C1);
    k1 = rotl64(k1, 31);
    k1.wrapping_mul(C2)
}
#[inline(always)]
const fn mix_k2(mut k2: u64) -> u64 {
    k2 = k2.wrapping_mul(C2);
    k2 = rotl64(k2, 33);
    k2.wrapping_mul(C1)
}

#[inline(always)]
fn _block((mut h1, mut h2): State, bytes: &[u8]) -> State {
    h1 ^= mix_k1(read_u64(&bytes[0..]));
    h1 = rotl64(h1, 27).wrapping_add(h2);
    h1 = h1.wrapping_mul(5).wrapping_add(0x52dce729);

    h2 ^= mix_k2(read_u64(&bytes[8..]));
    h2 = rotl64(h2, 31).wrapping_add(h1);
    h2 = h2.wrapping_mul(5).wrapping_add(0x38495ab5);

    (h1, h2)
}
#[inline(always)]
fn _tail((mut h1, mut h2): State, bytes: &[u8]) -> State {
    let len = bytes.len();
    debug_assert!(len < BLOCK);
    if len > 8 {
        h2 ^= mix_k2(read_partial_u64(&bytes[8..]));
    }
    if len > 0 {
        h1 ^= mix_k1(read_partial_u64(&bytes[..len.min(8)]));
    }
    (h1, h2)
}
#[inline(always)]
fn _finalize((mut h1, mut h2): State, tot_len: u64) -> u128 {
    h1 ^= tot_len;
    h2 ^= tot_len;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    u64s_to_u128(h1, h2)
}

/// One-shot MurmurHash3_x64_128.
///
/// Lower 64-bit is `h1`, upper 64-bit is `h2`, matching the little-endian reference digest.
#[inline]
pub fn hash(bytes: &[u8], seed: u32) -> u128 {
    let blocks = bytes.chunks_exact(BLOCK);
    let tail = blocks.remainder();
    let state = blocks.fold((seed as u64, seed as u64), _block);
    _finalize(_tail(state, tail), bytes.len() as u64)
}

/// Streamed MurmurHash3_x64_128 hasher.
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
    /// The 32-bit seed is zero-extended into both lanes.
    pub const fn with_seed(seed: u32) -> Self {
        Self {
            carry: Carry::new(),
            tot_len: 0,
            seed,
            state: (seed as u64, seed as u64),
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
        let msg = (0..=255u8).collect::<Vec<_>>();
        for len in 0..=2 * BLOCK + 1 {
            let expected = hash(&msg[..len], 0xdeadbeef);
            for cut in 0..=len {
                let mut hasher = Hasher::with_seed(0xdeadbeef);
                hasher.update(&msg[..cut]);
                hasher.update(&[]);
                hasher.update(&msg[cut..len]);
                assert_eq!(hasher.finish(), expected, "len {len}, cut {cut}");
            }
        }
    }

    #[test]
    fn known_digests() {
        assert_eq!(hash(b"", 0), 0);
        assert_eq!(
            hash(b"hello", 0).to_le_bytes(),
            [0x02, 0x9b, 0xbd, 0x41, 0xb3, 0xa7, 0xd8, 0xcb, 0x19, 0x1d, 0xae, 0x48, 0x6a, 0x90, 0x1e, 0x5b],
        );
        let mut hasher = Hasher::new();
        hasher.update(b"The quick brown fox ");
        hasher.update(b"jumps over the lazy dog");
        assert_eq!(
            hasher.finalize(),
            [0x6c, 0x1b, 0x07, 0xbc, 0x7b, 0xbc, 0x4b, 0xe3, 0x47, 0x93, 0x9a, 0xc4, 0xa9, 0x3c, 0x43, 0x7a],
        );
    }

    #[test]
    fn differs_from_x86_128() {
        for n in 1..64 {
            let msg = vec![0xAB; n];
            assert_ne!(hash(&msg, 0), crate::x86_128::hash(&msg, 0), "len {n}");
        }
    }

    #[test]
    fn test_hash() {
        #[rustfmt::skip] const RESULTS: &[u128] = &[
            0x00000000000000000000000000000000, 0xa087813e8e8559ef29dae4157f63e7b3, 0xe8dacd275aac9a499a028b2649242a72, 0xa3ba05863a6fde61bd2f8f4280d4d4b5, 0xd86b894e96782019879402ed9e0bcedc, 0x2e1c712b961b1243aee88e24f4b4bacc, 0x80e824bd9776846bcd6568546dc49bb6, 0x3e3e158d18c906d5a83b4538b39142de,
            0x9cf39c26826da15794b098bc17382bf6, 0xc20d2b7dbbb78c50fd2004b4cb1ba356, 0x7ff1ef748ec3517983a781f7b7f1659f, 0xd9fb1b3c5ffcd18686d302b40f1a4e5e, 0x9d943f395ba7b63e2acb7f42b421dab7, 0x2cf1cf651b5d666d7f7ad76326fc8398, 0xb50d602446ad7e79d50704ae0535d21c, 0x4e214148464a24d787c3fe7dd9a20529,
            0xd3b64057fc92f7082b90a4ba3d9f00da, 0xb22632807444a8b6db09bd85bfea8061, 0x0ef96db7d5d2ba13c28ddb0a73716c8e, 0x2e4de77b749b8313bed925d8d66be9be, 0xab228b0537cdda1fd754a0b4edbb8fab, 0x56c50f621e357e63ef46d5af6324f122, 0x8b83a0ba76547627d4377e2c74769749, 0x4759b5fe04cdef685fb5dbf4ef9b8e65,
            0xf7b676f2905d2b493f0ae848ba20a055, 0x6445708aace20aa96cb87ac1f8d45f1e, 0x9191bceb92800bbd5d8bbfc2292324f9, 0xc4de675d35a58040db05dc82df14cf24, 0x98f91428222765f4eefe7f867e518f05, 0xe93849c2800aee8c34122e54afe682ba, 0x1628a2666ac2a8900aee87ccc38b0ca6, 0x08f564ea317fe1daae8d4e71f98b8f8f,
            0x40f899d1bcbe8a4b03a3b41cbdb04802, 0x749d998b1dbc13d925b511dd094f85ec, 0xf9a4acfa68b26f62cf05bc85bc5ff04e, 0xad3b2730b07d30b85e61e1ac0bc10fbe, 0x5d7289aea26e164734d8dd4c92d50bd7, 0xb02ef1c2b8233044cc89a2b72b49f091, 0x63bad45e5bf304646daa1a7de4b1a852, 0x09ba76c6a6654d51a367dfd7b45b47fb,
            0x1024fe05aafc87dc6fbe06f79fbe14e2, 0xc6fee14e07c61a9638e527f1c52b6765, 0x21436a8fb6768d27e81d335cb33d5d66, 0x391b451c861523266e5276c80f7e2af3, 0xf2f4406978e2251a0f7e73d3334422d0, 0xa326b2171adcfd5b6841392f751ef899, 0x68e91981c807a61739080120a8a286fd, 0x8359cd76b625019ca6f2209492c20969,
            0xc26edd8d86ed9952d1464e853c512a23, 0x19a9ea0282d52bf8f6807f11aa9099b7, 0xf9824f00913f7b0eb2dba09de3d76728, 0x82c8300bc71fcfc132a1e6061b7cfe8d, 0xca76377e2f2e16a7c95b893d2b96121b, 0xc9b87036548b19c264b637ab738c10de, 0xec6bd934624b1e718743f3943527572b, 0x28b7300369521c2478dff343326778fe,
            0x6988b66d4822f9fbb8e9c32e4423eef4, 0xcebbff4fd7fed92182c5d5747a900c5b, 0x269539e36d0af7543798207f132558e8, 0x7278b6cda4d2ef22a6715d0f6b8bbe00, 0x1d14a3ebee41ca9643e156eba89c478e, 0x1dc64a4e7f19313fd098edd76a1555d0, 0xe8b7d1ab81434bc76ef25ab8d3b10550, 0x76c4d0e3ff8fbdcddc92c8f6f910e37d,
        ];
        let msgs = (0..RESULTS.len()).map(|n| vec![0xAB; n]).collect::<Vec<_>>();
        let ans = msgs.iter().map(|msg| hash(msg, 0)).collect::<Vec<_>>();
        std::println!("{:032x?}", ans);
        RESULTS.iter().zip(ans).for_each(|(e, a)| assert_eq!(*e, a));
    }
}
