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

//! MurmurHash3_x86_32: 4-byte blocks, one 32-bit lane, 32-bit digest.

use super::*;
use crate::carry::Carry;
use crate::mix::{fmix32, rotl32};

const BLOCK: usize = 4;
const DIGEST: usize = 4;

const C1: u32 = 0xcc9e2d51;
const C2: u32 = 0x1b873593;

#[inline(always)]
const fn mix_k1(mut k1: u32) -> u32 {
    k1 = k1.wrapping_mul(C1);
    k1 = rotl32(k1, 15);
    k1.wrapping_mul(C2)
}

#[inline(always)]
fn _block(mut h1: u32, bytes: &[u8]) -> u32 {
    h1 ^= mix_k1(read_u32(bytes));
    h1 = rotl32(h1, 13);
    h1.wrapping_mul(5).wrapping_add(0xe6546b64)
}
/// Unlike a block, the tail does not rotate-multiply `h1` afterwards.
#[inline(always)]
fn _tail(h1: u32, bytes: &[u8]) -> u32 {
    debug_assert!(bytes.len() < BLOCK);
    if bytes.is_empty() {
        h1
    } else {
        h1 ^ mix_k1(read_partial_u32(bytes))
    }
}
#[inline(always)]
fn _finalize(h1: u32, tot_len: u64) -> u32 {
    fmix32(h1 ^ tot_len as u32)
}

/// One-shot MurmurHash3_x86_32.
#[inline]
pub fn hash(bytes: &[u8], seed: u32) -> u32 {
    let blocks = bytes.chunks_exact(BLOCK);
    let tail = blocks.remainder();
    let h1 = blocks.fold(seed, _block);
    _finalize(_tail(h1, tail), bytes.len() as u64)
}

/// Streamed MurmurHash3_x86_32 hasher.
#[derive(Clone)]
pub struct Hasher {
    carry: Carry<BLOCK>,
    tot_len: u64,
    seed: u32,
    h1: u32,
}
impl Hasher {
    /// Hasher with seed `0`.
    pub const fn new() -> Self {
        Self::with_seed(0)
    }
    /// Hasher whose state starts out as `seed`.
    pub const fn with_seed(seed: u32) -> Self {
        Self {
            carry: Carry::new(),
            tot_len: 0,
            seed,
            h1: seed,
        }
    }

    /// Seed this hasher was created or last reset with.
    pub const fn seed(&self) -> u32 {
        self.seed
    }
    /// Number of bytes passed to [`update`](Self::update) so far.
    pub const fn total_len(&self) -> u64 {
        self.tot_len
    }

    /// Feeds more of the message. Chunk boundaries never affect the digest.
    pub fn update(&mut self, bytes: &[u8]) {
        self.tot_len = self.tot_len.wrapping_add(bytes.len() as u64);
        let mut h1 = self.h1;
        self.carry.absorb(bytes, |block| h1 = _block(h1, block));
        self.h1 = h1;
    }

    /// Hash of everything fed so far. The hasher stays usable.
    pub fn finish(&self) -> u32 {
        _finalize(_tail(self.h1, self.carry.pending()), self.tot_len)
    }
    /// Consumes the hasher and returns the little-endian digest.
    pub fn finalize(self) -> [u8; DIGEST] {
        self.finish().to_le_bytes()
    }
    /// Returns the digest and starts over with the same seed.
    pub fn finalize_reset(&mut self) -> [u8; DIGEST] {
        let digest = self.finish().to_le_bytes();
        self.reset(self.seed);
        digest
    }
    /// Drops all fed bytes and restarts with `seed`.
    pub fn reset(&mut self, seed: u32) {
        *self = Self::with_seed(seed);
    }
}
