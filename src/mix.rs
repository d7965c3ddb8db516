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

//! Rotation and avalanche primitives shared by every variant.

/// Rotates `x` left by `r` bits.
#[inline(always)]
pub const fn rotl32(x: u32, r: u32) -> u32 {
    x.rotate_left(r)
}

/// Rotates `x` left by `r` bits.
#[inline(always)]
pub const fn rotl64(x: u64, r: u32) -> u64 {
    x.rotate_left(r)
}

/// 32-bit finalization mix: forces all bits of `h` to avalanche.
#[inline(always)]
pub const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

/// 64-bit finalization mix: forces all bits of `h` to avalanche.
#[inline(always)]
pub const fn fmix64(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51afd7ed558ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ceb9fe1a85ec53);
    h ^= h >> 33;
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::collections::BTreeSet;

    #[test]
    fn fmix_fixes_zero() {
        assert_eq!(fmix32(0), 0);
        assert_eq!(fmix64(0), 0);
    }

    #[test]
    fn fmix_is_a_bijection_on_samples() {
        // Both multipliers are odd, so distinct inputs never collide.
        let a = (0..4096u32).map(fmix32).collect::<BTreeSet<_>>();
        assert_eq!(a.len(), 4096);
        let b = (0..4096u64).map(fmix64).collect::<BTreeSet<_>>();
        assert_eq!(b.len(), 4096);
    }

    #[test]
    fn rotations() {
        assert_eq!(rotl32(0x8000_0001, 1), 0x0000_0003);
        assert_eq!(rotl32(0x1234_5678, 16), 0x5678_1234);
        assert_eq!(rotl64(0x8000_0000_0000_0001, 4), 0x0000_0000_0000_0018);
        assert_eq!(rotl64(0x0123_4567_89ab_cdef, 32), 0x89ab_cdef_0123_4567);
    }

    #[test]
    fn fmix_single_bit_avalanche() {
        for bit in 0..32 {
            let flipped = fmix32(1 << bit) ^ fmix32(0);
            assert!(flipped.count_ones() >= 4, "bit {bit}: {flipped:#010x}");
        }
        for bit in 0..64 {
            let flipped = fmix64(1 << bit) ^ fmix64(0);
            assert!(flipped.count_ones() >= 8, "bit {bit}: {flipped:#018x}");
        }
    }
}
