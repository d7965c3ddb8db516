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

use super::*;

/// Bytes received by a streamed hasher that do not yet fill a block.
///
/// Whatever is left here when the hasher finalizes is the true tail of the
/// message. Nothing else is.
#[derive(Clone, Copy)]
pub(crate) struct Carry<const N: usize> {
    buffer: [u8; N],
    buffered_len: usize,
}

impl<const N: usize> Carry<N> {
    pub(crate) const fn new() -> Self {
        Self {
            buffer: [0; N],
            buffered_len: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn pending(&self) -> &[u8] {
        &self.buffer[..self.buffered_len]
    }

    /// Prefixes the carried bytes to `bytes`, hands every completed block to
    /// `block` in order, and keeps the remainder for the next call.
    #[inline(always)]
    pub(crate) fn absorb(&mut self, bytes: &[u8], mut block: impl FnMut(&[u8])) {
        let off = self.buffered_len;
        let this_len = bytes.len();
        let complete = N - off;
        if unlikely(this_len < complete) {
            self.buffer[off..off + this_len].copy_from_slice(bytes);
            self.buffered_len += this_len;
            return;
        }

        let (head, rest) = bytes.split_at(complete);
        if off == 0 {
            block(head);
        } else {
            self.buffer[off..].copy_from_slice(head);
            block(&self.buffer);
        }

        let blocks = rest.chunks_exact(N);
        let remainder = blocks.remainder();
        for b in blocks {
            block(b);
        }

        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffered_len = remainder.len();
    }
}
