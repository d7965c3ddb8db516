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

use crate::Variant;

/// Everything that can go wrong around the hash engines.
///
/// The mixing itself is total and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A variant name did not parse.
    #[error("unknown MurmurHash3 variant, expected `x86_32`, `x86_128` or `x64_128`")]
    UnknownVariant,
    /// A 128-bit preference name did not parse.
    #[error("unknown algorithm preference, expected `auto`, `x86` or `x64`")]
    UnknownPreference,
    /// Digests are 4 or 16 bytes long.
    #[error("a digest is 4 or 16 bytes long, got {0}")]
    InvalidDigestLength(usize),
    /// [`verification_hash`](crate::verify::verification_hash) disagreed with the published value.
    #[error("{variant} self-verification failed: expected {expected:#010x}, got {actual:#010x}")]
    VerificationFailed {
        /// Variant under test.
        variant: Variant,
        /// Published SMHasher value.
        expected: u32,
        /// What this build computed.
        actual: u32,
    },
}
