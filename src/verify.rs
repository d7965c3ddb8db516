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

//! SMHasher's verification procedure, the canonical check that an
//! implementation reproduces the reference MurmurHash3 bit for bit.
//!
//! The seeding scheme (`256 - i` for a key of length `i`) is an arbitrary
//! convention of the procedure, not part of the hash function.

use crate::{Error, Murmur, Variant};

impl Variant {
    /// Published SMHasher verification value.
    pub const fn verification_value(self) -> u32 {
        match self {
            Variant::X86_32 => 0xb0f57ee3,
            Variant::X86_128 => 0xb3ece62a,
            Variant::X64_128 => 0x6384ba69,
        }
    }
}

/// Hashes keys `[0]`, `[0, 1]`, .. `[0, 1, .., 254]` (and the empty key), each
/// with seed `256 - len`, then hashes the 256 concatenated digests with seed `0`
/// and returns the first four digest bytes as a little-endian `u32`.
pub fn verification_hash(variant: Variant) -> u32 {
    let digest_len = variant.digest_len();
    let mut key = [0u8; 256];
    let mut digests = [0u8; 16 * 256];

    for i in 0..256 {
        key[i] = i as u8;
        let mut engine = Murmur::new(variant, 256 - i as u32);
        engine.update(&key[..i]);
        digests[i * digest_len..][..digest_len].copy_from_slice(engine.finalize().as_bytes());
    }

    let mut engine = Murmur::new(variant, 0);
    engine.update(&digests[..256 * digest_len]);
    engine.finalize().low_u32()
}

/// Runs [`verification_hash`] for every variant against the published values.
pub fn self_test() -> Result<(), Error> {
    Variant::ALL.into_iter().try_for_each(|variant| {
        let expected = variant.verification_value();
        let actual = verification_hash(variant);
        log::debug!("{variant}: verification {actual:#010x}, expected {expected:#010x}");
        if actual == expected {
            Ok(())
        } else {
            Err(Error::VerificationFailed {
                variant,
                expected,
                actual,
            })
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::string::ToString;

    #[test]
    fn published_values() {
        assert_eq!(verification_hash(Variant::X86_32), 0xb0f57ee3);
        assert_eq!(verification_hash(Variant::X86_128), 0xb3ece62a);
        assert_eq!(verification_hash(Variant::X64_128), 0x6384ba69);
        assert_eq!(self_test(), Ok(()));
    }

    #[test]
    fn failure_message() {
        let err = Error::VerificationFailed {
            variant: Variant::X86_32,
            expected: 0xb0f57ee3,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "x86_32 self-verification failed: expected 0xb0f57ee3, got 0x00000001"
        );
    }
}
