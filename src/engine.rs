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

use crate::{x64_128, x86_128, x86_32, Error};
use core::{fmt, str::FromStr};

/// Capabilities shared by every MurmurHash3 engine.
///
/// Lifecycle: construct with a seed, [`update`](Self::update) any number of
/// times with any chunking, then [`finalize`](Self::finalize) exactly once.
/// `finalize` takes `self`, so feeding a finished computation does not compile.
/// Use [`reset`](Self::reset) on a live engine to start over.
pub trait Murmur3 {
    /// Raw little-endian digest.
    type Output: AsRef<[u8]>;

    /// Seed the current computation started with.
    fn seed(&self) -> u32;
    /// Bytes fed since construction or the last reset.
    fn total_len(&self) -> u64;
    /// Feeds more of the message.
    fn update(&mut self, bytes: &[u8]);
    /// Ends the computation.
    fn finalize(self) -> Self::Output;
    /// Discards all state and restarts with `seed`.
    fn reset(&mut self, seed: u32);
}

macro_rules! impl_hasher {
    ($module:ident, $digest:literal) => {
        impl Default for $module::Hasher {
            fn default() -> Self {
                Self::new()
            }
        }
        impl fmt::Debug for $module::Hasher {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!("murmurhash3::", stringify!($module), "::Hasher { seed: "))?;
                fmt::Debug::fmt(&self.seed(), f)?;
                f.write_str(", total_len: ")?;
                fmt::Debug::fmt(&self.total_len(), f)?;
                f.write_str(", .. }")
            }
        }
        /// `finish` is the low 64 bits of the digest and does not end the computation.
        impl core::hash::Hasher for $module::Hasher {
            fn finish(&self) -> u64 {
                self.finish() as u64
            }
            fn write(&mut self, bytes: &[u8]) {
                self.update(bytes)
            }
        }
        impl Murmur3 for $module::Hasher {
            type Output = [u8; $digest];

            fn seed(&self) -> u32 {
                self.seed()
            }
            fn total_len(&self) -> u64 {
                self.total_len()
            }
            fn update(&mut self, bytes: &[u8]) {
                self.update(bytes)
            }
            fn finalize(self) -> Self::Output {
                self.finalize()
            }
            fn reset(&mut self, seed: u32) {
                self.reset(seed)
            }
        }
    };
}
impl_hasher!(x86_32, 4);
impl_hasher!(x86_128, 16);
impl_hasher!(x64_128, 16);

/// The three MurmurHash3 algorithms.
///
/// `X86_128` and `X64_128` are different functions, not builds of one function
/// for different CPUs: the same input and seed give different digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Variant {
    /// 32-bit digest, 4-byte blocks.
    X86_32,
    /// 128-bit digest from four 32-bit lanes.
    X86_128,
    /// 128-bit digest from two 64-bit lanes.
    X64_128,
}
impl Variant {
    /// All variants, in declaration order.
    pub const ALL: [Variant; 3] = [Variant::X86_32, Variant::X86_128, Variant::X64_128];

    /// Bytes consumed per block step.
    pub const fn block_len(self) -> usize {
        match self {
            Variant::X86_32 => 4,
            Variant::X86_128 | Variant::X64_128 => 16,
        }
    }
    /// Bytes in the digest.
    pub const fn digest_len(self) -> usize {
        match self {
            Variant::X86_32 => 4,
            Variant::X86_128 | Variant::X64_128 => 16,
        }
    }
    /// Name used by [`Display`](fmt::Display) and [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Variant::X86_32 => "x86_32",
            Variant::X86_128 => "x86_128",
            Variant::X64_128 => "x64_128",
        }
    }
}
impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let is = |name: &str| s.eq_ignore_ascii_case(name);
        if is("x86_32") || is("murmur3_32") || is("32") {
            Ok(Variant::X86_32)
        } else if is("x86_128") {
            Ok(Variant::X86_128)
        } else if is("x64_128") {
            Ok(Variant::X64_128)
        } else {
            Err(Error::UnknownVariant)
        }
    }
}

/// Which 128-bit algorithm to use when the caller does not care.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Preference {
    /// `X64_128` on 64-bit targets, `X86_128` otherwise.
    ///
    /// Digests computed under `Auto` are therefore not portable across targets.
    #[default]
    Auto,
    /// Always [`Variant::X86_128`].
    X86,
    /// Always [`Variant::X64_128`].
    X64,
}
impl Preference {
    /// The 128-bit variant this preference stands for on the current target.
    pub fn resolve(self) -> Variant {
        let variant = match self {
            Preference::X86 => Variant::X86_128,
            Preference::X64 => Variant::X64_128,
            Preference::Auto if cfg!(target_pointer_width = "64") => Variant::X64_128,
            Preference::Auto => Variant::X86_128,
        };
        log::debug!("128-bit preference {self:?} resolved to {variant}");
        variant
    }
}
impl FromStr for Preference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(Preference::Auto)
        } else if s.eq_ignore_ascii_case("x86") {
            Ok(Preference::X86)
        } else if s.eq_ignore_ascii_case("x64") {
            Ok(Preference::X64)
        } else {
            Err(Error::UnknownPreference)
        }
    }
}

/// Any of the three engines, picked at construction time.
#[derive(Debug, Clone)]
pub enum Murmur {
    #[allow(missing_docs)]
    X86_32(x86_32::Hasher),
    #[allow(missing_docs)]
    X86_128(x86_128::Hasher),
    #[allow(missing_docs)]
    X64_128(x64_128::Hasher),
}
impl Murmur {
    /// Engine for `variant`, starting from `seed`.
    pub const fn new(variant: Variant, seed: u32) -> Self {
        match variant {
            Variant::X86_32 => Murmur::X86_32(x86_32::Hasher::with_seed(seed)),
            Variant::X86_128 => Murmur::X86_128(x86_128::Hasher::with_seed(seed)),
            Variant::X64_128 => Murmur::X64_128(x64_128::Hasher::with_seed(seed)),
        }
    }
    /// MurmurHash3_x86_32.
    pub const fn murmur32(seed: u32) -> Self {
        Self::new(Variant::X86_32, seed)
    }
    /// One of the 128-bit engines, see [`Preference::resolve`].
    pub fn murmur128(seed: u32, preference: Preference) -> Self {
        Self::new(preference.resolve(), seed)
    }

    /// Which algorithm this engine runs.
    pub const fn variant(&self) -> Variant {
        match self {
            Murmur::X86_32(_) => Variant::X86_32,
            Murmur::X86_128(_) => Variant::X86_128,
            Murmur::X64_128(_) => Variant::X64_128,
        }
    }
    /// Seed of the current computation.
    pub const fn seed(&self) -> u32 {
        match self {
            Murmur::X86_32(h) => h.seed(),
            Murmur::X86_128(h) => h.seed(),
            Murmur::X64_128(h) => h.seed(),
        }
    }
    /// Bytes fed since construction or the last reset.
    pub const fn total_len(&self) -> u64 {
        match self {
            Murmur::X86_32(h) => h.total_len(),
            Murmur::X86_128(h) => h.total_len(),
            Murmur::X64_128(h) => h.total_len(),
        }
    }
    /// Feeds more of the message.
    pub fn update(&mut self, bytes: &[u8]) {
        match self {
            Murmur::X86_32(h) => h.update(bytes),
            Murmur::X86_128(h) => h.update(bytes),
            Murmur::X64_128(h) => h.update(bytes),
        }
    }
    /// Digest of everything fed so far, without consuming the engine.
    pub fn digest(&self) -> Digest {
        match self {
            Murmur::X86_32(h) => Digest::from(h.finish().to_le_bytes()),
            Murmur::X86_128(h) => Digest::from(h.finish().to_le_bytes()),
            Murmur::X64_128(h) => Digest::from(h.finish().to_le_bytes()),
        }
    }
    /// Ends the computation.
    pub fn finalize(self) -> Digest {
        self.digest()
    }
    /// Returns the digest and restarts with the same variant and seed.
    pub fn finalize_reset(&mut self) -> Digest {
        let digest = self.digest();
        self.reset(self.seed());
        digest
    }
    /// Restarts with `seed`, keeping the variant.
    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(self.variant(), seed);
    }
}
impl Murmur3 for Murmur {
    type Output = Digest;

    fn seed(&self) -> u32 {
        self.seed()
    }
    fn total_len(&self) -> u64 {
        self.total_len()
    }
    fn update(&mut self, bytes: &[u8]) {
        self.update(bytes)
    }
    fn finalize(self) -> Self::Output {
        self.finalize()
    }
    fn reset(&mut self, seed: u32) {
        self.reset(seed)
    }
}

/// A 4- or 16-byte digest, words in little-endian order (`h1` first).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; 16],
    len: u8,
}
impl Digest {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
    /// 4 or 16.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
    /// First four bytes read as a little-endian `u32`, i.e. the final `h1` of
    /// the 32-bit lane variants.
    pub fn low_u32(&self) -> u32 {
        u32::from_le_bytes([self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]])
    }
}
impl From<[u8; 4]> for Digest {
    fn from(value: [u8; 4]) -> Self {
        let mut bytes = [0; 16];
        bytes[..4].copy_from_slice(&value);
        Self { bytes, len: 4 }
    }
}
impl From<[u8; 16]> for Digest {
    fn from(bytes: [u8; 16]) -> Self {
        Self { bytes, len: 16 }
    }
}
impl TryFrom<&[u8]> for Digest {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        match value.len() {
            4 | 16 => {
                let mut bytes = [0; 16];
                bytes[..value.len()].copy_from_slice(value);
                Ok(Self {
                    bytes,
                    len: value.len() as u8,
                })
            }
            n => Err(Error::InvalidDigestLength(n)),
        }
    }
}
impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_bytes().iter().try_for_each(|b| write!(f, "{b:02x}"))
    }
}
impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_bytes().iter().try_for_each(|b| write!(f, "{b:02X}"))
    }
}
impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}
impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}
