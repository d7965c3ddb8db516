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

//! Pass-through readers and writers that hash the bytes flowing through them.

use crate::{Murmur, Murmur3};
use std::io::{self, Read, Write};

/// Hashes every byte read from the inner reader.
#[derive(Debug)]
pub struct HashingReader<R, H = Murmur> {
    inner: R,
    hasher: H,
}

impl<R, H: Murmur3> HashingReader<R, H> {
    /// Wraps `inner`, feeding `hasher` with what is read.
    pub fn new(inner: R, hasher: H) -> Self {
        Self { inner, hasher }
    }
    #[allow(missing_docs)]
    pub fn get_ref(&self) -> &R {
        &self.inner
    }
    /// Reading through this reference bypasses the hasher.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }
    /// The running hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
    /// Drops the hasher.
    pub fn into_inner(self) -> R {
        self.inner
    }
    /// Unwraps the reader together with the digest of everything read.
    pub fn finalize(self) -> (R, H::Output) {
        log::trace!("hashed {} bytes read, seed {}", self.hasher.total_len(), self.hasher.seed());
        (self.inner, self.hasher.finalize())
    }
}

impl<R: Read, H: Murmur3> Read for HashingReader<R, H> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }
}

/// Hashes every byte the inner writer accepts.
#[derive(Debug)]
pub struct HashingWriter<W, H = Murmur> {
    inner: W,
    hasher: H,
}

impl<W, H: Murmur3> HashingWriter<W, H> {
    /// Wraps `inner`, feeding `hasher` with what is written.
    pub fn new(inner: W, hasher: H) -> Self {
        Self { inner, hasher }
    }
    #[allow(missing_docs)]
    pub fn get_ref(&self) -> &W {
        &self.inner
    }
    /// Writing through this reference bypasses the hasher.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }
    /// The running hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
    /// Drops the hasher.
    pub fn into_inner(self) -> W {
        self.inner
    }
    /// Unwraps the writer together with the digest of everything written.
    ///
    /// Does not flush.
    pub fn finalize(self) -> (W, H::Output) {
        log::trace!("hashed {} bytes written, seed {}", self.hasher.total_len(), self.hasher.seed());
        (self.inner, self.hasher.finalize())
    }
}

impl<W: Write, H: Murmur3> Write for HashingWriter<W, H> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
