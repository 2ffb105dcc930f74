//! Secure random sampling on top of an OS-backed entropy source.
//!
//! `SecureRng` is the only place entropy enters the crate: uniform integer
//! draws and Fisher-Yates shuffles are all derived from its 64-bit draws.
//! The source is injectable so tests can substitute a seeded generator.

use rand::TryRngCore;
use rand::rngs::OsRng;

/// Uniform sampling and unbiased shuffling over a secure byte source.
pub struct SecureRng<R = OsRng> {
    source: R,
}

impl SecureRng {
    /// A generator backed by the operating system CSPRNG.
    pub fn new() -> Self {
        SecureRng { source: OsRng }
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TryRngCore> SecureRng<R> {
    /// Wrap an arbitrary entropy source.
    pub fn from_source(source: R) -> Self {
        SecureRng { source }
    }

    /// One 64-bit draw from the entropy source.
    ///
    /// Panics if the source fails: without entropy no password can be
    /// generated securely, so there is no recoverable path.
    pub fn next_u64(&mut self) -> u64 {
        match self.source.try_next_u64() {
            Ok(v) => v,
            Err(e) => panic!("entropy source failure: {e}"),
        }
    }

    /// Fill `buf` from the entropy source. Same fatality as `next_u64`.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        if let Err(e) = self.source.try_fill_bytes(buf) {
            panic!("entropy source failure: {e}");
        }
    }

    /// Uniform value in `[0, n)`, free of modulo bias.
    ///
    /// Panics if `n == 0`: that is a bug in the caller, not bad input.
    pub fn int_n(&mut self, n: usize) -> usize {
        assert!(n > 0, "int_n called with n = 0");

        let n = n as u64;
        // Rejection sampling: discard draws at or above the largest
        // multiple of n that fits in a u64.
        let zone = (u64::MAX / n) * n;
        loop {
            let v = self.next_u64();
            if v < zone {
                return (v % n) as usize;
            }
        }
    }

    /// One Fisher-Yates pass over `len` elements, calling `swap(i, j)` for
    /// each transposition. No-op for `len <= 1`.
    pub fn shuffle<F: FnMut(usize, usize)>(&mut self, len: usize, mut swap: F) {
        if len <= 1 {
            return;
        }
        for i in (1..len).rev() {
            let j = self.int_n(i + 1);
            swap(i, j);
        }
    }

    /// Slice form of `shuffle`.
    pub fn shuffle_slice<T>(&mut self, items: &mut [T]) {
        let len = items.len();
        if len <= 1 {
            return;
        }
        for i in (1..len).rev() {
            let j = self.int_n(i + 1);
            items.swap(i, j);
        }
    }
}
