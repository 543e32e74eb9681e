use core::fmt::Debug;

use num::traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub};

/// Unsigned machine word a Mersenne Twister operates on
pub trait Word: PrimInt + WrappingAdd + WrappingMul + WrappingSub + Debug {
    /// Width of the word in bits
    const BITS: usize;

    /// Width of the word in bytes
    const BYTES: usize = Self::BITS / 8;

    /// Convert a state index into a word, wrapping on overflow
    fn from_index(i: usize) -> Self;

    /// Write the low `out.len()` bytes of the word in little-endian order
    ///
    /// `out` must not be longer than `Self::BYTES`
    fn put_le(self, out: &mut [u8]);
}

impl Word for u32 {
    const BITS: usize = 32;

    fn from_index(i: usize) -> Self {
        i as u32
    }

    fn put_le(self, out: &mut [u8]) {
        let len = out.len();
        out.copy_from_slice(&self.to_le_bytes()[..len]);
    }
}

impl Word for u64 {
    const BITS: usize = 64;

    fn from_index(i: usize) -> Self {
        i as u64
    }

    fn put_le(self, out: &mut [u8]) {
        let len = out.len();
        out.copy_from_slice(&self.to_le_bytes()[..len]);
    }
}

/// Constant set for one Mersenne Twister variant
///
/// Naming follows Matsumoto-Nishimura:
///
/// - `N`, `M`: degree of recurrence and middle word offset
/// - `A`: twist matrix coefficients
/// - `U`, `D`, `S`, `B`, `T`, `C`, `L`: tempering shifts and masks
/// - `F`: scalar seeding multiplier
pub trait Params {
    type Word: Word;

    /// Owned state vector, always exactly `N` words
    type State: AsRef<[Self::Word]> + AsMut<[Self::Word]> + Clone;

    const N: usize;
    const M: usize;

    const A: Self::Word;

    const UPPER_MASK: Self::Word;
    const LOWER_MASK: Self::Word;

    const U: usize;
    const D: Self::Word;
    const S: usize;
    const B: Self::Word;
    const T: usize;
    const C: Self::Word;
    const L: usize;

    const F: Self::Word;

    /// Right shift applied to the previous word during seeding (w - 2)
    const SEED_SHIFT: usize = Self::Word::BITS - 2;

    /// Multiplier of the first array-seeding pass
    const MIX_MULT: Self::Word;

    /// Multiplier of the second array-seeding pass
    const DIFFUSE_MULT: Self::Word;

    /// Scalar seed used to prime the state before array seeding
    const ARRAY_SEED: Self::Word;

    /// Seed used when a word is drawn from a never seeded generator
    const DEFAULT_SEED: Self::Word;

    /// Zeroed state vector
    const EMPTY: Self::State;
}
