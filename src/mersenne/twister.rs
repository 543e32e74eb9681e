use core::cmp;
use core::fmt;

use log::{debug, trace};
use num::traits::{One, WrappingAdd, WrappingMul, WrappingSub, Zero};

use super::params::{Params, Word};

/// Generic Mersenne Twister state machine
///
/// Holds the `N` word state vector and the index of the next word to temper.
/// An index of `N` means the block is exhausted and must be twisted, `N + 1`
/// means the generator has never been seeded.
pub struct Twister<P: Params> {
    pub(crate) state: P::State,
    pub(crate) index: usize,
}

impl<P: Params> Twister<P> {
    /// Create an unseeded generator
    ///
    /// The first draw seeds it with `P::DEFAULT_SEED`
    pub fn new() -> Self {
        Self {
            state: P::EMPTY,
            index: P::N + 1,
        }
    }

    /// Index of the next state word to be tempered
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether any seeding routine has run on this generator
    pub fn is_seeded(&self) -> bool {
        self.index <= P::N
    }

    /// Initialize the state from a single word
    pub fn seed(&mut self, seed: P::Word) {
        trace!("scalar seed {:?}", seed);

        let mt = self.state.as_mut();
        mt[0] = seed;

        for i in 1..P::N {
            Self::k_distribute(mt, i);
        }

        self.index = P::N;
    }

    /// Perform k-distribution step to generate initial state from seed value
    fn k_distribute(mt: &mut [P::Word], i: usize) {
        // xi = f × (xi−1 ⊕ (xi−1 >> (w−2))) + i
        let prev = mt[i - 1];
        mt[i] = P::F
            .wrapping_mul(&(prev ^ (prev >> P::SEED_SHIFT)))
            .wrapping_add(&P::Word::from_index(i));
    }

    /// Initialize the state from an arbitrary length key
    ///
    /// An empty key is equivalent to `seed(0)`
    pub fn seed_by_array(&mut self, key: &[P::Word]) {
        if key.is_empty() {
            self.seed(P::Word::zero());
            return;
        }

        self.seed(P::ARRAY_SEED);
        trace!("array seed of {} words", key.len());

        let n = P::N;
        let mt = self.state.as_mut();

        let mut i = 1;
        let mut j = 0;

        for _ in 0..cmp::max(n, key.len()) {
            let prev = mt[i - 1];
            let mix = (prev ^ (prev >> P::SEED_SHIFT)).wrapping_mul(&P::MIX_MULT);
            // non-linear
            mt[i] = (mt[i] ^ mix)
                .wrapping_add(&key[j])
                .wrapping_add(&P::Word::from_index(j));

            i += 1;
            j += 1;

            if i >= n {
                mt[0] = mt[n - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }

        for _ in 1..n {
            let prev = mt[i - 1];
            let mix = (prev ^ (prev >> P::SEED_SHIFT)).wrapping_mul(&P::DIFFUSE_MULT);
            // non-linear
            mt[i] = (mt[i] ^ mix).wrapping_sub(&P::Word::from_index(i));

            i += 1;

            if i >= n {
                mt[0] = mt[n - 1];
                i = 1;
            }
        }

        // the whole word is replaced, not just its top bit:
        // the 64-bit upper mask also reads bits below the MSB
        mt[0] = P::Word::one() << (P::Word::BITS - 1);

        self.index = n;
    }

    /// Extract a tempered value based on MT[index]
    ///
    /// Twists the whole state every `N` words
    pub fn next_word(&mut self) -> P::Word {
        if self.index >= P::N {
            if self.index == P::N + 1 {
                debug!("generator used before seeding, seeding with {:?}", P::DEFAULT_SEED);
                self.seed(P::DEFAULT_SEED);
            }

            self.twist();
        }

        let y = self.state.as_ref()[self.index];
        self.index += 1;

        Self::temper(y)
    }

    /// Regenerate all `N` state words in place
    pub(crate) fn twist(&mut self) {
        let n = P::N;
        let m = P::M;
        let mt = self.state.as_mut();

        // neither kk + 1 nor kk + M wrap
        for kk in 0..n - m {
            let y = (mt[kk] & P::UPPER_MASK) | (mt[kk + 1] & P::LOWER_MASK);
            mt[kk] = mt[kk + m] ^ Self::mag(y);
        }

        // kk + M wraps
        for kk in n - m..n - 1 {
            let y = (mt[kk] & P::UPPER_MASK) | (mt[kk + 1] & P::LOWER_MASK);
            mt[kk] = mt[kk + m - n] ^ Self::mag(y);
        }

        let y = (mt[n - 1] & P::UPPER_MASK) | (mt[0] & P::LOWER_MASK);
        mt[n - 1] = mt[m - 1] ^ Self::mag(y);

        self.index = 0;
    }

    // (y >> 1) ^ (A * lowest bit of y)
    fn mag(y: P::Word) -> P::Word {
        let shifted = y >> 1;

        if (y & P::Word::one()).is_zero() {
            shifted
        } else {
            shifted ^ P::A
        }
    }

    pub(crate) fn temper(y: P::Word) -> P::Word {
        let mut z = y ^ ((y >> P::U) & P::D);

        z = z ^ ((z << P::S) & P::B);
        z = z ^ ((z << P::T) & P::C);

        z ^ (z >> P::L)
    }
}

impl<P: Params> Default for Twister<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Params> Clone for Twister<P> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            index: self.index,
        }
    }
}

impl<P: Params> fmt::Debug for Twister<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Twister")
            .field("index", &self.index)
            .field("seeded", &self.is_seeded())
            .finish()
    }
}
