use super::params::Params;
use super::twister::Twister;

// Implementation of Mersenne Twister MT19937 following Matsumoto-Nishimura's `mt19937ar.c`:
//
// http://www.math.sci.hiroshima-u.ac.jp/m-mat/MT/MT2002/emt19937ar.html
// https://en.wikipedia.org/wiki/Mersenne_Twister

pub const N: usize = 624;
pub const M: usize = 397;

pub const A: u32 = 0x9908_b0df;

pub const U: usize = 11;
pub const D: u32 = 0xffff_ffff;

pub const S: usize = 7;
pub const B: u32 = 0x9d2c_5680;

pub const T: usize = 15;
pub const C: u32 = 0xefc6_0000;

pub const L: usize = 18;

pub const F: u32 = 1812433253;

pub const LOWER_MASK: u32 = 0x7fff_ffff;
pub const UPPER_MASK: u32 = 0x8000_0000;

/// Default seed of an unseeded generator
pub const DEFAULT_SEED: u32 = 5489;

/// Seed priming the state before array seeding
pub const ARRAY_SEED: u32 = 19650218;

// 1 / (2^32 - 1)
const INV_MAX: f64 = 1.0 / 4294967295.0;
// 1 / 2^32
const INV_RANGE: f64 = 1.0 / 4294967296.0;
// 1 / 2^53
const INV_RANGE_53: f64 = 1.0 / 9007199254740992.0;

/// Constant set of the 32-bit generator
#[derive(Debug)]
pub enum Mt32 {}

impl Params for Mt32 {
    type Word = u32;
    type State = [u32; N];

    const N: usize = N;
    const M: usize = M;
    const A: u32 = A;
    const UPPER_MASK: u32 = UPPER_MASK;
    const LOWER_MASK: u32 = LOWER_MASK;
    const U: usize = U;
    const D: u32 = D;
    const S: usize = S;
    const B: u32 = B;
    const T: usize = T;
    const C: u32 = C;
    const L: usize = L;
    const F: u32 = F;
    const MIX_MULT: u32 = 1664525;
    const DIFFUSE_MULT: u32 = 1566083941;
    const ARRAY_SEED: u32 = ARRAY_SEED;
    const DEFAULT_SEED: u32 = DEFAULT_SEED;
    const EMPTY: [u32; N] = [0; N];
}

/// MT19937 PRNG (32-bit)
///
/// Not suitable for cryptographic use: the full state is recoverable from `N` outputs.
#[derive(Clone, Debug, Default)]
pub struct Mt19937 {
    pub(crate) inner: Twister<Mt32>,
}

impl Mt19937 {
    /// Create an unseeded MT19937 PRNG
    ///
    /// Drawing from it before seeding behaves as `with_seed(DEFAULT_SEED)`
    pub fn new() -> Self {
        Self {
            inner: Twister::new(),
        }
    }

    /// Create an MT19937 PRNG seeded from a single word
    pub fn with_seed(seed: u32) -> Self {
        let mut rng = Self::new();
        rng.seed(seed);
        rng
    }

    /// Create an MT19937 PRNG seeded from a key of arbitrary length
    pub fn with_key(key: &[u32]) -> Self {
        let mut rng = Self::new();
        rng.seed_by_array(key);
        rng
    }

    /// Re-initialize the state from a single word (`init_genrand`)
    pub fn seed(&mut self, seed: u32) {
        self.inner.seed(seed);
    }

    /// Re-initialize the state from a key (`init_by_array`)
    ///
    /// An empty key is treated as `seed(0)`
    pub fn seed_by_array(&mut self, key: &[u32]) {
        self.inner.seed_by_array(key);
    }

    /// Index of the next state word, `N` right after seeding
    pub fn index(&self) -> usize {
        self.inner.index()
    }

    /// Random number on [0, 0xffffffff]
    pub fn extract_number(&mut self) -> u32 {
        self.inner.next_word()
    }

    /// Random number on [0, 0x7fffffff]
    pub fn extract_i31(&mut self) -> i32 {
        (self.extract_number() >> 1) as i32
    }

    /// Random real on [0, 1]
    pub fn extract_real_closed(&mut self) -> f64 {
        f64::from(self.extract_number()) * INV_MAX
    }

    /// Random real on [0, 1)
    pub fn extract_real(&mut self) -> f64 {
        f64::from(self.extract_number()) * INV_RANGE
    }

    /// Random real on (0, 1)
    pub fn extract_real_open(&mut self) -> f64 {
        (f64::from(self.extract_number()) + 0.5) * INV_RANGE
    }

    /// Random real on [0, 1) with 53-bit resolution, drawing two words
    pub fn extract_res53(&mut self) -> f64 {
        let a = self.extract_number() >> 5;
        let b = self.extract_number() >> 6;

        (f64::from(a) * 67108864.0 + f64::from(b)) * INV_RANGE_53
    }

    /// Fill `dest` with little-endian bytes of successive outputs
    pub fn fill_le_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_le_bytes(dest);
    }
}
