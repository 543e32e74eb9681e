use super::params::Params;
use super::twister::Twister;

// Implementation of Mersenne Twister MT19937-64 following Matsumoto-Nishimura's `mt19937-64.c`:
//
// http://www.math.sci.hiroshima-u.ac.jp/m-mat/MT/emt64.html
// https://en.wikipedia.org/wiki/Mersenne_Twister

pub const N: usize = 312;
pub const M: usize = 156;

pub const R: u64 = 31;

pub const A: u64 = 0xb502_6f5a_a966_19e9;

pub const U: usize = 29;
pub const D: u64 = 0x5555_5555_5555_5555;

pub const S: usize = 17;
pub const B: u64 = 0x71d6_7fff_eda6_0000;

pub const T: usize = 37;
pub const C: u64 = 0xfff7_eee0_0000_0000;

pub const L: usize = 43;

pub const F: u64 = 6_364_136_223_846_793_005;

/// Least significant 31 bits
pub const LOWER_MASK: u64 = (1 << R) - 1;
/// Most significant 33 bits
pub const UPPER_MASK: u64 = !LOWER_MASK;

/// Default seed of an unseeded generator
pub const DEFAULT_SEED: u64 = 5489;

/// Seed priming the state before array seeding
pub const ARRAY_SEED: u64 = 19650218;

// 1 / (2^53 - 1)
const INV_MAX_53: f64 = 1.0 / 9007199254740991.0;
// 1 / 2^53
const INV_RANGE_53: f64 = 1.0 / 9007199254740992.0;
// 1 / 2^52
const INV_RANGE_52: f64 = 1.0 / 4503599627370496.0;

/// Constant set of the 64-bit generator
#[derive(Debug)]
pub enum Mt64 {}

impl Params for Mt64 {
    type Word = u64;
    type State = [u64; N];

    const N: usize = N;
    const M: usize = M;
    const A: u64 = A;
    const UPPER_MASK: u64 = UPPER_MASK;
    const LOWER_MASK: u64 = LOWER_MASK;
    const U: usize = U;
    const D: u64 = D;
    const S: usize = S;
    const B: u64 = B;
    const T: usize = T;
    const C: u64 = C;
    const L: usize = L;
    const F: u64 = F;
    const MIX_MULT: u64 = 3_935_559_000_370_003_845;
    const DIFFUSE_MULT: u64 = 2_862_933_555_777_941_757;
    const ARRAY_SEED: u64 = ARRAY_SEED;
    const DEFAULT_SEED: u64 = DEFAULT_SEED;
    const EMPTY: [u64; N] = [0; N];
}

/// MT19937-64 PRNG (64-bit)
#[derive(Clone, Debug, Default)]
pub struct Mt19937_64 {
    pub(crate) inner: Twister<Mt64>,
}

impl Mt19937_64 {
    /// Create an unseeded MT19937-64 PRNG
    pub fn new() -> Self {
        Self {
            inner: Twister::new(),
        }
    }

    /// Create an MT19937-64 PRNG seeded from a single word
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Self::new();
        rng.seed(seed);
        rng
    }

    /// Create an MT19937-64 PRNG seeded from a key of arbitrary length
    pub fn with_key(key: &[u64]) -> Self {
        let mut rng = Self::new();
        rng.seed_by_array(key);
        rng
    }

    /// Re-initialize the state from a single word (`init_genrand64`)
    pub fn seed(&mut self, seed: u64) {
        self.inner.seed(seed);
    }

    /// Re-initialize the state from a key (`init_by_array64`)
    pub fn seed_by_array(&mut self, key: &[u64]) {
        self.inner.seed_by_array(key);
    }

    /// Index of the next state word, `N` right after seeding
    pub fn index(&self) -> usize {
        self.inner.index()
    }

    /// Random number on [0, 2^64 - 1]
    pub fn extract_number(&mut self) -> u64 {
        self.inner.next_word()
    }

    /// Random number on [0, 2^63 - 1]
    pub fn extract_i63(&mut self) -> i64 {
        (self.extract_number() >> 1) as i64
    }

    /// Random real on [0, 1]
    pub fn extract_real_closed(&mut self) -> f64 {
        (self.extract_number() >> 11) as f64 * INV_MAX_53
    }

    /// Random real on [0, 1)
    pub fn extract_real(&mut self) -> f64 {
        (self.extract_number() >> 11) as f64 * INV_RANGE_53
    }

    /// Random real on (0, 1)
    pub fn extract_real_open(&mut self) -> f64 {
        ((self.extract_number() >> 12) as f64 + 0.5) * INV_RANGE_52
    }

    /// Random real on [0, 1) with 53-bit resolution
    ///
    /// A single word already carries 53 bits, so this is `extract_real`
    pub fn extract_res53(&mut self) -> f64 {
        self.extract_real()
    }

    /// Fill `dest` with little-endian bytes of successive outputs
    pub fn fill_le_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_le_bytes(dest);
    }
}
