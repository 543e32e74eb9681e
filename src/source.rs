use rand::{Error, RngCore, SeedableRng};

use crate::mersenne::{Mt19937, Mt19937_64};

/// Host-facing random source
///
/// The narrow seed / 63-bit integer / byte reader shape most hosts expect.
/// The `rand` traits are implemented on top of the same methods.
pub trait RandomSource {
    /// Re-seed from a signed 64-bit value
    fn reseed(&mut self, seed: i64);

    /// Random number on [0, 2^63 - 1]
    fn next_i63(&mut self) -> i64;

    /// Fill `buf` from the generator's little-endian byte stream
    ///
    /// Always fills the whole buffer and returns its length
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Random number on [0, 2^31 - 1], the high bits of `next_i63`
    fn next_i31(&mut self) -> i32 {
        (self.next_i63() >> 32) as i32
    }
}

impl RandomSource for Mt19937 {
    /// Splits the seed into a two-word key and seeds by array
    fn reseed(&mut self, seed: i64) {
        let key = [seed as u32, (seed >> 32) as u32];
        self.seed_by_array(&key);
    }

    fn next_i63(&mut self) -> i64 {
        let lo = i64::from(self.extract_number());
        let hi = i64::from(self.extract_i31());

        hi << 32 | lo
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        self.fill_le_bytes(buf);
        buf.len()
    }
}

impl RandomSource for Mt19937_64 {
    fn reseed(&mut self, seed: i64) {
        self.seed(seed as u64);
    }

    fn next_i63(&mut self) -> i64 {
        self.extract_i63()
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        self.fill_le_bytes(buf);
        buf.len()
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.extract_number()
    }

    // low word first
    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.extract_number());
        let hi = u64::from(self.extract_number());

        hi << 32 | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill_le_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_le_bytes(dest);
        Ok(())
    }
}

impl RngCore for Mt19937_64 {
    // low half of one word, matching the first four bytes of `fill_bytes`
    fn next_u32(&mut self) -> u32 {
        self.extract_number() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.extract_number()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill_le_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_le_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(u32::from_le_bytes(seed))
    }

    /// Same key split as `RandomSource::reseed`
    fn seed_from_u64(state: u64) -> Self {
        let mut rng = Self::new();
        rng.reseed(state as i64);
        rng
    }
}

impl SeedableRng for Mt19937_64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::with_seed(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};

    #[test]
    fn check_reseed_splits_key() {
        let seed: i64 = thread_rng().gen();

        let mut rng = Mt19937::new();
        rng.reseed(seed);

        let mut keyed = Mt19937::with_key(&[seed as u32, (seed as u64 >> 32) as u32]);

        for _ in 0..16 {
            assert_eq!(rng.extract_number(), keyed.extract_number());
        }
    }

    #[test]
    fn check_reseed_negative() {
        let mut rng = Mt19937::new();
        rng.reseed(-2);

        let mut keyed = Mt19937::with_key(&[0xffff_fffe, 0xffff_ffff]);
        assert_eq!(rng.extract_number(), keyed.extract_number());

        let mut rng64 = Mt19937_64::new();
        rng64.reseed(-1);
        assert_eq!(rng64.extract_number(), Mt19937_64::with_seed(u64::MAX).extract_number());
    }

    #[test]
    fn check_next_i63_32() {
        let seed = thread_rng().next_u32();
        let mut rng = Mt19937::with_seed(seed);
        let mut raw = Mt19937::with_seed(seed);

        for _ in 0..8 {
            let v = rng.next_i63();
            let lo = raw.extract_number();
            let hi = raw.extract_number() >> 1;

            assert!(v >= 0);
            assert_eq!(v as u64, u64::from(hi) << 32 | u64::from(lo));
        }
    }

    #[test]
    fn check_next_i31() {
        let mut rng = Mt19937_64::with_seed(thread_rng().next_u64());
        let mut raw = rng.clone();

        for _ in 0..8 {
            let v = rng.next_i31();
            assert!(v >= 0);
            assert_eq!(i64::from(v), raw.extract_i63() >> 32);
        }
    }

    #[test]
    fn check_read_len() {
        let mut rng = Mt19937::with_seed(thread_rng().next_u32());
        let mut buf = [0_u8; 13];

        assert_eq!(rng.read(&mut buf), 13);
        assert_eq!(rng.index(), 4);

        let mut rng = Mt19937_64::with_seed(thread_rng().next_u64());
        assert_eq!(rng.read(&mut buf), 13);
        assert_eq!(rng.index(), 2);
    }

    #[test]
    fn check_rng_core() {
        let seed = thread_rng().next_u32();
        let mut rng = Mt19937::from_seed(seed.to_le_bytes());
        let mut raw = Mt19937::with_seed(seed);

        assert_eq!(rng.next_u32(), raw.extract_number());

        let lo = u64::from(raw.extract_number());
        let hi = u64::from(raw.extract_number());
        assert_eq!(rng.next_u64(), hi << 32 | lo);

        let seed = thread_rng().next_u64();
        let mut rng = Mt19937_64::from_seed(seed.to_le_bytes());
        let mut raw = Mt19937_64::with_seed(seed);

        assert_eq!(rng.next_u32(), raw.extract_number() as u32);
        assert_eq!(rng.next_u64(), raw.extract_number());
    }

    #[test]
    fn check_seed_from_u64() {
        let state = thread_rng().next_u64();

        let mut rng = Mt19937::seed_from_u64(state);
        let mut host = Mt19937::new();
        host.reseed(state as i64);
        assert_eq!(rng.next_u32(), host.extract_number());

        let mut rng = Mt19937_64::seed_from_u64(state);
        assert_eq!(rng.next_u64(), Mt19937_64::with_seed(state).extract_number());
    }

    #[test]
    fn check_try_fill() {
        let mut rng = Mt19937_64::new();
        let mut buf = [0_u8; 8];

        assert!(rng.try_fill_bytes(&mut buf).is_ok());
        assert_eq!(buf, Mt19937_64::with_seed(5489).extract_number().to_le_bytes());
    }
}
