use super::params::{Params, Word};
use super::twister::Twister;

impl<P: Params> Twister<P> {
    /// Fill a buffer with the generator's output as a little-endian byte stream
    ///
    /// Each word supplies `P::Word::BYTES` bytes; the final word is truncated
    /// to the bytes still needed, and its remaining bytes are discarded.
    ///
    /// Consumes exactly `ceil(dest.len() / P::Word::BYTES)` words
    pub fn fill_le_bytes(&mut self, dest: &mut [u8]) {
        for block in dest.chunks_mut(P::Word::BYTES) {
            self.next_word().put_le(block);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use rand::{thread_rng, RngCore};

    use crate::mersenne::{Mt32, Mt64};

    use super::*;

    fn expected_stream<P: Params>(rng: &mut Twister<P>, len: usize) -> Vec<u8> {
        let mut res = Vec::with_capacity(len + P::Word::BYTES);
        let mut word = vec![0_u8; P::Word::BYTES];

        while res.len() < len {
            rng.next_word().put_le(&mut word);
            res.extend_from_slice(&word);
        }

        res.truncate(len);
        res
    }

    fn check_stream<P: Params>(seed: P::Word) {
        for &len in [0_usize, 1, 3, 4, 5, 8, 9, 100].iter() {
            let mut rng = Twister::<P>::new();
            let mut reference = Twister::<P>::new();
            rng.seed(seed);
            reference.seed(seed);

            let mut buf = vec![0_u8; len];
            rng.fill_le_bytes(&mut buf);

            assert_eq!(buf, expected_stream(&mut reference, len));
            assert_eq!(rng.index(), reference.index());
        }
    }

    #[test]
    fn check_fill_32() {
        check_stream::<Mt32>(thread_rng().next_u32());
    }

    #[test]
    fn check_fill_64() {
        check_stream::<Mt64>(thread_rng().next_u64());
    }

    #[test]
    fn check_partial_word() {
        let mut rng = Twister::<Mt32>::new();
        let mut reference = Twister::<Mt32>::new();

        let mut buf = [0_u8; 3];
        rng.fill_le_bytes(&mut buf);

        let word = reference.next_word().to_le_bytes();
        assert_eq!(buf, word[..3]);

        // the unused high byte is dropped, not carried into the next fill
        assert_eq!(rng.next_word(), reference.next_word());
    }
}
