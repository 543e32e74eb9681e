// Big integer sampling driven by a `RandomSource`. Both samplers consume the byte
// stream in the same order as the common host library routines, so identically
// seeded generators produce the same integers across implementations.

use alloc::vec;

use log::debug;
use num::traits::{One, Zero};
use num::{BigUint, Integer};

use crate::source::RandomSource;

/// Errors for big integer sampling
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Requested prime size is below two bits
    BitLength,
    /// Upper bound of zero leaves nothing to sample
    EmptyRange,
    /// No prime found within the attempt bound
    PrimeNotFound,
}

/// Attempt bound used by [`prime`]
pub const PRIME_ATTEMPTS: usize = 10_000;

// Odd primes sieved out of each candidate before the Miller-Rabin test
const SMALL_PRIMES: [u8; 15] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];
const SMALL_PRIMES_PRODUCT: u64 = 16_294_579_238_595_022_365;

// Largest even offset tried when sieving a candidate
const MAX_DELTA: u64 = 1 << 20;

// Miller-Rabin bases: the first 20 primes
const WITNESSES: [u32; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

/// Uniform random integer in [0, max)
///
/// Reads just enough big-endian bytes to cover `max - 1`, masks the excess top
/// bits, and retries until the value falls below `max`
pub fn below<R: RandomSource + ?Sized>(rng: &mut R, max: &BigUint) -> Result<BigUint, Error> {
    if max.is_zero() {
        return Err(Error::EmptyRange);
    }

    let bit_len = (max - BigUint::one()).bits() as usize;
    if bit_len == 0 {
        return Ok(BigUint::zero());
    }

    let mut bytes = vec![0_u8; (bit_len + 7) / 8];
    let top_mask = top_byte_mask(bit_len);

    loop {
        rng.read(&mut bytes);
        bytes[0] &= top_mask;

        let n = BigUint::from_bytes_be(&bytes);
        if n < *max {
            return Ok(n);
        }
    }
}

/// Probable prime of exactly `bits` bits, giving up after [`PRIME_ATTEMPTS`] candidates
pub fn prime<R: RandomSource + ?Sized>(rng: &mut R, bits: usize) -> Result<BigUint, Error> {
    prime_within(rng, bits, PRIME_ATTEMPTS)
}

/// Probable prime of exactly `bits` bits, giving up after `attempts` candidates
///
/// Each candidate has its top two bits and its low bit set, and is advanced by
/// the smallest even offset that leaves it coprime to the odd primes up to 53
pub fn prime_within<R: RandomSource + ?Sized>(
    rng: &mut R,
    bits: usize,
    attempts: usize,
) -> Result<BigUint, Error> {
    if bits < 2 {
        return Err(Error::BitLength);
    }

    let mut bytes = vec![0_u8; (bits + 7) / 8];
    let top_bits = match bits % 8 {
        0 => 8,
        b => b,
    };
    let top_mask = top_byte_mask(bits);
    let last = bytes.len() - 1;

    for attempt in 1..=attempts {
        rng.read(&mut bytes);

        bytes[0] &= top_mask;
        // keep the candidate from being too small
        if top_bits >= 2 {
            bytes[0] |= 3 << (top_bits - 2);
        } else {
            bytes[0] |= 1;
            if bytes.len() > 1 {
                bytes[1] |= 0x80;
            }
        }
        bytes[last] |= 1;

        let mut candidate = BigUint::from_bytes_be(&bytes);

        if let Some(delta) = sieve_delta(&bytes, bits) {
            if delta > 0 {
                candidate += BigUint::from(delta);
            }
        }

        if candidate.bits() as usize == bits && is_probable_prime(&candidate) {
            debug!("found {}-bit prime after {} candidates", bits, attempt);
            return Ok(candidate);
        }
    }

    debug!("no {}-bit prime within {} candidates", bits, attempts);
    Err(Error::PrimeNotFound)
}

/// Miller-Rabin test over the first 20 prime bases
pub fn is_probable_prime(n: &BigUint) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2_u32);

    if *n < two {
        return false;
    }

    for &p in WITNESSES.iter() {
        let p = BigUint::from(p);
        if (n % &p).is_zero() {
            return *n == p;
        }
    }

    // n - 1 = d * 2^r with d odd
    let n_minus_one = n - &one;
    let mut d = n_minus_one.clone();
    let mut r = 0_u32;

    while d.is_even() {
        d = d >> 1_usize;
        r += 1;
    }

    'witness: for &a in WITNESSES.iter() {
        let mut x = BigUint::from(a).modpow(&d, n);

        if x == one || x == n_minus_one {
            continue;
        }

        for _ in 1..r {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

// Mask keeping the low `bit_len % 8` bits of the leading byte (all of them on a byte boundary)
fn top_byte_mask(bit_len: usize) -> u8 {
    match bit_len % 8 {
        0 => 0xff,
        b => (1_u8 << b) - 1,
    }
}

// Smallest even offset making the candidate coprime to `SMALL_PRIMES`
fn sieve_delta(bytes: &[u8], bits: usize) -> Option<u64> {
    let product = u128::from(SMALL_PRIMES_PRODUCT);
    let modulus = bytes
        .iter()
        .fold(0_u128, |acc, &b| (acc << 8 | u128::from(b)) % product) as u64;

    (0..MAX_DELTA).step_by(2).find(|delta| {
        let m = modulus + delta;

        SMALL_PRIMES.iter().all(|&p| {
            let p = u64::from(p);
            m % p != 0 || (bits <= 6 && m == p)
        })
    })
}
