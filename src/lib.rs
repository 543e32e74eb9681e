#![no_std]

extern crate alloc;

pub mod mersenne;
pub mod sample;
pub mod source;

pub use mersenne::{Mt19937, Mt19937_64};
pub use source::RandomSource;
