// Mersenne Twister generators reproducing the Matsumoto-Nishimura reference outputs.
// Both widths share the generic `Twister` state machine, parameterized by a `Params`
// constant set. Not suitable for cryptographic use.

pub mod mt19937;
pub mod mt19937_64;
pub mod params;
pub mod stream;
pub mod twister;

pub use mt19937::{Mt19937, Mt32};
pub use mt19937_64::{Mt19937_64, Mt64};
pub use params::{Params, Word};
pub use twister::Twister;
