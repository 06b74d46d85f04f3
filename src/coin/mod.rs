//! Coin resolver.
//!
//! Directional effects are settled by a coin toss: the acting player calls
//! a side, the coin lands uniformly at random, and a correct call makes the
//! effect positive. The call never changes the odds.

mod flip;

pub use flip::{flip, CoinFlip, Side};
