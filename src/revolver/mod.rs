//! Revolver risk mechanic.
//!
//! A `Revolver` is a six-chamber cylinder. Spinning and firing picks one
//! chamber at random and reports whether it was loaded, but never clears
//! it: risk keeps building across a losing streak until something resets
//! the cylinder.

mod cylinder;

pub use cylinder::{Revolver, CAPACITY};
