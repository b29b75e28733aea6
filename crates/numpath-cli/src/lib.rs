//! Terminal front end for numpath.
//!
//! The `numpath` binary generates a level and prints its board; this library
//! holds the text rendering so it can be tested.

pub use self::render::*;

mod render;
