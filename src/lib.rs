//! Exact rational arithmetic and a plain ball record for animation
//! exercises.

pub mod ball;
pub mod error;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use ball::{Ball, Rgb};
pub use error::RationalError;
pub use rational::Rational;
