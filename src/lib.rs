mod rational;

pub use rational::{DivBy, Rational, RationalError, RationalRange};
