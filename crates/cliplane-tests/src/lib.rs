//! Integration test crate for Cliplane.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It drives whole pointer gestures through a widget, a track and a
//! lane stack together.



#[cfg(test)]
mod reassignment;
