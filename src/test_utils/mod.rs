//! Test utilities
//!
//! Manual stub implementations of the model ports plus report fixtures.
//! Manual stubs over a mocking framework: the ports are tiny, the stubs
//! are a few lines each, and there is no macro magic to debug.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
