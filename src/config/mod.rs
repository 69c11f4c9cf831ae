//! Configuration module.
//!
//! One backend endpoint and one routing endpoint, read from the
//! environment and injected into the collaborators that need them.

pub mod environment;

pub use environment::*;
