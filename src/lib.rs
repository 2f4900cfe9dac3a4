//! Statespace engine library.
//!
//! Exposes the problem-domain representations, the single-agent search
//! algorithms, the adversarial search, and the interactive session module
//! for use by integration tests and the binary entry points.

pub mod domain;
pub mod search;
pub mod session;
