//! Infrastructure module (Hexagonal Architecture)
//!
//! Concrete adapters behind the outbound ports.

pub mod persistence;

pub use persistence::*;
