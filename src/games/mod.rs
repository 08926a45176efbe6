//! Concrete rule sets.

pub mod kuba;
