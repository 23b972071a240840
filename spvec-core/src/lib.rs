#![no_std]

//! SPVEC Core - Sparse Vector Container Definitions
//!
//! This crate provides the container shapes, element traits, and validation
//! used when exchanging sparse optimization data between a solver and its
//! caller

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod containers;
pub mod error;
pub mod traits;
pub mod validation;

#[cfg(feature = "alloc")]
pub use containers::*;
pub use error::*;
pub use traits::*;
pub use validation::*;
