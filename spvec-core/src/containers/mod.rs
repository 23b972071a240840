//! Sparse container definitions for solver/caller interchange
//!
//! This module contains the data structure definitions for the interchange
//! shapes. No filtering or compaction operations - only the containers.

pub mod callback;
pub mod filter;
pub mod matrix;
pub mod vector;

pub use callback::{CallbackEvent, CallbackRegistration};
pub use filter::SparseVectorFilter;
pub use matrix::SparseDoubleMatrix;
pub use vector::{SparseBoolVector, SparseDoubleVector, SparseVector};
