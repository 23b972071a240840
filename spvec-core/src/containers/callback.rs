//! Solver callback registration containers
//!
//! A caller registers for solver callback events and attaches filters that
//! bound how much sparse solution data each callback carries back.

use alloc::vec::Vec;

use super::filter::SparseVectorFilter;

/// Solver events a callback can be registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CallbackEvent {
    /// No event; placeholder wire value
    Unspecified = 0,
    /// Presolve phase progress
    Presolve = 1,
    /// Simplex iteration progress
    Simplex = 2,
    /// MIP search progress
    Mip = 3,
    /// A new MIP incumbent solution was found
    MipSolution = 4,
    /// A MIP search node was processed
    MipNode = 5,
    /// Barrier iteration progress
    Barrier = 6,
}

impl CallbackEvent {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(CallbackEvent::Unspecified),
            1 => Some(CallbackEvent::Presolve),
            2 => Some(CallbackEvent::Simplex),
            3 => Some(CallbackEvent::Mip),
            4 => Some(CallbackEvent::MipSolution),
            5 => Some(CallbackEvent::MipNode),
            6 => Some(CallbackEvent::Barrier),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for CallbackEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CallbackEvent::Unspecified => write!(f, "unspecified"),
            CallbackEvent::Presolve => write!(f, "presolve"),
            CallbackEvent::Simplex => write!(f, "simplex"),
            CallbackEvent::Mip => write!(f, "mip"),
            CallbackEvent::MipSolution => write!(f, "mip_solution"),
            CallbackEvent::MipNode => write!(f, "mip_node"),
            CallbackEvent::Barrier => write!(f, "barrier"),
        }
    }
}

/// Callback registration submitted by a caller before solving
///
/// `request_registration` may contain duplicates; consumers deduplicate it
/// into a set. The two filters bound the sparse solution data returned at
/// `MipSolution` and `MipNode` events respectively.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallbackRegistration {
    /// Requested events, possibly with duplicates
    pub request_registration: Vec<CallbackEvent>,
    /// Filter applied to incumbent solutions at `MipSolution` events
    pub mip_solution_filter: SparseVectorFilter,
    /// Filter applied to node relaxations at `MipNode` events
    pub mip_node_filter: SparseVectorFilter,
}
