//! Callback event set extraction

use hashbrown::HashSet;
use spvec_core::{CallbackEvent, CallbackRegistration};

/// Get the requested callback events as a set
///
/// The registration's event list may contain duplicates; the returned set
/// has no duplicates and no order guarantee.
pub fn event_set(registration: &CallbackRegistration) -> HashSet<CallbackEvent> {
    registration.request_registration.iter().copied().collect()
}
