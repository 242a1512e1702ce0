// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Status-gated mutation guard.
//!
//! CloudFront refuses to update or delete a distribution while a previous
//! change is still propagating. The guard reads the reported status and tells
//! the reconciler to come back later instead of sending a request that is
//! bound to fail.

use std::time::Duration;

use crate::constants::{DEFAULT_REQUEUE_AFTER_SECS, STATUS_DEPLOYED};
use crate::errors::Error;

/// Whether a resource can be modified right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationState {
    /// The last change reached every edge location (`Deployed`).
    Stable,
    /// A change is still propagating (`InProgress` or any other value).
    Propagating,
}

impl PropagationState {
    /// Classifies a reported status. `None` when no status was reported.
    #[must_use]
    pub fn from_status(status: Option<&str>) -> Option<Self> {
        status.map(|status| {
            if status == STATUS_DEPLOYED {
                Self::Stable
            } else {
                Self::Propagating
            }
        })
    }
}

/// Whether the reported status is `Deployed`. An unreported status is not.
#[must_use]
pub fn is_deployed(status: Option<&str>) -> bool {
    PropagationState::from_status(status) == Some(PropagationState::Stable)
}

/// Returns a requeue error while the resource is propagating.
///
/// A resource without a reported status is not blocked: it has not been read
/// from CloudFront yet, and CloudFront itself rejects the request if it cannot
/// be served.
///
/// # Errors
///
/// Returns [`Error::RequeueNeededAfter`] with the default delay when the
/// resource is propagating.
pub fn ensure_can_modify(kind: &str, status: Option<&str>) -> Result<(), Error> {
    match (PropagationState::from_status(status), status) {
        (Some(PropagationState::Propagating), Some(status)) => Err(Error::RequeueNeededAfter {
            reason: format!(
                "{} in '{status}' state, cannot be modified until '{STATUS_DEPLOYED}'",
                kind.to_lowercase()
            ),
            after: Duration::from_secs(DEFAULT_REQUEUE_AFTER_SECS),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod guard_tests;
