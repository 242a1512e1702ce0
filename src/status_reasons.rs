// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Standard Kubernetes status condition reasons for CloudFront resources.
//!
//! This module defines constants for condition reasons following Kubernetes conventions.
//! Reasons are programmatic identifiers in CamelCase that explain why a condition has
//! a particular status.
//!
//! # Condition Types
//!
//! Every resource carries a single `type: ACK.ResourceSynced` condition telling
//! whether the live CloudFront resource matches the custom resource. Errors that
//! retrying cannot fix are additionally reported with `type: ACK.Terminal`.
//!
//! # Example Status
//!
//! ```yaml
//! status:
//!   id: E2QWRUHAPOMQZL
//!   status: InProgress
//!   conditions:
//!     - type: ACK.ResourceSynced
//!       status: "False"
//!       reason: Propagating
//!       message: "Distribution in 'InProgress' state, waiting for 'Deployed'"
//! ```

// ============================================================================
// Synced Reasons
// ============================================================================

/// The CloudFront resource matches the custom resource and is stable.
pub const REASON_SYNCED: &str = "Synced";

/// The last change is still propagating to the edge locations.
///
/// **Usage:**
/// - Reported with `status: "False"` on `ACK.ResourceSynced`
/// - The controller requeues after the default delay until `Deployed`
pub const REASON_PROPAGATING: &str = "Propagating";

/// The CloudFront resource was created during this reconciliation.
pub const REASON_CREATED: &str = "Created";

/// The CloudFront resource was updated during this reconciliation.
pub const REASON_UPDATED: &str = "Updated";

/// The function was published to the `LIVE` stage.
pub const REASON_PUBLISHED: &str = "Published";

/// The distribution is being disabled before it can be deleted.
pub const REASON_DISABLING: &str = "Disabling";

// ============================================================================
// Error Reasons
// ============================================================================

/// The custom resource is missing required configuration.
pub const REASON_CONFIGURATION_INVALID: &str = "ConfigurationInvalid";

/// CloudFront rejected the request.
pub const REASON_API_ERROR: &str = "CloudFrontApiError";

/// CloudFront throttled the request; it will be retried.
pub const REASON_THROTTLED: &str = "Throttled";

/// The ETag sent with the request is no longer current.
///
/// Another writer changed the resource; the next reconciliation reads the new
/// ETag and tries again.
pub const REASON_PRECONDITION_FAILED: &str = "PreconditionFailed";
