// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Reconciliation error type.
//!
//! Every reconciler returns [`Error`]. Besides real failures it carries
//! [`Error::RequeueNeededAfter`], which is not a failure: it tells the
//! controller to come back later, for instance while a change is still
//! propagating through CloudFront.

use std::time::Duration;

use thiserror::Error;

use crate::cloudfront::ApiError;
use crate::constants::ERROR_REQUEUE_DURATION_SECS;
use crate::status_reasons::{REASON_CONFIGURATION_INVALID, REASON_PROPAGATING};

/// Errors that can occur while reconciling a CloudFront resource.
#[derive(Error, Debug)]
pub enum Error {
    /// A CloudFront API call failed.
    #[error("CloudFront {operation} failed: {source}")]
    Api {
        /// The CloudFront operation, e.g. `UpdateDistribution`
        operation: &'static str,
        /// The error returned by CloudFront
        source: ApiError,
    },

    /// A Kubernetes API call failed.
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    /// The resource cannot be changed yet; reconcile again after `after`.
    #[error("{reason}")]
    RequeueNeededAfter {
        /// Why the reconciliation stopped
        reason: String,
        /// How long to wait before the next attempt
        after: Duration,
    },

    /// The custom resource does not carry a required field.
    #[error("{kind} '{name}' is missing required field '{field}'")]
    MissingConfig {
        /// Resource kind
        kind: &'static str,
        /// Resource name
        name: String,
        /// Field path, e.g. `spec.distributionConfig`
        field: &'static str,
    },

    /// A resource could not be serialized for comparison or patching.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Wraps a CloudFront error with the operation that produced it.
    #[must_use]
    pub fn api(operation: &'static str, source: ApiError) -> Self {
        Self::Api { operation, source }
    }

    /// How long the controller waits before reconciling again.
    #[must_use]
    pub fn requeue_after(&self) -> Duration {
        match self {
            Self::RequeueNeededAfter { after, .. } => *after,
            _ => Duration::from_secs(ERROR_REQUEUE_DURATION_SECS),
        }
    }

    /// Errors that will not go away without a change to the custom resource.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::MissingConfig { .. } => true,
            Self::Api { source, .. } => matches!(
                source,
                ApiError::InvalidArgument { .. } | ApiError::InconsistentQuantities { .. }
            ),
            _ => false,
        }
    }

    /// Returns the Kubernetes status reason code for this error.
    #[must_use]
    pub fn status_reason(&self) -> &'static str {
        match self {
            Self::Api { source, .. } => source.status_reason(),
            Self::RequeueNeededAfter { .. } => REASON_PROPAGATING,
            Self::MissingConfig { .. } => REASON_CONFIGURATION_INVALID,
            Self::Kube(_) => "KubernetesApiError",
            Self::Serialization(_) => "SerializationFailed",
        }
    }

    /// Short label used for the `reason` of requeue metrics.
    #[must_use]
    pub fn metric_label(&self) -> &'static str {
        match self {
            Self::Api { source, .. } => source.metric_label(),
            Self::Kube(_) => "kubernetes",
            Self::RequeueNeededAfter { .. } => "requeue_needed",
            Self::MissingConfig { .. } => "missing_config",
            Self::Serialization(_) => "serialization",
        }
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
