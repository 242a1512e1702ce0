// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CloudFront API seam.
//!
//! The reconcilers talk to CloudFront only through the traits in this module.
//! A production binary implements them on top of an AWS SDK client; the tests
//! implement them in memory.
//!
//! - [`ResourceApi`] covers the create/read/update/delete cycle of one
//!   configuration shape. One client usually implements it once per shape.
//! - [`TaggingApi`] lists and changes the tags of a resource by ARN.
//! - [`FunctionPublishApi`] promotes a function from `DEVELOPMENT` to `LIVE`.
//!
//! Requests carrying a configuration tree must be normalized with
//! [`crate::quantities::normalized`] before they reach these traits.

use async_trait::async_trait;
use thiserror::Error;

use crate::crd::{FunctionSpec, Tag};
use crate::status_reasons::{
    REASON_API_ERROR, REASON_CONFIGURATION_INVALID, REASON_PRECONDITION_FAILED, REASON_THROTTLED,
};

/// What CloudFront reports for one resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoteResource<C> {
    /// Identifier (the name for functions).
    pub id: String,
    pub arn: Option<String>,
    /// Current version, required as `If-Match` by update and delete.
    pub e_tag: Option<String>,
    /// Propagation status, or function status for functions.
    pub status: Option<String>,
    pub domain_name: Option<String>,
    pub last_modified_time: Option<String>,
    /// Function stage; `None` for every other kind.
    pub stage: Option<String>,
    /// The configuration as CloudFront currently holds it.
    pub config: C,
}

/// Errors returned by CloudFront.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The resource does not exist (any of the `NoSuch*` error codes).
    #[error("CloudFront resource '{id}' not found")]
    NotFound {
        /// Identifier that was looked up
        id: String,
    },

    /// The `If-Match` ETag no longer matches the resource.
    ///
    /// Another writer changed the resource since it was last read.
    #[error("precondition failed for '{id}': ETag is no longer current")]
    PreconditionFailed {
        /// Identifier of the resource
        id: String,
    },

    /// A `Quantity` did not match the number of `Items` in the request.
    #[error("inconsistent quantities: {message}")]
    InconsistentQuantities {
        /// Message returned by CloudFront
        message: String,
    },

    /// The request was rejected as invalid.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Message returned by CloudFront
        message: String,
    },

    /// The request rate was exceeded.
    #[error("request throttled: {message}")]
    Throttling {
        /// Message returned by CloudFront
        message: String,
    },

    /// CloudFront was temporarily unable to serve the request.
    #[error("service unavailable: {message}")]
    ServiceUnavailable {
        /// Message returned by CloudFront
        message: String,
    },

    /// Any other error code.
    #[error("{code}: {message}")]
    Other {
        /// AWS error code
        code: String,
        /// Message returned by CloudFront
        message: String,
    },
}

impl ApiError {
    /// Returns true if the same request may succeed when sent again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Throttling { .. } | Self::ServiceUnavailable { .. })
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the Kubernetes status reason code for this error.
    #[must_use]
    pub fn status_reason(&self) -> &'static str {
        match self {
            Self::PreconditionFailed { .. } => REASON_PRECONDITION_FAILED,
            Self::InconsistentQuantities { .. } | Self::InvalidArgument { .. } => {
                REASON_CONFIGURATION_INVALID
            }
            Self::Throttling { .. } | Self::ServiceUnavailable { .. } => REASON_THROTTLED,
            Self::NotFound { .. } | Self::Other { .. } => REASON_API_ERROR,
        }
    }

    /// Short label used for the `result` of API call metrics.
    #[must_use]
    pub fn metric_label(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::PreconditionFailed { .. } => "precondition_failed",
            Self::InconsistentQuantities { .. } => "inconsistent_quantities",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::Throttling { .. } => "throttled",
            Self::ServiceUnavailable { .. } => "unavailable",
            Self::Other { .. } => "error",
        }
    }
}

/// Create, read, update and delete for one configuration shape `C`.
#[async_trait]
pub trait ResourceApi<C>: Send + Sync
where
    C: Send + Sync + 'static,
{
    /// Creates the resource. `tags` is `None` for kinds that are not taggable
    /// or when the custom resource does not specify tags.
    async fn create(&self, config: &C, tags: Option<&[Tag]>)
        -> Result<RemoteResource<C>, ApiError>;

    /// Reads the resource; `Ok(None)` when it does not exist.
    async fn describe(&self, id: &str) -> Result<Option<RemoteResource<C>>, ApiError>;

    async fn update(
        &self,
        id: &str,
        if_match: Option<&str>,
        config: &C,
    ) -> Result<RemoteResource<C>, ApiError>;

    async fn delete(&self, id: &str, if_match: Option<&str>) -> Result<(), ApiError>;
}

/// Resource tagging by ARN.
#[async_trait]
pub trait TaggingApi: Send + Sync {
    async fn list_tags(&self, arn: &str) -> Result<Vec<Tag>, ApiError>;

    async fn tag_resource(&self, arn: &str, tags: &[Tag]) -> Result<(), ApiError>;

    async fn untag_resource(&self, arn: &str, keys: &[String]) -> Result<(), ApiError>;
}

/// Publication of CloudFront Functions.
#[async_trait]
pub trait FunctionPublishApi: Send + Sync {
    /// Copies the `DEVELOPMENT` stage of the function to `LIVE`.
    async fn publish_function(
        &self,
        name: &str,
        if_match: Option<&str>,
    ) -> Result<RemoteResource<FunctionSpec>, ApiError>;
}

#[cfg(test)]
#[path = "cloudfront_tests.rs"]
mod cloudfront_tests;
