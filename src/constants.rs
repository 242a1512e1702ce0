// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the CloudFront controller.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// API group for all CloudFront CRDs
pub const API_GROUP: &str = "cloudfront.services.k8s.aws";

/// API version for all CloudFront CRDs
pub const API_VERSION: &str = "v1alpha1";

/// Fully qualified API version (group/version)
pub const API_GROUP_VERSION: &str = "cloudfront.services.k8s.aws/v1alpha1";

/// Kind name for `Distribution` resource
pub const KIND_DISTRIBUTION: &str = "Distribution";

/// Kind name for `CachePolicy` resource
pub const KIND_CACHE_POLICY: &str = "CachePolicy";

/// Kind name for `OriginRequestPolicy` resource
pub const KIND_ORIGIN_REQUEST_POLICY: &str = "OriginRequestPolicy";

/// Kind name for `ResponseHeadersPolicy` resource
pub const KIND_RESPONSE_HEADERS_POLICY: &str = "ResponseHeadersPolicy";

/// Kind name for `VpcOrigin` resource
pub const KIND_VPC_ORIGIN: &str = "VpcOrigin";

/// Kind name for `Function` resource
pub const KIND_FUNCTION: &str = "Function";

// ============================================================================
// CloudFront Status Constants
// ============================================================================

/// Status reported once a change has propagated to every edge location
pub const STATUS_DEPLOYED: &str = "Deployed";

/// Status reported while a change is propagating
pub const STATUS_IN_PROGRESS: &str = "InProgress";

/// Function status before the function is published
pub const FUNCTION_STATUS_UNPUBLISHED: &str = "UNPUBLISHED";

/// Function status once published but not yet associated with a distribution
pub const FUNCTION_STATUS_UNASSOCIATED: &str = "UNASSOCIATED";

/// Function stage holding the latest, unpublished code
pub const FUNCTION_STAGE_DEVELOPMENT: &str = "DEVELOPMENT";

/// Function stage serving traffic
pub const FUNCTION_STAGE_LIVE: &str = "LIVE";

// ============================================================================
// Annotation and Finalizer Constants
// ============================================================================

/// Annotation enabling automatic publication of a `Function` after every change
pub const AUTO_PUBLISH_ANNOTATION: &str = "cloudfront.services.k8s.aws/auto-publish";

/// Annotation value turning auto-publish on; any other value leaves it off
pub const AUTO_PUBLISH_ENABLED: &str = "true";

/// Finalizer prefix; the resource kind is appended
pub const FINALIZER_PREFIX: &str = "finalizers.cloudfront.services.k8s.aws/";

// ============================================================================
// Tag Constants
// ============================================================================

/// Tags reserved by AWS; never removed by the controller
pub const AWS_TAG_PREFIX: &str = "aws:";

/// Tags the controller itself stamps on resources; never removed on sync
pub const SYSTEM_TAG_PREFIX: &str = "services.k8s.aws/";

// ============================================================================
// Condition Constants
// ============================================================================

/// Condition reporting whether the custom resource matches CloudFront
pub const CONDITION_TYPE_SYNCED: &str = "ACK.ResourceSynced";

/// Condition reporting a terminal error that will not resolve by retrying
pub const CONDITION_TYPE_TERMINAL: &str = "ACK.Terminal";

// ============================================================================
// Controller Requeue Constants
// ============================================================================

/// Delay before checking again on a resource that is still propagating (30 seconds)
pub const DEFAULT_REQUEUE_AFTER_SECS: u64 = 30;

/// Requeue duration for controller errors (30 seconds)
pub const ERROR_REQUEUE_DURATION_SECS: u64 = 30;

/// Periodic resync of resources that are in sync (10 hours)
pub const RESYNC_PERIOD_SECS: u64 = 36_000;

// ============================================================================
// Idempotency Constants
// ============================================================================

/// `strftime` layout of the caller reference timestamp
pub const IDEMPOTENCY_TOKEN_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Literal suffix appended to the caller reference timestamp
pub const IDEMPOTENCY_TOKEN_SUFFIX: &str = "000000";

// ============================================================================
// Metrics Constants
// ============================================================================

/// Prefix of every metric exported by the controller
pub const METRICS_NAMESPACE: &str = "cloudfront_services_k8s_aws";
