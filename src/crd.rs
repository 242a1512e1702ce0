// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Custom Resource Definitions (CRDs) for CloudFront resources.
//!
//! Every resource kind managed by the controller is declared here, together with
//! the configuration trees that mirror the CloudFront request shapes.
//!
//! # Resource Types
//!
//! - [`Distribution`] - A CloudFront web distribution
//! - [`CachePolicy`] - A cache policy referenced by cache behaviors
//! - [`OriginRequestPolicy`] - An origin request policy referenced by cache behaviors
//! - [`ResponseHeadersPolicy`] - A response headers policy referenced by cache behaviors
//! - [`VpcOrigin`] - A VPC origin fronting a private load balancer
//! - [`Function`] - A CloudFront Function
//!
//! # Counted lists
//!
//! CloudFront represents most lists as a `{Quantity, Items}` pair and rejects
//! any request where the two disagree. Those lists are modelled as
//! [`CountedList`] (or as a dedicated struct when the node carries extra
//! fields, such as [`AllowedMethods`]). Every field of a configuration tree is
//! optional: a field that is not set is left out of the request, which is not
//! the same thing as an empty list.
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudfront_controller::crd::{CachePolicyConfig, CachePolicySpec, CountedList,
//!     HeadersConfig, ParametersInCacheKeyAndForwardedToOrigin};
//!
//! let spec = CachePolicySpec {
//!     cache_policy_config: CachePolicyConfig {
//!         name: Some("static-assets".to_string()),
//!         min_ttl: Some(60),
//!         parameters_in_cache_key_and_forwarded_to_origin: Some(
//!             ParametersInCacheKeyAndForwardedToOrigin {
//!                 headers_config: Some(HeadersConfig {
//!                     header_behavior: Some("whitelist".to_string()),
//!                     headers: Some(CountedList::new(vec!["Origin".to_string()])),
//!                 }),
//!                 ..Default::default()
//!             },
//!         ),
//!         ..Default::default()
//!     },
//! };
//! ```

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Shared building blocks
// ============================================================================

/// A list paired with an explicit item count, as CloudFront expects it.
///
/// `quantity` must equal the number of `items` when the request is sent;
/// [`crate::quantities::normalize_quantities`] establishes that. `items` left
/// as `None` means the list was not specified at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountedList<T> {
    /// Number of entries in `items`.
    pub quantity: Option<i32>,
    /// The list entries.
    pub items: Option<Vec<T>>,
}

impl<T> CountedList<T> {
    /// Builds a list from its items. The quantity is left unset.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            quantity: None,
            items: Some(items),
        }
    }

    /// Builds a list carrying only a quantity and no items.
    #[must_use]
    pub fn with_quantity(quantity: i32) -> Self {
        Self {
            quantity: Some(quantity),
            items: None,
        }
    }
}

impl<T> Default for CountedList<T> {
    fn default() -> Self {
        Self {
            quantity: None,
            items: None,
        }
    }
}

/// A resource tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    #[must_use]
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            value: Some(value.to_string()),
        }
    }
}

/// Condition represents an observation of a resource's current state.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition, e.g. `ACK.ResourceSynced`.
    pub r#type: String,

    /// Status of the condition: True, False, or Unknown.
    pub status: String,

    /// Brief CamelCase reason for the condition's last transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Human-readable message indicating details about the transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Last time the condition transitioned from one status to another (RFC3339 format).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

/// Identity of the CloudFront resource backing a custom resource.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMetadata {
    /// Amazon Resource Name of the CloudFront resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    /// AWS account that owns the resource.
    #[serde(rename = "ownerAccountID", skip_serializing_if = "Option::is_none")]
    pub owner_account_id: Option<String>,

    /// Region the controller manages the resource from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Status shared by every CloudFront custom resource.
///
/// Not every field applies to every kind: `domainName` is only reported for
/// distributions and `stage` only for functions.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack_resource_metadata: Option<ResourceMetadata>,

    #[serde(default)]
    pub conditions: Vec<Condition>,

    /// CloudFront identifier (the function name for functions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Current version of the resource, sent as `If-Match` on update and delete.
    #[serde(rename = "eTag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,

    /// Propagation status (`Deployed`, `InProgress`) or function status
    /// (`UNPUBLISHED`, `UNASSOCIATED`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<String>,

    /// Function stage (`DEVELOPMENT` or `LIVE`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

// ============================================================================
// Distribution
// ============================================================================

/// HTTP methods CloudFront processes and forwards, plus the subset it caches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllowedMethods {
    pub quantity: Option<i32>,
    pub items: Option<Vec<String>>,
    pub cached_methods: Option<CountedList<String>>,
}

/// How cookies are forwarded to the origin (legacy cache settings).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CookiePreference {
    /// `none`, `whitelist` or `all`.
    pub forward: Option<String>,
    pub whitelisted_names: Option<CountedList<String>>,
}

/// Legacy cache key settings of a cache behavior.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForwardedValues {
    pub cookies: Option<CookiePreference>,
    pub headers: Option<CountedList<String>>,
    pub query_string: Option<bool>,
    pub query_string_cache_keys: Option<CountedList<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FunctionAssociation {
    pub event_type: Option<String>,
    #[serde(rename = "functionARN")]
    pub function_arn: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LambdaFunctionAssociation {
    pub event_type: Option<String>,
    pub include_body: Option<bool>,
    #[serde(rename = "lambdaFunctionARN")]
    pub lambda_function_arn: Option<String>,
}

/// Key groups allowed to sign URLs for a cache behavior.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrustedKeyGroups {
    pub enabled: Option<bool>,
    pub quantity: Option<i32>,
    pub items: Option<Vec<String>>,
}

/// AWS accounts allowed to sign URLs for a cache behavior.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrustedSigners {
    pub enabled: Option<bool>,
    pub quantity: Option<i32>,
    pub items: Option<Vec<String>>,
}

/// A cache behavior. The default cache behavior uses the same shape without a
/// path pattern.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CacheBehavior {
    pub path_pattern: Option<String>,
    #[serde(rename = "targetOriginID")]
    pub target_origin_id: Option<String>,
    pub viewer_protocol_policy: Option<String>,
    pub allowed_methods: Option<AllowedMethods>,
    #[serde(rename = "cachePolicyID")]
    pub cache_policy_id: Option<String>,
    #[serde(rename = "originRequestPolicyID")]
    pub origin_request_policy_id: Option<String>,
    #[serde(rename = "responseHeadersPolicyID")]
    pub response_headers_policy_id: Option<String>,
    pub compress: Option<bool>,
    #[serde(rename = "fieldLevelEncryptionID")]
    pub field_level_encryption_id: Option<String>,
    pub forwarded_values: Option<ForwardedValues>,
    pub function_associations: Option<CountedList<FunctionAssociation>>,
    pub lambda_function_associations: Option<CountedList<LambdaFunctionAssociation>>,
    pub trusted_key_groups: Option<TrustedKeyGroups>,
    pub trusted_signers: Option<TrustedSigners>,
    #[serde(rename = "minTTL")]
    pub min_ttl: Option<i64>,
    #[serde(rename = "defaultTTL")]
    pub default_ttl: Option<i64>,
    #[serde(rename = "maxTTL")]
    pub max_ttl: Option<i64>,
    pub smooth_streaming: Option<bool>,
    #[serde(rename = "realtimeLogConfigARN")]
    pub realtime_log_config_arn: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomErrorResponse {
    pub error_code: Option<i32>,
    #[serde(rename = "errorCachingMinTTL")]
    pub error_caching_min_ttl: Option<i64>,
    pub response_code: Option<String>,
    pub response_page_path: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OriginGroupFailoverCriteria {
    pub status_codes: Option<CountedList<i32>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OriginGroupMember {
    #[serde(rename = "originID")]
    pub origin_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OriginGroup {
    pub id: Option<String>,
    pub failover_criteria: Option<OriginGroupFailoverCriteria>,
    pub members: Option<CountedList<OriginGroupMember>>,
    pub selection_criteria: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OriginCustomHeader {
    pub header_name: Option<String>,
    pub header_value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomOriginConfig {
    #[serde(rename = "httpPort")]
    pub http_port: Option<i32>,
    #[serde(rename = "httpsPort")]
    pub https_port: Option<i32>,
    pub origin_keepalive_timeout: Option<i32>,
    pub origin_protocol_policy: Option<String>,
    pub origin_read_timeout: Option<i32>,
    #[serde(rename = "originSSLProtocols")]
    pub origin_ssl_protocols: Option<CountedList<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct S3OriginConfig {
    pub origin_access_identity: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VpcOriginConfig {
    pub origin_keepalive_timeout: Option<i32>,
    pub origin_read_timeout: Option<i32>,
    #[serde(rename = "vpcOriginID")]
    pub vpc_origin_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OriginShield {
    pub enabled: Option<bool>,
    pub origin_shield_region: Option<String>,
}

/// An origin CloudFront fetches content from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Origin {
    pub id: Option<String>,
    pub domain_name: Option<String>,
    pub origin_path: Option<String>,
    pub connection_attempts: Option<i32>,
    pub connection_timeout: Option<i32>,
    pub custom_headers: Option<CountedList<OriginCustomHeader>>,
    pub custom_origin_config: Option<CustomOriginConfig>,
    pub s3_origin_config: Option<S3OriginConfig>,
    pub vpc_origin_config: Option<VpcOriginConfig>,
    #[serde(rename = "originAccessControlID")]
    pub origin_access_control_id: Option<String>,
    pub origin_shield: Option<OriginShield>,
}

/// Countries the distribution serves or refuses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeoRestriction {
    /// `none`, `whitelist` or `blacklist`.
    pub restriction_type: Option<String>,
    pub quantity: Option<i32>,
    pub items: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restrictions {
    pub geo_restriction: Option<GeoRestriction>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    pub bucket: Option<String>,
    pub enabled: Option<bool>,
    pub include_cookies: Option<bool>,
    pub prefix: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewerCertificate {
    #[serde(rename = "acmCertificateARN")]
    pub acm_certificate_arn: Option<String>,
    pub cloud_front_default_certificate: Option<bool>,
    #[serde(rename = "iamCertificateID")]
    pub iam_certificate_id: Option<String>,
    pub minimum_protocol_version: Option<String>,
    #[serde(rename = "sslSupportMethod")]
    pub ssl_support_method: Option<String>,
}

/// Configuration of a CloudFront distribution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistributionConfig {
    pub aliases: Option<CountedList<String>>,
    pub cache_behaviors: Option<CountedList<CacheBehavior>>,
    /// Unique value that prevents the create request from being replayed.
    /// Generated by the controller when not set.
    pub caller_reference: Option<String>,
    pub comment: Option<String>,
    #[serde(rename = "continuousDeploymentPolicyID")]
    pub continuous_deployment_policy_id: Option<String>,
    pub custom_error_responses: Option<CountedList<CustomErrorResponse>>,
    pub default_cache_behavior: Option<CacheBehavior>,
    pub default_root_object: Option<String>,
    pub enabled: Option<bool>,
    pub http_version: Option<String>,
    #[serde(rename = "isIPV6Enabled")]
    pub is_ipv6_enabled: Option<bool>,
    pub logging: Option<LoggingConfig>,
    pub origin_groups: Option<CountedList<OriginGroup>>,
    pub origins: Option<CountedList<Origin>>,
    pub price_class: Option<String>,
    pub restrictions: Option<Restrictions>,
    pub staging: Option<bool>,
    pub viewer_certificate: Option<ViewerCertificate>,
    #[serde(rename = "webACLID")]
    pub web_acl_id: Option<String>,
}

/// `Distribution` manages a CloudFront web distribution.
///
/// # Example
///
/// ```yaml
/// apiVersion: cloudfront.services.k8s.aws/v1alpha1
/// kind: Distribution
/// metadata:
///   name: my-distribution
/// spec:
///   distributionConfig:
///     comment: a simple distribution
///     enabled: true
///     origins:
///       items:
///         - id: my-origin
///           domainName: my-bucket.s3.amazonaws.com
///           s3OriginConfig:
///             originAccessIdentity: ""
///     defaultCacheBehavior:
///       targetOriginID: my-origin
///       viewerProtocolPolicy: redirect-to-https
///   tags:
///     - key: team
///       value: edge
/// ```
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "cloudfront.services.k8s.aws",
    version = "v1alpha1",
    kind = "Distribution",
    namespaced,
    doc = "Distribution represents a CloudFront web distribution. The controller creates it from distributionConfig and keeps the live distribution in sync."
)]
#[kube(status = "ResourceStatus")]
#[kube(printcolumn = r#"{"name":"ID","type":"string","jsonPath":".status.id"}"#)]
#[kube(printcolumn = r#"{"name":"Status","type":"string","jsonPath":".status.status"}"#)]
#[kube(printcolumn = r#"{"name":"Domain","type":"string","jsonPath":".status.domainName"}"#)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSpec {
    /// The distribution's configuration.
    pub distribution_config: Option<DistributionConfig>,

    /// Tags applied to the distribution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

// ============================================================================
// Cache and origin request policies
// ============================================================================

/// Cookies included in the cache key or forwarded to the origin.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CookiesConfig {
    pub cookie_behavior: Option<String>,
    pub cookies: Option<CountedList<String>>,
}

/// Headers included in the cache key or forwarded to the origin.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeadersConfig {
    pub header_behavior: Option<String>,
    pub headers: Option<CountedList<String>>,
}

/// Query strings included in the cache key or forwarded to the origin.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryStringsConfig {
    pub query_string_behavior: Option<String>,
    pub query_strings: Option<CountedList<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParametersInCacheKeyAndForwardedToOrigin {
    pub cookies_config: Option<CookiesConfig>,
    pub enable_accept_encoding_brotli: Option<bool>,
    pub enable_accept_encoding_gzip: Option<bool>,
    pub headers_config: Option<HeadersConfig>,
    pub query_strings_config: Option<QueryStringsConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CachePolicyConfig {
    pub comment: Option<String>,
    #[serde(rename = "defaultTTL")]
    pub default_ttl: Option<i64>,
    #[serde(rename = "maxTTL")]
    pub max_ttl: Option<i64>,
    #[serde(rename = "minTTL")]
    pub min_ttl: Option<i64>,
    pub name: Option<String>,
    pub parameters_in_cache_key_and_forwarded_to_origin:
        Option<ParametersInCacheKeyAndForwardedToOrigin>,
}

/// `CachePolicy` manages a CloudFront cache policy.
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "cloudfront.services.k8s.aws",
    version = "v1alpha1",
    kind = "CachePolicy",
    namespaced,
    doc = "CachePolicy represents a CloudFront cache policy controlling the cache key and TTLs of the cache behaviors that reference it."
)]
#[kube(status = "ResourceStatus")]
#[kube(printcolumn = r#"{"name":"ID","type":"string","jsonPath":".status.id"}"#)]
#[serde(rename_all = "camelCase")]
pub struct CachePolicySpec {
    /// A cache policy configuration.
    pub cache_policy_config: CachePolicyConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OriginRequestPolicyConfig {
    pub comment: Option<String>,
    pub cookies_config: Option<CookiesConfig>,
    pub headers_config: Option<HeadersConfig>,
    pub name: Option<String>,
    pub query_strings_config: Option<QueryStringsConfig>,
}

/// `OriginRequestPolicy` manages a CloudFront origin request policy.
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "cloudfront.services.k8s.aws",
    version = "v1alpha1",
    kind = "OriginRequestPolicy",
    namespaced,
    doc = "OriginRequestPolicy represents a CloudFront origin request policy controlling the values forwarded to the origin."
)]
#[kube(status = "ResourceStatus")]
#[kube(printcolumn = r#"{"name":"ID","type":"string","jsonPath":".status.id"}"#)]
#[serde(rename_all = "camelCase")]
pub struct OriginRequestPolicySpec {
    pub origin_request_policy_config: OriginRequestPolicyConfig,
}

// ============================================================================
// Response headers policy
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CorsConfig {
    pub access_control_allow_credentials: Option<bool>,
    pub access_control_allow_headers: Option<CountedList<String>>,
    pub access_control_allow_methods: Option<CountedList<String>>,
    pub access_control_allow_origins: Option<CountedList<String>>,
    pub access_control_expose_headers: Option<CountedList<String>>,
    pub access_control_max_age_sec: Option<i32>,
    pub origin_override: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomHeader {
    pub header: Option<String>,
    pub r#override: Option<bool>,
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveHeader {
    pub header: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StrictTransportSecurity {
    pub access_control_max_age_sec: Option<i32>,
    pub include_subdomains: Option<bool>,
    pub r#override: Option<bool>,
    pub preload: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecurityHeadersConfig {
    pub strict_transport_security: Option<StrictTransportSecurity>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerTimingHeadersConfig {
    pub enabled: Option<bool>,
    pub sampling_rate: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeadersPolicyConfig {
    pub comment: Option<String>,
    pub cors_config: Option<CorsConfig>,
    pub custom_headers_config: Option<CountedList<CustomHeader>>,
    pub name: Option<String>,
    pub remove_headers_config: Option<CountedList<RemoveHeader>>,
    pub security_headers_config: Option<SecurityHeadersConfig>,
    pub server_timing_headers_config: Option<ServerTimingHeadersConfig>,
}

/// `ResponseHeadersPolicy` manages a CloudFront response headers policy.
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "cloudfront.services.k8s.aws",
    version = "v1alpha1",
    kind = "ResponseHeadersPolicy",
    namespaced,
    doc = "ResponseHeadersPolicy represents a CloudFront response headers policy adding, overriding or removing HTTP headers in viewer responses."
)]
#[kube(status = "ResourceStatus")]
#[kube(printcolumn = r#"{"name":"ID","type":"string","jsonPath":".status.id"}"#)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeadersPolicySpec {
    pub response_headers_policy_config: ResponseHeadersPolicyConfig,
}

// ============================================================================
// VPC origin
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VpcOriginEndpointConfig {
    /// ARN of the load balancer or EC2 instance behind the VPC origin.
    pub arn: Option<String>,
    #[serde(rename = "httpPort")]
    pub http_port: Option<i32>,
    #[serde(rename = "httpsPort")]
    pub https_port: Option<i32>,
    pub name: Option<String>,
    pub origin_protocol_policy: Option<String>,
    #[serde(rename = "originSSLProtocols")]
    pub origin_ssl_protocols: Option<CountedList<String>>,
}

/// `VpcOrigin` manages a CloudFront VPC origin.
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "cloudfront.services.k8s.aws",
    version = "v1alpha1",
    kind = "VpcOrigin",
    namespaced,
    doc = "VpcOrigin represents a CloudFront VPC origin that lets distributions reach private application load balancers, network load balancers and EC2 instances."
)]
#[kube(status = "ResourceStatus")]
#[kube(printcolumn = r#"{"name":"ID","type":"string","jsonPath":".status.id"}"#)]
#[kube(printcolumn = r#"{"name":"Status","type":"string","jsonPath":".status.status"}"#)]
#[serde(rename_all = "camelCase")]
pub struct VpcOriginSpec {
    pub vpc_origin_endpoint_config: VpcOriginEndpointConfig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

// ============================================================================
// Function
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyValueStoreAssociation {
    #[serde(rename = "keyValueStoreARN")]
    pub key_value_store_arn: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FunctionConfig {
    pub comment: Option<String>,
    pub key_value_store_associations: Option<CountedList<KeyValueStoreAssociation>>,
    /// `cloudfront-js-1.0` or `cloudfront-js-2.0`.
    pub runtime: Option<String>,
}

/// `Function` manages a CloudFront Function.
///
/// Functions are created in the `DEVELOPMENT` stage. Set the
/// `cloudfront.services.k8s.aws/auto-publish: "true"` annotation to publish
/// every change to `LIVE`.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "cloudfront.services.k8s.aws",
    version = "v1alpha1",
    kind = "Function",
    namespaced,
    doc = "Function represents a CloudFront Function, a lightweight JavaScript function run at CloudFront edge locations."
)]
#[kube(status = "ResourceStatus")]
#[kube(printcolumn = r#"{"name":"Stage","type":"string","jsonPath":".status.stage"}"#)]
#[kube(printcolumn = r#"{"name":"Status","type":"string","jsonPath":".status.status"}"#)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSpec {
    /// Function name, unique per account.
    pub name: String,

    /// Function source code.
    pub function_code: Option<String>,

    pub function_config: Option<FunctionConfig>,
}
