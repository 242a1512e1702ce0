// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # CloudFront Controller for Kubernetes
//!
//! A Kubernetes controller that manages AWS CloudFront resources through
//! Custom Resource Definitions (CRDs).
//!
//! ## Overview
//!
//! Distributions, cache policies, origin request policies, response headers
//! policies, VPC origins and functions are declared as custom resources. The
//! controller creates them in CloudFront, keeps them in sync with the custom
//! resource, and deletes them when the custom resource goes away.
//!
//! CloudFront represents most lists as a `{Quantity, Items}` pair and rejects
//! a request where the two disagree. Before every mutating call the
//! configuration is copied and every quantity is set to its item count, so
//! users only ever write the items.
//!
//! ## Modules
//!
//! - [`crd`] - Custom Resource Definition types for CloudFront resources
//! - [`quantities`] - Recursive list quantity normalization
//! - [`cloudfront`] - The CloudFront API seam
//! - [`reconcilers`] - Reconciliation logic for each resource kind
//! - [`controller`] - kube-runtime controllers wiring the reconcilers
//! - [`context`] - Shared context for the controllers
//! - [`metrics`] - Prometheus metrics
//! - [`logging`] - Tracing subscriber setup
//!
//! ## Example
//!
//! ```rust
//! use cloudfront_controller::crd::{CachePolicyConfig, CountedList,
//!     HeadersConfig, ParametersInCacheKeyAndForwardedToOrigin};
//! use cloudfront_controller::quantities::normalized;
//!
//! let config = CachePolicyConfig {
//!     name: Some("static-assets".to_string()),
//!     parameters_in_cache_key_and_forwarded_to_origin: Some(
//!         ParametersInCacheKeyAndForwardedToOrigin {
//!             headers_config: Some(HeadersConfig {
//!                 header_behavior: Some("whitelist".to_string()),
//!                 headers: Some(CountedList::new(vec![
//!                     "Origin".to_string(),
//!                     "Accept".to_string(),
//!                 ])),
//!             }),
//!             ..Default::default()
//!         },
//!     ),
//!     ..Default::default()
//! };
//!
//! let request = normalized(Some(&config)).unwrap();
//! let headers = request
//!     .parameters_in_cache_key_and_forwarded_to_origin
//!     .and_then(|p| p.headers_config)
//!     .and_then(|h| h.headers)
//!     .unwrap();
//! assert_eq!(headers.quantity, Some(2));
//! ```

pub mod cloudfront;
pub mod constants;
pub mod context;
pub mod controller;
pub mod crd;
pub mod errors;
pub mod idempotency;
pub mod logging;
pub mod metrics;
pub mod quantities;
pub mod reconcilers;
pub mod status_reasons;

#[cfg(test)]
mod crd_tests;
