// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Generic finalizer management for CloudFront custom resources.
//!
//! Every custom resource carries the finalizer
//! `finalizers.cloudfront.services.k8s.aws/<Kind>` from its first
//! reconciliation on. Kubernetes keeps the object around until the controller
//! has deleted the CloudFront resource and removed the finalizer.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudfront_controller::reconcilers::finalizers::{ensure_finalizer, finalizer_name};
//!
//! let finalizer = finalizer_name("Distribution");
//! ensure_finalizer(&client, &distribution, &finalizer).await?;
//! ```

use kube::api::{Patch, PatchParams};
use kube::core::NamespaceResourceScope;
use kube::{Api, Client, Resource, ResourceExt};
use serde_json::json;
use tracing::info;

use crate::constants::FINALIZER_PREFIX;
use crate::errors::Error;
use crate::reconcilers::retry::{default_backoff, retry_api_call};

/// Finalizer owned by the controller for resources of `kind`.
#[must_use]
pub fn finalizer_name(kind: &str) -> String {
    format!("{FINALIZER_PREFIX}{kind}")
}

/// Whether `finalizer` is present on the resource.
#[must_use]
pub fn has_finalizer<T: Resource>(resource: &T, finalizer: &str) -> bool {
    resource
        .meta()
        .finalizers
        .as_ref()
        .is_some_and(|f| f.iter().any(|existing| existing == finalizer))
}

/// Finalizer list with `finalizer` added, or `None` if it is already present.
#[must_use]
pub fn with_finalizer<T: Resource>(resource: &T, finalizer: &str) -> Option<Vec<String>> {
    if has_finalizer(resource, finalizer) {
        return None;
    }
    let mut finalizers = resource.meta().finalizers.clone().unwrap_or_default();
    finalizers.push(finalizer.to_string());
    Some(finalizers)
}

/// Finalizer list with `finalizer` removed, or `None` if it is absent.
#[must_use]
pub fn without_finalizer<T: Resource>(resource: &T, finalizer: &str) -> Option<Vec<String>> {
    if !has_finalizer(resource, finalizer) {
        return None;
    }
    let mut finalizers = resource.meta().finalizers.clone().unwrap_or_default();
    finalizers.retain(|f| f != finalizer);
    Some(finalizers)
}

async fn patch_finalizers<T>(
    client: &Client,
    resource: &T,
    finalizers: Vec<String>,
) -> Result<(), Error>
where
    T: Resource<DynamicType = (), Scope = NamespaceResourceScope>
        + ResourceExt
        + Clone
        + std::fmt::Debug
        + serde::Serialize
        + for<'de> serde::Deserialize<'de>,
{
    let namespace = resource.namespace().unwrap_or_default();
    let name = resource.name_any();
    let api: Api<T> = Api::namespaced(client.clone(), &namespace);
    let patch = json!({ "metadata": { "finalizers": finalizers } });
    let patch = &patch;
    let api = &api;
    let name_ref = name.as_str();

    retry_api_call(
        default_backoff(),
        move || async move {
            api.patch(name_ref, &PatchParams::default(), &Patch::Merge(patch))
                .await
        },
        &format!("patch finalizers of {} {namespace}/{name}", T::kind(&())),
    )
    .await?;
    Ok(())
}

/// Add a finalizer to a resource if not already present.
///
/// The operation is idempotent: calling it again once the finalizer is present
/// makes no API call.
///
/// # Errors
///
/// Returns an error if the API patch operation fails.
pub async fn ensure_finalizer<T>(client: &Client, resource: &T, finalizer: &str) -> Result<(), Error>
where
    T: Resource<DynamicType = (), Scope = NamespaceResourceScope>
        + ResourceExt
        + Clone
        + std::fmt::Debug
        + serde::Serialize
        + for<'de> serde::Deserialize<'de>,
{
    if let Some(finalizers) = with_finalizer(resource, finalizer) {
        patch_finalizers(client, resource, finalizers).await?;
        info!(
            finalizer = finalizer,
            namespace = ?resource.namespace(),
            name = %resource.name_any(),
            kind = %T::kind(&()),
            "Added finalizer"
        );
    }
    Ok(())
}

/// Remove a finalizer from a resource.
///
/// Called once the CloudFront resource is gone. The operation is idempotent.
///
/// # Errors
///
/// Returns an error if the API patch operation fails.
pub async fn remove_finalizer<T>(client: &Client, resource: &T, finalizer: &str) -> Result<(), Error>
where
    T: Resource<DynamicType = (), Scope = NamespaceResourceScope>
        + ResourceExt
        + Clone
        + std::fmt::Debug
        + serde::Serialize
        + for<'de> serde::Deserialize<'de>,
{
    if let Some(finalizers) = without_finalizer(resource, finalizer) {
        patch_finalizers(client, resource, finalizers).await?;
        info!(
            finalizer = finalizer,
            namespace = ?resource.namespace(),
            name = %resource.name_any(),
            kind = %T::kind(&()),
            "Removed finalizer"
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "finalizers_tests.rs"]
mod finalizers_tests;
