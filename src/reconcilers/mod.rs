// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Reconciliation of CloudFront custom resources.
//!
//! Every resource kind goes through the same flow, [`reconcile_resource`],
//! driven by the [`ManagedResource`] trait each kind implements:
//!
//! 1. **Delete** - when the custom resource is being deleted, delete the
//!    CloudFront resource (distributions are disabled first)
//! 2. **Normalize** - copy the desired configuration and set every list
//!    quantity to its item count
//! 3. **Create** - when no CloudFront resource is recorded or it is gone
//! 4. **Update** - when a field set in the custom resource drifted
//! 5. **Tags** - make the tags of taggable kinds match the custom resource
//!
//! The result is a [`ReconcileOutcome`] carrying the new status; writing it
//! back and managing finalizers is the job of [`crate::controller`].
//!
//! # Per-kind reconcilers
//!
//! - [`distribution`] - status-gated, disabled before deletion, taggable
//! - [`cache_policy`], [`origin_request_policy`], [`response_headers_policy`]
//! - [`vpc_origin`] - taggable
//! - [`function`] - optional publication to the `LIVE` stage
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudfront_controller::reconcilers::reconcile_resource;
//!
//! let outcome = reconcile_resource(cloudfront.as_ref(), &cache_policy).await?;
//! println!("{}", outcome.label());
//! ```

pub mod cache_policy;
pub mod distribution;
pub mod drift;
pub mod finalizers;
pub mod function;
pub mod guard;
pub mod origin_request_policy;
pub mod response_headers_policy;
pub mod retry;
pub mod status;
pub mod tags;
pub mod vpc_origin;

use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;

use kube::core::NamespaceResourceScope;
use kube::runtime::controller::Action;
use kube::{Resource, ResourceExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::cloudfront::{ApiError, RemoteResource, ResourceApi, TaggingApi};
use crate::constants::{DEFAULT_REQUEUE_AFTER_SECS, RESYNC_PERIOD_SECS};
use crate::crd::{ResourceStatus, Tag};
use crate::errors::Error;
use crate::metrics::{record_api_call, record_resource_change};
use crate::quantities::{normalize_quantities, normalized, CountedTree};
use crate::reconcilers::drift::drifted_paths;
use crate::reconcilers::guard::ensure_can_modify;
use crate::reconcilers::retry::{cloudfront_backoff, retry_api_call};
use crate::reconcilers::status::{is_synced, set_synced_condition, status_from_remote};
use crate::reconcilers::tags::{create_request_tags, get_resource_tags, sync_resource_tags};

/// Sends one CloudFront request, retrying throttled and unavailable responses.
///
/// Every attempt outcome is recorded in the API call metrics.
pub(crate) async fn cloudfront_call<T, F, Fut>(operation: &'static str, call: F) -> Result<T, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let result = retry_api_call(cloudfront_backoff(), call, operation).await;

    match &result {
        Ok(_) => record_api_call(operation, "success"),
        Err(e) => record_api_call(operation, e.metric_label()),
    }
    result.map_err(|e| Error::api(operation, e))
}

/// CloudFront operation names of one resource kind, used in logs and metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operations {
    pub create: &'static str,
    pub describe: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

/// A custom resource backed by one CloudFront resource.
pub trait ManagedResource:
    Resource<DynamicType = (), Scope = NamespaceResourceScope>
    + Clone
    + Debug
    + DeserializeOwned
    + Serialize
    + Send
    + Sync
    + 'static
{
    /// The configuration tree sent to CloudFront.
    type Config: CountedTree + Clone + Debug + PartialEq + Serialize + Send + Sync + 'static;

    /// The resource kind, e.g. `Distribution`.
    const KIND: &'static str;

    /// Path of the configuration in the custom resource, for error messages.
    const CONFIG_FIELD: &'static str;

    const OPERATIONS: Operations;

    /// Updates and deletes wait for the `Deployed` status.
    const STATUS_GATED: bool = false;

    /// Tags are set on create and kept in sync afterwards.
    const TAGGABLE: bool = false;

    /// The desired configuration, `None` when the custom resource omits it.
    fn config(&self) -> Option<&Self::Config>;

    fn resource_status(&self) -> Option<&ResourceStatus>;

    /// The desired tags, `None` when unspecified.
    fn tags(&self) -> Option<&[Tag]> {
        None
    }

    /// Fills in request-only fields before a create.
    fn prepare_create(_desired: &mut Self::Config) {}

    /// Carries over fields CloudFront requires unchanged before an update.
    fn prepare_update(_desired: &mut Self::Config, _latest: &Self::Config) {}

    /// The configuration to send before the resource can be deleted, or
    /// `None` when it can be deleted as is.
    fn disabled_for_delete(_latest: &Self::Config) -> Option<Self::Config> {
        None
    }
}

/// What a reconciliation did.
#[derive(Clone, Debug, PartialEq)]
pub enum ReconcileOutcome {
    Created(ResourceStatus),
    Updated(ResourceStatus),
    InSync(ResourceStatus),
    /// The resource was disabled and is propagating before its deletion.
    Disabling(ResourceStatus),
    /// The CloudFront resource is gone; the finalizer can be removed.
    Deleted,
}

impl ReconcileOutcome {
    /// The status to write back, `None` once the resource is deleted.
    #[must_use]
    pub fn status(&self) -> Option<&ResourceStatus> {
        match self {
            Self::Created(status)
            | Self::Updated(status)
            | Self::InSync(status)
            | Self::Disabling(status) => Some(status),
            Self::Deleted => None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Updated(_) => "updated",
            Self::InSync(_) => "in_sync",
            Self::Disabling(_) => "disabling",
            Self::Deleted => "deleted",
        }
    }

    /// When to reconcile again.
    ///
    /// Propagating resources are checked again after the default delay,
    /// synced ones after the resync period.
    #[must_use]
    pub fn requeue_action(&self) -> Action {
        match self {
            Self::Deleted => Action::await_change(),
            Self::Disabling(_) => Action::requeue(Duration::from_secs(DEFAULT_REQUEUE_AFTER_SECS)),
            Self::Created(status) | Self::Updated(status) | Self::InSync(status) => {
                if is_synced(status) {
                    Action::requeue(Duration::from_secs(RESYNC_PERIOD_SECS))
                } else {
                    Action::requeue(Duration::from_secs(DEFAULT_REQUEUE_AFTER_SECS))
                }
            }
        }
    }
}

/// When to reconcile again after `error`.
#[must_use]
pub fn requeue_action(error: &Error) -> Action {
    Action::requeue(error.requeue_after())
}

/// Reads the latest state of `id`; `None` when CloudFront no longer has it.
async fn describe_latest<K, A>(api: &A, id: &str) -> Result<Option<RemoteResource<K::Config>>, Error>
where
    K: ManagedResource,
    A: ResourceApi<K::Config> + ?Sized,
{
    match cloudfront_call(K::OPERATIONS.describe, move || api.describe(id)).await {
        Ok(latest) => Ok(latest),
        Err(Error::Api {
            source: ApiError::NotFound { .. },
            ..
        }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Brings the CloudFront resource in line with the custom resource.
///
/// # Errors
///
/// Returns [`Error::MissingConfig`] when the custom resource has no
/// configuration, [`Error::RequeueNeededAfter`] while a status-gated resource
/// is propagating, and [`Error::Api`] when CloudFront rejects a request.
pub async fn reconcile_resource<K, A>(api: &A, resource: &K) -> Result<ReconcileOutcome, Error>
where
    K: ManagedResource,
    A: ResourceApi<K::Config> + TaggingApi + ?Sized,
{
    let namespace = resource.namespace().unwrap_or_default();
    let name = resource.name_any();
    let previous = resource.resource_status();
    let generation = resource.meta().generation;

    if resource.meta().deletion_timestamp.is_some() {
        return delete_resource(api, resource).await;
    }

    let Some(mut desired) = normalized(resource.config()) else {
        return Err(Error::MissingConfig {
            kind: K::KIND,
            name,
            field: K::CONFIG_FIELD,
        });
    };

    let latest = match previous.and_then(|s| s.id.as_deref()) {
        Some(id) => describe_latest::<K, A>(api, id).await?,
        None => None,
    };

    let outcome = match latest {
        None => {
            K::prepare_create(&mut desired);
            let tags = if K::TAGGABLE {
                create_request_tags(resource.tags())
            } else {
                None
            };
            let (desired, tags) = (&desired, tags.as_deref());

            let created =
                cloudfront_call(K::OPERATIONS.create, move || api.create(desired, tags)).await?;

            info!(
                kind = K::KIND,
                namespace = %namespace,
                name = %name,
                id = %created.id,
                "Created CloudFront resource"
            );
            record_resource_change(K::KIND, "created");
            ReconcileOutcome::Created(status_from_remote(&created, previous, generation))
        }
        Some(latest) => {
            K::prepare_update(&mut desired, &latest.config);

            let drifted = drifted_paths(&desired, &latest.config)?;
            if drifted.is_empty() {
                debug!(
                    kind = K::KIND,
                    namespace = %namespace,
                    name = %name,
                    "CloudFront resource in sync"
                );
                ReconcileOutcome::InSync(status_from_remote(&latest, previous, generation))
            } else {
                debug!(
                    kind = K::KIND,
                    namespace = %namespace,
                    name = %name,
                    fields = ?drifted,
                    "Configuration drifted"
                );
                if K::STATUS_GATED {
                    ensure_can_modify(K::KIND, latest.status.as_deref())?;
                }

                let (id, e_tag, desired) =
                    (latest.id.as_str(), latest.e_tag.as_deref(), &desired);
                let updated = cloudfront_call(K::OPERATIONS.update, move || {
                    api.update(id, e_tag, desired)
                })
                .await?;

                info!(
                    kind = K::KIND,
                    namespace = %namespace,
                    name = %name,
                    id = %updated.id,
                    fields = drifted.len(),
                    "Updated CloudFront resource"
                );
                record_resource_change(K::KIND, "updated");
                ReconcileOutcome::Updated(status_from_remote(&updated, previous, generation))
            }
        }
    };

    let outcome = sync_tags(api, resource, outcome).await?;
    Ok(with_synced_condition::<K>(outcome))
}

async fn sync_tags<K, A>(
    api: &A,
    resource: &K,
    outcome: ReconcileOutcome,
) -> Result<ReconcileOutcome, Error>
where
    K: ManagedResource,
    A: TaggingApi + ?Sized,
{
    if !K::TAGGABLE {
        return Ok(outcome);
    }
    let (Some(desired), Some(arn)) = (
        resource.tags(),
        outcome
            .status()
            .and_then(|s| s.ack_resource_metadata.as_ref())
            .and_then(|m| m.arn.clone()),
    ) else {
        return Ok(outcome);
    };

    let latest = get_resource_tags(api, &arn).await?;
    sync_resource_tags(api, &arn, desired, &latest).await?;
    Ok(outcome)
}

fn with_synced_condition<K: ManagedResource>(outcome: ReconcileOutcome) -> ReconcileOutcome {
    let mark = |mut status: ResourceStatus| {
        set_synced_condition(&mut status, K::KIND, K::STATUS_GATED);
        status
    };

    match outcome {
        ReconcileOutcome::Created(status) => ReconcileOutcome::Created(mark(status)),
        ReconcileOutcome::Updated(status) => ReconcileOutcome::Updated(mark(status)),
        ReconcileOutcome::InSync(status) => ReconcileOutcome::InSync(mark(status)),
        ReconcileOutcome::Disabling(status) => ReconcileOutcome::Disabling(mark(status)),
        ReconcileOutcome::Deleted => ReconcileOutcome::Deleted,
    }
}

async fn delete_resource<K, A>(api: &A, resource: &K) -> Result<ReconcileOutcome, Error>
where
    K: ManagedResource,
    A: ResourceApi<K::Config> + ?Sized,
{
    let namespace = resource.namespace().unwrap_or_default();
    let name = resource.name_any();
    let previous = resource.resource_status();

    let Some(id) = previous.and_then(|s| s.id.as_deref()) else {
        debug!(
            kind = K::KIND,
            namespace = %namespace,
            name = %name,
            "No CloudFront resource recorded, nothing to delete"
        );
        return Ok(ReconcileOutcome::Deleted);
    };

    let Some(latest) = describe_latest::<K, A>(api, id).await? else {
        info!(
            kind = K::KIND,
            namespace = %namespace,
            name = %name,
            id = %id,
            "CloudFront resource already gone"
        );
        return Ok(ReconcileOutcome::Deleted);
    };

    if K::STATUS_GATED {
        ensure_can_modify(K::KIND, latest.status.as_deref())?;
    }

    let (id, e_tag) = (latest.id.as_str(), latest.e_tag.as_deref());

    if let Some(mut disabled) = K::disabled_for_delete(&latest.config) {
        normalize_quantities(Some(&mut disabled));
        let disabled = &disabled;
        let updated =
            cloudfront_call(K::OPERATIONS.update, move || api.update(id, e_tag, disabled)).await?;

        info!(
            kind = K::KIND,
            namespace = %namespace,
            name = %name,
            id = %id,
            "Disabled CloudFront resource before deletion"
        );
        record_resource_change(K::KIND, "disabled");
        return Ok(with_synced_condition::<K>(ReconcileOutcome::Disabling(
            status_from_remote(&updated, previous, None),
        )));
    }

    match cloudfront_call(K::OPERATIONS.delete, move || api.delete(id, e_tag)).await {
        Ok(()) => {}
        Err(Error::Api {
            source: ApiError::NotFound { .. },
            ..
        }) => {}
        Err(e) => return Err(e),
    }

    info!(
        kind = K::KIND,
        namespace = %namespace,
        name = %name,
        id = %id,
        "Deleted CloudFront resource"
    );
    record_resource_change(K::KIND, "deleted");
    Ok(ReconcileOutcome::Deleted)
}

#[cfg(test)]
mod mod_tests;
