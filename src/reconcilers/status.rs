// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Status helpers for CloudFront custom resources.
//!
//! This module provides utility functions for creating and managing Kubernetes
//! status conditions following the standard conventions, and for building the
//! [`ResourceStatus`] of a custom resource from what CloudFront reports.
//!
//! # Condition Format
//!
//! Kubernetes conditions follow a standard format:
//! - `type`: The aspect of the resource being reported (`ACK.ResourceSynced`)
//! - `status`: "True", "False", or "Unknown"
//! - `reason`: A programmatic identifier (CamelCase)
//! - `message`: A human-readable explanation
//! - `lastTransitionTime`: RFC3339 timestamp when the condition changed
//!
//! # Example
//!
//! ```rust,no_run
//! use cloudfront_controller::reconcilers::status::create_condition;
//!
//! let condition = create_condition(
//!     "ACK.ResourceSynced",
//!     "True",
//!     "Synced",
//!     "Distribution is in sync with CloudFront",
//! );
//! ```

use chrono::Utc;
use kube::api::Patch;
use kube::core::NamespaceResourceScope;
use kube::{api::PatchParams, Api, Client, Resource, ResourceExt};
use serde_json::json;
use tracing::debug;

use crate::cloudfront::RemoteResource;
use crate::constants::{CONDITION_TYPE_SYNCED, CONDITION_TYPE_TERMINAL, STATUS_DEPLOYED};
use crate::crd::{Condition, ResourceMetadata, ResourceStatus};
use crate::errors::Error;
use crate::reconcilers::guard::PropagationState;
use crate::reconcilers::retry::{default_backoff, retry_api_call};
use crate::status_reasons::{REASON_PROPAGATING, REASON_SYNCED};

/// Create a new Kubernetes condition with the current timestamp.
///
/// # Example
///
/// ```rust,no_run
/// # use cloudfront_controller::reconcilers::status::create_condition;
/// let condition = create_condition(
///     "ACK.ResourceSynced",
///     "False",
///     "Propagating",
///     "Distribution in 'InProgress' state",
/// );
/// assert_eq!(condition.status, "False");
/// ```
#[must_use]
pub fn create_condition(
    condition_type: &str,
    status: &str,
    reason: &str,
    message: &str,
) -> Condition {
    Condition {
        r#type: condition_type.to_string(),
        status: status.to_string(),
        reason: Some(reason.to_string()),
        message: Some(message.to_string()),
        last_transition_time: Some(Utc::now().to_rfc3339()),
    }
}

/// Find a condition by type.
#[must_use]
pub fn find_condition<'a>(
    conditions: &'a [Condition],
    condition_type: &str,
) -> Option<&'a Condition> {
    conditions.iter().find(|c| c.r#type == condition_type)
}

/// Set a condition in a list, creating it if missing.
///
/// `lastTransitionTime` is preserved when the status value does not change.
pub fn update_condition_in_memory(
    conditions: &mut Vec<Condition>,
    condition_type: &str,
    status: &str,
    reason: &str,
    message: &str,
) {
    if let Some(existing) = conditions.iter_mut().find(|c| c.r#type == condition_type) {
        let last_transition_time = if existing.status == status {
            existing
                .last_transition_time
                .clone()
                .unwrap_or_else(|| Utc::now().to_rfc3339())
        } else {
            Utc::now().to_rfc3339()
        };

        existing.status = status.to_string();
        existing.reason = Some(reason.to_string());
        existing.message = Some(message.to_string());
        existing.last_transition_time = Some(last_transition_time);
    } else {
        conditions.push(create_condition(condition_type, status, reason, message));
    }
}

/// Compare two condition lists, ignoring `lastTransitionTime`.
#[must_use]
pub fn conditions_equal(current: &[Condition], new: &[Condition]) -> bool {
    if current.len() != new.len() {
        return false;
    }

    new.iter().all(|new_cond| {
        current.iter().any(|curr_cond| {
            curr_cond.r#type == new_cond.r#type
                && curr_cond.status == new_cond.status
                && curr_cond.reason == new_cond.reason
                && curr_cond.message == new_cond.message
        })
    })
}

/// Builds the status of a custom resource from what CloudFront reports.
///
/// Conditions are carried over from `previous`; fields CloudFront does not
/// report keep their previous value.
#[must_use]
pub fn status_from_remote<C>(
    remote: &RemoteResource<C>,
    previous: Option<&ResourceStatus>,
    observed_generation: Option<i64>,
) -> ResourceStatus {
    let previous = previous.cloned().unwrap_or_default();
    let metadata = previous.ack_resource_metadata.clone().unwrap_or_default();

    ResourceStatus {
        ack_resource_metadata: Some(ResourceMetadata {
            arn: remote.arn.clone().or(metadata.arn),
            ..metadata
        }),
        conditions: previous.conditions,
        id: Some(remote.id.clone()),
        e_tag: remote.e_tag.clone().or(previous.e_tag),
        status: remote.status.clone().or(previous.status),
        domain_name: remote.domain_name.clone().or(previous.domain_name),
        last_modified_time: remote
            .last_modified_time
            .clone()
            .or(previous.last_modified_time),
        stage: remote.stage.clone().or(previous.stage),
        observed_generation: observed_generation.or(previous.observed_generation),
    }
}

/// Sets `ACK.ResourceSynced` from the propagation status.
///
/// For `gated` kinds a reported status other than `Deployed` means the
/// resource is not synced yet. Other kinds are synced as soon as CloudFront
/// accepted the request. Any terminal condition is cleared.
pub fn set_synced_condition(status: &mut ResourceStatus, kind: &str, gated: bool) {
    let propagation = PropagationState::from_status(status.status.as_deref());

    match (gated, propagation, status.status.clone()) {
        (true, Some(PropagationState::Propagating), Some(reported)) => update_condition_in_memory(
            &mut status.conditions,
            CONDITION_TYPE_SYNCED,
            "False",
            REASON_PROPAGATING,
            &format!("{kind} in '{reported}' state, waiting for '{STATUS_DEPLOYED}'"),
        ),
        _ => update_condition_in_memory(
            &mut status.conditions,
            CONDITION_TYPE_SYNCED,
            "True",
            REASON_SYNCED,
            &format!("{kind} is in sync with CloudFront"),
        ),
    }
    status
        .conditions
        .retain(|c| c.r#type != CONDITION_TYPE_TERMINAL);
}

/// Records a failed reconciliation on the status.
///
/// Terminal errors also set `ACK.Terminal`.
pub fn set_error_condition(status: &mut ResourceStatus, error: &Error) {
    update_condition_in_memory(
        &mut status.conditions,
        CONDITION_TYPE_SYNCED,
        "False",
        error.status_reason(),
        &error.to_string(),
    );
    if error.is_terminal() {
        update_condition_in_memory(
            &mut status.conditions,
            CONDITION_TYPE_TERMINAL,
            "True",
            error.status_reason(),
            &error.to_string(),
        );
    }
}

/// Whether `ACK.ResourceSynced` is `True`.
#[must_use]
pub fn is_synced(status: &ResourceStatus) -> bool {
    find_condition(&status.conditions, CONDITION_TYPE_SYNCED).is_some_and(|c| c.status == "True")
}

/// Collects status changes and writes them in a single API call.
pub struct StatusUpdater<'a, K> {
    resource: &'a K,
    current: Option<ResourceStatus>,
    new_status: ResourceStatus,
}

impl<'a, K> StatusUpdater<'a, K>
where
    K: Resource<DynamicType = (), Scope = NamespaceResourceScope>
        + ResourceExt
        + Clone
        + std::fmt::Debug
        + serde::Serialize
        + for<'de> serde::Deserialize<'de>,
{
    /// Starts from the status currently stored on the resource.
    #[must_use]
    pub fn new(resource: &'a K, current: Option<&ResourceStatus>) -> Self {
        Self {
            resource,
            current: current.cloned(),
            new_status: current.cloned().unwrap_or_default(),
        }
    }

    /// Replaces the status that will be written.
    pub fn set_status(&mut self, status: ResourceStatus) {
        self.new_status = status;
    }

    /// Mutable access to the status that will be written.
    pub fn status_mut(&mut self) -> &mut ResourceStatus {
        &mut self.new_status
    }

    /// Whether the new status differs from the stored one.
    ///
    /// Condition timestamps are ignored.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        let Some(current) = self.current.as_ref() else {
            return true;
        };

        !conditions_equal(&current.conditions, &self.new_status.conditions)
            || ResourceStatus {
                conditions: Vec::new(),
                ..current.clone()
            } != ResourceStatus {
                conditions: Vec::new(),
                ..self.new_status.clone()
            }
    }

    /// Apply the collected status changes to Kubernetes (single atomic API call).
    ///
    /// Only makes the API call if there are actual changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the Kubernetes API call fails.
    pub async fn apply(&self, client: &Client) -> Result<(), Error> {
        let namespace = self.resource.namespace().unwrap_or_default();
        let name = self.resource.name_any();

        if !self.has_changes() {
            debug!(
                kind = %K::kind(&()),
                namespace = %namespace,
                name = %name,
                "Status unchanged, skipping update"
            );
            return Ok(());
        }

        let api: Api<K> = Api::namespaced(client.clone(), &namespace);
        let patch = json!({ "status": self.new_status });
        let (api, patch, name_ref) = (&api, &patch, name.as_str());

        retry_api_call(
            default_backoff(),
            move || async move {
                api.patch_status(name_ref, &PatchParams::default(), &Patch::Merge(patch))
                    .await
            },
            &format!("patch status of {} {namespace}/{name}", K::kind(&())),
        )
        .await?;

        debug!(
            kind = %K::kind(&()),
            namespace = %namespace,
            name = %name,
            conditions = self.new_status.conditions.len(),
            "Updated status"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
