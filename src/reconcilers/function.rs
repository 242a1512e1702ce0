// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `Function` reconciliation.
//!
//! Functions are created and updated in the `DEVELOPMENT` stage. When the
//! custom resource carries the `cloudfront.services.k8s.aws/auto-publish:
//! "true"` annotation, every create and update is followed by a publication
//! to `LIVE`.

use kube::ResourceExt;
use tracing::info;

use crate::cloudfront::{FunctionPublishApi, ResourceApi, TaggingApi};
use crate::constants::{AUTO_PUBLISH_ANNOTATION, AUTO_PUBLISH_ENABLED, KIND_FUNCTION};
use crate::crd::{Function, FunctionSpec, ResourceStatus};
use crate::errors::Error;
use crate::metrics::record_resource_change;
use crate::reconcilers::status::{set_synced_condition, status_from_remote};
use crate::reconcilers::{
    cloudfront_call, reconcile_resource, ManagedResource, Operations, ReconcileOutcome,
};

impl ManagedResource for Function {
    type Config = FunctionSpec;

    const KIND: &'static str = KIND_FUNCTION;
    const CONFIG_FIELD: &'static str = "spec";
    const OPERATIONS: Operations = Operations {
        create: "CreateFunction",
        describe: "DescribeFunction",
        update: "UpdateFunction",
        delete: "DeleteFunction",
    };

    fn config(&self) -> Option<&FunctionSpec> {
        Some(&self.spec)
    }

    fn resource_status(&self) -> Option<&ResourceStatus> {
        self.status.as_ref()
    }
}

/// Whether changes to the function are published automatically.
///
/// Only the exact value `"true"` enables it.
#[must_use]
pub fn auto_publish_enabled(function: &Function) -> bool {
    function
        .annotations()
        .get(AUTO_PUBLISH_ANNOTATION)
        .is_some_and(|value| value == AUTO_PUBLISH_ENABLED)
}

/// Reconciles a function and publishes it when auto-publish is enabled.
///
/// # Errors
///
/// Returns the errors of [`reconcile_resource`], and [`Error::Api`] when the
/// publication is rejected.
pub async fn reconcile_function<A>(api: &A, function: &Function) -> Result<ReconcileOutcome, Error>
where
    A: ResourceApi<FunctionSpec> + TaggingApi + FunctionPublishApi + ?Sized,
{
    let outcome = reconcile_resource(api, function).await?;
    if !auto_publish_enabled(function) {
        return Ok(outcome);
    }

    match outcome {
        ReconcileOutcome::Created(status) => Ok(ReconcileOutcome::Created(
            publish_function(api, function, status).await?,
        )),
        ReconcileOutcome::Updated(status) => Ok(ReconcileOutcome::Updated(
            publish_function(api, function, status).await?,
        )),
        other => Ok(other),
    }
}

async fn publish_function<A>(
    api: &A,
    function: &Function,
    status: ResourceStatus,
) -> Result<ResourceStatus, Error>
where
    A: FunctionPublishApi + ?Sized,
{
    let name = function.spec.name.as_str();
    let e_tag = status.e_tag.clone();
    let if_match = e_tag.as_deref();

    let published = cloudfront_call("PublishFunction", move || {
        api.publish_function(name, if_match)
    })
    .await?;

    info!(
        namespace = %function.namespace().unwrap_or_default(),
        name = %function.name_any(),
        function = %name,
        stage = ?published.stage,
        "Published CloudFront function"
    );
    record_resource_change(KIND_FUNCTION, "published");

    let mut status = status_from_remote(&published, Some(&status), status.observed_generation);
    set_synced_condition(&mut status, KIND_FUNCTION, false);
    Ok(status)
}

#[cfg(test)]
#[path = "function_tests.rs"]
mod function_tests;
