// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! kube-runtime controllers for every CloudFront resource kind.
//!
//! One controller runs per kind. Each reconciliation:
//!
//! 1. adds the finalizer before the first CloudFront call
//! 2. runs [`reconcile_resource`] (or [`reconcile_function`] for functions)
//! 3. writes the resulting status back in a single patch
//! 4. removes the finalizer once the CloudFront resource is deleted
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cloudfront_controller::context::Context;
//! use cloudfront_controller::controller::{run_controller, run_function_controller};
//! use cloudfront_controller::crd::{CachePolicy, Distribution};
//!
//! let ctx = Arc::new(Context::new(client, Arc::new(sdk_client)));
//! tokio::try_join!(
//!     run_controller::<Distribution, _>(ctx.clone()),
//!     run_controller::<CachePolicy, _>(ctx.clone()),
//!     run_function_controller(ctx),
//! )?;
//! ```

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use futures::StreamExt;
use kube::runtime::controller::Action;
use kube::runtime::watcher::Config;
use kube::runtime::Controller;
use kube::{Api, Client, ResourceExt};
use tracing::{debug, error, info, warn};

use crate::cloudfront::{FunctionPublishApi, ResourceApi, TaggingApi};
use crate::context::Context;
use crate::crd::{Function, FunctionSpec};
use crate::errors::Error;
use crate::metrics::{
    record_reconciliation_error, record_reconciliation_requeue, record_reconciliation_success,
};
use crate::reconcilers::finalizers::{ensure_finalizer, finalizer_name, has_finalizer, remove_finalizer};
use crate::reconcilers::function::reconcile_function;
use crate::reconcilers::status::{set_error_condition, StatusUpdater};
use crate::reconcilers::{reconcile_resource, requeue_action, ManagedResource, ReconcileOutcome};

/// Run the controller for resources of kind `K`.
///
/// # Errors
///
/// Returns an error if the controller cannot be started.
pub async fn run_controller<K, A>(ctx: Arc<Context<A>>) -> Result<()>
where
    K: ManagedResource,
    A: ResourceApi<K::Config> + TaggingApi + ?Sized + 'static,
{
    info!("Starting {} controller", K::KIND);

    let api = Api::<K>::all(ctx.client.clone());

    Controller::new(api, Config::default())
        .run(reconcile_wrapper::<K, A>, error_policy::<K, A>, ctx)
        .for_each(|_| futures::future::ready(()))
        .await;

    Ok(())
}

/// Run the `Function` controller, which also publishes functions.
///
/// # Errors
///
/// Returns an error if the controller cannot be started.
pub async fn run_function_controller<A>(ctx: Arc<Context<A>>) -> Result<()>
where
    A: ResourceApi<FunctionSpec> + TaggingApi + FunctionPublishApi + ?Sized + 'static,
{
    info!("Starting {} controller", <Function as ManagedResource>::KIND);

    let api = Api::<Function>::all(ctx.client.clone());

    Controller::new(api, Config::default())
        .run(function_reconcile_wrapper::<A>, error_policy::<Function, A>, ctx)
        .for_each(|_| futures::future::ready(()))
        .await;

    Ok(())
}

async fn reconcile_wrapper<K, A>(resource: Arc<K>, ctx: Arc<Context<A>>) -> Result<Action, Error>
where
    K: ManagedResource,
    A: ResourceApi<K::Config> + TaggingApi + ?Sized + 'static,
{
    let start = Instant::now();
    if !prepare_finalizer(&ctx.client, &*resource).await? {
        return Ok(Action::await_change());
    }

    let result = reconcile_resource(&*ctx.cloudfront, &*resource).await;
    complete(&ctx.client, &*resource, result, start).await
}

async fn function_reconcile_wrapper<A>(
    function: Arc<Function>,
    ctx: Arc<Context<A>>,
) -> Result<Action, Error>
where
    A: ResourceApi<FunctionSpec> + TaggingApi + FunctionPublishApi + ?Sized + 'static,
{
    let start = Instant::now();
    if !prepare_finalizer(&ctx.client, &*function).await? {
        return Ok(Action::await_change());
    }

    let result = reconcile_function(&*ctx.cloudfront, &*function).await;
    complete(&ctx.client, &*function, result, start).await
}

/// Adds the finalizer to live resources.
///
/// Returns `false` for a resource being deleted that no longer carries the
/// finalizer: there is nothing left to clean up.
async fn prepare_finalizer<K: ManagedResource>(client: &Client, resource: &K) -> Result<bool, Error> {
    let finalizer = finalizer_name(K::KIND);

    if resource.meta().deletion_timestamp.is_some() {
        return Ok(has_finalizer(resource, &finalizer));
    }
    ensure_finalizer(client, resource, &finalizer).await?;
    Ok(true)
}

/// Writes the outcome of a reconciliation back and picks the next action.
async fn complete<K: ManagedResource>(
    client: &Client,
    resource: &K,
    result: Result<ReconcileOutcome, Error>,
    start: Instant,
) -> Result<Action, Error> {
    let namespace = resource.namespace().unwrap_or_default();
    let name = resource.name_any();

    match result {
        Ok(ReconcileOutcome::Deleted) => {
            remove_finalizer(client, resource, &finalizer_name(K::KIND)).await?;
            record_reconciliation_success(K::KIND, start.elapsed());
            info!(
                kind = K::KIND,
                namespace = %namespace,
                name = %name,
                "Successfully deleted"
            );
            Ok(Action::await_change())
        }
        Ok(outcome) => {
            if let Some(status) = outcome.status() {
                let mut updater = StatusUpdater::new(resource, resource.resource_status());
                updater.set_status(status.clone());
                updater.apply(client).await?;
            }
            record_reconciliation_success(K::KIND, start.elapsed());
            info!(
                kind = K::KIND,
                namespace = %namespace,
                name = %name,
                outcome = outcome.label(),
                "Successfully reconciled"
            );
            Ok(outcome.requeue_action())
        }
        Err(e @ Error::RequeueNeededAfter { .. }) => {
            info!(
                kind = K::KIND,
                namespace = %namespace,
                name = %name,
                reason = %e,
                retry_after = ?e.requeue_after(),
                "Reconciliation deferred"
            );
            record_reconciliation_requeue(K::KIND, e.metric_label());
            write_error_status(client, resource, &e).await;
            Ok(requeue_action(&e))
        }
        Err(e) => {
            error!(
                kind = K::KIND,
                namespace = %namespace,
                name = %name,
                error = %e,
                terminal = e.is_terminal(),
                "Failed to reconcile"
            );
            record_reconciliation_error(K::KIND, start.elapsed());
            write_error_status(client, resource, &e).await;
            Err(e)
        }
    }
}

async fn write_error_status<K: ManagedResource>(client: &Client, resource: &K, error: &Error) {
    let mut updater = StatusUpdater::new(resource, resource.resource_status());
    set_error_condition(updater.status_mut(), error);

    if let Err(e) = updater.apply(client).await {
        warn!(
            kind = K::KIND,
            name = %resource.name_any(),
            error = %e,
            "Failed to record reconciliation error in status"
        );
    }
}

/// Error policy for all controllers.
#[allow(clippy::needless_pass_by_value)] // Signature required by kube::runtime::Controller
fn error_policy<K, A>(resource: Arc<K>, err: &Error, _ctx: Arc<Context<A>>) -> Action
where
    K: ManagedResource,
    A: ?Sized,
{
    let action = requeue_action(err);
    debug!(
        kind = K::KIND,
        name = %resource.name_any(),
        error = %err,
        action = ?action,
        "Requeueing after error"
    );
    action
}
