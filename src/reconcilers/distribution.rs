// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `Distribution` reconciliation.
//!
//! Distributions differ from the other kinds in three ways:
//!
//! - updates and deletes wait until the distribution is `Deployed`
//! - a distribution must be disabled, and the change deployed, before
//!   CloudFront accepts its deletion
//! - every create carries a unique caller reference

use crate::constants::KIND_DISTRIBUTION;
use crate::crd::{Distribution, DistributionConfig, ResourceStatus, Tag};
use crate::idempotency::current_idempotency_token;
use crate::reconcilers::{ManagedResource, Operations};

impl ManagedResource for Distribution {
    type Config = DistributionConfig;

    const KIND: &'static str = KIND_DISTRIBUTION;
    const CONFIG_FIELD: &'static str = "spec.distributionConfig";
    const OPERATIONS: Operations = Operations {
        create: "CreateDistributionWithTags",
        describe: "GetDistribution",
        update: "UpdateDistribution",
        delete: "DeleteDistribution",
    };
    const STATUS_GATED: bool = true;
    const TAGGABLE: bool = true;

    fn config(&self) -> Option<&DistributionConfig> {
        self.spec.distribution_config.as_ref()
    }

    fn resource_status(&self) -> Option<&ResourceStatus> {
        self.status.as_ref()
    }

    fn tags(&self) -> Option<&[Tag]> {
        self.spec.tags.as_deref()
    }

    fn prepare_create(desired: &mut DistributionConfig) {
        if desired.caller_reference.is_none() {
            desired.caller_reference = Some(current_idempotency_token());
        }
    }

    fn prepare_update(desired: &mut DistributionConfig, latest: &DistributionConfig) {
        if desired.caller_reference.is_none() {
            desired.caller_reference.clone_from(&latest.caller_reference);
        }
    }

    fn disabled_for_delete(latest: &DistributionConfig) -> Option<DistributionConfig> {
        disabled_config(latest)
    }
}

/// The configuration to send to disable `latest`, or `None` if it is
/// already disabled.
#[must_use]
pub fn disabled_config(latest: &DistributionConfig) -> Option<DistributionConfig> {
    if latest.enabled == Some(false) {
        return None;
    }
    Some(DistributionConfig {
        enabled: Some(false),
        ..latest.clone()
    })
}

#[cfg(test)]
#[path = "distribution_tests.rs"]
mod distribution_tests;
