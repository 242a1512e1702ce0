// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `CachePolicy` reconciliation.

use crate::constants::KIND_CACHE_POLICY;
use crate::crd::{CachePolicy, CachePolicyConfig, ResourceStatus};
use crate::reconcilers::{ManagedResource, Operations};

impl ManagedResource for CachePolicy {
    type Config = CachePolicyConfig;

    const KIND: &'static str = KIND_CACHE_POLICY;
    const CONFIG_FIELD: &'static str = "spec.cachePolicyConfig";
    const OPERATIONS: Operations = Operations {
        create: "CreateCachePolicy",
        describe: "GetCachePolicy",
        update: "UpdateCachePolicy",
        delete: "DeleteCachePolicy",
    };

    fn config(&self) -> Option<&CachePolicyConfig> {
        Some(&self.spec.cache_policy_config)
    }

    fn resource_status(&self) -> Option<&ResourceStatus> {
        self.status.as_ref()
    }
}
