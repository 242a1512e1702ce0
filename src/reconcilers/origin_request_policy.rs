// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `OriginRequestPolicy` reconciliation.

use crate::constants::KIND_ORIGIN_REQUEST_POLICY;
use crate::crd::{OriginRequestPolicy, OriginRequestPolicyConfig, ResourceStatus};
use crate::reconcilers::{ManagedResource, Operations};

impl ManagedResource for OriginRequestPolicy {
    type Config = OriginRequestPolicyConfig;

    const KIND: &'static str = KIND_ORIGIN_REQUEST_POLICY;
    const CONFIG_FIELD: &'static str = "spec.originRequestPolicyConfig";
    const OPERATIONS: Operations = Operations {
        create: "CreateOriginRequestPolicy",
        describe: "GetOriginRequestPolicy",
        update: "UpdateOriginRequestPolicy",
        delete: "DeleteOriginRequestPolicy",
    };

    fn config(&self) -> Option<&OriginRequestPolicyConfig> {
        Some(&self.spec.origin_request_policy_config)
    }

    fn resource_status(&self) -> Option<&ResourceStatus> {
        self.status.as_ref()
    }
}
