// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `ResponseHeadersPolicy` reconciliation.

use crate::constants::KIND_RESPONSE_HEADERS_POLICY;
use crate::crd::{ResourceStatus, ResponseHeadersPolicy, ResponseHeadersPolicyConfig};
use crate::reconcilers::{ManagedResource, Operations};

impl ManagedResource for ResponseHeadersPolicy {
    type Config = ResponseHeadersPolicyConfig;

    const KIND: &'static str = KIND_RESPONSE_HEADERS_POLICY;
    const CONFIG_FIELD: &'static str = "spec.responseHeadersPolicyConfig";
    const OPERATIONS: Operations = Operations {
        create: "CreateResponseHeadersPolicy",
        describe: "GetResponseHeadersPolicy",
        update: "UpdateResponseHeadersPolicy",
        delete: "DeleteResponseHeadersPolicy",
    };

    fn config(&self) -> Option<&ResponseHeadersPolicyConfig> {
        Some(&self.spec.response_headers_policy_config)
    }

    fn resource_status(&self) -> Option<&ResourceStatus> {
        self.status.as_ref()
    }
}
