// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `VpcOrigin` reconciliation.
//!
//! VPC origins report a propagation status but are not status-gated: updates
//! are sent while the origin is still `Deploying`.

use crate::constants::KIND_VPC_ORIGIN;
use crate::crd::{ResourceStatus, Tag, VpcOrigin, VpcOriginEndpointConfig};
use crate::reconcilers::{ManagedResource, Operations};

impl ManagedResource for VpcOrigin {
    type Config = VpcOriginEndpointConfig;

    const KIND: &'static str = KIND_VPC_ORIGIN;
    const CONFIG_FIELD: &'static str = "spec.vpcOriginEndpointConfig";
    const OPERATIONS: Operations = Operations {
        create: "CreateVpcOrigin",
        describe: "GetVpcOrigin",
        update: "UpdateVpcOrigin",
        delete: "DeleteVpcOrigin",
    };
    const TAGGABLE: bool = true;

    fn config(&self) -> Option<&VpcOriginEndpointConfig> {
        Some(&self.spec.vpc_origin_endpoint_config)
    }

    fn resource_status(&self) -> Option<&ResourceStatus> {
        self.status.as_ref()
    }

    fn tags(&self) -> Option<&[Tag]> {
        self.spec.tags.as_deref()
    }
}
