// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared context for all controllers.
//!
//! Every controller receives an `Arc<Context<A>>` holding the Kubernetes
//! client, used for finalizers and status, and the CloudFront client `A`.

use std::sync::Arc;

use kube::Client;

/// Shared context passed to all controllers.
pub struct Context<A: ?Sized> {
    /// Kubernetes client for API operations
    pub client: Client,

    /// CloudFront client, shared by every controller
    pub cloudfront: Arc<A>,
}

impl<A: ?Sized> Context<A> {
    #[must_use]
    pub fn new(client: Client, cloudfront: Arc<A>) -> Self {
        Self { client, cloudfront }
    }
}

impl<A: ?Sized> Clone for Context<A> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            cloudfront: Arc::clone(&self.cloudfront),
        }
    }
}
