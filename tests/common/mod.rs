// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! In-memory CloudFront used by the integration tests.
//!
//! Resources are stored as JSON so one fake serves every configuration shape.
//! Like CloudFront, it rejects requests whose quantities disagree with their
//! items, updates and deletes with a stale ETag, and the deletion of an
//! enabled or propagating distribution.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cloudfront_controller::cloudfront::{
    ApiError, FunctionPublishApi, RemoteResource, ResourceApi, TaggingApi,
};
use cloudfront_controller::crd::{
    CachePolicyConfig, DistributionConfig, FunctionSpec, OriginRequestPolicyConfig,
    ResponseHeadersPolicyConfig, Tag, VpcOriginEndpointConfig,
};
use cloudfront_controller::quantities::{inconsistent_quantities, CountedTree};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

/// A configuration shape the fake can store.
pub trait FakeShape:
    CountedTree + Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Resource type in the ARN, e.g. `distribution`.
    const RESOURCE_TYPE: &'static str;

    /// Identifier of a new resource.
    fn id(&self, generated: String) -> String {
        generated
    }

    /// Status reported after a create or update.
    fn status_after_write() -> Option<&'static str> {
        None
    }

    fn stage_after_write() -> Option<&'static str> {
        None
    }

    fn domain_name(_id: &str) -> Option<String> {
        None
    }

    fn check_delete(_stored: &Stored) -> Result<(), ApiError> {
        Ok(())
    }
}

impl FakeShape for DistributionConfig {
    const RESOURCE_TYPE: &'static str = "distribution";

    fn status_after_write() -> Option<&'static str> {
        Some("InProgress")
    }

    fn domain_name(id: &str) -> Option<String> {
        Some(format!("{}.cloudfront.net", id.to_lowercase()))
    }

    fn check_delete(stored: &Stored) -> Result<(), ApiError> {
        if stored.config["enabled"] == json!(true) {
            return Err(ApiError::Other {
                code: "DistributionNotDisabled".to_string(),
                message: "The distribution you are trying to delete has not been disabled."
                    .to_string(),
            });
        }
        if stored.status.as_deref() != Some("Deployed") {
            return Err(ApiError::Other {
                code: "DistributionNotDisabled".to_string(),
                message: "The distribution is still propagating.".to_string(),
            });
        }
        Ok(())
    }
}

impl FakeShape for CachePolicyConfig {
    const RESOURCE_TYPE: &'static str = "cache-policy";
}

impl FakeShape for OriginRequestPolicyConfig {
    const RESOURCE_TYPE: &'static str = "origin-request-policy";
}

impl FakeShape for ResponseHeadersPolicyConfig {
    const RESOURCE_TYPE: &'static str = "response-headers-policy";
}

impl FakeShape for VpcOriginEndpointConfig {
    const RESOURCE_TYPE: &'static str = "vpcorigin";

    fn status_after_write() -> Option<&'static str> {
        Some("Deploying")
    }
}

impl FakeShape for FunctionSpec {
    const RESOURCE_TYPE: &'static str = "function";

    fn id(&self, _generated: String) -> String {
        self.name.clone()
    }

    fn status_after_write() -> Option<&'static str> {
        Some("UNPUBLISHED")
    }

    fn stage_after_write() -> Option<&'static str> {
        Some("DEVELOPMENT")
    }
}

/// A resource as the fake stores it.
#[derive(Clone, Debug)]
pub struct Stored {
    pub arn: String,
    pub version: u32,
    pub status: Option<String>,
    pub stage: Option<String>,
    pub domain_name: Option<String>,
    pub config: Value,
    pub tags: Vec<Tag>,
}

impl Stored {
    pub fn e_tag(&self) -> String {
        format!("ETAG{}", self.version)
    }
}

#[derive(Default)]
struct FakeState {
    resources: BTreeMap<String, Stored>,
    calls: Vec<String>,
    next_id: u32,
    throttled_calls: u32,
}

#[derive(Default)]
pub struct FakeCloudFront {
    state: Mutex<FakeState>,
}

impl FakeCloudFront {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received, e.g. `update:E1`.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of calls to `operation`, e.g. `update`.
    pub fn count(&self, operation: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.split(':').next() == Some(operation))
            .count()
    }

    pub fn stored(&self, id: &str) -> Option<Stored> {
        self.state.lock().unwrap().resources.get(id).cloned()
    }

    pub fn config<C: DeserializeOwned>(&self, id: &str) -> Option<C> {
        self.stored(id)
            .map(|stored| serde_json::from_value(stored.config).unwrap())
    }

    pub fn tags(&self, id: &str) -> Vec<Tag> {
        self.stored(id).map(|stored| stored.tags).unwrap_or_default()
    }

    /// Stores a resource as if it had been created earlier. Returns its id.
    pub fn seed<C: FakeShape>(&self, config: &C, status: Option<&str>, tags: Vec<Tag>) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = config.id(format!("E{:012}", state.next_id));
        state.resources.insert(
            id.clone(),
            Stored {
                arn: arn(C::RESOURCE_TYPE, &id),
                version: 1,
                status: status.map(str::to_string),
                stage: C::stage_after_write().map(str::to_string),
                domain_name: C::domain_name(&id),
                config: serde_json::to_value(config).unwrap(),
                tags,
            },
        );
        id
    }

    /// Changes the reported status, e.g. once propagation finished.
    pub fn set_status(&self, id: &str, status: &str) {
        if let Some(stored) = self.state.lock().unwrap().resources.get_mut(id) {
            stored.status = Some(status.to_string());
        }
    }

    /// The next `calls` requests fail with a throttling error.
    pub fn throttle_next(&self, calls: u32) {
        self.state.lock().unwrap().throttled_calls = calls;
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.throttled_calls > 0 {
            state.throttled_calls -= 1;
            return Err(ApiError::Throttling {
                message: "Rate exceeded".to_string(),
            });
        }
        Ok(())
    }

    fn check_if_match(stored: &Stored, id: &str, if_match: Option<&str>) -> Result<(), ApiError> {
        if if_match == Some(stored.e_tag().as_str()) {
            Ok(())
        } else {
            Err(ApiError::PreconditionFailed { id: id.to_string() })
        }
    }
}

fn arn(resource_type: &str, id: &str) -> String {
    format!("arn:aws:cloudfront::123456789012:{resource_type}/{id}")
}

fn check_quantities<C: CountedTree>(config: &C) -> Result<(), ApiError> {
    match inconsistent_quantities(Some(config)) {
        0 => Ok(()),
        n => Err(ApiError::InconsistentQuantities {
            message: format!("{n} quantities do not match the number of items"),
        }),
    }
}

fn remote<C: DeserializeOwned>(id: &str, stored: &Stored) -> Result<RemoteResource<C>, ApiError> {
    let config = serde_json::from_value(stored.config.clone()).map_err(|e| ApiError::Other {
        code: "SerializationException".to_string(),
        message: e.to_string(),
    })?;

    Ok(RemoteResource {
        id: id.to_string(),
        arn: Some(stored.arn.clone()),
        e_tag: Some(stored.e_tag()),
        status: stored.status.clone(),
        domain_name: stored.domain_name.clone(),
        last_modified_time: Some("2025-01-01T00:00:00Z".to_string()),
        stage: stored.stage.clone(),
        config,
    })
}

#[async_trait]
impl<C: FakeShape> ResourceApi<C> for FakeCloudFront {
    async fn create(
        &self,
        config: &C,
        tags: Option<&[Tag]>,
    ) -> Result<RemoteResource<C>, ApiError> {
        self.record(format!("create:{}", C::RESOURCE_TYPE))?;
        check_quantities(config)?;

        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = config.id(format!("E{:012}", state.next_id));
        let stored = Stored {
            arn: arn(C::RESOURCE_TYPE, &id),
            version: 1,
            status: C::status_after_write().map(str::to_string),
            stage: C::stage_after_write().map(str::to_string),
            domain_name: C::domain_name(&id),
            config: serde_json::to_value(config).unwrap(),
            tags: tags.map(<[Tag]>::to_vec).unwrap_or_default(),
        };
        state.resources.insert(id.clone(), stored.clone());
        remote(&id, &stored)
    }

    async fn describe(&self, id: &str) -> Result<Option<RemoteResource<C>>, ApiError> {
        self.record(format!("describe:{id}"))?;

        let state = self.state.lock().unwrap();
        state
            .resources
            .get(id)
            .map(|stored| remote(id, stored))
            .transpose()
    }

    async fn update(
        &self,
        id: &str,
        if_match: Option<&str>,
        config: &C,
    ) -> Result<RemoteResource<C>, ApiError> {
        self.record(format!("update:{id}"))?;
        check_quantities(config)?;

        let mut state = self.state.lock().unwrap();
        let stored = state
            .resources
            .get_mut(id)
            .ok_or_else(|| ApiError::NotFound { id: id.to_string() })?;
        Self::check_if_match(stored, id, if_match)?;

        stored.version += 1;
        stored.config = serde_json::to_value(config).unwrap();
        stored.status = C::status_after_write().map(str::to_string);
        stored.stage = C::stage_after_write().map(str::to_string);
        remote(id, stored)
    }

    async fn delete(&self, id: &str, if_match: Option<&str>) -> Result<(), ApiError> {
        self.record(format!("delete:{id}"))?;

        let mut state = self.state.lock().unwrap();
        let stored = state
            .resources
            .get(id)
            .ok_or_else(|| ApiError::NotFound { id: id.to_string() })?;
        Self::check_if_match(stored, id, if_match)?;
        C::check_delete(stored)?;

        state.resources.remove(id);
        Ok(())
    }
}

#[async_trait]
impl TaggingApi for FakeCloudFront {
    async fn list_tags(&self, arn: &str) -> Result<Vec<Tag>, ApiError> {
        self.record(format!("list_tags:{arn}"))?;

        let state = self.state.lock().unwrap();
        state
            .resources
            .values()
            .find(|stored| stored.arn == arn)
            .map(|stored| stored.tags.clone())
            .ok_or_else(|| ApiError::NotFound { id: arn.to_string() })
    }

    async fn tag_resource(&self, arn: &str, tags: &[Tag]) -> Result<(), ApiError> {
        self.record(format!("tag:{arn}"))?;

        let mut state = self.state.lock().unwrap();
        let stored = state
            .resources
            .values_mut()
            .find(|stored| stored.arn == arn)
            .ok_or_else(|| ApiError::NotFound { id: arn.to_string() })?;
        for tag in tags {
            stored.tags.retain(|existing| existing.key != tag.key);
            stored.tags.push(tag.clone());
        }
        Ok(())
    }

    async fn untag_resource(&self, arn: &str, keys: &[String]) -> Result<(), ApiError> {
        self.record(format!("untag:{arn}"))?;

        let mut state = self.state.lock().unwrap();
        let stored = state
            .resources
            .values_mut()
            .find(|stored| stored.arn == arn)
            .ok_or_else(|| ApiError::NotFound { id: arn.to_string() })?;
        stored
            .tags
            .retain(|tag| !tag.key.as_ref().is_some_and(|key| keys.contains(key)));
        Ok(())
    }
}

#[async_trait]
impl FunctionPublishApi for FakeCloudFront {
    async fn publish_function(
        &self,
        name: &str,
        if_match: Option<&str>,
    ) -> Result<RemoteResource<FunctionSpec>, ApiError> {
        self.record(format!("publish:{name}"))?;

        let mut state = self.state.lock().unwrap();
        let stored = state
            .resources
            .get_mut(name)
            .ok_or_else(|| ApiError::NotFound { id: name.to_string() })?;
        Self::check_if_match(stored, name, if_match)?;

        stored.version += 1;
        stored.stage = Some("LIVE".to_string());
        stored.status = Some("UNASSOCIATED".to_string());
        remote(name, stored)
    }
}

/// Metadata of a live custom resource in the `default` namespace.
pub fn metadata(name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some("default".to_string()),
        generation: Some(1),
        ..Default::default()
    }
}

/// Metadata of a custom resource being deleted.
pub fn deleting_metadata(name: &str) -> ObjectMeta {
    serde_json::from_value(json!({
        "name": name,
        "namespace": "default",
        "generation": 2,
        "deletionTimestamp": "2025-01-01T00:00:00Z",
    }))
    .unwrap()
}
