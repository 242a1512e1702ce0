// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tag synchronization for taggable CloudFront resources.
//!
//! Distributions and VPC origins accept tags in their create request; later
//! changes go through the tagging API. Tags are addressed by ARN and compared
//! by key.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::cloudfront::TaggingApi;
use crate::constants::{AWS_TAG_PREFIX, SYSTEM_TAG_PREFIX};
use crate::crd::Tag;
use crate::errors::Error;
use crate::reconcilers::cloudfront_call;

/// Changes needed to turn the latest tags into the desired ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagDelta {
    /// Tags to set, new keys and keys whose value changed.
    pub to_add: Vec<Tag>,
    /// Keys to remove.
    pub to_remove: Vec<String>,
}

impl TagDelta {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Tags AWS or the controller itself own; never removed.
#[must_use]
pub fn is_system_tag(key: &str) -> bool {
    key.starts_with(AWS_TAG_PREFIX) || key.starts_with(SYSTEM_TAG_PREFIX)
}

fn by_key(tags: &[Tag]) -> BTreeMap<&str, Option<&str>> {
    tags.iter()
        .filter_map(|tag| {
            tag.key
                .as_deref()
                .map(|key| (key, tag.value.as_deref()))
        })
        .collect()
}

/// Computes the tag changes from `latest` to `desired`.
///
/// Tags without a key are ignored. Output is ordered by key.
#[must_use]
pub fn compute_tag_delta(desired: &[Tag], latest: &[Tag]) -> TagDelta {
    let desired = by_key(desired);
    let latest = by_key(latest);

    let to_add = desired
        .iter()
        .filter(|(key, value)| latest.get(*key) != Some(*value))
        .map(|(key, value)| Tag {
            key: Some((*key).to_string()),
            value: (*value).map(str::to_string),
        })
        .collect();

    let to_remove = latest
        .keys()
        .filter(|key| !desired.contains_key(*key) && !is_system_tag(key))
        .map(|key| (*key).to_string())
        .collect();

    TagDelta { to_add, to_remove }
}

/// Tags to embed in a create request.
///
/// `None` when the custom resource leaves tags unspecified, so the request
/// carries no tag set at all.
#[must_use]
pub fn create_request_tags(spec_tags: Option<&[Tag]>) -> Option<Vec<Tag>> {
    spec_tags.map(|tags| {
        tags.iter()
            .filter(|tag| tag.key.is_some())
            .cloned()
            .collect()
    })
}

/// Lists the tags of the resource identified by `arn`.
///
/// # Errors
///
/// Returns an error if CloudFront rejects the call.
pub async fn get_resource_tags<A>(api: &A, arn: &str) -> Result<Vec<Tag>, Error>
where
    A: TaggingApi + ?Sized,
{
    cloudfront_call("ListTagsForResource", move || api.list_tags(arn)).await
}

/// Makes the tags of `arn` match `desired`.
///
/// Only the difference is sent: one `TagResource` call for new and changed
/// tags and one `UntagResource` call for removed keys. Nothing is sent when the
/// tags already match.
///
/// # Errors
///
/// Returns an error if CloudFront rejects a call.
pub async fn sync_resource_tags<A>(
    api: &A,
    arn: &str,
    desired: &[Tag],
    latest: &[Tag],
) -> Result<TagDelta, Error>
where
    A: TaggingApi + ?Sized,
{
    let delta = compute_tag_delta(desired, latest);
    if delta.is_empty() {
        debug!(arn = %arn, "Tags already in sync");
        return Ok(delta);
    }

    if !delta.to_remove.is_empty() {
        let keys = delta.to_remove.as_slice();
        cloudfront_call("UntagResource", move || api.untag_resource(arn, keys)).await?;
    }
    if !delta.to_add.is_empty() {
        let tags = delta.to_add.as_slice();
        cloudfront_call("TagResource", move || api.tag_resource(arn, tags)).await?;
    }

    info!(
        arn = %arn,
        added = delta.to_add.len(),
        removed = delta.to_remove.len(),
        "Synchronized resource tags"
    );
    Ok(delta)
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tags_tests;
