// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Drift detection between the desired and the live configuration.
//!
//! CloudFront fills in defaults for every field the custom resource leaves
//! out, so the live configuration is almost never equal to the desired one.
//! A configuration has drifted only when a field the custom resource sets has
//! a different value in CloudFront.
//!
//! Both sides are compared as JSON:
//!
//! - `null` in the desired tree matches anything
//! - objects match when every non-null desired key matches
//! - arrays match element by element and must have the same length
//! - an empty desired array matches an absent live one

use serde::Serialize;
use serde_json::Value;

use crate::errors::Error;

/// Paths of the desired fields whose live value differs.
///
/// Paths use dots for object keys and `[i]` for array indices, e.g.
/// `cacheBehaviors.items[1].allowedMethods.quantity`.
///
/// # Errors
///
/// Returns an error if either configuration cannot be serialized.
pub fn drifted_paths<C: Serialize>(desired: &C, latest: &C) -> Result<Vec<String>, Error> {
    let desired = serde_json::to_value(desired)?;
    let latest = serde_json::to_value(latest)?;

    let mut paths = Vec::new();
    collect_drift(&desired, &latest, String::new(), &mut paths);
    Ok(paths)
}

/// Whether any field set in `desired` differs in `latest`.
///
/// # Errors
///
/// Returns an error if either configuration cannot be serialized.
pub fn has_drifted<C: Serialize>(desired: &C, latest: &C) -> Result<bool, Error> {
    Ok(!drifted_paths(desired, latest)?.is_empty())
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn collect_drift(desired: &Value, latest: &Value, path: String, paths: &mut Vec<String>) {
    match (desired, latest) {
        (Value::Null, _) => {}
        (Value::Object(desired), Value::Object(latest)) => {
            for (key, value) in desired {
                let live = latest.get(key).unwrap_or(&Value::Null);
                collect_drift(value, live, child_path(&path, key), paths);
            }
        }
        (Value::Object(desired), Value::Null) => {
            // An absent live object matches a desired one that sets nothing.
            for (key, value) in desired {
                collect_drift(value, &Value::Null, child_path(&path, key), paths);
            }
        }
        (Value::Array(desired), Value::Null) if desired.is_empty() => {}
        (Value::Array(desired), Value::Array(latest)) => {
            if desired.len() == latest.len() {
                for (index, (want, have)) in desired.iter().zip(latest).enumerate() {
                    collect_drift(want, have, format!("{path}[{index}]"), paths);
                }
            } else {
                paths.push(path);
            }
        }
        (desired, latest) => {
            if desired != latest {
                paths.push(path);
            }
        }
    }
}

#[cfg(test)]
#[path = "drift_tests.rs"]
mod drift_tests;
