// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `function.rs`

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use kube::api::ObjectMeta;

    use crate::constants::AUTO_PUBLISH_ANNOTATION;
    use crate::crd::{Function, FunctionSpec};
    use crate::reconcilers::function::auto_publish_enabled;
    use crate::reconcilers::ManagedResource;

    fn function(annotation: Option<&str>) -> Function {
        let annotations = annotation.map(|value| {
            BTreeMap::from([(AUTO_PUBLISH_ANNOTATION.to_string(), value.to_string())])
        });

        Function {
            metadata: ObjectMeta {
                name: Some("rewrite".to_string()),
                namespace: Some("default".to_string()),
                annotations,
                ..Default::default()
            },
            spec: FunctionSpec {
                name: "rewrite-uri".to_string(),
                function_code: Some("function handler(event) { return event.request; }".to_string()),
                function_config: None,
            },
            status: None,
        }
    }

    #[test]
    fn test_auto_publish_requires_true() {
        assert!(auto_publish_enabled(&function(Some("true"))));
        assert!(!auto_publish_enabled(&function(Some("false"))));
        assert!(!auto_publish_enabled(&function(Some("True"))));
        assert!(!auto_publish_enabled(&function(Some("yes"))));
    }

    #[test]
    fn test_auto_publish_disabled_without_annotation() {
        assert!(!auto_publish_enabled(&function(None)));
    }

    #[test]
    fn test_function_config_is_the_whole_spec() {
        let function = function(None);
        assert_eq!(function.config(), Some(&function.spec));
        assert!(!<Function as ManagedResource>::STATUS_GATED);
        assert!(!<Function as ManagedResource>::TAGGABLE);
    }
}
