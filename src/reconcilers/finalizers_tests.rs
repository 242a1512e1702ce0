// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `finalizers.rs`

#[cfg(test)]
mod tests {
    use crate::crd::{CachePolicy, CachePolicyConfig, CachePolicySpec};
    use crate::reconcilers::finalizers::*;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    const TEST_NAMESPACE: &str = "test-namespace";
    const TEST_NAME: &str = "test-resource";

    fn create_test_policy(finalizers: Option<Vec<String>>) -> CachePolicy {
        CachePolicy {
            metadata: ObjectMeta {
                name: Some(TEST_NAME.to_string()),
                namespace: Some(TEST_NAMESPACE.to_string()),
                finalizers,
                generation: Some(1),
                ..Default::default()
            },
            spec: CachePolicySpec {
                cache_policy_config: CachePolicyConfig {
                    name: Some("policy".to_string()),
                    ..Default::default()
                },
            },
            status: None,
        }
    }

    #[test]
    fn test_finalizer_name() {
        assert_eq!(
            finalizer_name("Distribution"),
            "finalizers.cloudfront.services.k8s.aws/Distribution"
        );
    }

    #[test]
    fn test_has_finalizer() {
        let finalizer = finalizer_name("CachePolicy");

        assert!(!has_finalizer(&create_test_policy(None), &finalizer));
        assert!(!has_finalizer(
            &create_test_policy(Some(vec!["other/finalizer".to_string()])),
            &finalizer
        ));
        assert!(has_finalizer(
            &create_test_policy(Some(vec![finalizer.clone()])),
            &finalizer
        ));
    }

    #[test]
    fn test_with_finalizer_appends() {
        let finalizer = finalizer_name("CachePolicy");
        let policy = create_test_policy(Some(vec!["other/finalizer".to_string()]));

        assert_eq!(
            with_finalizer(&policy, &finalizer),
            Some(vec!["other/finalizer".to_string(), finalizer.clone()])
        );
    }

    #[test]
    fn test_with_finalizer_already_present() {
        let finalizer = finalizer_name("CachePolicy");
        let policy = create_test_policy(Some(vec![finalizer.clone()]));

        assert_eq!(with_finalizer(&policy, &finalizer), None);
    }

    #[test]
    fn test_without_finalizer_keeps_others() {
        let finalizer = finalizer_name("CachePolicy");
        let policy =
            create_test_policy(Some(vec![finalizer.clone(), "other/finalizer".to_string()]));

        assert_eq!(
            without_finalizer(&policy, &finalizer),
            Some(vec!["other/finalizer".to_string()])
        );
    }

    #[test]
    fn test_without_finalizer_absent() {
        let finalizer = finalizer_name("CachePolicy");

        assert_eq!(without_finalizer(&create_test_policy(None), &finalizer), None);
    }
}
