// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `crd.rs`

#[cfg(test)]
mod tests {
    use kube::{CustomResourceExt, Resource};
    use serde_json::json;

    use crate::constants::{API_GROUP, API_VERSION};
    use crate::crd::*;

    const DISTRIBUTION_YAML: &str = r#"
apiVersion: cloudfront.services.k8s.aws/v1alpha1
kind: Distribution
metadata:
  name: site
  namespace: web
spec:
  distributionConfig:
    comment: static site
    enabled: true
    isIPV6Enabled: true
    aliases:
      items:
        - www.example.com
    origins:
      items:
        - id: bucket
          domainName: bucket.s3.amazonaws.com
          s3OriginConfig:
            originAccessIdentity: ""
    defaultCacheBehavior:
      targetOriginID: bucket
      viewerProtocolPolicy: redirect-to-https
      allowedMethods:
        items: [GET, HEAD]
        cachedMethods:
          items: [GET, HEAD]
  tags:
    - key: team
      value: edge
"#;

    #[test]
    fn test_distribution_from_yaml() {
        let distribution: Distribution = serde_yaml::from_str(DISTRIBUTION_YAML).unwrap();
        let config = distribution.spec.distribution_config.unwrap();

        assert_eq!(config.comment.as_deref(), Some("static site"));
        assert_eq!(config.is_ipv6_enabled, Some(true));

        let aliases = config.aliases.unwrap();
        assert_eq!(aliases.quantity, None);
        assert_eq!(aliases.items, Some(vec!["www.example.com".to_string()]));

        let behavior = config.default_cache_behavior.unwrap();
        assert_eq!(behavior.target_origin_id.as_deref(), Some("bucket"));
        let methods = behavior.allowed_methods.unwrap();
        assert_eq!(methods.items.unwrap().len(), 2);
        assert!(methods.cached_methods.is_some());

        assert_eq!(distribution.spec.tags, Some(vec![Tag::new("team", "edge")]));
        assert!(distribution.status.is_none());
    }

    #[test]
    fn test_unset_tags_stay_unset() {
        let yaml = r"
apiVersion: cloudfront.services.k8s.aws/v1alpha1
kind: Distribution
metadata:
  name: site
spec:
  distributionConfig:
    enabled: false
";
        let distribution: Distribution = serde_yaml::from_str(yaml).unwrap();
        assert!(distribution.spec.tags.is_none());

        let spec = serde_json::to_value(&distribution.spec).unwrap();
        assert!(spec.get("tags").is_none());
    }

    #[test]
    fn test_empty_list_differs_from_absent_list() {
        let empty: CountedList<String> = serde_json::from_value(json!({ "items": [] })).unwrap();
        let absent: CountedList<String> = serde_json::from_value(json!({})).unwrap();

        assert_eq!(empty.items, Some(vec![]));
        assert_eq!(absent.items, None);
        assert_ne!(empty, absent);
    }

    #[test]
    fn test_acronym_field_names() {
        let config = DistributionConfig {
            web_acl_id: Some("acl".to_string()),
            is_ipv6_enabled: Some(false),
            continuous_deployment_policy_id: Some("policy".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["webACLID"], "acl");
        assert_eq!(value["isIPV6Enabled"], false);
        assert_eq!(value["continuousDeploymentPolicyID"], "policy");

        let endpoint = VpcOriginEndpointConfig {
            origin_ssl_protocols: Some(CountedList::new(vec!["TLSv1.2".to_string()])),
            ..Default::default()
        };
        let value = serde_json::to_value(&endpoint).unwrap();
        assert_eq!(value["originSSLProtocols"]["items"][0], "TLSv1.2");
    }

    #[test]
    fn test_status_field_names() {
        let status = ResourceStatus {
            ack_resource_metadata: Some(ResourceMetadata {
                arn: Some("arn:aws:cloudfront::123456789012:distribution/E1".to_string()),
                owner_account_id: Some("123456789012".to_string()),
                region: None,
            }),
            id: Some("E1".to_string()),
            e_tag: Some("ETAG".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&status).unwrap();

        assert_eq!(value["ackResourceMetadata"]["ownerAccountID"], "123456789012");
        assert_eq!(value["eTag"], "ETAG");
        assert!(value.get("domainName").is_none());
        assert_eq!(value["conditions"], json!([]));
    }

    #[test]
    fn test_status_without_conditions_deserializes() {
        let status: ResourceStatus = serde_json::from_value(json!({ "id": "E1" })).unwrap();
        assert!(status.conditions.is_empty());
        assert_eq!(status.id.as_deref(), Some("E1"));
    }

    #[test]
    fn test_resource_kinds() {
        assert_eq!(Distribution::kind(&()), "Distribution");
        assert_eq!(CachePolicy::kind(&()), "CachePolicy");
        assert_eq!(OriginRequestPolicy::kind(&()), "OriginRequestPolicy");
        assert_eq!(ResponseHeadersPolicy::kind(&()), "ResponseHeadersPolicy");
        assert_eq!(VpcOrigin::kind(&()), "VpcOrigin");
        assert_eq!(Function::kind(&()), "Function");

        assert_eq!(Distribution::group(&()), API_GROUP);
        assert_eq!(Function::version(&()), API_VERSION);
    }

    #[test]
    fn test_generated_crds_are_namespaced() {
        for crd in [
            Distribution::crd(),
            CachePolicy::crd(),
            OriginRequestPolicy::crd(),
            ResponseHeadersPolicy::crd(),
            VpcOrigin::crd(),
            Function::crd(),
        ] {
            assert_eq!(crd.spec.group, API_GROUP);
            assert_eq!(crd.spec.scope, "Namespaced");
            assert_eq!(crd.spec.versions.len(), 1);
            assert_eq!(crd.spec.versions[0].name, API_VERSION);
            assert!(crd.spec.versions[0].subresources.is_some());
        }
    }

    #[test]
    fn test_crd_plural_names() {
        assert_eq!(Distribution::crd().spec.names.plural, "distributions");
        assert_eq!(CachePolicy::crd().spec.names.plural, "cachepolicies");
        assert_eq!(VpcOrigin::crd().spec.names.plural, "vpcorigins");
    }

    #[test]
    fn test_counted_list_constructors() {
        let list = CountedList::new(vec![1, 2, 3]);
        assert_eq!(list.quantity, None);
        assert_eq!(list.items.as_ref().map(Vec::len), Some(3));

        let list: CountedList<String> = CountedList::with_quantity(0);
        assert_eq!(list.quantity, Some(0));
        assert!(list.items.is_none());

        assert_eq!(CountedList::<String>::default().quantity, None);
    }
}
