// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the reconciliation error type.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::cloudfront::ApiError;
    use crate::errors::Error;
    use crate::status_reasons::*;

    #[test]
    fn test_requeue_needed_after_carries_delay() {
        let error = Error::RequeueNeededAfter {
            reason: "distribution in 'InProgress' state, cannot be modified until 'Deployed'"
                .to_string(),
            after: Duration::from_secs(30),
        };

        assert_eq!(error.requeue_after(), Duration::from_secs(30));
        assert_eq!(
            error.to_string(),
            "distribution in 'InProgress' state, cannot be modified until 'Deployed'"
        );
        assert_eq!(error.status_reason(), REASON_PROPAGATING);
        assert!(!error.is_terminal());
    }

    #[test]
    fn test_api_error_display() {
        let error = Error::api(
            "UpdateDistribution",
            ApiError::PreconditionFailed {
                id: "E1".to_string(),
            },
        );

        assert_eq!(
            error.to_string(),
            "CloudFront UpdateDistribution failed: precondition failed for 'E1': ETag is no longer current"
        );
        assert_eq!(error.requeue_after(), Duration::from_secs(30));
        assert_eq!(error.status_reason(), REASON_PRECONDITION_FAILED);
        assert!(!error.is_terminal());
    }

    #[test]
    fn test_invalid_requests_are_terminal() {
        let invalid = Error::api(
            "CreateCachePolicy",
            ApiError::InvalidArgument {
                message: "MinTTL must be lower than MaxTTL".to_string(),
            },
        );
        let inconsistent = Error::api(
            "CreateDistribution",
            ApiError::InconsistentQuantities {
                message: "Aliases".to_string(),
            },
        );

        assert!(invalid.is_terminal());
        assert!(inconsistent.is_terminal());
        assert_eq!(invalid.status_reason(), REASON_CONFIGURATION_INVALID);
    }

    #[test]
    fn test_missing_config() {
        let error = Error::MissingConfig {
            kind: "Distribution",
            name: "my-distribution".to_string(),
            field: "spec.distributionConfig",
        };

        assert_eq!(
            error.to_string(),
            "Distribution 'my-distribution' is missing required field 'spec.distributionConfig'"
        );
        assert!(error.is_terminal());
        assert_eq!(error.metric_label(), "missing_config");
    }

    #[test]
    fn test_throttling_is_not_terminal() {
        let error = Error::api(
            "GetDistribution",
            ApiError::Throttling {
                message: "Rate exceeded".to_string(),
            },
        );

        assert!(!error.is_terminal());
        assert_eq!(error.metric_label(), "throttled");
        assert_eq!(error.status_reason(), REASON_THROTTLED);
    }
}
