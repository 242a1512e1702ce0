// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for CloudFront error types.

#[cfg(test)]
mod tests {
    use crate::cloudfront::*;
    use crate::status_reasons::*;

    fn message(text: &str) -> String {
        text.to_string()
    }

    #[test]
    fn test_not_found_error() {
        let error = ApiError::NotFound {
            id: "E2QWRUHAPOMQZL".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "CloudFront resource 'E2QWRUHAPOMQZL' not found"
        );
        assert!(error.is_not_found());
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_inconsistent_quantities_error() {
        let error = ApiError::InconsistentQuantities {
            message: message("Quantity of Aliases does not match the number of Items"),
        };

        assert_eq!(
            error.to_string(),
            "inconsistent quantities: Quantity of Aliases does not match the number of Items"
        );
        assert_eq!(error.status_reason(), REASON_CONFIGURATION_INVALID);
        assert_eq!(error.metric_label(), "inconsistent_quantities");
    }

    #[test]
    fn test_other_error_display() {
        let error = ApiError::Other {
            code: "AccessDenied".to_string(),
            message: message("not authorized"),
        };

        assert_eq!(error.to_string(), "AccessDenied: not authorized");
        assert_eq!(error.status_reason(), REASON_API_ERROR);
    }

    #[test]
    fn test_transient_errors_are_retryable() {
        let throttled = ApiError::Throttling {
            message: message("Rate exceeded"),
        };
        let unavailable = ApiError::ServiceUnavailable {
            message: message("try again"),
        };

        assert!(throttled.is_retryable());
        assert!(unavailable.is_retryable());
        assert_eq!(throttled.status_reason(), REASON_THROTTLED);
    }

    #[test]
    fn test_permanent_errors_are_not_retryable() {
        let errors = [
            ApiError::PreconditionFailed {
                id: "E1".to_string(),
            },
            ApiError::InvalidArgument {
                message: message("bad origin"),
            },
            ApiError::InconsistentQuantities {
                message: message("bad quantity"),
            },
            ApiError::Other {
                code: "AccessDenied".to_string(),
                message: message("denied"),
            },
        ];

        for error in errors {
            assert!(!error.is_retryable(), "{error} should not be retried");
        }
    }

    #[test]
    fn test_precondition_failed_reason() {
        let error = ApiError::PreconditionFailed {
            id: "E1".to_string(),
        };

        assert_eq!(error.status_reason(), REASON_PRECONDITION_FAILED);
        assert_eq!(error.metric_label(), "precondition_failed");
    }
}
