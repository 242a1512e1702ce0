// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the shared reconciliation plumbing.
//!
//! The full create/update/delete flow runs against the in-memory CloudFront
//! in `tests/reconcile_integration.rs`.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use kube::runtime::controller::Action;

    use crate::cloudfront::ApiError;
    use crate::constants::{CONDITION_TYPE_SYNCED, DEFAULT_REQUEUE_AFTER_SECS, RESYNC_PERIOD_SECS};
    use crate::crd::ResourceStatus;
    use crate::errors::Error;
    use crate::reconcilers::status::create_condition;
    use crate::reconcilers::{cloudfront_call, requeue_action, ReconcileOutcome};

    fn status(synced: &str) -> ResourceStatus {
        ResourceStatus {
            id: Some("E2QWRUHAPOMQZL".to_string()),
            conditions: vec![create_condition(CONDITION_TYPE_SYNCED, synced, "Synced", "")],
            ..Default::default()
        }
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(ReconcileOutcome::Created(status("True")).label(), "created");
        assert_eq!(ReconcileOutcome::Updated(status("True")).label(), "updated");
        assert_eq!(ReconcileOutcome::InSync(status("True")).label(), "in_sync");
        assert_eq!(ReconcileOutcome::Disabling(status("False")).label(), "disabling");
        assert_eq!(ReconcileOutcome::Deleted.label(), "deleted");
    }

    #[test]
    fn test_outcome_status() {
        let outcome = ReconcileOutcome::InSync(status("True"));
        assert_eq!(
            outcome.status().and_then(|s| s.id.as_deref()),
            Some("E2QWRUHAPOMQZL")
        );
        assert!(ReconcileOutcome::Deleted.status().is_none());
    }

    #[test]
    fn test_synced_outcome_requeues_after_resync_period() {
        assert_eq!(
            ReconcileOutcome::InSync(status("True")).requeue_action(),
            Action::requeue(Duration::from_secs(RESYNC_PERIOD_SECS))
        );
    }

    #[test]
    fn test_propagating_outcome_requeues_after_default_delay() {
        let expected = Action::requeue(Duration::from_secs(DEFAULT_REQUEUE_AFTER_SECS));

        assert_eq!(
            ReconcileOutcome::Updated(status("False")).requeue_action(),
            expected
        );
        assert_eq!(
            ReconcileOutcome::Disabling(status("False")).requeue_action(),
            expected
        );
    }

    #[test]
    fn test_deleted_outcome_awaits_change() {
        assert_eq!(
            ReconcileOutcome::Deleted.requeue_action(),
            Action::await_change()
        );
    }

    #[test]
    fn test_requeue_action_uses_requested_delay() {
        let err = Error::RequeueNeededAfter {
            reason: "distribution in 'InProgress' state".to_string(),
            after: Duration::from_secs(45),
        };
        assert_eq!(requeue_action(&err), Action::requeue(Duration::from_secs(45)));
    }

    #[test]
    fn test_requeue_action_for_failures() {
        let err = Error::api(
            "UpdateDistribution",
            ApiError::PreconditionFailed {
                id: "E2QWRUHAPOMQZL".to_string(),
            },
        );
        assert_eq!(requeue_action(&err), Action::requeue(Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn test_cloudfront_call_success() {
        let result = cloudfront_call("GetCachePolicy", || async { Ok::<_, ApiError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_cloudfront_call_wraps_error_with_operation() {
        let mut attempts = 0;
        let result: Result<(), Error> = cloudfront_call("GetCachePolicy", || {
            attempts += 1;
            async {
                Err(ApiError::NotFound {
                    id: "missing".to_string(),
                })
            }
        })
        .await;

        assert_eq!(attempts, 1);
        match result.unwrap_err() {
            Error::Api { operation, source } => {
                assert_eq!(operation, "GetCachePolicy");
                assert!(source.is_not_found());
            }
            other => panic!("expected an API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cloudfront_call_retries_throttling() {
        let mut attempts = 0;
        let result = cloudfront_call("ListTagsForResource", || {
            attempts += 1;
            let attempt = attempts;
            async move {
                if attempt < 2 {
                    Err(ApiError::Throttling {
                        message: "Rate exceeded".to_string(),
                    })
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 2);
    }
}
