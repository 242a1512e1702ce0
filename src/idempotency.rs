// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Caller references for create requests.
//!
//! CloudFront requires a unique `CallerReference` when a distribution is
//! created and refuses to create a second resource with the same value. The
//! token is the UTC creation time to the second, followed by a fixed
//! `000000` suffix.

use chrono::{DateTime, Utc};

use crate::constants::{IDEMPOTENCY_TOKEN_SUFFIX, IDEMPOTENCY_TOKEN_TIME_FORMAT};

/// Returns the caller reference for a create request issued at `now`.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use cloudfront_controller::idempotency::idempotency_token;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
/// assert_eq!(idempotency_token(now), "20240309070501000000");
/// ```
#[must_use]
pub fn idempotency_token(now: DateTime<Utc>) -> String {
    format!(
        "{}{}",
        now.format(IDEMPOTENCY_TOKEN_TIME_FORMAT),
        IDEMPOTENCY_TOKEN_SUFFIX
    )
}

/// Caller reference for a create request issued now.
#[must_use]
pub fn current_idempotency_token() -> String {
    idempotency_token(Utc::now())
}

#[cfg(test)]
#[path = "idempotency_tests.rs"]
mod idempotency_tests;
