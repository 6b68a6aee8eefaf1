// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded retry for query failures.
//!
//! Only [`huda::Error::QueryFailed`] is retried: two extra attempts, one
//! second apart. Anything else (not ready, data unavailable) fails straight
//! away because repeating it cannot help.

use std::thread;
use std::time::Duration;

use huda::Result;

/// Extra attempts after the first failure.
pub const MAX_RETRIES: u32 = 2;

/// Fixed pause between attempts.
pub const RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Run `op`, retrying retryable errors up to `max_retries` times.
pub fn with_retry<T>(
    max_retries: u32,
    delay: Duration,
    mut op: impl FnMut() -> Result<T>,
) -> Result<T> {
    let mut attempt = 0;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < max_retries => {
                attempt += 1;
                tracing::warn!(attempt, max_retries, error = %e, "query failed, retrying");
                thread::sleep(delay);
            }
            Err(e) => return Err(e),
        }
    }
}
