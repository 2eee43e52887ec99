// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase timing instrumentation for debugging.
//!
//! Enable with the `BUSSOLA_TIMINGS=1` environment variable; timings go
//! to stderr as `[timings] phase::name XXms` so they never mix with
//! report output on stdout.

use std::time::Instant;

/// Check if timings are enabled via the BUSSOLA_TIMINGS environment variable.
#[inline]
pub fn enabled() -> bool {
    std::env::var("BUSSOLA_TIMINGS").is_ok()
}

/// Run a closure as a named phase, reporting its wall time when enabled.
///
/// ```rust,ignore
/// let issues = timings::phase("snapshot::read", || snapshot::read(&source))?;
/// ```
pub fn phase<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = f();
    if enabled() {
        eprintln!("[timings] {} {}ms", name, start.elapsed().as_millis());
    }
    result
}
