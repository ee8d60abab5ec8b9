// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing_subscriber::{EnvFilter, fmt};

/// Install a fmt subscriber that writes through the test harness.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`. Calling this more
/// than once is fine; only the first call installs anything.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}
