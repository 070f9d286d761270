//! Tracing setup for the `hyperjsx` binary.
//!
//! The subscriber is only installed when `HYPERJSX_LOG` (or `RUST_LOG`) is
//! set:
//!
//! ```bash
//! HYPERJSX_LOG=debug hyperjsx component.jsx
//! HYPERJSX_LOG="hyperjsx=trace" hyperjsx -E tree.json
//! ```
//!
//! Output always goes to stderr; stdout carries the rewritten tree.

use tracing_subscriber::EnvFilter;

/// `HYPERJSX_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
	if let Ok(val) = std::env::var("HYPERJSX_LOG") {
		EnvFilter::builder().parse_lossy(val)
	} else {
		EnvFilter::from_default_env()
	}
}

/// Installs the global fmt subscriber, if logging was requested.
pub fn init_tracing() {
	if std::env::var_os("HYPERJSX_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
		return;
	}

	tracing_subscriber::fmt()
		.with_env_filter(build_filter())
		.with_writer(std::io::stderr)
		.init();
}
