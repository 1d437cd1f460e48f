// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # procgeo's Logging Setup
//!
//! The `procgeo` library only ever talks to the [`log`] facade.  Whoever drives a generation run
//! (a tool, a test harness) decides where those records go, and this crate is the stock answer:
//! [`env_logger`] on desktop platforms, nothing elsewhere.
//!
//! By default, the logging level is set to [`Info`](log::Level::Info) for debug builds, and
//! [`Warn`](log::Level::Warn) for release builds, for the crates handed to [`LoggingConfig`].
//! This can be overridden by setting the `RUST_LOG` environment variable, like so:
//!
//! ```sh
//! $> RUST_LOG=procgeo=debug cargo test
//! ```

mod platform;
mod platform_impl;
pub use platform::LoggingConfig;

/// A module which is typically glob imported.
pub mod prelude {
    pub use super::LoggingConfig;
}

// End of File
