// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

/// Initializes the logging framework to capture logs from the crates specified with a minimum
/// [`log::Level`] of [`Info`](log::Level::Info) on debug builds and [`Warn`](log::Level::Warn) on
/// release builds.  On desktop platforms, these defaults can be overridden by setting the
/// `RUST_LOG` environment variable.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    crates: Vec<&'static str>,
    level: log::LevelFilter,
}

impl LoggingConfig {
    /// Creates a new [`LoggingConfig`] capturing logs from the specified list of crates, at the
    /// default level for the current build profile.
    pub fn new(crates: Vec<&'static str>) -> Self {
        Self {
            crates,
            level: if cfg!(debug_assertions) {
                log::LevelFilter::Info
            } else {
                log::LevelFilter::Warn
            },
        }
    }

    /// Overrides the profile-dependent default level.
    pub fn with_level(mut self, level: log::LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn crates(&self) -> &[&'static str] {
        &self.crates
    }

    pub fn level(&self) -> log::LevelFilter {
        self.level
    }

    /// Builds the `RUST_LOG`-style directive string used when the environment doesn't provide one,
    /// e.g. `procgeo=info,procgeo_logging=info`.
    pub fn filter_string(&self) -> String {
        let level_str = match self.level {
            log::LevelFilter::Off => "off",
            log::LevelFilter::Error => "error",
            log::LevelFilter::Warn => "warn",
            log::LevelFilter::Info => "info",
            log::LevelFilter::Debug => "debug",
            log::LevelFilter::Trace => "trace",
        };
        self.crates
            .iter()
            .map(|&pkg_name| format!("{}={}", pkg_name, level_str))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Installs the global logger.  Panics if a logger was already installed.
    pub fn init(&self) {
        crate::platform_impl::init(&self.filter_string(), false);
    }

    /// Installs the global logger unless one is already present.  Test binaries call this from
    /// every test, so a second call is not an error.
    pub fn try_init(&self) {
        crate::platform_impl::init(&self.filter_string(), true);
    }
}


// End of File
