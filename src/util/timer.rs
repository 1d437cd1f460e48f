// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::time::{Duration, Instant};

/// Logs how long a named generation step took when it goes out of scope.
pub struct Timer {
    action: &'static str,
    start: Instant,
}

impl Timer {
    pub fn new(action: &'static str) -> Self {
        Self {
            action,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        log::debug!("{} took {:.3?}", self.action, self.elapsed());
    }
}

// End of File
