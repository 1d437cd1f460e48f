// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

pub(crate) fn init(filter_string: &str, tolerate_existing: bool) {
    let _ = (filter_string, tolerate_existing);
}

// End of File
