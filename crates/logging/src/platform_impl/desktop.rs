// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

pub(crate) fn init(filter_string: &str, tolerate_existing: bool) {
    // Use env_logger's builder API to avoid unsafe set_var call
    let mut builder = if std::env::var("RUST_LOG").is_err() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter_string))
    } else {
        env_logger::Builder::from_default_env()
    };

    if tolerate_existing {
        builder.is_test(true);
        let _ = builder.try_init();
    } else {
        builder.init();
    }
}

// End of File
