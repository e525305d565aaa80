//! Fuzz target for config parsing and resolution.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = orgguard_settings::parse_config_toml(text)
    {
        let _ = orgguard_settings::resolve_config(cfg, orgguard_settings::Overrides::default());
    }
});
