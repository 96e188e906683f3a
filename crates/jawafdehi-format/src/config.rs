use jawafdehi_types::SiteConfig;
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Default location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Read and parse a config file without touching the global.
///
/// A missing or unparseable file yields the defaults.
pub fn read_site_config(path: impl AsRef<Path>) -> SiteConfig {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to parse site config, using defaults");
            SiteConfig::default()
        }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Site config not found, using defaults");
            SiteConfig::default()
        }
    }
}

/// Load the config into the global slot. Only the first call has effect;
/// later calls return the already-loaded config.
pub fn load_site_config(path: impl AsRef<Path>) -> &'static SiteConfig {
    CONFIG.get_or_init(|| {
        let config = read_site_config(path);
        tracing::info!(
            api = %config.api.base_url,
            language = %config.display.default_language,
            show_bs_dates = config.display.show_bs_dates,
            "Site config loaded"
        );
        config
    })
}

/// The loaded config, or defaults if `load_site_config` was never called.
pub fn site_config() -> &'static SiteConfig {
    static DEFAULT: OnceLock<SiteConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(SiteConfig::default))
}
