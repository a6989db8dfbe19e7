use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://olympsearch-api.onrender.com"

[auth]
supabase_url = ""
supabase_anon_key = ""
"#;

/// Build-time overrides, e.g. `OLYMPSEARCH_API_URL=http://localhost:8000 trunk build`
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides<'a> {
    pub api_url: Option<&'a str>,
    pub supabase_url: Option<&'a str>,
    pub supabase_anon_key: Option<&'a str>,
}

impl Overrides<'static> {
    fn from_build_env() -> Self {
        Self {
            api_url: option_env!("OLYMPSEARCH_API_URL"),
            supabase_url: option_env!("OLYMPSEARCH_SUPABASE_URL"),
            supabase_anon_key: option_env!("OLYMPSEARCH_SUPABASE_ANON_KEY"),
        }
    }
}

/// Parse configuration and apply overrides
///
/// Empty override values are ignored; trailing slashes are trimmed from URLs.
pub fn load_config(source: &str, overrides: Overrides<'_>) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(source)?;

    let pick = |value: Option<&str>| value.map(str::trim).filter(|v| !v.is_empty()).map(String::from);
    if let Some(url) = pick(overrides.api_url) {
        config.api.base_url = url;
    }
    if let Some(url) = pick(overrides.supabase_url) {
        config.auth.supabase_url = url;
    }
    if let Some(key) = pick(overrides.supabase_anon_key) {
        config.auth.supabase_anon_key = key;
    }

    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    config.auth.supabase_url = config.auth.supabase_url.trim_end_matches('/').to_string();
    Ok(config)
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    match load_config(DEFAULT_CONFIG, Overrides::from_build_env()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid build configuration, using defaults: {}", e);
            Config {
                api: ApiConfig {
                    base_url: "https://olympsearch-api.onrender.com".to_string(),
                },
                auth: AuthConfig {
                    supabase_url: String::new(),
                    supabase_anon_key: String::new(),
                },
            }
        }
    }
});

/// Application configuration, loaded once
pub fn config() -> &'static Config {
    &CONFIG
}
