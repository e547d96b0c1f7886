//! Rover API endpoint configuration.
//!
//! DESIGN
//! ======
//! The endpoint is an explicit value built once at startup and handed to the
//! root view, never read ad hoc from the environment by components. The
//! server builds it with [`RoverApiConfig::from_env`]; the browser rebuilds it
//! from the `<meta name="rover-api-base-url">` tag the SSR shell emits, so both
//! sides run the same validation.
//!
//! The stored base URL is normalized: surrounding whitespace and every
//! trailing `/` are removed.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable holding the rover API base URL.
pub const ROVER_API_BASE_URL_VAR: &str = "ROVER_API_BASE_URL";

/// `name` of the `<meta>` tag carrying the base URL into the browser.
pub const META_TAG_NAME: &str = "rover-api-base-url";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("ROVER_API_BASE_URL is required but was not set")]
    Missing,
    #[error("invalid rover API base URL '{url}': {reason}")]
    Invalid { url: String, reason: String },
    #[error("rover API base URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("page has no <meta name=\"rover-api-base-url\"> tag")]
    MissingMetaTag,
}

/// Validated location of the rover-listing API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoverApiConfig {
    base_url: String,
}

impl RoverApiConfig {
    /// Validate and normalize a raw base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for blank input,
    /// [`ConfigError::Invalid`] when the value is not an absolute URL with a
    /// host, and [`ConfigError::UnsupportedScheme`] for anything but
    /// `http`/`https`.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Missing);
        }

        let parsed = url::Url::parse(trimmed)
            .map_err(|e| ConfigError::Invalid { url: trimmed.to_owned(), reason: e.to_string() })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_owned()));
        }
        if !parsed.has_host() {
            return Err(ConfigError::Invalid { url: trimmed.to_owned(), reason: "missing host".to_owned() });
        }

        Ok(Self { base_url: normalize_base_url(trimmed) })
    }

    /// Build from [`ROVER_API_BASE_URL_VAR`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the variable is unset, otherwise
    /// whatever [`RoverApiConfig::new`] rejects.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(ROVER_API_BASE_URL_VAR).map_err(|_| ConfigError::Missing)?;
        Self::new(&raw)
    }

    /// Build from the `<meta>` tag written by the SSR shell.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingMetaTag`] when the tag or its `content`
    /// is absent, otherwise whatever [`RoverApiConfig::new`] rejects.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Result<Self, ConfigError> {
        let selector = format!("meta[name=\"{META_TAG_NAME}\"]");
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute("content"))
            .ok_or(ConfigError::MissingMetaTag)?;
        Self::new(&content)
    }

    /// Normalized base URL, never ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request target for the rover list.
    pub fn rovers_url(&self) -> String {
        self.base_url.clone()
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
