//! Session and application configuration.
//!
//! Use the builder methods to customize behavior.
//!
//! # Example
//!
//! ```
//! use pawswipe::config::SessionConfig;
//! use std::time::Duration;
//!
//! let config = SessionConfig::default()
//!     .with_cat_count(3)
//!     .with_settle_delay(Duration::from_millis(500));
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use crate::adapters::DEFAULT_BASE_URL;
use crate::error::ConfigError;
use crate::generators::NAME_POOL;

/// Number of items in a full deck.
pub const CAT_COUNT: usize = 10;

/// Super-likes available at the start of a session.
pub const INITIAL_SUPER_LIKES: usize = 2;

/// How long the "SUPER LIKED" presentation locks the deck.
pub const SETTLE_DELAY: Duration = Duration::from_millis(2200);

/// Drag distance that commits a swipe on release.
pub const SWIPE_THRESHOLD: f32 = 100.0;

/// Drag distance at which the overlay reaches full intensity.
pub const THRESHOLD_COLOR: f32 = 200.0;

/// Rules of a single swipe session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub cat_count: usize,
    pub initial_super_likes: usize,
    pub settle_delay: Duration,
    pub swipe_threshold: f32,
    pub overlay_max: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cat_count: CAT_COUNT,
            initial_super_likes: INITIAL_SUPER_LIKES,
            settle_delay: SETTLE_DELAY,
            swipe_threshold: SWIPE_THRESHOLD,
            overlay_max: THRESHOLD_COLOR,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cat_count(mut self, count: usize) -> Self {
        self.cat_count = count;
        self
    }

    pub fn with_initial_super_likes(mut self, count: usize) -> Self {
        self.initial_super_likes = count;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn with_overlay_max(mut self, max: f32) -> Self {
        self.overlay_max = max;
        self
    }

    /// Check the name-pool precondition and basic bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cat_count == 0 {
            return Err(ConfigError::EmptyDeck);
        }
        if self.cat_count > NAME_POOL.len() {
            return Err(ConfigError::PoolTooSmall {
                requested: self.cat_count,
                pool: NAME_POOL.len(),
            });
        }
        Ok(())
    }
}

/// Everything the binary needs beyond the session rules.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub session: SessionConfig,
    /// Base URL of the image service.
    pub base_url: String,
    /// Paint placeholder images instead of fetching.
    pub offline: bool,
    /// Drag units per terminal column.
    pub drag_scale: f32,
    /// Render/animation tick.
    pub tick: Duration,
    /// Print the summary as JSON on exit.
    pub print_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            offline: false,
            drag_scale: 8.0,
            tick: Duration::from_millis(16),
            print_json: false,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(mut self, session: SessionConfig) -> Self {
        self.session = session;
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn with_drag_scale(mut self, scale: f32) -> Self {
        self.drag_scale = scale;
        self
    }

    pub fn with_print_json(mut self, print_json: bool) -> Self {
        self.print_json = print_json;
        self
    }

    /// Build from `PAWSWIPE_*` environment variables over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Values are parsed but not validated; call [`SessionConfig::validate`]
    /// once every override has been layered on.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("PAWSWIPE_COUNT") {
            config.session.cat_count = parse_usize("PAWSWIPE_COUNT", &value)?;
        }
        if let Some(value) = lookup("PAWSWIPE_SUPER_LIKES") {
            config.session.initial_super_likes = parse_usize("PAWSWIPE_SUPER_LIKES", &value)?;
        }
        if let Some(value) = lookup("PAWSWIPE_BASE_URL") {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::invalid(
                    "PAWSWIPE_BASE_URL",
                    &value,
                    "expected an http(s) URL",
                ));
            }
            config.base_url = value;
        }
        if let Some(value) = lookup("PAWSWIPE_OFFLINE") {
            config.offline = parse_flag("PAWSWIPE_OFFLINE", &value)?;
        }

        Ok(config)
    }
}

pub(crate) fn parse_usize(name: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid(name, value, "expected a non-negative integer"))
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::invalid(name, value, "expected a boolean")),
    }
}
