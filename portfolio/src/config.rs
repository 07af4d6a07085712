//! Page configuration.
//!
//! Every tunable of the page lives here. The file is plain JSON; any section
//! or key left out falls back to its default, so an empty object is a valid
//! configuration.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub navigation: NavigationConfig,
    pub reveal: RevealConfig,
    pub typing: TypingConfig,
    pub contact: ContactConfig,
    pub trail: TrailConfig,
    pub effects: EffectsConfig,
    /// Frame interval of the runtime, in milliseconds.
    pub frame_interval_ms: u64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            reveal: RevealConfig::default(),
            typing: TypingConfig::default(),
            contact: ContactConfig::default(),
            trail: TrailConfig::default(),
            effects: EffectsConfig::default(),
            frame_interval_ms: 16,
        }
    }
}

impl PortfolioConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                info!("Loading config from {}", path.display());
                Self::from_json(&text)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Scroll offset past which the navbar is marked `scrolled`.
    pub scrolled_threshold: f64,
    /// Height of the fixed navbar, subtracted from smooth-scroll targets.
    pub anchor_offset: f64,
    pub smooth_scroll_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            anchor_offset: 80.0,
            smooth_scroll_ms: 500,
        }
    }
}

impl NavigationConfig {
    pub fn smooth_scroll(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction of an element needed to reveal it.
    pub threshold: f64,
    /// Added to the bottom of the viewport (negative shrinks it).
    pub bottom_margin: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: -50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub start_delay_ms: u64,
    pub char_delay_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 1000,
            char_delay_ms: 50,
        }
    }
}

impl TypingConfig {
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    pub fn char_delay(&self) -> Duration {
        Duration::from_millis(self.char_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Simulated network latency of a submission.
    pub submit_latency_ms: u64,
    /// How long the success banner stays up.
    pub banner_timeout_ms: u64,
    pub message_min_length: usize,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: 1500,
            banner_timeout_ms: 5000,
            message_min_length: 10,
        }
    }
}

impl ContactConfig {
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn banner_timeout(&self) -> Duration {
        Duration::from_millis(self.banner_timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub enabled: bool,
    /// Number of markers created when none exist.
    pub count: usize,
    /// The trail only runs on viewports wider than this.
    pub min_viewport_width: f64,
    /// Fraction of the remaining distance closed per chain step.
    pub lag: f64,
    pub marker_size: f64,
    /// Opacity of the leader; the tail fades proportionally.
    pub max_opacity: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 20,
            min_viewport_width: 768.0,
            lag: 0.3,
            marker_size: 10.0,
            max_opacity: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Background moves by `scroll * parallax_factor`.
    pub parallax_factor: f64,
    /// Animation delay between consecutive service cards, in seconds.
    pub stagger_step_secs: f64,
    pub hover_z_index: i32,
    pub rest_z_index: i32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            parallax_factor: 0.5,
            stagger_step_secs: 0.1,
            hover_z_index: 10,
            rest_z_index: 1,
        }
    }
}
