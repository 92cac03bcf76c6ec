//! Defines all configuration structures for the demo.
//!
//! These structs are designed to be deserialized from a configuration file
//! (e.g., a TOML file) and from environment variables using `serde`. Every
//! field carries a default, so the demo runs meaningfully with no
//! configuration present at all.

use serde::Deserialize;
use std::time::Duration;

/// The top-level configuration for the demo binary and its script runtimes.
///
/// Typically loaded via [`DemoConfig::load`] at startup; tests construct it
/// directly to point the fetch at a mock server and shorten the timer.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Which notation the fetch sequence uses.
    #[serde(default)]
    pub variant: Variant,

    /// How many script runtimes the demo binary runs side by side.
    #[serde(default = "default_runtime_count")]
    pub runtime_count: usize,

    /// The URL the fetch sequence issues its single GET against.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Delay before the one-shot timer line when running the classic variant.
    #[serde(default = "default_classic_delay_ms")]
    pub classic_delay_ms: u64,

    /// Delay before the one-shot timer line when running the sequential variant.
    #[serde(default = "default_sequential_delay_ms")]
    pub sequential_delay_ms: u64,
}

/// Selects the control-flow notation for the fetch sequence.
///
/// Both notations express the same three-stage sequence and produce the same
/// observable log ordering; only the shape of the code differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// A chain of dependent future combinators with a trailing failure
    /// continuation.
    #[default]
    Classic,
    /// Sequential awaits inside a fallible function, failure handled once at
    /// the call site.
    Sequential,
}

impl DemoConfig {
    /// Loads configuration from an optional `twinflow.toml` file and from
    /// `TWINFLOW_*` environment variables. Environment values override the
    /// file.
    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("twinflow").required(false))
            .add_source(config::Environment::with_prefix("TWINFLOW"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// The one-shot timer delay applicable to the given variant.
    pub fn timer_delay(&self, variant: Variant) -> Duration {
        let ms = match variant {
            Variant::Classic => self.classic_delay_ms,
            Variant::Sequential => self.sequential_delay_ms,
        };
        Duration::from_millis(ms)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            runtime_count: default_runtime_count(),
            endpoint: default_endpoint(),
            classic_delay_ms: default_classic_delay_ms(),
            sequential_delay_ms: default_sequential_delay_ms(),
        }
    }
}

// --- Default value functions for serde ---

fn default_runtime_count() -> usize {
    4
}

fn default_endpoint() -> String {
    "https://deno.land".to_string()
}

fn default_classic_delay_ms() -> u64 {
    2000
}

fn default_sequential_delay_ms() -> u64 {
    5000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_demo() {
        let config = DemoConfig::default();
        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.runtime_count, 4);
        assert_eq!(config.endpoint, "https://deno.land");
        assert_eq!(config.timer_delay(Variant::Classic), Duration::from_millis(2000));
        assert_eq!(
            config.timer_delay(Variant::Sequential),
            Duration::from_millis(5000)
        );
    }

    #[test]
    fn variant_deserializes_from_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            variant: Variant,
        }
        let wrapper: Wrapper = toml::from_str("variant = \"sequential\"").unwrap();
        assert_eq!(wrapper.variant, Variant::Sequential);
    }

    #[test]
    fn empty_document_deserializes_with_defaults() {
        let config: DemoConfig = toml::from_str("").unwrap();
        assert_eq!(config.runtime_count, 4);
        assert_eq!(config.variant, Variant::Classic);
    }
}
