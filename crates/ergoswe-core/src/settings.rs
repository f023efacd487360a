// Ergoswe Settings Module
// Loads the layout variant and sender/tapping knobs from a TOML file

#![cfg(feature = "settings")]

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use indexmap::IndexMap;

use crate::layout::Layout;
use crate::send::{DeadKeyFollowUp, SendString, UnmappedPolicy};
use crate::tapping::{TapHoldKey, TappingTerms, DEFAULT_TAPPING_TERM};

/// Settings for ergoswe
///
/// Loaded from a TOML file (default: ~/.config/ergoswe/settings.toml).
/// Every section is optional; missing values keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    layout: Layout,
    policy: UnmappedPolicy,
    follow_up: DeadKeyFollowUp,
    tapping: TappingTerms,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    layout: Option<LayoutSettings>,

    #[serde(default)]
    send: Option<SendSettings>,

    #[serde(default)]
    tapping: Option<TappingSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct LayoutSettings {
    #[serde(default)]
    variant: Option<Layout>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SendSettings {
    #[serde(default)]
    on_unmapped: Option<String>,

    #[serde(default)]
    substitute: Option<String>,

    #[serde(default)]
    dead_key_follow_up: Option<DeadKeyFollowUp>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TappingSettings {
    #[serde(default)]
    term_ms: Option<u64>,

    #[serde(default)]
    per_key: IndexMap<String, u64>,
}

impl Settings {
    /// Create settings with every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(layout) = toml_settings.layout {
            if let Some(variant) = layout.variant {
                settings.layout = variant;
            }
        }

        if let Some(send) = toml_settings.send {
            settings.policy = parse_policy(send.on_unmapped.as_deref(), send.substitute.as_deref())?;
            if let Some(follow_up) = send.dead_key_follow_up {
                settings.follow_up = follow_up;
            }
        }

        if let Some(tapping) = toml_settings.tapping {
            let base = tapping
                .term_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_TAPPING_TERM);
            let mut terms = TappingTerms::new(base);
            for (name, term_ms) in tapping.per_key {
                let key = TapHoldKey::from_str(&name)
                    .map_err(|e| SettingsError::InvalidValue(e.to_string()))?;
                terms.set(key, Duration::from_millis(term_ms));
            }
            settings.tapping = terms;
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ergoswe").join("settings.toml"))
    }

    /// Load from default location (~/.config/ergoswe/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
            log::debug!("no settings at {}, using defaults", path.display());
        } else {
            log::warn!("no config directory, using default settings");
        }
        Ok(Self::new())
    }

    /// Reload settings from the file they were loaded from
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            let new_settings = Self::from_file(path)?;
            *self = new_settings;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Override the layout variant, e.g. from the command line
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn unmapped_policy(&self) -> UnmappedPolicy {
        self.policy
    }

    pub fn dead_key_follow_up(&self) -> DeadKeyFollowUp {
        self.follow_up
    }

    pub fn tapping_terms(&self) -> &TappingTerms {
        &self.tapping
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// String sender configured from these settings
    pub fn send_string(&self) -> SendString {
        SendString::new(self.layout)
            .with_policy(self.policy)
            .with_follow_up(self.follow_up)
    }
}

fn parse_policy(
    on_unmapped: Option<&str>,
    substitute: Option<&str>,
) -> Result<UnmappedPolicy, SettingsError> {
    match on_unmapped.map(str::to_lowercase).as_deref() {
        None | Some("skip") => Ok(UnmappedPolicy::Skip),
        Some("abort") => Ok(UnmappedPolicy::Abort),
        Some("substitute") => {
            let text = substitute.unwrap_or("?");
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(UnmappedPolicy::Substitute(c)),
                _ => Err(SettingsError::InvalidValue(format!(
                    "substitute must be a single character, got '{}'",
                    text
                ))),
            }
        }
        Some(other) => Err(SettingsError::InvalidValue(format!(
            "on_unmapped must be skip, abort or substitute, got '{}'",
            other
        ))),
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Ergoswe Settings
# Place this file at: ~/.config/ergoswe/settings.toml

[layout]
# Host keyboard layout: "swedish-iso" or "swedish-mac-iso"
variant = "swedish-iso"

[send]
# Characters the layout cannot type: "skip", "abort" or "substitute"
on_unmapped = "skip"
# Used with on_unmapped = "substitute"
substitute = "?"
# Key tapped after a dead key: "space" or "none"
dead_key_follow_up = "space"

[tapping]
term_ms = 200

[tapping.per_key]
# Long hold for the home-row mods
# "LALT_T(KC_A)" = 2450
# "LCTL_T(KC_B)" = 2450
# "LCTL_T(KC_N)" = 2450
"#
}
