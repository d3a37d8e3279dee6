//! Reveal configuration.
//!
//! Every option has a default, so an empty file (or no file) is valid. A
//! config file looks like:
//!
//! ```toml
//! [gate]
//! threshold = 0.2
//!
//! [text]
//! animate_by = "letters"
//! direction = "bottom"
//! delay_ms = 150
//! step_duration = 0.05
//! threshold = 0.1
//! root_margin = "0px 0px -50px 0px"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RevealError};
use crate::types::{AnimateBy, Direction};

pub const DEFAULT_GATE_THRESHOLD: f64 = 0.2;
pub const DEFAULT_TEXT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_DELAY_MS: u32 = 200;
pub const DEFAULT_STEP_DURATION: f64 = 0.35;
pub const DEFAULT_ROOT_MARGIN: &str = "0px";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Defaults for block gates
    pub gate: GateConfig,
    /// Defaults for staged text; `text` itself is normally left empty here
    pub text: TextRevealConfig,
}

/// Options for a [`crate::VisibilityGate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Fraction of the block that must be on screen, `0.0..=1.0`.
    pub threshold: f64,
    /// CSS-style margin applied to the viewport by DOM hosts.
    pub root_margin: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_GATE_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

impl GateConfig {
    /// Gate config with a given threshold and default margin.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Strict check, used when loading files.
    pub fn validate(&self) -> Result<()> {
        check_threshold("gate.threshold", self.threshold)
    }

    /// Lenient fix-up for programmatic construction: clamp into range.
    pub fn sanitized(mut self) -> Self {
        self.threshold = clamp_threshold(self.threshold);
        self
    }
}

/// Options for a [`crate::StagedTextReveal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRevealConfig {
    pub text: String,
    pub animate_by: AnimateBy,
    pub direction: Direction,
    /// Delay before the first segment, in milliseconds.
    pub delay_ms: u32,
    /// Stagger between consecutive segments, in seconds.
    pub step_duration: f64,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for TextRevealConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            animate_by: AnimateBy::default(),
            direction: Direction::default(),
            delay_ms: DEFAULT_DELAY_MS,
            step_duration: DEFAULT_STEP_DURATION,
            threshold: DEFAULT_TEXT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

impl TextRevealConfig {
    /// Default options around `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Same options, different text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Gate options derived from this config.
    pub fn gate(&self) -> GateConfig {
        GateConfig {
            threshold: self.threshold,
            root_margin: self.root_margin.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_threshold("text.threshold", self.threshold)?;
        if !self.step_duration.is_finite() || self.step_duration < 0.0 {
            return Err(RevealError::OutOfRange {
                field: "text.step_duration",
                value: self.step_duration,
                expected: "a finite number of seconds >= 0",
            });
        }
        Ok(())
    }

    /// Clamp threshold into `0.0..=1.0` and the step to a finite `>= 0`.
    pub fn sanitized(mut self) -> Self {
        self.threshold = clamp_threshold(self.threshold);
        if !self.step_duration.is_finite() || self.step_duration < 0.0 {
            tracing::warn!(step_duration = self.step_duration, "invalid step duration, using 0");
            self.step_duration = 0.0;
        }
        self
    }
}

impl RevealConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RevealError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load config from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default reveal config");
                Self::default()
            }
        }
    }

    /// Parse embedded TOML, falling back to defaults on error.
    pub fn from_toml_or_default(content: &str) -> Self {
        Self::from_toml_str(content).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default reveal config");
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.gate.validate()?;
        self.text.validate()
    }
}

fn check_threshold(field: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RevealError::OutOfRange {
            field,
            value,
            expected: "0.0..=1.0",
        })
    }
}

fn clamp_threshold(value: f64) -> f64 {
    if (0.0..=1.0).contains(&value) {
        return value;
    }
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    tracing::warn!(threshold = value, clamped, "threshold out of range");
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn empty_document_gives_defaults() {
        let config = RevealConfig::from_toml_str("").expect("parse empty");
        assert_eq!(config, RevealConfig::default());
        assert_eq!(config.gate.threshold, 0.2);
        assert_eq!(config.text.delay_ms, 200);
        assert_eq!(config.text.step_duration, 0.35);
        assert_eq!(config.text.threshold, 0.1);
        assert_eq!(config.text.animate_by, AnimateBy::Words);
        assert_eq!(config.text.direction, Direction::Top);
    }

    #[test]
    fn parses_full_document() {
        let config = RevealConfig::from_toml_str(
            r#"
            [gate]
            threshold = 0.35

            [text]
            animate_by = "letters"
            direction = "bottom"
            delay_ms = 150
            step_duration = 0.05
            root_margin = "0px 0px -50px 0px"
            "#,
        )
        .expect("parse");

        assert_eq!(config.gate.threshold, 0.35);
        assert_eq!(config.text.animate_by, AnimateBy::Letters);
        assert_eq!(config.text.direction, Direction::Bottom);
        assert_eq!(config.text.delay_ms, 150);
        assert_eq!(config.text.step_duration, 0.05);
        assert_eq!(config.text.threshold, 0.1);
        assert_eq!(config.text.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn unknown_mode_parses_as_words() {
        let config = RevealConfig::from_toml_str("[text]\nanimate_by = \"syllables\"\n").expect("parse");
        assert_eq!(config.text.animate_by, AnimateBy::Words);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = RevealConfig::from_toml_str("[gate]\nthreshold = 1.5\n").unwrap_err();
        assert!(matches!(err, RevealError::OutOfRange { field: "gate.threshold", .. }));
        assert!(err.to_string().contains("gate.threshold"));
    }

    #[test]
    fn rejects_negative_step() {
        let err = RevealConfig::from_toml_str("[text]\nstep_duration = -0.1\n").unwrap_err();
        assert!(matches!(err, RevealError::OutOfRange { field: "text.step_duration", .. }));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = RevealConfig::from_toml_str("[gate\nthreshold = ").unwrap_err();
        assert!(matches!(err, RevealError::Parse(_)));
    }

    #[test]
    fn sanitized_clamps() {
        assert_eq!(GateConfig::with_threshold(4.0).sanitized().threshold, 1.0);
        assert_eq!(GateConfig::with_threshold(-1.0).sanitized().threshold, 0.0);
        assert_eq!(GateConfig::with_threshold(f64::NAN).sanitized().threshold, 0.0);

        let text = TextRevealConfig {
            step_duration: -3.0,
            ..TextRevealConfig::new("x")
        }
        .sanitized();
        assert_eq!(text.step_duration, 0.0);
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let temp = TempDir::new().expect("tempdir");
        let config = RevealConfig::load_from_path(&temp.path().join("reveal.toml"));
        assert_eq!(config, RevealConfig::default());
    }

    #[test]
    fn load_invalid_file_gives_defaults() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("reveal.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(file, "[gate]\nthreshold = \"high\"").expect("write");

        assert!(RevealConfig::read(&path).is_err());
        assert_eq!(RevealConfig::load_from_path(&path), RevealConfig::default());
    }

    #[test]
    fn load_valid_file() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("reveal.toml");
        std::fs::write(&path, "[text]\ndelay_ms = 0\n").expect("write");

        let config = RevealConfig::load_from_path(&path);
        assert_eq!(config.text.delay_ms, 0);
    }

    #[test]
    fn text_config_derives_gate() {
        let text = TextRevealConfig::default().with_text("DIST");
        assert_eq!(text.text, "DIST");
        assert_eq!(text.gate(), GateConfig::with_threshold(0.1));
    }
}
