use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub fn config_file() -> PathBuf { dirs::home_dir().unwrap().join(".strew.toml") }

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    settings: Settings,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct Config {
    pub settings: Settings,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Breathing room kept between the laid-out cluster and the container
    /// edge, per axis.
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default)]
    pub declutter: DeclutterSettings,
    #[serde(default)]
    pub overlay: OverlaySettings,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct DeclutterSettings {
    /// Floor on the per-axis displacement away from the cluster centroid.
    /// Keeps a frame moving even when it sits at or behind the centroid.
    #[serde(default = "default_min_step")]
    pub min_step: f64,
    /// Displacement is applied in increments of `delta / step_divisor`.
    /// Larger values converge in smaller steps with less overshoot.
    #[serde(default = "default_step_divisor")]
    pub step_divisor: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct OverlaySettings {
    #[serde(default = "yes")]
    pub enabled: bool,
    /// Opacity the presentation layer should dim the container background to
    /// while the overview is active.
    #[serde(default = "default_dim_alpha")]
    pub dim_alpha: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            declutter: DeclutterSettings::default(),
            overlay: OverlaySettings::default(),
        }
    }
}

impl Default for DeclutterSettings {
    fn default() -> Self {
        Self {
            min_step: default_min_step(),
            step_divisor: default_step_divisor(),
        }
    }
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            dim_alpha: default_dim_alpha(),
        }
    }
}

fn yes() -> bool { true }

fn default_padding() -> f64 { 44.0 }

fn default_min_step() -> f64 { 1.0 }

fn default_step_divisor() -> f64 { 20.0 }

fn default_dim_alpha() -> f64 { 0.4 }

impl Settings {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.padding.is_finite() || self.padding < 0.0 {
            issues.push(format!("padding must be non-negative, got {}", self.padding));
        }

        issues.extend(self.declutter.validate());
        issues.extend(self.overlay.validate());

        issues
    }

    /// Attempts to fix configuration values automatically.
    /// Returns the number of fixes applied.
    pub fn auto_fix_values(&mut self) -> usize {
        let mut fixes = 0;

        if !self.padding.is_finite() || self.padding < 0.0 {
            self.padding = default_padding();
            fixes += 1;
        }

        fixes += self.declutter.auto_fix_values();
        fixes += self.overlay.auto_fix_values();

        fixes
    }
}

impl DeclutterSettings {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.min_step.is_finite() || self.min_step <= 0.0 {
            issues.push(format!(
                "declutter.min_step must be positive, got {}",
                self.min_step
            ));
        }
        if !self.step_divisor.is_finite() || self.step_divisor <= 0.0 {
            issues.push(format!(
                "declutter.step_divisor must be positive, got {}",
                self.step_divisor
            ));
        }

        issues
    }

    pub fn auto_fix_values(&mut self) -> usize {
        let mut fixes = 0;

        if !self.min_step.is_finite() || self.min_step <= 0.0 {
            self.min_step = default_min_step();
            fixes += 1;
        }
        if !self.step_divisor.is_finite() || self.step_divisor <= 0.0 {
            self.step_divisor = default_step_divisor();
            fixes += 1;
        }

        fixes
    }
}

impl OverlaySettings {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.dim_alpha.is_finite() || !(0.0..=1.0).contains(&self.dim_alpha) {
            issues.push(format!(
                "overlay.dim_alpha must be between 0 and 1, got {}",
                self.dim_alpha
            ));
        }

        issues
    }

    pub fn auto_fix_values(&mut self) -> usize {
        let mut fixes = 0;

        if !self.dim_alpha.is_finite() {
            self.dim_alpha = default_dim_alpha();
            fixes += 1;
        } else if !(0.0..=1.0).contains(&self.dim_alpha) {
            self.dim_alpha = self.dim_alpha.clamp(0.0, 1.0);
            fixes += 1;
        }

        fixes
    }
}

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Config> {
        let buf = std::fs::read_to_string(path)?;
        Self::parse(&buf)
    }

    /// The checked-in default configuration.
    pub fn builtin() -> Config { Self::parse(include_str!("../../strew.default.toml")).unwrap() }

    /// Save the current config to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let config_file = ConfigFile { settings: self.settings.clone() };

        let toml_string = toml::to_string_pretty(&config_file)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, toml_string.as_bytes())?;

        Ok(())
    }

    pub fn validate(&self) -> Vec<String> { self.settings.validate() }

    pub fn auto_fix_values(&mut self) -> usize { self.settings.auto_fix_values() }

    fn parse(buf: &str) -> anyhow::Result<Config> {
        let c: ConfigFile = toml::from_str(buf)?;
        Ok(Config { settings: c.settings })
    }
}
