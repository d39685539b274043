//! Simulation configuration.
//!
//! Every field has a default, so a YAML scenario only needs the values it changes:
//!
//! ```yaml
//! gravity: 10.0
//! dt: 0.05
//! ball_radius: 20.0
//! surface: { width: 1000.0, height: 600.0 }
//! frame_ms: 16
//! sample_ms: 50
//! chart_window: 400      # samples shown per chart, 0 shows the whole series
//! euler:  { x: 250.0, y: 100.0, color: [217, 156, 166] }
//! verlet: { x: 750.0, y: 95.2,  color: [147, 189, 179] }
//! ```

use std::fs;
use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::sim::Constants;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
        }
    }
}

/// Start state of one ball. `x` only places it on screen.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub x: f64,
    pub y: f64,
    pub color: [u8; 3],
}

impl BodyConfig {
    pub fn color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::Rgb(r, g, b)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub gravity: f64,
    pub dt: f64,
    pub ball_radius: f64,
    pub surface: SurfaceConfig,
    pub frame_ms: u64,
    pub sample_ms: u64,
    pub chart_window: usize,
    pub euler: BodyConfig,
    pub verlet: BodyConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: 10.0,
            dt: 0.05,
            ball_radius: 20.0,
            surface: SurfaceConfig::default(),
            frame_ms: 16, // ~60 FPS
            sample_ms: 50,
            chart_window: 400,
            euler: BodyConfig {
                x: 250.0,
                y: 100.0,
                color: [217, 156, 166],
            },
            verlet: BodyConfig {
                x: 750.0,
                y: 95.2,
                color: [147, 189, 179],
            },
        }
    }
}

impl SimConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: SimConfig = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_yaml_str(&fs::read_to_string(path)?)
    }

    pub fn constants(&self) -> Constants {
        Constants {
            gravity: self.gravity,
            dt: self.dt,
            ball_radius: self.ball_radius,
            width: self.surface.width,
            height: self.surface.height,
        }
    }

    pub fn validate(&self) -> Result<()> {
        positive("gravity", self.gravity)?;
        positive("dt", self.dt)?;
        positive("ball_radius", self.ball_radius)?;
        positive("surface.width", self.surface.width)?;
        positive("surface.height", self.surface.height)?;
        if self.frame_ms == 0 {
            return Err(Error::config("frame_ms must be at least 1"));
        }
        if self.sample_ms == 0 {
            return Err(Error::config("sample_ms must be at least 1"));
        }
        for (name, body) in [("euler", &self.euler), ("verlet", &self.verlet)] {
            if !body.x.is_finite() || !body.y.is_finite() {
                return Err(Error::config(format!("{name} start position must be finite")));
            }
            if body.y + self.ball_radius >= self.surface.height {
                return Err(Error::config(format!(
                    "{name} starts on or below the floor (y={} radius={} height={})",
                    body.y, self.ball_radius, self.surface.height
                )));
            }
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::config(format!("{name} must be a positive finite number, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = SimConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.euler.color(), Color::Rgb(217, 156, 166));
        assert_eq!(c.constants().height, 600.0);
    }

    #[test]
    fn yaml_overrides_only_named_fields() {
        let c = SimConfig::from_yaml_str("gravity: 9.81\nverlet: { x: 700.0, y: 50.0, color: [1, 2, 3] }\n")
            .unwrap();
        assert_eq!(c.gravity, 9.81);
        assert_eq!(c.dt, 0.05);
        assert_eq!(c.verlet.y, 50.0);
        assert_eq!(c.verlet.color(), Color::Rgb(1, 2, 3));
        assert_eq!(c.euler, SimConfig::default().euler);
    }

    #[test]
    fn partial_surface() {
        let c = SimConfig::from_yaml_str("surface: { height: 800.0 }\n").unwrap();
        assert_eq!(c.surface.height, 800.0);
        assert_eq!(c.surface.width, 1000.0);
    }

    #[test]
    fn empty_yaml_is_default() {
        let c = SimConfig::from_yaml_str("{}").unwrap();
        assert_eq!(c, SimConfig::default());
    }

    #[test]
    fn unknown_field_rejected() {
        let err = SimConfig::from_yaml_str("gravty: 10.0\n").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn rejects_bad_numbers() {
        for yaml in ["dt: 0.0", "gravity: -1.0", "ball_radius: .nan", "frame_ms: 0", "sample_ms: 0"] {
            let err = SimConfig::from_yaml_str(yaml).unwrap_err();
            assert!(matches!(err, Error::Config { .. }), "{yaml}: {err}");
        }
    }

    #[test]
    fn rejects_start_below_floor() {
        let mut c = SimConfig::default();
        c.euler.y = 580.0;
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("euler"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = SimConfig::load(Path::new("/nonexistent/bouncelab.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
