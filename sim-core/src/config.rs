use crate::{error::ConfigError, types::Rgba};
use serde::{Deserialize, Serialize};

/// Tunable parameters for the constellation field.
///
/// A `Config` is treated as an immutable snapshot for the duration of a
/// tick or a frame; hosts may swap in a new snapshot between frames.
///
/// `line_distance` plays two roles: it is the maximum separation for a
/// connecting line, and the margin outside the canvas where nodes spawn
/// and beyond which they are recycled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "NumberOfNodes")]
    pub node_count: usize,
    #[serde(rename = "MinSpeed")]
    pub min_speed: f32,
    #[serde(rename = "MaxSpeed")]
    pub max_speed: f32,
    #[serde(rename = "MinRadius")]
    pub min_radius: f32,
    #[serde(rename = "MaxRadius")]
    pub max_radius: f32,
    #[serde(rename = "LineDistance")]
    pub line_distance: f32,
    #[serde(rename = "BackgroundColor")]
    pub background_color: Rgba,
    #[serde(rename = "NodeColor")]
    pub node_color: Rgba,
    #[serde(rename = "LineColor")]
    pub line_color: Rgba,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_count: 150,
            min_speed: 1.0,
            max_speed: 5.0,
            min_radius: 2.0,
            max_radius: 5.0,
            line_distance: 200.0,
            background_color: Rgba::BLACK,
            node_color: Rgba::WHITE,
            line_color: Rgba::WHITE,
        }
    }
}

/// A single field of [`Config`] together with its new value.
///
/// Stores persist settings one field at a time, so edits travel as
/// `Setting` values rather than whole snapshots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Setting {
    NodeCount(usize),
    MinSpeed(f32),
    MaxSpeed(f32),
    MinRadius(f32),
    MaxRadius(f32),
    LineDistance(f32),
    BackgroundColor(Rgba),
    NodeColor(Rgba),
    LineColor(Rgba),
}

impl Config {
    /// Checks that every scalar is finite and non-negative and that both
    /// ranges are ordered.
    ///
    /// ### Returns
    /// - `Ok(())` if the snapshot can be sampled from.
    /// - `Err(ConfigError)` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
            ("line_distance", self.line_distance),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeValue { field, value });
            }
        }

        if self.min_speed > self.max_speed {
            return Err(ConfigError::InvertedRange {
                min_field: "min_speed",
                max_field: "max_speed",
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if self.min_radius > self.max_radius {
            return Err(ConfigError::InvertedRange {
                min_field: "min_radius",
                max_field: "max_radius",
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        Ok(())
    }

    /// Writes one field.
    pub fn apply(&mut self, setting: Setting) {
        match setting {
            Setting::NodeCount(v) => self.node_count = v,
            Setting::MinSpeed(v) => self.min_speed = v,
            Setting::MaxSpeed(v) => self.max_speed = v,
            Setting::MinRadius(v) => self.min_radius = v,
            Setting::MaxRadius(v) => self.max_radius = v,
            Setting::LineDistance(v) => self.line_distance = v,
            Setting::BackgroundColor(c) => self.background_color = c,
            Setting::NodeColor(c) => self.node_color = c,
            Setting::LineColor(c) => self.line_color = c,
        }
    }

    /// Lists the fields of `self` that differ from `previous`, in
    /// declaration order.
    pub fn changes_from(&self, previous: &Config) -> Vec<Setting> {
        let mut out = Vec::new();
        if self.node_count != previous.node_count {
            out.push(Setting::NodeCount(self.node_count));
        }
        if self.min_speed != previous.min_speed {
            out.push(Setting::MinSpeed(self.min_speed));
        }
        if self.max_speed != previous.max_speed {
            out.push(Setting::MaxSpeed(self.max_speed));
        }
        if self.min_radius != previous.min_radius {
            out.push(Setting::MinRadius(self.min_radius));
        }
        if self.max_radius != previous.max_radius {
            out.push(Setting::MaxRadius(self.max_radius));
        }
        if self.line_distance != previous.line_distance {
            out.push(Setting::LineDistance(self.line_distance));
        }
        if self.background_color != previous.background_color {
            out.push(Setting::BackgroundColor(self.background_color));
        }
        if self.node_color != previous.node_color {
            out.push(Setting::NodeColor(self.node_color));
        }
        if self.line_color != previous.line_color {
            out.push(Setting::LineColor(self.line_color));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_inverted_speed_range() {
        let mut cfg = Config::default();
        cfg.min_speed = 6.0;

        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvertedRange {
                min_field: "min_speed",
                max_field: "max_speed",
                min: 6.0,
                max: 5.0,
            })
        );
    }

    #[test]
    fn validate_rejects_negative_and_non_finite_values() {
        let mut cfg = Config::default();
        cfg.line_distance = -1.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NegativeValue {
                field: "line_distance",
                ..
            })
        ));

        let mut cfg = Config::default();
        cfg.max_radius = f32::INFINITY;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotFinite {
                field: "max_radius",
                ..
            })
        ));
    }

    #[test]
    fn equal_bounds_are_a_valid_range() {
        let mut cfg = Config::default();
        cfg.min_radius = 3.0;
        cfg.max_radius = 3.0;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn changes_from_then_apply_reproduces_edit() {
        let before = Config::default();
        let mut after = before;
        after.node_count = 12;
        after.line_color = Rgba::new(1.0, 0.0, 0.0, 1.0);

        let changes = after.changes_from(&before);
        assert_eq!(
            changes,
            vec![
                Setting::NodeCount(12),
                Setting::LineColor(Rgba::new(1.0, 0.0, 0.0, 1.0)),
            ]
        );

        let mut replayed = before;
        for s in changes {
            replayed.apply(s);
        }
        assert_eq!(replayed, after);
    }

    #[test]
    fn serializes_under_preference_keys() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["NumberOfNodes"], 150);
        assert_eq!(json["LineDistance"], 200.0);
        assert_eq!(json["BackgroundColor"]["a"], 1.0);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "NumberOfNodes": 7 }"#).unwrap();
        assert_eq!(cfg.node_count, 7);
        assert_eq!(cfg.max_speed, Config::default().max_speed);
    }
}
