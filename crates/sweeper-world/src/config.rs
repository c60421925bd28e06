//! Operating configuration, loaded from a YAML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::LoadError;

/// Suction pressure level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pressure {
    Low,
    High,
}

/// Dust removed per suction stroke at each pressure level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SuctionCapacity {
    pub low: f64,
    pub high: f64,
}

impl Default for SuctionCapacity {
    fn default() -> Self {
        Self {
            low: default_low_capacity(),
            high: default_high_capacity(),
        }
    }
}

impl SuctionCapacity {
    pub fn for_pressure(&self, pressure: Pressure) -> f64 {
        match pressure {
            Pressure::Low => self.low,
            Pressure::High => self.high,
        }
    }
}

/// Numeric operating parameters for the agent and the simulation driver.
///
/// `time_power` and `other_power` are carried from the original parameter
/// set but never consumed by any accounted action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweeperConfig {
    /// Number of ticks the driver runs.
    #[serde(default = "default_tick_budget")]
    pub tick_budget: u64,

    /// Energy per 90-degree rotation.
    #[serde(default = "default_rotation_power")]
    pub rotation_power: f64,

    /// Energy per one-cell move.
    #[serde(default = "default_move_power")]
    pub move_power: f64,

    /// Energy per low-pressure suction stroke.
    #[serde(default = "default_low_vacuum_power")]
    pub low_vacuum_power: f64,

    /// Energy per high-pressure suction stroke.
    #[serde(default = "default_high_vacuum_power")]
    pub high_vacuum_power: f64,

    #[serde(default)]
    pub time_power: f64,

    /// Energy per sensor reading.
    #[serde(default = "default_sensor_power")]
    pub sensor_power: f64,

    #[serde(default)]
    pub other_power: f64,

    /// Maximum safe |height delta| for a traversal.
    #[serde(default = "default_max_safe_height")]
    pub max_safe_height: i32,

    #[serde(default)]
    pub suction_capacity: SuctionCapacity,
}

fn default_tick_budget() -> u64 {
    200
}
fn default_rotation_power() -> f64 {
    1.0
}
fn default_move_power() -> f64 {
    2.0
}
fn default_low_vacuum_power() -> f64 {
    2.0
}
fn default_high_vacuum_power() -> f64 {
    6.0
}
fn default_sensor_power() -> f64 {
    0.5
}
fn default_max_safe_height() -> i32 {
    3
}
fn default_low_capacity() -> f64 {
    1.0
}
fn default_high_capacity() -> f64 {
    5.0
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            tick_budget: default_tick_budget(),
            rotation_power: default_rotation_power(),
            move_power: default_move_power(),
            low_vacuum_power: default_low_vacuum_power(),
            high_vacuum_power: default_high_vacuum_power(),
            time_power: 0.0,
            sensor_power: default_sensor_power(),
            other_power: 0.0,
            max_safe_height: default_max_safe_height(),
            suction_capacity: SuctionCapacity::default(),
        }
    }
}

impl SweeperConfig {
    /// Load configuration from a YAML file; absent fields take defaults.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| LoadError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Energy charged for one suction stroke at `pressure`.
    pub fn vacuum_power(&self, pressure: Pressure) -> f64 {
        match pressure {
            Pressure::Low => self.low_vacuum_power,
            Pressure::High => self.high_vacuum_power,
        }
    }
}
