//! Machine and spindle presets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Overall spindle efficiency applied to the availability curve.
pub const SPINDLE_EFFICIENCY: f64 = 0.85;

/// Per-axis feed-rate ceilings, mm/min.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisFeeds {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AxisFeeds {
    /// The binding ceiling: a cut may move on any axis, so the slowest one
    /// governs.
    pub fn min(&self) -> f64 {
        self.x.min(self.y).min(self.z)
    }
}

/// Per-axis aggressiveness multipliers applied to resolved engagement and
/// chip load. Below 1.0 derates a flexible machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aggressiveness {
    pub radial: f64,
    pub axial: f64,
    pub feed: f64,
}

impl Default for Aggressiveness {
    fn default() -> Self {
        Aggressiveness { radial: 1.0, axial: 1.0, feed: 1.0 }
    }
}

/// A machine frame: feed limits, rigidity, and how hard it can be pushed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub name: String,
    pub max_feed: AxisFeeds,
    /// Rigidity factor K scaling required cutting power, typically 0.5–2.0.
    pub rigidity: f64,
    #[serde(default)]
    pub aggressiveness: Aggressiveness,
}

/// A spindle: rated power and the piecewise power-availability curve.
///
/// Below `base_rpm` the spindle is torque-limited and available power falls
/// off toward low RPM; at and above `base_rpm` it holds rated power.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spindle {
    pub name: String,
    /// Rated power, kW.
    pub power_kw: f64,
    pub rpm_min: f64,
    pub rpm_max: f64,
    /// Boundary between the constant-torque and constant-power regions.
    pub base_rpm: f64,
}

impl Spindle {
    /// Available power at an operating RPM, kW.
    ///
    /// Constant-torque region: rated × (rpm / base) × a torque ratio ramping
    /// from zero at 1.5 × rpm_min up to 1 at base RPM. Constant-power region:
    /// rated. Both scaled by [`SPINDLE_EFFICIENCY`]; zero outside the
    /// operating range.
    pub fn available_power_kw(&self, rpm: f64) -> f64 {
        if rpm < self.rpm_min || rpm > self.rpm_max {
            return 0.0;
        }
        let power = if rpm >= self.base_rpm {
            self.power_kw
        } else {
            let ramp_start = self.rpm_min * 1.5;
            let span = self.base_rpm - ramp_start;
            let torque_ratio = if span > 0.0 {
                ((rpm - ramp_start) / span).clamp(0.0, 1.0)
            } else {
                1.0
            };
            self.power_kw * (rpm / self.base_rpm) * torque_ratio
        };
        power * SPINDLE_EFFICIENCY
    }
}

/// Built-in machine presets.
pub fn builtin_machines() -> HashMap<String, Machine> {
    let mut machines = HashMap::new();

    machines.insert("hobby_router".to_string(), Machine {
        name: "Hobby CNC Router".to_string(),
        max_feed: AxisFeeds { x: 2500.0, y: 2500.0, z: 1000.0 },
        rigidity: 0.6,
        aggressiveness: Aggressiveness { radial: 0.8, axial: 0.8, feed: 0.9 },
    });

    machines.insert("benchtop_mill".to_string(), Machine {
        name: "Benchtop Mill".to_string(),
        max_feed: AxisFeeds { x: 1200.0, y: 1200.0, z: 800.0 },
        rigidity: 0.9,
        aggressiveness: Aggressiveness { radial: 0.9, axial: 0.9, feed: 1.0 },
    });

    machines.insert("vmc".to_string(), Machine {
        name: "Vertical Machining Center".to_string(),
        max_feed: AxisFeeds { x: 10000.0, y: 10000.0, z: 8000.0 },
        rigidity: 1.5,
        aggressiveness: Aggressiveness::default(),
    });

    machines
}

/// Built-in spindle presets.
pub fn builtin_spindles() -> HashMap<String, Spindle> {
    let mut spindles = HashMap::new();

    spindles.insert("trim_router".to_string(), Spindle {
        name: "0.8 kW Trim Router".to_string(),
        power_kw: 0.8,
        rpm_min: 10000.0,
        rpm_max: 30000.0,
        base_rpm: 18000.0,
    });

    spindles.insert("spindle_2_2kw".to_string(), Spindle {
        name: "2.2 kW Air-Cooled Spindle".to_string(),
        power_kw: 2.2,
        rpm_min: 6000.0,
        rpm_max: 24000.0,
        base_rpm: 12000.0,
    });

    spindles.insert("vmc_cat40".to_string(), Spindle {
        name: "7.5 kW CAT40 Spindle".to_string(),
        power_kw: 7.5,
        rpm_min: 100.0,
        rpm_max: 10000.0,
        base_rpm: 1500.0,
    });

    spindles
}
