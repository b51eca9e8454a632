//! Cut type definitions.
//!
//! A [`CutDefinition`] gives the nominal engagement envelope for a cut
//! strategy before any material-specific clamping, plus the surface-speed
//! factor the strategy sustains (adaptive clearing tolerates more speed than
//! full-width slotting).

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutType {
    Slot,
    Profile,
    Adaptive,
    Facing,
    Drilling,
}

impl CutType {
    pub const ALL: [CutType; 5] = [
        CutType::Slot,
        CutType::Profile,
        CutType::Adaptive,
        CutType::Facing,
        CutType::Drilling,
    ];
}

impl std::fmt::Display for CutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CutType::Slot => write!(f, "slot"),
            CutType::Profile => write!(f, "profile"),
            CutType::Adaptive => write!(f, "adaptive"),
            CutType::Facing => write!(f, "facing"),
            CutType::Drilling => write!(f, "drilling"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown cut type: {0} (expected slot, profile, adaptive, facing, or drilling)")]
pub struct UnknownCutType(pub String);

impl FromStr for CutType {
    type Err = UnknownCutType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slot" => Ok(CutType::Slot),
            "profile" => Ok(CutType::Profile),
            "adaptive" => Ok(CutType::Adaptive),
            "facing" | "face" => Ok(CutType::Facing),
            "drilling" | "drill" => Ok(CutType::Drilling),
            other => Err(UnknownCutType(other.to_string())),
        }
    }
}

/// Nominal engagement envelope for a cut strategy. Fractions are relative to
/// tool diameter; the solver uses the midpoint of each range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutDefinition {
    /// Radial engagement fraction range (ae / D).
    pub radial_fraction: (f64, f64),
    /// Axial engagement fraction range (ap / D).
    pub axial_fraction: (f64, f64),
    /// Surface speed multiplier for this strategy.
    pub speed_factor: f64,
}

impl CutDefinition {
    /// Fallback for an unknown cut type: full engagement, unscaled speed.
    pub fn permissive() -> Self {
        CutDefinition {
            radial_fraction: (1.0, 1.0),
            axial_fraction: (1.0, 1.0),
            speed_factor: 1.0,
        }
    }

    pub fn nominal_radial_fraction(&self) -> f64 {
        (self.radial_fraction.0 + self.radial_fraction.1) / 2.0
    }

    pub fn nominal_axial_fraction(&self) -> f64 {
        (self.axial_fraction.0 + self.axial_fraction.1) / 2.0
    }
}

/// Built-in cut strategy table.
pub fn builtin_cuts() -> HashMap<CutType, CutDefinition> {
    let mut cuts = HashMap::new();

    cuts.insert(
        CutType::Slot,
        CutDefinition {
            radial_fraction: (1.0, 1.0), // full width by definition
            axial_fraction: (0.25, 0.5),
            speed_factor: 0.8,
        },
    );

    cuts.insert(
        CutType::Profile,
        CutDefinition {
            radial_fraction: (0.1, 0.25),
            axial_fraction: (0.5, 1.5),
            speed_factor: 1.0,
        },
    );

    // Thin radial, deep axial, elevated speed: the chip-thinning strategy
    cuts.insert(
        CutType::Adaptive,
        CutDefinition {
            radial_fraction: (0.05, 0.15),
            axial_fraction: (1.0, 2.0),
            speed_factor: 1.3,
        },
    );

    cuts.insert(
        CutType::Facing,
        CutDefinition {
            radial_fraction: (0.5, 0.75),
            axial_fraction: (0.05, 0.2),
            speed_factor: 1.0,
        },
    );

    cuts.insert(
        CutType::Drilling,
        CutDefinition {
            radial_fraction: (1.0, 1.0),
            axial_fraction: (0.5, 0.5),
            speed_factor: 0.7,
        },
    );

    cuts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_all_cut_types() {
        let cuts = builtin_cuts();
        for ct in CutType::ALL {
            assert!(cuts.contains_key(&ct), "missing {ct}");
        }
    }

    #[test]
    fn test_nominal_fractions_are_midpoints() {
        let cuts = builtin_cuts();
        let slot = cuts[&CutType::Slot];
        assert_eq!(slot.nominal_axial_fraction(), 0.375);
        assert_eq!(slot.nominal_radial_fraction(), 1.0);
    }

    #[test]
    fn test_from_str_round_trip() {
        for ct in CutType::ALL {
            assert_eq!(ct.to_string().parse::<CutType>().unwrap(), ct);
        }
        assert!("trepanning".parse::<CutType>().is_err());
    }

    #[test]
    fn test_permissive_fallback_is_full_engagement() {
        let p = CutDefinition::permissive();
        assert_eq!(p.nominal_radial_fraction(), 1.0);
        assert_eq!(p.nominal_axial_fraction(), 1.0);
        assert_eq!(p.speed_factor, 1.0);
    }
}
