//! Material database.
//!
//! Cutting data derived from the usual shop references: Machinery's Handbook,
//! manufacturer speed/feed charts, and community data. All values metric:
//! surface speed m/min, chip load mm/tooth, force coefficient kN/mm²,
//! specific cutting energy J/mm³.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::cuts::CutType;
use super::tools::ToolClass;

/// One row of the chip-load table: the recommended feed-per-tooth range for
/// tools up to `max_diameter`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChipLoadBucket {
    /// Upper diameter breakpoint, mm.
    pub max_diameter: f64,
    /// (min, max) chip load, mm/tooth.
    pub chip_load: (f64, f64),
}

/// Per-cut-type engagement ceilings, as fractions of tool diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementLimits {
    pub max_radial_fraction: f64,
    pub max_axial_fraction: f64,
}

impl EngagementLimits {
    /// Fallback for cut types without tabulated limits: no restriction.
    pub fn unrestricted() -> Self {
        EngagementLimits { max_radial_fraction: 1.0, max_axial_fraction: 1.0 }
    }
}

/// Chip load range assumed when a material carries no table at all.
const FALLBACK_CHIP_LOAD: (f64, f64) = (0.01, 0.02);

/// Complete cutting data for one workpiece material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Recommended surface speed range (min, max), m/min.
    pub surface_speed: (f64, f64),
    /// Chip load by tool diameter, ordered by ascending breakpoint.
    pub chip_loads: Vec<ChipLoadBucket>,
    /// Chip-load multiplier per tool class; absent classes default to 1.0.
    pub tool_factors: HashMap<ToolClass, f64>,
    /// Engagement ceilings per cut type; absent cut types are unrestricted.
    pub engagement_limits: HashMap<CutType, EngagementLimits>,
    /// Radial engagement fraction below which chip thinning compensation
    /// applies. None disables the correction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chip_thinning_threshold: Option<f64>,
    /// Cutting force coefficient, kN/mm².
    pub force_coefficient: f64,
    /// Specific cutting energy, J/mm³.
    pub specific_energy: f64,
}

impl Material {
    pub fn surface_speed_midpoint(&self) -> f64 {
        (self.surface_speed.0 + self.surface_speed.1) / 2.0
    }

    /// Chip load range for a tool diameter: first bucket whose breakpoint is
    /// at or above the diameter, else the last bucket.
    pub fn chip_load_range(&self, diameter: f64) -> (f64, f64) {
        self.chip_loads
            .iter()
            .find(|b| b.max_diameter >= diameter)
            .or_else(|| self.chip_loads.last())
            .map(|b| b.chip_load)
            .unwrap_or(FALLBACK_CHIP_LOAD)
    }

    /// Chip-load multiplier for a tool class (1.0 when untabulated).
    pub fn tool_factor(&self, class: ToolClass) -> f64 {
        self.tool_factors.get(&class).copied().unwrap_or(1.0)
    }

    /// Engagement ceilings for a cut type (unrestricted when untabulated).
    pub fn engagement_limits(&self, cut: CutType) -> EngagementLimits {
        self.engagement_limits
            .get(&cut)
            .copied()
            .unwrap_or_else(EngagementLimits::unrestricted)
    }
}

fn limits(entries: &[(CutType, f64, f64)]) -> HashMap<CutType, EngagementLimits> {
    entries
        .iter()
        .map(|&(ct, r, a)| {
            (ct, EngagementLimits { max_radial_fraction: r, max_axial_fraction: a })
        })
        .collect()
}

fn factors(entries: &[(ToolClass, f64)]) -> HashMap<ToolClass, f64> {
    entries.iter().copied().collect()
}

fn buckets(entries: &[(f64, f64, f64)]) -> Vec<ChipLoadBucket> {
    entries
        .iter()
        .map(|&(max_diameter, lo, hi)| ChipLoadBucket { max_diameter, chip_load: (lo, hi) })
        .collect()
}

/// Load the built-in material database.
pub fn builtin_materials() -> HashMap<String, Material> {
    let mut db = HashMap::new();

    // NON-FERROUS
    // ===========

    db.insert("Aluminum 6061".to_string(), Material {
        name: "Aluminum 6061".to_string(),
        surface_speed: (250.0, 600.0),
        chip_loads: buckets(&[
            (1.0, 0.002, 0.008),
            (2.0, 0.005, 0.015),
            (3.0, 0.010, 0.030),
            (6.0, 0.020, 0.060),
            (10.0, 0.030, 0.090),
            (16.0, 0.040, 0.120),
            (25.0, 0.050, 0.150),
        ]),
        tool_factors: factors(&[
            (ToolClass::BallEndMill, 0.8),
            (ToolClass::Drill, 1.2),
            (ToolClass::VBit, 0.5),
            (ToolClass::Chamfer, 0.7),
            (ToolClass::FaceMill, 1.2),
            (ToolClass::Slitting, 0.4),
        ]),
        engagement_limits: limits(&[
            (CutType::Slot, 1.0, 0.5),
            (CutType::Profile, 0.3, 1.5),
            (CutType::Adaptive, 0.15, 2.0),
            (CutType::Facing, 0.75, 0.2),
            (CutType::Drilling, 1.0, 1.0),
        ]),
        chip_thinning_threshold: Some(0.5),
        force_coefficient: 0.7,
        specific_energy: 0.7,
    });

    db.insert("Aluminum 7075".to_string(), Material {
        name: "Aluminum 7075".to_string(),
        surface_speed: (230.0, 550.0),
        chip_loads: buckets(&[
            (1.0, 0.002, 0.008),
            (2.0, 0.005, 0.015),
            (3.0, 0.010, 0.025),
            (6.0, 0.018, 0.050),
            (10.0, 0.025, 0.080),
            (16.0, 0.035, 0.100),
            (25.0, 0.045, 0.130),
        ]),
        tool_factors: factors(&[
            (ToolClass::BallEndMill, 0.8),
            (ToolClass::Drill, 1.2),
            (ToolClass::VBit, 0.5),
            (ToolClass::FaceMill, 1.2),
        ]),
        engagement_limits: limits(&[
            (CutType::Slot, 1.0, 0.4),
            (CutType::Profile, 0.25, 1.2),
            (CutType::Adaptive, 0.12, 1.8),
            (CutType::Facing, 0.75, 0.15),
        ]),
        chip_thinning_threshold: Some(0.5),
        force_coefficient: 0.75,
        specific_energy: 0.75,
    });

    db.insert("Brass C360".to_string(), Material {
        name: "Brass C360".to_string(),
        surface_speed: (200.0, 500.0),
        chip_loads: buckets(&[
            (1.0, 0.002, 0.006),
            (2.0, 0.004, 0.012),
            (3.0, 0.008, 0.020),
            (6.0, 0.015, 0.045),
            (10.0, 0.020, 0.070),
            (16.0, 0.030, 0.090),
            (25.0, 0.040, 0.110),
        ]),
        tool_factors: factors(&[
            (ToolClass::BallEndMill, 0.85),
            (ToolClass::Drill, 1.1),
            (ToolClass::Slitting, 0.5),
        ]),
        engagement_limits: limits(&[
            (CutType::Slot, 1.0, 0.5),
            (CutType::Profile, 0.35, 1.5),
            (CutType::Adaptive, 0.15, 2.0),
            (CutType::Facing, 0.75, 0.2),
        ]),
        chip_thinning_threshold: None,
        force_coefficient: 0.8,
        specific_energy: 0.8,
    });

    // STEELS
    // ======

    db.insert("Steel 1018".to_string(), Material {
        name: "Steel 1018".to_string(),
        surface_speed: (80.0, 180.0),
        chip_loads: buckets(&[
            (1.0, 0.001, 0.004),
            (2.0, 0.003, 0.008),
            (3.0, 0.005, 0.015),
            (6.0, 0.010, 0.030),
            (10.0, 0.015, 0.050),
            (16.0, 0.020, 0.070),
            (25.0, 0.030, 0.090),
        ]),
        tool_factors: factors(&[
            (ToolClass::BallEndMill, 0.75),
            (ToolClass::Drill, 1.1),
            (ToolClass::VBit, 0.4),
            (ToolClass::Chamfer, 0.6),
            (ToolClass::FaceMill, 1.1),
            (ToolClass::Slitting, 0.35),
            (ToolClass::ThreadMill, 0.6),
        ]),
        engagement_limits: limits(&[
            (CutType::Slot, 1.0, 0.3),
            (CutType::Profile, 0.25, 1.0),
            (CutType::Adaptive, 0.1, 1.5),
            (CutType::Facing, 0.75, 0.15),
            (CutType::Drilling, 1.0, 1.0),
        ]),
        chip_thinning_threshold: Some(0.5),
        force_coefficient: 2.0,
        specific_energy: 2.0,
    });

    db.insert("Steel 4140".to_string(), Material {
        name: "Steel 4140".to_string(),
        surface_speed: (60.0, 140.0),
        chip_loads: buckets(&[
            (1.0, 0.001, 0.003),
            (2.0, 0.002, 0.006),
            (3.0, 0.004, 0.012),
            (6.0, 0.008, 0.025),
            (10.0, 0.012, 0.040),
            (16.0, 0.018, 0.055),
            (25.0, 0.025, 0.070),
        ]),
        tool_factors: factors(&[
            (ToolClass::BallEndMill, 0.75),
            (ToolClass::Drill, 1.0),
            (ToolClass::VBit, 0.4),
            (ToolClass::FaceMill, 1.0),
            (ToolClass::Slitting, 0.3),
        ]),
        engagement_limits: limits(&[
            (CutType::Slot, 1.0, 0.25),
            (CutType::Profile, 0.2, 0.8),
            (CutType::Adaptive, 0.1, 1.2),
            (CutType::Facing, 0.6, 0.12),
        ]),
        chip_thinning_threshold: Some(0.5),
        force_coefficient: 2.6,
        specific_energy: 2.6,
    });

    // STAINLESS
    // =========

    db.insert("Stainless 304".to_string(), Material {
        name: "Stainless 304".to_string(),
        surface_speed: (40.0, 120.0),
        chip_loads: buckets(&[
            (1.0, 0.001, 0.003),
            (2.0, 0.002, 0.005),
            (3.0, 0.003, 0.010),
            (6.0, 0.006, 0.020),
            (10.0, 0.010, 0.035),
            (16.0, 0.015, 0.050),
            (25.0, 0.020, 0.065),
        ]),
        tool_factors: factors(&[
            (ToolClass::BallEndMill, 0.7),
            (ToolClass::Drill, 1.0),
            (ToolClass::VBit, 0.35),
            (ToolClass::Slitting, 0.3),
        ]),
        engagement_limits: limits(&[
            (CutType::Slot, 1.0, 0.25),
            (CutType::Profile, 0.2, 0.8),
            (CutType::Adaptive, 0.1, 1.2),
            (CutType::Facing, 0.6, 0.1),
        ]),
        chip_thinning_threshold: Some(0.5),
        force_coefficient: 2.8,
        specific_energy: 2.8,
    });

    // TITANIUM
    // ========

    db.insert("Titanium Ti-6Al-4V".to_string(), Material {
        name: "Titanium Ti-6Al-4V".to_string(),
        surface_speed: (9.0, 37.0),
        chip_loads: buckets(&[
            (1.0, 0.001, 0.003),
            (2.0, 0.002, 0.005),
            (3.0, 0.003, 0.008),
            (6.0, 0.005, 0.015),
            (10.0, 0.008, 0.025),
            (16.0, 0.012, 0.035),
            (25.0, 0.015, 0.045),
        ]),
        tool_factors: factors(&[
            (ToolClass::BallEndMill, 0.7),
            (ToolClass::Drill, 0.9),
            (ToolClass::VBit, 0.3),
            (ToolClass::Slitting, 0.25),
        ]),
        engagement_limits: limits(&[
            (CutType::Slot, 1.0, 0.2),
            (CutType::Profile, 0.15, 0.8),
            (CutType::Adaptive, 0.08, 1.0),
            (CutType::Facing, 0.5, 0.1),
        ]),
        chip_thinning_threshold: Some(0.5),
        force_coefficient: 2.2,
        specific_energy: 2.2,
    });

    // PLASTICS
    // ========

    db.insert("Acrylic".to_string(), Material {
        name: "Acrylic".to_string(),
        surface_speed: (300.0, 800.0),
        chip_loads: buckets(&[
            (1.0, 0.005, 0.015),
            (2.0, 0.010, 0.030),
            (3.0, 0.020, 0.060),
            (6.0, 0.050, 0.150),
            (10.0, 0.080, 0.200),
            (16.0, 0.100, 0.250),
            (25.0, 0.120, 0.300),
        ]),
        tool_factors: factors(&[
            (ToolClass::Drill, 1.3),
            (ToolClass::VBit, 0.6),
        ]),
        engagement_limits: limits(&[
            (CutType::Slot, 1.0, 1.0),
            (CutType::Profile, 0.5, 2.0),
            (CutType::Adaptive, 0.25, 2.5),
            (CutType::Facing, 0.8, 0.3),
        ]),
        chip_thinning_threshold: None,
        force_coefficient: 0.2,
        specific_energy: 0.2,
    });

    db
}
