//! Cutting tool definitions.
//!
//! Each tool variant carries its own geometry fields; effective diameter,
//! effective flute count, and the force/power factors dispatch by exhaustive
//! match so a new variant cannot be added without deciding all of them.

use serde::{Deserialize, Serialize};

/// Engagement depth assumed for pointed tools (V-bits, chamfer mills,
/// tapered mills) when deriving an effective cutting diameter, mm.
pub const POINT_TOOL_ENGAGEMENT_MM: f64 = 1.0;

/// Tool geometry, discriminated by tool type.
///
/// All dimensions in mm, angles in degrees. For V-bits and chamfer mills
/// `angle` is the included angle; for tapered mills `taper_angle` is per side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolKind {
    FlatEndMill { diameter: f64, flutes: u32 },
    BallEndMill { diameter: f64, flutes: u32 },
    Chamfer { diameter: f64, tip_diameter: f64, angle: f64, flutes: u32 },
    VBit { diameter: f64, tip_diameter: f64, angle: f64, flutes: u32 },
    FaceMill { diameter: f64, inserts: u32 },
    Drill { diameter: f64 },
    ThreadMill { diameter: f64, flutes: u32 },
    Tapered { tip_diameter: f64, taper_angle: f64, flutes: u32 },
    Boring { diameter: f64 },
    Slitting { diameter: f64, teeth: u32, width: f64 },
}

/// Fieldless tool classification, used as a catalog key (chip-load
/// multipliers are stored per class).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolClass {
    FlatEndMill,
    BallEndMill,
    Chamfer,
    VBit,
    FaceMill,
    Drill,
    ThreadMill,
    Tapered,
    Boring,
    Slitting,
}

impl ToolKind {
    pub fn class(&self) -> ToolClass {
        match self {
            ToolKind::FlatEndMill { .. } => ToolClass::FlatEndMill,
            ToolKind::BallEndMill { .. } => ToolClass::BallEndMill,
            ToolKind::Chamfer { .. } => ToolClass::Chamfer,
            ToolKind::VBit { .. } => ToolClass::VBit,
            ToolKind::FaceMill { .. } => ToolClass::FaceMill,
            ToolKind::Drill { .. } => ToolClass::Drill,
            ToolKind::ThreadMill { .. } => ToolClass::ThreadMill,
            ToolKind::Tapered { .. } => ToolClass::Tapered,
            ToolKind::Boring { .. } => ToolClass::Boring,
            ToolKind::Slitting { .. } => ToolClass::Slitting,
        }
    }

    /// Nominal cutting diameter, mm. For tapered mills this is the tip.
    pub fn diameter(&self) -> f64 {
        match *self {
            ToolKind::FlatEndMill { diameter, .. }
            | ToolKind::BallEndMill { diameter, .. }
            | ToolKind::Chamfer { diameter, .. }
            | ToolKind::VBit { diameter, .. }
            | ToolKind::FaceMill { diameter, .. }
            | ToolKind::Drill { diameter }
            | ToolKind::ThreadMill { diameter, .. }
            | ToolKind::Boring { diameter }
            | ToolKind::Slitting { diameter, .. } => diameter,
            ToolKind::Tapered { tip_diameter, .. } => tip_diameter,
        }
    }

    /// Diameter actually doing the cutting, mm.
    ///
    /// Pointed tools cut on their flanks, so the working diameter grows with
    /// engagement depth; it is evaluated at [`POINT_TOOL_ENGAGEMENT_MM`] and
    /// capped at the shank-side maximum where one exists.
    pub fn effective_diameter(&self) -> f64 {
        match *self {
            ToolKind::VBit { diameter, tip_diameter, angle, .. }
            | ToolKind::Chamfer { diameter, tip_diameter, angle, .. } => {
                let flank = (angle.to_radians() / 2.0).tan();
                (tip_diameter + 2.0 * POINT_TOOL_ENGAGEMENT_MM * flank).min(diameter)
            }
            ToolKind::Tapered { tip_diameter, taper_angle, .. } => {
                tip_diameter + 2.0 * POINT_TOOL_ENGAGEMENT_MM * taper_angle.to_radians().tan()
            }
            _ => self.diameter(),
        }
    }

    /// Number of cutting edges in the feed calculation.
    pub fn effective_flutes(&self) -> u32 {
        match *self {
            ToolKind::FlatEndMill { flutes, .. }
            | ToolKind::BallEndMill { flutes, .. }
            | ToolKind::Chamfer { flutes, .. }
            | ToolKind::VBit { flutes, .. }
            | ToolKind::ThreadMill { flutes, .. }
            | ToolKind::Tapered { flutes, .. } => flutes,
            ToolKind::FaceMill { inserts, .. } => inserts,
            ToolKind::Drill { .. } => 2,
            ToolKind::Boring { .. } => 1,
            ToolKind::Slitting { teeth, .. } => teeth,
        }
    }

    /// Multiplier on cutting force for the tool geometry.
    ///
    /// Drills push with the full web; pointed and facing cutters shed force
    /// through their lead angle.
    pub fn force_factor(&self) -> f64 {
        match self {
            ToolKind::Drill { .. } => 1.5,
            ToolKind::VBit { .. } | ToolKind::Chamfer { .. } => 0.7,
            ToolKind::FaceMill { .. } => 0.6,
            _ => 1.0,
        }
    }

    /// Multiplier on required cutting power for the tool geometry.
    pub fn power_factor(&self) -> f64 {
        match self {
            ToolKind::Drill { .. } => 1.25,
            ToolKind::Boring { .. } | ToolKind::Slitting { .. } => 1.1,
            ToolKind::VBit { .. } | ToolKind::Chamfer { .. } => 0.8,
            ToolKind::FaceMill { .. } => 0.9,
            _ => 1.0,
        }
    }

    /// Whether the deflection model applies. Only slender-shank tools are
    /// modeled; insert cutters and drills are treated as rigid.
    pub fn models_deflection(&self) -> bool {
        matches!(
            self,
            ToolKind::FlatEndMill { .. } | ToolKind::BallEndMill { .. } | ToolKind::Tapered { .. }
        )
    }
}

/// Cutting tool substrate material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolMaterial {
    Hss,
    Cobalt,
    Carbide,
}

impl ToolMaterial {
    /// Young's modulus, N/mm².
    pub fn youngs_modulus(&self) -> f64 {
        match self {
            ToolMaterial::Carbide => 620_000.0,
            ToolMaterial::Cobalt => 230_000.0,
            ToolMaterial::Hss => 217_500.0,
        }
    }
}

impl std::fmt::Display for ToolMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolMaterial::Hss => write!(f, "HSS"),
            ToolMaterial::Cobalt => write!(f, "Cobalt"),
            ToolMaterial::Carbide => write!(f, "Carbide"),
        }
    }
}

/// Tool coating. Coated tools sustain a higher surface speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coating {
    TiN,
    TiCN,
    TiAlN,
    AlTiN,
    Diamond,
}

impl Coating {
    pub fn speed_factor(&self) -> f64 {
        match self {
            Coating::TiN => 1.1,
            Coating::TiCN => 1.15,
            Coating::TiAlN => 1.2,
            Coating::AlTiN => 1.25,
            Coating::Diamond => 1.3,
        }
    }
}

/// How the tool is held. Each holder contributes a lumped compliance term to
/// the deflection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holder {
    Collet,
    ShrinkFit,
    Hydraulic,
    PoorSetup,
}

impl Holder {
    /// Empirical holder compliance, mm/N.
    pub fn compliance(&self) -> f64 {
        match self {
            Holder::ShrinkFit => 5.0e-6,
            Holder::Hydraulic => 1.0e-5,
            Holder::Collet => 2.0e-5,
            Holder::PoorSetup => 1.0e-4,
        }
    }
}

/// A complete tool: cutting geometry plus the shank and holding data the
/// deflection model needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub kind: ToolKind,
    pub material: ToolMaterial,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coating: Option<Coating>,
    /// Shank diameter, mm.
    pub shank_diameter: f64,
    /// Stickout from holder face to tip, mm.
    pub stickout: f64,
    pub holder: Holder,
}

impl Tool {
    /// Surface speed multiplier from the coating (1.0 uncoated).
    pub fn speed_factor(&self) -> f64 {
        self.coating.map(|c| c.speed_factor()).unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(diameter: f64, flutes: u32) -> ToolKind {
        ToolKind::FlatEndMill { diameter, flutes }
    }

    #[test]
    fn test_effective_diameter_plain_tools() {
        assert_eq!(flat(6.0, 3).effective_diameter(), 6.0);
        assert_eq!(ToolKind::Drill { diameter: 5.0 }.effective_diameter(), 5.0);
        assert_eq!(
            ToolKind::FaceMill { diameter: 50.0, inserts: 4 }.effective_diameter(),
            50.0
        );
    }

    #[test]
    fn test_effective_diameter_vbit() {
        // 90° included angle: flank tan(45°) = 1, so d_eff = tip + 2×1mm
        let vbit = ToolKind::VBit {
            diameter: 12.7,
            tip_diameter: 0.1,
            angle: 90.0,
            flutes: 1,
        };
        let d = vbit.effective_diameter();
        assert!((d - 2.1).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn test_effective_diameter_vbit_capped_at_max() {
        // Steep angle and small max diameter: flank growth exceeds the body
        let vbit = ToolKind::VBit {
            diameter: 1.5,
            tip_diameter: 0.2,
            angle: 120.0,
            flutes: 1,
        };
        assert_eq!(vbit.effective_diameter(), 1.5);
    }

    #[test]
    fn test_effective_diameter_tapered() {
        let taper = ToolKind::Tapered { tip_diameter: 3.0, taper_angle: 5.0, flutes: 2 };
        let expected = 3.0 + 2.0 * (5.0f64.to_radians()).tan();
        assert!((taper.effective_diameter() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_effective_flutes() {
        assert_eq!(flat(6.0, 3).effective_flutes(), 3);
        assert_eq!(ToolKind::Drill { diameter: 5.0 }.effective_flutes(), 2);
        assert_eq!(ToolKind::Boring { diameter: 10.0 }.effective_flutes(), 1);
        assert_eq!(
            ToolKind::Slitting { diameter: 63.0, teeth: 30, width: 1.5 }.effective_flutes(),
            30
        );
        assert_eq!(
            ToolKind::FaceMill { diameter: 50.0, inserts: 5 }.effective_flutes(),
            5
        );
    }

    #[test]
    fn test_force_factors() {
        assert_eq!(ToolKind::Drill { diameter: 5.0 }.force_factor(), 1.5);
        assert_eq!(
            ToolKind::FaceMill { diameter: 50.0, inserts: 4 }.force_factor(),
            0.6
        );
        assert_eq!(flat(6.0, 3).force_factor(), 1.0);
    }

    #[test]
    fn test_carbide_much_stiffer_than_hss() {
        let ratio = ToolMaterial::Carbide.youngs_modulus() / ToolMaterial::Hss.youngs_modulus();
        assert!((ratio - 2.85).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn test_holder_compliance_ordering() {
        assert!(Holder::ShrinkFit.compliance() < Holder::Hydraulic.compliance());
        assert!(Holder::Hydraulic.compliance() < Holder::Collet.compliance());
        assert!(Holder::Collet.compliance() < Holder::PoorSetup.compliance());
    }

    #[test]
    fn test_tool_kind_serde_tagged() {
        let kind = flat(6.0, 3);
        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains("\"type\":\"flat_end_mill\""), "{json}");
        let back: ToolKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}
