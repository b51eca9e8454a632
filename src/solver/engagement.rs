//! Engagement resolution: cut geometry to radial/axial engagement.

use crate::catalog::tools::POINT_TOOL_ENGAGEMENT_MM;
use crate::catalog::{Aggressiveness, CutDefinition, CutType, Material, Tool, ToolKind};

use super::Warning;

/// Resolved engagement, mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Engagement {
    /// Radial engagement (width of cut).
    pub ae: f64,
    /// Axial engagement (depth of cut).
    pub ap: f64,
}

/// Resolve radial and axial engagement for the tool and cut strategy.
///
/// Never fails: missing fraction data has already been defaulted to full
/// engagement by the catalog accessors.
pub(crate) fn resolve(
    tool: &Tool,
    material: &Material,
    cut_type: CutType,
    cut: &CutDefinition,
    aggressiveness: &Aggressiveness,
    doc_override: Option<f64>,
    warnings: &mut Vec<Warning>,
) -> Engagement {
    let diameter = tool.kind.diameter();
    let limits = material.engagement_limits(cut_type);

    let computed = match tool.kind {
        // Drills are fully engaged radially; half-diameter pecks are a safe
        // baseline regardless of strategy.
        ToolKind::Drill { diameter } => Engagement { ae: diameter, ap: 0.5 * diameter },

        // Pointed tools engrave at a fixed assumed depth; the width follows
        // from the tip and the included angle.
        ToolKind::VBit { .. } => Engagement {
            ae: tool.kind.effective_diameter(),
            ap: POINT_TOOL_ENGAGEMENT_MM,
        },

        _ => {
            let ap = (diameter * cut.nominal_axial_fraction())
                .min(diameter * limits.max_axial_fraction)
                * aggressiveness.axial;

            // Slotting is full width by definition; no derating applies.
            let ae = if cut_type == CutType::Slot {
                diameter
            } else {
                (diameter * cut.nominal_radial_fraction())
                    .min(diameter * limits.max_radial_fraction)
                    * aggressiveness.radial
            };

            Engagement { ae, ap }
        }
    };

    match doc_override {
        Some(doc) => {
            let max_ap = diameter * limits.max_axial_fraction;
            if doc > max_ap {
                warnings.push(Warning::warning(format!(
                    "Depth of cut {doc:.2} mm exceeds the recommended maximum {max_ap:.2} mm for {}",
                    material.name
                )));
            }
            Engagement { ae: computed.ae, ap: doc }
        }
        None => computed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_cuts, builtin_materials, Holder, ToolMaterial};

    fn tool(kind: ToolKind) -> Tool {
        Tool {
            kind,
            material: ToolMaterial::Carbide,
            coating: None,
            shank_diameter: 6.0,
            stickout: 20.0,
            holder: Holder::Collet,
        }
    }

    fn aluminum() -> Material {
        builtin_materials().remove("Aluminum 6061").unwrap()
    }

    fn cut(cut_type: CutType) -> CutDefinition {
        builtin_cuts().remove(&cut_type).unwrap()
    }

    #[test]
    fn test_drill_heuristic() {
        let mut w = Vec::new();
        let eng = resolve(
            &tool(ToolKind::Drill { diameter: 5.0 }),
            &aluminum(),
            CutType::Drilling,
            &cut(CutType::Drilling),
            &Aggressiveness::default(),
            None,
            &mut w,
        );
        assert_eq!(eng.ae, 5.0);
        assert_eq!(eng.ap, 2.5);
        assert!(w.is_empty());
    }

    #[test]
    fn test_vbit_fixed_depth() {
        let mut w = Vec::new();
        let kind = ToolKind::VBit { diameter: 12.7, tip_diameter: 0.1, angle: 90.0, flutes: 1 };
        let eng = resolve(
            &tool(kind.clone()),
            &aluminum(),
            CutType::Profile,
            &cut(CutType::Profile),
            &Aggressiveness::default(),
            None,
            &mut w,
        );
        assert_eq!(eng.ap, POINT_TOOL_ENGAGEMENT_MM);
        assert_eq!(eng.ae, kind.effective_diameter());
    }

    #[test]
    fn test_slot_is_full_width() {
        let mut w = Vec::new();
        let eng = resolve(
            &tool(ToolKind::FlatEndMill { diameter: 6.0, flutes: 3 }),
            &aluminum(),
            CutType::Slot,
            &cut(CutType::Slot),
            &Aggressiveness::default(),
            None,
            &mut w,
        );
        assert_eq!(eng.ae, 6.0);
        // nominal 0.375 vs aluminum slot max 0.5: nominal wins
        assert!((eng.ap - 6.0 * 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_material_limit_clamps_axial() {
        // Adaptive nominal ap fraction is 1.5; aluminum caps adaptive at 2.0,
        // titanium at 1.0
        let mut w = Vec::new();
        let ti = builtin_materials().remove("Titanium Ti-6Al-4V").unwrap();
        let eng = resolve(
            &tool(ToolKind::FlatEndMill { diameter: 6.0, flutes: 3 }),
            &ti,
            CutType::Adaptive,
            &cut(CutType::Adaptive),
            &Aggressiveness::default(),
            None,
            &mut w,
        );
        assert!((eng.ap - 6.0).abs() < 1e-12, "expected 6×1.0, got {}", eng.ap);
    }

    #[test]
    fn test_axial_aggressiveness_scales() {
        let mut w = Vec::new();
        let aggr = Aggressiveness { radial: 1.0, axial: 0.5, feed: 1.0 };
        let eng = resolve(
            &tool(ToolKind::FlatEndMill { diameter: 6.0, flutes: 3 }),
            &aluminum(),
            CutType::Slot,
            &cut(CutType::Slot),
            &aggr,
            None,
            &mut w,
        );
        assert!((eng.ap - 6.0 * 0.375 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_doc_override_replaces_ap() {
        let mut w = Vec::new();
        let eng = resolve(
            &tool(ToolKind::FlatEndMill { diameter: 6.0, flutes: 3 }),
            &aluminum(),
            CutType::Slot,
            &cut(CutType::Slot),
            &Aggressiveness::default(),
            Some(1.2),
            &mut w,
        );
        assert_eq!(eng.ap, 1.2);
        assert!(w.is_empty(), "override within limits should not warn");
    }

    #[test]
    fn test_doc_override_above_limit_warns_but_applies() {
        let mut w = Vec::new();
        // aluminum slot max axial fraction 0.5 → 3.0mm ceiling on a 6mm tool
        let eng = resolve(
            &tool(ToolKind::FlatEndMill { diameter: 6.0, flutes: 3 }),
            &aluminum(),
            CutType::Slot,
            &cut(CutType::Slot),
            &Aggressiveness::default(),
            Some(8.0),
            &mut w,
        );
        assert_eq!(eng.ap, 8.0);
        assert_eq!(w.len(), 1);
        assert!(w[0].message.contains("exceeds the recommended maximum"));
    }

    #[test]
    fn test_unknown_limits_default_to_full_engagement() {
        let mut w = Vec::new();
        let mut mat = aluminum();
        mat.engagement_limits.clear();
        let eng = resolve(
            &tool(ToolKind::FlatEndMill { diameter: 6.0, flutes: 3 }),
            &mat,
            CutType::Profile,
            &cut(CutType::Profile),
            &Aggressiveness::default(),
            None,
            &mut w,
        );
        // profile nominal fractions: radial 0.175, axial 1.0; nothing clamps
        assert!((eng.ae - 6.0 * 0.175).abs() < 1e-12);
        assert!((eng.ap - 6.0).abs() < 1e-12);
    }
}
