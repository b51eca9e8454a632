//! Cutting force and tool deflection.
//!
//! Force follows the specific-cutting-force approach: F = Kc × A, with A the
//! undeformed chip cross-section. Deflection models the tool as a cantilever
//! of the shank diameter with a shear term and a lumped holder compliance.

use crate::catalog::{Material, Tool};

use super::Warning;

/// Deflection at which chatter becomes likely, mm.
const DEFLECTION_WARNING_MM: f64 = 0.02;

/// Deflection at which breakage becomes likely, mm.
const DEFLECTION_DANGER_MM: f64 = 0.05;

/// Deflection breakdown, mm.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Deflection {
    pub bending: f64,
    pub shear: f64,
    pub holder: f64,
    pub total: f64,
}

impl Deflection {
    pub(crate) fn zero() -> Self {
        Deflection { bending: 0.0, shear: 0.0, holder: 0.0, total: 0.0 }
    }
}

/// Cutting force, N.
///
/// Kc (kN/mm²) × chip area (mm²) × 1000 = N, scaled by the tool geometry
/// factor.
pub(crate) fn cutting_force(tool: &Tool, material: &Material, ae: f64, chip_load: f64) -> f64 {
    material.force_coefficient * (ae * chip_load) * 1000.0 * tool.kind.force_factor()
}

/// Tool tip deflection under the cutting force.
///
/// Only slender-shank tools are modeled; insert cutters and drills return
/// zero. Emits a warning at 0.02 mm and a danger at 0.05 mm.
pub(crate) fn deflect(tool: &Tool, force_n: f64, warnings: &mut Vec<Warning>) -> Deflection {
    if !tool.kind.models_deflection() {
        return Deflection::zero();
    }

    let d = tool.shank_diameter;
    let l = tool.stickout;
    let e = tool.material.youngs_modulus();

    // Cantilever bending: F·L³ / (3·E·I), I = π·d⁴/64
    let second_moment = std::f64::consts::PI * d.powi(4) / 64.0;
    let bending = force_n * l.powi(3) / (3.0 * e * second_moment);

    // Shear (Timoshenko correction 1.2 for a solid circular section)
    let shear_modulus = e / 2.6;
    let area = std::f64::consts::PI * d * d / 4.0;
    let shear = 1.2 * force_n * l / (shear_modulus * area);

    let holder = force_n * tool.holder.compliance();

    let total = bending + shear + holder;
    if total >= DEFLECTION_DANGER_MM {
        warnings.push(Warning::danger(format!(
            "Tool deflection {total:.3} mm risks tool breakage"
        )));
    } else if total >= DEFLECTION_WARNING_MM {
        warnings.push(Warning::warning(format!(
            "Tool deflection {total:.3} mm may cause chatter and poor finish"
        )));
    }

    Deflection { bending, shear, holder, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Holder, ToolKind, ToolMaterial};
    use crate::solver::Severity;

    fn end_mill(shank: f64, stickout: f64, material: ToolMaterial) -> Tool {
        Tool {
            kind: ToolKind::FlatEndMill { diameter: shank, flutes: 2 },
            material,
            coating: None,
            shank_diameter: shank,
            stickout,
            holder: Holder::Collet,
        }
    }

    fn steel() -> Material {
        Material {
            name: "test".to_string(),
            surface_speed: (80.0, 180.0),
            chip_loads: Vec::new(),
            tool_factors: Default::default(),
            engagement_limits: Default::default(),
            chip_thinning_threshold: None,
            force_coefficient: 2.0,
            specific_energy: 2.0,
        }
    }

    #[test]
    fn test_force_formula() {
        let t = end_mill(6.0, 20.0, ToolMaterial::Carbide);
        // 2.0 kN/mm² × (3mm × 0.02mm) × 1000 = 120 N
        let f = cutting_force(&t, &steel(), 3.0, 0.02);
        assert!((f - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_drill_force_factor() {
        let mut t = end_mill(6.0, 20.0, ToolMaterial::Carbide);
        t.kind = ToolKind::Drill { diameter: 6.0 };
        let f = cutting_force(&t, &steel(), 3.0, 0.02);
        assert!((f - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_rigid_tools_do_not_deflect() {
        let mut w = Vec::new();
        let mut t = end_mill(22.0, 40.0, ToolMaterial::Carbide);
        t.kind = ToolKind::FaceMill { diameter: 50.0, inserts: 4 };
        let d = deflect(&t, 500.0, &mut w);
        assert_eq!(d.total, 0.0);
        assert!(w.is_empty());
    }

    #[test]
    fn test_deflection_increases_with_stickout() {
        let mut w = Vec::new();
        let short = deflect(&end_mill(6.0, 15.0, ToolMaterial::Carbide), 50.0, &mut w);
        let long = deflect(&end_mill(6.0, 30.0, ToolMaterial::Carbide), 50.0, &mut w);
        let longer = deflect(&end_mill(6.0, 45.0, ToolMaterial::Carbide), 50.0, &mut w);
        assert!(short.total < long.total);
        assert!(long.total < longer.total);
    }

    #[test]
    fn test_carbide_deflects_less_than_hss() {
        let mut w = Vec::new();
        let carbide = deflect(&end_mill(6.0, 25.0, ToolMaterial::Carbide), 60.0, &mut w);
        let hss = deflect(&end_mill(6.0, 25.0, ToolMaterial::Hss), 60.0, &mut w);
        assert!(carbide.total < hss.total);
        // bending dominates and scales inversely with E
        assert!((hss.bending / carbide.bending - 620_000.0 / 217_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_holder_compliance_contributes() {
        let mut w = Vec::new();
        let mut poor = end_mill(6.0, 20.0, ToolMaterial::Carbide);
        poor.holder = Holder::PoorSetup;
        let good = deflect(&end_mill(6.0, 20.0, ToolMaterial::Carbide), 50.0, &mut w);
        let bad = deflect(&poor, 50.0, &mut w);
        assert!((bad.total - good.total - 50.0 * (1.0e-4 - 2.0e-5)).abs() < 1e-12);
    }

    #[test]
    fn test_danger_threshold_reports_three_decimals() {
        let mut w = Vec::new();
        // 3mm shank, 40mm stickout, 80N: severely overloaded
        let d = deflect(&end_mill(3.0, 40.0, ToolMaterial::Carbide), 80.0, &mut w);
        assert!(d.total > DEFLECTION_DANGER_MM);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].severity, Severity::Danger);
        assert!(w[0].message.contains(&format!("{:.3}", d.total)));
    }

    #[test]
    fn test_warning_band() {
        let mut w = Vec::new();
        // tune force so total lands between the two thresholds
        let tool = end_mill(6.0, 30.0, ToolMaterial::Hss);
        let probe = deflect(&tool, 1.0, &mut Vec::new());
        let force = 0.03 / probe.total;
        let d = deflect(&tool, force, &mut w);
        assert!(d.total >= DEFLECTION_WARNING_MM && d.total < DEFLECTION_DANGER_MM);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].severity, Severity::Warning);
    }
}
