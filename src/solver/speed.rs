//! Spindle speed resolution.

use tracing::debug;

use crate::catalog::{CutDefinition, Material, Spindle, Tool};

use super::Warning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SpeedSolution {
    pub rpm: f64,
    /// Surface speed at the resolved RPM, m/min.
    pub surface_speed: f64,
    /// Surface speed before clamping, m/min.
    pub nominal_surface_speed: f64,
}

/// Resolve spindle speed from the material's surface speed range, clamped to
/// the spindle's operating range.
pub(crate) fn resolve(
    tool: &Tool,
    material: &Material,
    cut: &CutDefinition,
    spindle: &Spindle,
    aggressiveness: f64,
    warnings: &mut Vec<Warning>,
) -> SpeedSolution {
    let vc_nominal = material.surface_speed_midpoint()
        * cut.speed_factor
        * tool.speed_factor()
        * aggressiveness;

    // RPM = vc × 1000 / (π × D)
    let d_eff = tool.kind.effective_diameter();
    let rpm_raw = vc_nominal * 1000.0 / (std::f64::consts::PI * d_eff);

    let rpm = if rpm_raw > spindle.rpm_max {
        debug!(rpm_raw, rpm_max = spindle.rpm_max, "spindle speed clamped");
        warnings.push(Warning::warning(format!(
            "RPM limited by spindle maximum ({:.0} RPM)",
            spindle.rpm_max
        )));
        spindle.rpm_max
    } else if rpm_raw < spindle.rpm_min {
        debug!(rpm_raw, rpm_min = spindle.rpm_min, "spindle speed clamped");
        warnings.push(Warning::warning(format!(
            "RPM limited by spindle minimum ({:.0} RPM)",
            spindle.rpm_min
        )));
        spindle.rpm_min
    } else {
        rpm_raw
    };

    SpeedSolution {
        rpm,
        surface_speed: rpm * std::f64::consts::PI * d_eff / 1000.0,
        nominal_surface_speed: vc_nominal,
    }
}
