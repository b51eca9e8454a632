//! Power balancing: required cutting power against the spindle curve.

use tracing::debug;

use crate::catalog::{Machine, Material, Spindle, Tool, ToolKind};

use super::engagement::Engagement;
use super::feed::FeedSolution;
use super::Warning;

/// Fixed surcharge on cutting power for spindle and drivetrain losses.
const SPINDLE_LOSS: f64 = 1.15;

/// Rescale when required power exceeds this fraction of available.
const POWER_BUDGET: f64 = 0.9;

/// Rescale target as a fraction of available power.
const POWER_TARGET: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PowerSolution {
    pub feed_rate: f64,
    pub chip_load: f64,
    /// Material removal rate, mm³/min.
    pub mrr: f64,
    pub required_kw: f64,
    pub available_kw: f64,
}

/// Compute required power and rescale feed once if it exceeds the budget.
pub(crate) fn balance(
    tool: &Tool,
    material: &Material,
    machine: &Machine,
    spindle: &Spindle,
    rpm: f64,
    engagement: &Engagement,
    feed: &FeedSolution,
    warnings: &mut Vec<Warning>,
) -> PowerSolution {
    // Drills remove a circular cross-section; everything else a rectangle.
    let mrr = match tool.kind {
        ToolKind::Drill { diameter } => {
            std::f64::consts::PI * diameter * diameter / 4.0 * feed.feed_rate
        }
        _ => engagement.ae * engagement.ap * feed.feed_rate,
    };

    // J/mm³ × mm³/min / 60 = W
    let required_kw = (mrr * material.specific_energy / 60.0) / 1000.0
        * tool.kind.power_factor()
        * machine.rigidity
        * SPINDLE_LOSS;

    let available_kw = spindle.available_power_kw(rpm);

    let mut solution = PowerSolution {
        feed_rate: feed.feed_rate,
        chip_load: feed.chip_load,
        mrr,
        required_kw,
        available_kw,
    };

    if available_kw <= 0.0 {
        if required_kw > 0.0 {
            warnings.push(Warning::danger(format!(
                "Spindle delivers no usable power at {rpm:.0} RPM"
            )));
        }
        return solution;
    }

    if required_kw > POWER_BUDGET * available_kw {
        let scale = available_kw * POWER_TARGET / required_kw;
        debug!(required_kw, available_kw, scale, "rescaling feed for power budget");
        solution.feed_rate *= scale;
        solution.chip_load *= scale;
        solution.mrr *= scale;
        solution.required_kw *= scale;
        warnings.push(Warning::warning(format!(
            "Power limited: {required_kw:.2} kW required, {available_kw:.2} kW available; feed scaled to {:.0}%",
            scale * 100.0
        )));
    }

    solution
}
