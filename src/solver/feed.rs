//! Feed rate resolution: chip load lookup, thinning correction, machine clamp.

use tracing::debug;

use crate::catalog::{Machine, Material, Tool};

use super::Warning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FeedSolution {
    /// Chip load after thinning correction, before any clamping, mm/tooth.
    pub chip_load_nominal: f64,
    /// Effective chip load actually delivered, mm/tooth.
    pub chip_load: f64,
    /// Feed rate, mm/min.
    pub feed_rate: f64,
    /// The (min, max) table range the nominal value was drawn from.
    pub chip_load_range: (f64, f64),
}

/// Resolve chip load and feed rate for the resolved RPM and engagement.
pub(crate) fn resolve(
    tool: &Tool,
    material: &Material,
    machine: &Machine,
    rpm: f64,
    ae: f64,
    aggressiveness: f64,
    warnings: &mut Vec<Warning>,
) -> FeedSolution {
    let range = material.chip_load_range(tool.kind.effective_diameter());
    let mut chip_load = (range.0 + range.1) / 2.0
        * aggressiveness
        * material.tool_factor(tool.kind.class())
        * machine.aggressiveness.feed;

    // At shallow radial engagement the actual chip is thinner than the feed
    // per tooth; compensate before computing the feed rate.
    let diameter = tool.kind.diameter();
    if let Some(threshold) = material.chip_thinning_threshold {
        if ae > 0.0 && ae < diameter * threshold {
            let factor = (diameter / ae).sqrt();
            chip_load *= factor;
            debug!(ae, factor, "chip thinning compensation");
            warnings.push(Warning::info("Chip thinning compensation applied".to_string()));
        }
    }

    let flutes = tool.kind.effective_flutes() as f64;
    let chip_load_nominal = chip_load;
    let mut feed_rate = rpm * flutes * chip_load;

    // All axes may participate in a cut, so the slowest ceiling governs.
    let max_feed = machine.max_feed.min();
    if feed_rate > max_feed {
        feed_rate = max_feed;
        chip_load = feed_rate / (rpm * flutes);
        debug!(feed_rate, "feed clamped to machine maximum");
        warnings.push(Warning::warning(format!(
            "Feed rate limited by machine maximum ({max_feed:.0} mm/min)"
        )));
    }

    FeedSolution { chip_load_nominal, chip_load, feed_rate, chip_load_range: range }
}
