//! Post-solve diagnostic checks.
//!
//! Independent threshold checks run after the numeric stages complete. All
//! are advisory: nothing here alters the result or aborts the pipeline.

use crate::catalog::{Tool, ToolKind};

use super::engagement::Engagement;
use super::Warning;

/// Chip load below this fraction of the table minimum risks rubbing.
const RUBBING_FRACTION: f64 = 0.5;

/// Chip load above this fraction of the table maximum risks overload.
const OVERLOAD_FRACTION: f64 = 1.5;

#[allow(clippy::too_many_arguments)]
pub(crate) fn run(
    tool: &Tool,
    engagement: &Engagement,
    chip_load: f64,
    chip_load_range: (f64, f64),
    feed_rate: f64,
    force_n: f64,
    doc_override: Option<f64>,
    warnings: &mut Vec<Warning>,
) {
    let diameter = tool.kind.diameter();

    // Rubbing: the edge plows instead of shearing. Drills and boring bars
    // feed per revolution and are judged differently, so they are exempt.
    let exempt = matches!(tool.kind, ToolKind::Drill { .. } | ToolKind::Boring { .. });
    if !exempt && chip_load < RUBBING_FRACTION * chip_load_range.0 {
        warnings.push(Warning::danger(format!(
            "Chip load {chip_load:.4} mm/tooth is below the rubbing threshold; tool will rub and work-harden the material"
        )));
    }

    if chip_load > OVERLOAD_FRACTION * chip_load_range.1 {
        warnings.push(Warning::warning(format!(
            "Chip load {chip_load:.4} mm/tooth is well above the recommended maximum {:.4} mm/tooth",
            chip_load_range.1
        )));
    }

    // Tool-specific heuristics
    match tool.kind {
        ToolKind::VBit { .. } if engagement.ap > 0.5 * diameter => {
            warnings.push(Warning::warning(
                "Deep V-carve: depth exceeds half the cutter diameter".to_string(),
            ));
        }
        ToolKind::Slitting { .. } if feed_rate > 500.0 => {
            warnings.push(Warning::warning(format!(
                "Feed rate {feed_rate:.0} mm/min is high for a slitting saw"
            )));
        }
        ToolKind::Boring { .. } if force_n > 100.0 => {
            warnings.push(Warning::warning(format!(
                "Cutting force {force_n:.0} N is high for a boring bar; expect taper and chatter"
            )));
        }
        _ => {}
    }

    if diameter < 1.0 && force_n > 10.0 {
        warnings.push(Warning::warning(format!(
            "Cutting force {force_n:.0} N on a sub-millimeter tool; breakage likely"
        )));
    }

    if let Some(doc) = doc_override {
        if doc > 2.0 * diameter {
            warnings.push(Warning::warning(format!(
                "Depth of cut {doc:.1} mm exceeds twice the tool diameter"
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Holder, ToolMaterial};
    use crate::solver::Severity;

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

    fn check(
        kind: ToolKind,
        chip_load: f64,
        feed_rate: f64,
        force_n: f64,
        ap: f64,
        doc_override: Option<f64>,
    ) -> Vec<Warning> {
        let mut w = Vec::new();
        run(
            &tool(kind),
            &Engagement { ae: 3.0, ap },
            chip_load,
            (0.01, 0.03),
            feed_rate,
            force_n,
            doc_override,
            &mut w,
        );
        w
    }

    #[test]
    fn test_rubbing_danger() {
        let flat = ToolKind::FlatEndMill { diameter: 6.0, flutes: 3 };
        let w = check(flat, 0.004, 100.0, 10.0, 2.0, None);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].severity, Severity::Danger);
        assert!(w[0].message.contains("rub"));
    }

    #[test]
    fn test_drill_exempt_from_rubbing() {
        let w = check(ToolKind::Drill { diameter: 6.0 }, 0.004, 100.0, 10.0, 3.0, None);
        assert!(w.is_empty());
    }

    #[test]
    fn test_overload_warning() {
        let flat = ToolKind::FlatEndMill { diameter: 6.0, flutes: 3 };
        let w = check(flat, 0.05, 100.0, 10.0, 2.0, None);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].severity, Severity::Warning);
        assert!(w[0].message.contains("above the recommended maximum"));
    }

    #[test]
    fn test_deep_vcarve() {
        let vbit = ToolKind::VBit { diameter: 6.0, tip_diameter: 0.1, angle: 60.0, flutes: 1 };
        let w = check(vbit, 0.02, 100.0, 10.0, 4.0, None);
        assert!(w.iter().any(|w| w.message.contains("Deep V-carve")));
    }

    #[test]
    fn test_slitting_feed() {
        let saw = ToolKind::Slitting { diameter: 63.0, teeth: 30, width: 1.5 };
        let w = check(saw, 0.02, 800.0, 10.0, 1.5, None);
        assert!(w.iter().any(|w| w.message.contains("slitting saw")));
    }

    #[test]
    fn test_boring_force() {
        let w = check(ToolKind::Boring { diameter: 10.0 }, 0.02, 100.0, 150.0, 5.0, None);
        assert!(w.iter().any(|w| w.message.contains("boring bar")));
    }

    #[test]
    fn test_small_tool_force() {
        let tiny = ToolKind::FlatEndMill { diameter: 0.8, flutes: 2 };
        let w = check(tiny, 0.02, 100.0, 15.0, 0.4, None);
        assert!(w.iter().any(|w| w.message.contains("sub-millimeter")));
    }

    #[test]
    fn test_doc_override_beyond_two_diameters() {
        let flat = ToolKind::FlatEndMill { diameter: 6.0, flutes: 3 };
        let w = check(flat, 0.02, 100.0, 10.0, 13.0, Some(13.0));
        assert!(w.iter().any(|w| w.message.contains("twice the tool diameter")));
    }

    #[test]
    fn test_clean_cut_is_silent() {
        let flat = ToolKind::FlatEndMill { diameter: 6.0, flutes: 3 };
        let w = check(flat, 0.02, 100.0, 10.0, 2.0, None);
        assert!(w.is_empty());
    }
}
