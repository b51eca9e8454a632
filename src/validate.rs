//! Pre-flight request validation.
//!
//! The solver is total over its input space and will happily turn malformed
//! records into NaN; callers are expected to run [`validate_request`] first.
//! Validation and solving are deliberately separate so the solver stays a
//! pure function of already-vetted data.

use thiserror::Error;

use crate::solver::CalculationRequest;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("tool diameter must be positive, got {diameter}")]
    ToolDiameter { diameter: f64 },

    #[error("tool must have at least one cutting edge")]
    NoCuttingEdges,

    #[error("shank diameter must be positive, got {diameter}")]
    ShankDiameter { diameter: f64 },

    #[error("stickout must be positive, got {stickout}")]
    Stickout { stickout: f64 },

    #[error("spindle RPM range invalid: [{min}, {max}]")]
    SpindleRpmRange { min: f64, max: f64 },

    #[error("spindle power must be positive, got {power_kw} kW")]
    SpindlePower { power_kw: f64 },

    #[error("machine feed ceiling on {axis} must be positive, got {value}")]
    FeedCeiling { axis: char, value: f64 },

    #[error("machine rigidity must be non-negative, got {rigidity}")]
    Rigidity { rigidity: f64 },

    #[error("aggressiveness must be within 0.1–3.0, got {value}")]
    Aggressiveness { value: f64 },

    #[error("depth of cut override must be positive, got {value}")]
    DocOverride { value: f64 },

    #[error("material '{name}' has an invalid surface speed range [{min}, {max}]")]
    SurfaceSpeedRange { name: String, min: f64, max: f64 },

    #[error("material '{name}' has an empty chip load table")]
    EmptyChipLoadTable { name: String },
}

/// Validate a request before solving. Collects every problem rather than
/// stopping at the first, so a UI can report them all at once.
pub fn validate_request(req: &CalculationRequest) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Tool
    let diameter = req.tool.kind.diameter();
    if !(diameter > 0.0) {
        errors.push(ValidationError::ToolDiameter { diameter });
    }
    if req.tool.kind.effective_flutes() == 0 {
        errors.push(ValidationError::NoCuttingEdges);
    }
    if req.tool.kind.models_deflection() {
        if !(req.tool.shank_diameter > 0.0) {
            errors.push(ValidationError::ShankDiameter { diameter: req.tool.shank_diameter });
        }
        if !(req.tool.stickout > 0.0) {
            errors.push(ValidationError::Stickout { stickout: req.tool.stickout });
        }
    }

    // Spindle
    if !(req.spindle.rpm_min > 0.0) || req.spindle.rpm_min >= req.spindle.rpm_max {
        errors.push(ValidationError::SpindleRpmRange {
            min: req.spindle.rpm_min,
            max: req.spindle.rpm_max,
        });
    }
    if !(req.spindle.power_kw > 0.0) {
        errors.push(ValidationError::SpindlePower { power_kw: req.spindle.power_kw });
    }

    // Machine
    for (axis, value) in [
        ('x', req.machine.max_feed.x),
        ('y', req.machine.max_feed.y),
        ('z', req.machine.max_feed.z),
    ] {
        if !(value > 0.0) {
            errors.push(ValidationError::FeedCeiling { axis, value });
        }
    }
    if !(req.machine.rigidity >= 0.0) {
        errors.push(ValidationError::Rigidity { rigidity: req.machine.rigidity });
    }

    // Request scalars
    if !(0.1..=3.0).contains(&req.aggressiveness) {
        errors.push(ValidationError::Aggressiveness { value: req.aggressiveness });
    }
    if let Some(doc) = req.doc_override {
        if !(doc > 0.0) {
            errors.push(ValidationError::DocOverride { value: doc });
        }
    }

    // Material
    if !(req.material.surface_speed.0 > 0.0)
        || req.material.surface_speed.0 > req.material.surface_speed.1
    {
        errors.push(ValidationError::SurfaceSpeedRange {
            name: req.material.name.clone(),
            min: req.material.surface_speed.0,
            max: req.material.surface_speed.1,
        });
    }
    if req.material.chip_loads.is_empty() {
        errors.push(ValidationError::EmptyChipLoadTable { name: req.material.name.clone() });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
