//! The cutting-parameter solver.
//!
//! One call resolves a complete operating point: engagement geometry, spindle
//! speed, feed rate, power balance, cutting force, and tool deflection, with
//! categorized diagnostics accumulated along the way. Physical limits never
//! abort a calculation; they clamp or rescale and report, so the operator
//! always gets a recommendation plus the information to judge it.
//!
//! Stage order matters: engagement → speed → feed → power → force/deflection
//! → diagnostics. The power stage is the only feedback in the chain and runs
//! exactly once.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CutDefinition, CutType, Machine, Material, Spindle, Tool};

mod deflection;
mod diagnostics;
mod engagement;
mod feed;
mod power;
mod speed;

pub use deflection::Deflection;

/// Diagnostic severity. `Danger` should be surfaced prominently by callers;
/// nothing blocks the result from being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Danger => write!(f, "DANGER"),
        }
    }
}

/// A single diagnostic. Warnings accumulate in detection order and are never
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub severity: Severity,
    pub message: String,
}

impl Warning {
    pub fn info(message: String) -> Self {
        Warning { severity: Severity::Info, message }
    }

    pub fn warning(message: String) -> Self {
        Warning { severity: Severity::Warning, message }
    }

    pub fn danger(message: String) -> Self {
        Warning { severity: Severity::Danger, message }
    }
}

/// Everything one calculation needs. Records are owned so a request is fully
/// self-describing and serializes as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub machine: Machine,
    pub spindle: Spindle,
    pub tool: Tool,
    pub material: Material,
    pub cut_type: CutType,
    /// Overall aggressiveness multiplier, 0.1–3.0.
    pub aggressiveness: f64,
    /// User override for depth of cut, mm. Must be positive when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_override: Option<f64>,
}

/// The recommended operating point. Constructed once per call; all fields
/// are plain data suitable for direct JSON serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub rpm: f64,
    /// Surface speed at the resolved RPM, m/min.
    pub surface_speed: f64,
    /// Feed rate, mm/min (power-adjusted).
    pub feed_rate: f64,
    /// Effective chip load, mm/tooth (power-adjusted).
    pub chip_load: f64,
    /// Chip load before machine clamping and power rescaling, mm/tooth.
    pub chip_load_nominal: f64,
    /// Radial engagement (width of cut), mm.
    pub radial_engagement: f64,
    /// Axial engagement (depth of cut), mm.
    pub axial_engagement: f64,
    /// Material removal rate, mm³/min.
    pub mrr: f64,
    pub required_power_kw: f64,
    pub available_power_kw: f64,
    pub cutting_force_n: f64,
    pub deflection: Deflection,
    pub warnings: Vec<Warning>,
}

/// The solver, configured with a cut strategy table.
///
/// Calculations are pure functions of the request; a `Solver` is cheap to
/// share and calls are independent.
#[derive(Debug, Clone)]
pub struct Solver {
    cuts: HashMap<CutType, CutDefinition>,
}

impl Solver {
    pub fn new(cuts: HashMap<CutType, CutDefinition>) -> Self {
        Solver { cuts }
    }

    /// Solver configured with the built-in cut strategy table.
    pub fn with_builtin_cuts() -> Self {
        Solver::new(crate::catalog::builtin_cuts())
    }

    /// Run the full pipeline for one request.
    pub fn calculate(&self, req: &CalculationRequest) -> CalculationResult {
        let mut warnings = Vec::new();

        let cut = self
            .cuts
            .get(&req.cut_type)
            .copied()
            .unwrap_or_else(CutDefinition::permissive);

        let engagement = engagement::resolve(
            &req.tool,
            &req.material,
            req.cut_type,
            &cut,
            &req.machine.aggressiveness,
            req.doc_override,
            &mut warnings,
        );

        let speed = speed::resolve(
            &req.tool,
            &req.material,
            &cut,
            &req.spindle,
            req.aggressiveness,
            &mut warnings,
        );

        let feed = feed::resolve(
            &req.tool,
            &req.material,
            &req.machine,
            speed.rpm,
            engagement.ae,
            req.aggressiveness,
            &mut warnings,
        );

        let power = power::balance(
            &req.tool,
            &req.material,
            &req.machine,
            &req.spindle,
            speed.rpm,
            &engagement,
            &feed,
            &mut warnings,
        );

        // Force and deflection see the power-adjusted chip load.
        let force_n =
            deflection::cutting_force(&req.tool, &req.material, engagement.ae, power.chip_load);
        let deflection = deflection::deflect(&req.tool, force_n, &mut warnings);

        diagnostics::run(
            &req.tool,
            &engagement,
            power.chip_load,
            feed.chip_load_range,
            power.feed_rate,
            force_n,
            req.doc_override,
            &mut warnings,
        );

        debug!(
            rpm = speed.rpm,
            vc = speed.surface_speed,
            vc_nominal = speed.nominal_surface_speed,
            feed = power.feed_rate,
            warnings = warnings.len(),
            "calculation complete"
        );

        CalculationResult {
            rpm: speed.rpm,
            surface_speed: speed.surface_speed,
            feed_rate: power.feed_rate,
            chip_load: power.chip_load,
            chip_load_nominal: feed.chip_load_nominal,
            radial_engagement: engagement.ae,
            axial_engagement: engagement.ap,
            mrr: power.mrr,
            required_power_kw: power.required_kw,
            available_power_kw: power.available_kw,
            cutting_force_n: force_n,
            deflection,
            warnings,
        }
    }
}
