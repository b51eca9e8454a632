//! Cutwise - CNC cutting parameter recommendations.
//!
//! Given a machine, spindle, tool, material, and cut strategy, the solver
//! resolves engagement geometry, spindle speed, and feed rate from material
//! data tables, clamps the results against machine and spindle limits,
//! rebalances once for spindle power, and derives cutting force and tool
//! deflection. Every recommendation carries categorized diagnostics so the
//! operator can judge risk.
//!
//! Reference data follows the usual shop sources (Machinery's Handbook,
//! manufacturer speed/feed charts, community data); all units are metric.
//!
//! ```
//! use cutwise::{Catalog, CalculationRequest, CutType, Solver};
//!
//! let catalog = Catalog::builtin();
//! let request = CalculationRequest {
//!     machine: catalog.machine("hobby_router").unwrap().clone(),
//!     spindle: catalog.spindle("spindle_2_2kw").unwrap().clone(),
//!     tool: catalog.tool("EM_6_3F").unwrap().clone(),
//!     material: catalog.material("Aluminum 6061").unwrap().clone(),
//!     cut_type: CutType::Slot,
//!     aggressiveness: 1.0,
//!     doc_override: None,
//! };
//!
//! cutwise::validate_request(&request).expect("request is well-formed");
//! let result = Solver::with_builtin_cuts().calculate(&request);
//! assert!(result.rpm > 0.0);
//! ```

pub mod catalog;
pub mod solver;
pub mod validate;

pub use catalog::{
    Aggressiveness, AxisFeeds, Catalog, ChipLoadBucket, Coating, CutDefinition, CutType,
    EngagementLimits, Holder, Machine, Material, Spindle, Tool, ToolClass, ToolKind, ToolMaterial,
};
pub use solver::{
    CalculationRequest, CalculationResult, Deflection, Severity, Solver, Warning,
};
pub use validate::{validate_request, ValidationError};
