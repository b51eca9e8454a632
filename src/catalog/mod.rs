//! Static catalogs: machines, spindles, tools, materials, cut strategies.
//!
//! Catalogs are plain data owned by the caller and passed into the solver
//! explicitly; nothing in here is a global. The built-in presets cover common
//! hobby-to-VMC setups, and callers can load their own records (everything
//! here round-trips through serde).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod cuts;
pub mod machines;
pub mod materials;
pub mod tools;

pub use cuts::{builtin_cuts, CutDefinition, CutType, UnknownCutType};
pub use machines::{builtin_machines, builtin_spindles, Aggressiveness, AxisFeeds, Machine, Spindle};
pub use materials::{builtin_materials, ChipLoadBucket, EngagementLimits, Material};
pub use tools::{Coating, Holder, Tool, ToolClass, ToolKind, ToolMaterial};

/// The full configuration set a calculation draws from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub materials: HashMap<String, Material>,
    pub machines: HashMap<String, Machine>,
    pub spindles: HashMap<String, Spindle>,
    /// Tools indexed by short ID, e.g. "EM_6_3F".
    pub tools: HashMap<String, Tool>,
    pub cuts: HashMap<CutType, CutDefinition>,
}

impl Catalog {
    /// Built-in presets.
    pub fn builtin() -> Self {
        Catalog {
            materials: builtin_materials(),
            machines: builtin_machines(),
            spindles: builtin_spindles(),
            tools: builtin_tools(),
            cuts: builtin_cuts(),
        }
    }

    pub fn material(&self, key: &str) -> Option<&Material> {
        self.materials.get(key)
    }

    pub fn machine(&self, key: &str) -> Option<&Machine> {
        self.machines.get(key)
    }

    pub fn spindle(&self, key: &str) -> Option<&Spindle> {
        self.spindles.get(key)
    }

    pub fn tool(&self, key: &str) -> Option<&Tool> {
        self.tools.get(key)
    }

    /// Sorted material names, for listings.
    pub fn material_names(&self) -> Vec<&String> {
        let mut names: Vec<_> = self.materials.keys().collect();
        names.sort();
        names
    }

    /// Sorted tool IDs, for listings.
    pub fn tool_ids(&self) -> Vec<&String> {
        let mut ids: Vec<_> = self.tools.keys().collect();
        ids.sort();
        ids
    }
}

/// Built-in starter tool set, one of each variant in common sizes.
pub fn builtin_tools() -> HashMap<String, Tool> {
    let mut tools = HashMap::new();

    tools.insert("EM_6_3F".to_string(), Tool {
        kind: ToolKind::FlatEndMill { diameter: 6.0, flutes: 3 },
        material: ToolMaterial::Carbide,
        coating: Some(Coating::TiAlN),
        shank_diameter: 6.0,
        stickout: 22.0,
        holder: Holder::Collet,
    });

    tools.insert("EM_3_2F".to_string(), Tool {
        kind: ToolKind::FlatEndMill { diameter: 3.0, flutes: 2 },
        material: ToolMaterial::Carbide,
        coating: None,
        shank_diameter: 3.0,
        stickout: 12.0,
        holder: Holder::Collet,
    });

    tools.insert("BEM_6_2F".to_string(), Tool {
        kind: ToolKind::BallEndMill { diameter: 6.0, flutes: 2 },
        material: ToolMaterial::Carbide,
        coating: Some(Coating::TiAlN),
        shank_diameter: 6.0,
        stickout: 25.0,
        holder: Holder::Collet,
    });

    tools.insert("DR_5".to_string(), Tool {
        kind: ToolKind::Drill { diameter: 5.0 },
        material: ToolMaterial::Hss,
        coating: Some(Coating::TiN),
        shank_diameter: 5.0,
        stickout: 50.0,
        holder: Holder::Collet,
    });

    tools.insert("VB_60".to_string(), Tool {
        kind: ToolKind::VBit { diameter: 12.7, tip_diameter: 0.1, angle: 60.0, flutes: 1 },
        material: ToolMaterial::Carbide,
        coating: None,
        shank_diameter: 6.35,
        stickout: 15.0,
        holder: Holder::Collet,
    });

    tools.insert("CH_6_90".to_string(), Tool {
        kind: ToolKind::Chamfer { diameter: 6.0, tip_diameter: 0.5, angle: 90.0, flutes: 2 },
        material: ToolMaterial::Carbide,
        coating: Some(Coating::TiAlN),
        shank_diameter: 6.0,
        stickout: 18.0,
        holder: Holder::Collet,
    });

    tools.insert("FM_50".to_string(), Tool {
        kind: ToolKind::FaceMill { diameter: 50.0, inserts: 4 },
        material: ToolMaterial::Carbide,
        coating: Some(Coating::AlTiN),
        shank_diameter: 22.0,
        stickout: 40.0,
        holder: Holder::ShrinkFit,
    });

    tools.insert("TM_8".to_string(), Tool {
        kind: ToolKind::ThreadMill { diameter: 8.0, flutes: 3 },
        material: ToolMaterial::Carbide,
        coating: Some(Coating::TiCN),
        shank_diameter: 8.0,
        stickout: 30.0,
        holder: Holder::Collet,
    });

    tools.insert("TEM_3_5D".to_string(), Tool {
        kind: ToolKind::Tapered { tip_diameter: 3.0, taper_angle: 5.0, flutes: 2 },
        material: ToolMaterial::Carbide,
        coating: Some(Coating::TiAlN),
        shank_diameter: 6.0,
        stickout: 30.0,
        holder: Holder::Collet,
    });

    tools.insert("BB_10".to_string(), Tool {
        kind: ToolKind::Boring { diameter: 10.0 },
        material: ToolMaterial::Carbide,
        coating: None,
        shank_diameter: 10.0,
        stickout: 60.0,
        holder: Holder::Hydraulic,
    });

    tools.insert("SS_63".to_string(), Tool {
        kind: ToolKind::Slitting { diameter: 63.0, teeth: 30, width: 1.5 },
        material: ToolMaterial::Hss,
        coating: None,
        shank_diameter: 22.0,
        stickout: 10.0,
        holder: Holder::ShrinkFit,
    });

    tools
}
