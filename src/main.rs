use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use cutwise::{CalculationRequest, Catalog, CutType, Solver};

#[derive(Parser)]
#[command(name = "cutwise", version, about = "CNC cutting parameter recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List built-in materials
    Materials,
    /// List built-in tools
    Tools,
    /// List built-in machines and spindles
    Machines,
    /// Recommend cutting parameters for a setup
    Recommend {
        /// Machine preset key, e.g. hobby_router
        #[arg(long)]
        machine: String,
        /// Spindle preset key, e.g. spindle_2_2kw
        #[arg(long)]
        spindle: String,
        /// Tool ID, e.g. EM_6_3F
        #[arg(long)]
        tool: String,
        /// Material name, e.g. "Aluminum 6061"
        #[arg(long)]
        material: String,
        /// Cut strategy: slot, profile, adaptive, facing, drilling
        #[arg(long)]
        cut: String,
        /// Aggressiveness multiplier, 0.1-3.0
        #[arg(long, default_value_t = 1.0)]
        aggressiveness: f64,
        /// Override the depth of cut, mm
        #[arg(long)]
        doc: Option<f64>,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let catalog = Catalog::builtin();

    match cli.command {
        Command::Materials => {
            for name in catalog.material_names() {
                let mat = &catalog.materials[name];
                println!(
                    "{name}  (vc {:.0}-{:.0} m/min, Kc {:.1} kN/mm2)",
                    mat.surface_speed.0, mat.surface_speed.1, mat.force_coefficient
                );
            }
        }
        Command::Tools => {
            for id in catalog.tool_ids() {
                let tool = &catalog.tools[id];
                println!(
                    "{id}  {:?} D{:.1}mm {} stickout {:.0}mm",
                    tool.kind.class(),
                    tool.kind.diameter(),
                    tool.material,
                    tool.stickout
                );
            }
        }
        Command::Machines => {
            println!("Machines:");
            let mut keys: Vec<_> = catalog.machines.keys().collect();
            keys.sort();
            for key in keys {
                let m = &catalog.machines[key];
                println!(
                    "  {key}  {} (max feed {:.0} mm/min, rigidity {:.1})",
                    m.name,
                    m.max_feed.min(),
                    m.rigidity
                );
            }
            println!("Spindles:");
            let mut keys: Vec<_> = catalog.spindles.keys().collect();
            keys.sort();
            for key in keys {
                let s = &catalog.spindles[key];
                println!(
                    "  {key}  {} ({:.1} kW, {:.0}-{:.0} RPM)",
                    s.name, s.power_kw, s.rpm_min, s.rpm_max
                );
            }
        }
        Command::Recommend {
            machine,
            spindle,
            tool,
            material,
            cut,
            aggressiveness,
            doc,
            json,
        } => {
            let request = CalculationRequest {
                machine: catalog
                    .machine(&machine)
                    .ok_or_else(|| unknown_key("machine", &machine, catalog.machines.keys()))?
                    .clone(),
                spindle: catalog
                    .spindle(&spindle)
                    .ok_or_else(|| unknown_key("spindle", &spindle, catalog.spindles.keys()))?
                    .clone(),
                tool: catalog
                    .tool(&tool)
                    .ok_or_else(|| unknown_key("tool", &tool, catalog.tools.keys()))?
                    .clone(),
                material: catalog
                    .material(&material)
                    .ok_or_else(|| unknown_key("material", &material, catalog.materials.keys()))?
                    .clone(),
                cut_type: cut.parse::<CutType>()?,
                aggressiveness,
                doc_override: doc,
            };

            if let Err(errors) = cutwise::validate_request(&request) {
                for err in &errors {
                    eprintln!("invalid request: {err}");
                }
                return Err(anyhow!("{} validation error(s)", errors.len()));
            }

            let result = Solver::with_builtin_cuts().calculate(&request);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result);
            }
        }
    }

    Ok(())
}

fn unknown_key<'a>(
    what: &str,
    key: &str,
    available: impl Iterator<Item = &'a String>,
) -> anyhow::Error {
    let mut keys: Vec<_> = available.map(|s| s.as_str()).collect();
    keys.sort_unstable();
    anyhow!("unknown {what} '{key}'. Available: {}", keys.join(", "))
}

fn print_result(result: &cutwise::CalculationResult) {
    println!("Spindle speed:    {:>10.0} RPM", result.rpm);
    println!("Surface speed:    {:>10.1} m/min", result.surface_speed);
    println!("Feed rate:        {:>10.0} mm/min", result.feed_rate);
    println!(
        "Chip load:        {:>10.4} mm/tooth (nominal {:.4})",
        result.chip_load, result.chip_load_nominal
    );
    println!("Width of cut:     {:>10.2} mm", result.radial_engagement);
    println!("Depth of cut:     {:>10.2} mm", result.axial_engagement);
    println!("Removal rate:     {:>10.0} mm3/min", result.mrr);
    println!(
        "Power:            {:>10.2} kW required / {:.2} kW available",
        result.required_power_kw, result.available_power_kw
    );
    println!("Cutting force:    {:>10.0} N", result.cutting_force_n);
    println!(
        "Deflection:       {:>10.4} mm (bend {:.4}, shear {:.4}, holder {:.4})",
        result.deflection.total,
        result.deflection.bending,
        result.deflection.shear,
        result.deflection.holder
    );

    if !result.warnings.is_empty() {
        println!();
        for warning in &result.warnings {
            println!("[{}] {}", warning.severity, warning.message);
        }
    }
}
