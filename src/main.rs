use emsim::{Method, Scenario, ScenarioConfig};
use emsim::run;

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
struct Args {
    /// Integration method, `naive` or `symplectic`
    method: String,

    /// Scenario YAML file; the built-in Earth-Moon scenario when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Write records to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

// file loading here to keep main small
fn load_scenario_config(file: Option<&Path>) -> Result<ScenarioConfig> {
    match file {
        Some(path) => {
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
            Ok(cfg)
        }
        None => Ok(ScenarioConfig::earth_moon()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let method: Method = args.method.parse()?;
    let scenario_cfg = load_scenario_config(args.file.as_deref())?;
    let scenario = Scenario::build_scenario(scenario_cfg, method)?;

    // Banner goes to stderr so redirected stdout stays pure records
    let names: Vec<&str> = scenario.system.bodies.iter().map(|b| b.name.as_str()).collect();
    eprintln!(
        "# {} integration: {} steps of {} s",
        scenario.method, scenario.parameters.steps, scenario.parameters.dt
    );
    eprintln!("# bodies: {}", names.join(", "));

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    run(scenario, &mut out)?;
    out.flush()?;

    Ok(())
}
