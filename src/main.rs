use galorb::{Quantity, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "isochrone.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_from_yaml()?;

    let mut scenario = Scenario::build_scenario(scenario_cfg);
    scenario.run();

    // Energy summary: the initial-condition energy and the drift of
    // the per-sample energy around its mean
    let e0 = scenario.orbit.energy(&*scenario.pot);
    let energy = scenario.orbit.energy_along();
    let drift = energy.mult(1.0 / energy.mean()).std();
    println!("initial energy      = {e0:.12}");
    println!("mean energy         = {:.12}", energy.mean());
    println!("normalized E drift  = {drift:.3e}");

    // Plot-ready series for the embedding front end
    let (t, _) = scenario.orbit.plot_quantity(Quantity::Time);
    println!("samples             = {}", t.len());
    println!(
        "R range             = [{:.6}, {:.6}]",
        scenario.orbit.r().amin(),
        scenario.orbit.r().amax()
    );
    println!(
        "z range             = [{:.6}, {:.6}]",
        scenario.orbit.z().amin(),
        scenario.orbit.z().amax()
    );

    Ok(())
}
