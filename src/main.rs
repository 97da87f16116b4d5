use anyhow::Result;
use clap::Parser;

use dockhand::cli::CliArgs;
use dockhand::config::DockConfig;
use dockhand::debug_dump::StateDump;
use dockhand::scenario::Scenario;

fn main() -> Result<()> {
    dockhand::tracing::init();

    let args = CliArgs::parse();

    let mut config = DockConfig::load();
    if args.no_title_bars {
        config.no_title_bars = true;
    }

    let scenario = Scenario::load(&args.scenario)?;
    tracing::info!(
        steps = scenario.steps.len(),
        displays = scenario.displays.len(),
        "replaying {}",
        args.scenario.display()
    );
    let runtime = scenario.run(config)?;

    let dump = StateDump::from_model(&runtime.model);
    if args.json {
        println!("{}", dump.to_json()?);
    } else {
        print!("{}", dump.render_tree());
    }
    Ok(())
}
