//! vinsim - simulate daily vineyard climate and annual production data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "vinsim",
    version,
    about = "Vineyard climate and production data simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: vinsim_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    vinsim_cmd::run(cli.command)
}
