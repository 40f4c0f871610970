use clap::Parser;
use powiat_atlas::cli::{Cli, Commands};
use powiat_atlas::commands::{all, increase, report, standings, support};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();

    match &cli.command {
        Commands::Support(args) => support::run(args),
        Commands::Increase(args) => increase::run(args),
        Commands::Standings(args) => standings::run(args),
        Commands::Report(args) => report::run(args),
        Commands::All(args) => all::run(args),
    }
}

fn main() -> anyhow::Result<()> {
    run()
}
