use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Powiat choropleth CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "powiat-atlas", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Map one party's vote share, bucketed in 5-point steps
    Support(SupportArgs),

    /// Map the natural-increase rate per 1000 residents
    Increase(InputArgs),

    /// Map the winning, second and third party per powiat
    Standings(InputArgs),

    /// Increase-sign map and statistics for powiats where a party holds a placement
    Report(ReportArgs),

    /// Run every analysis over the three inputs
    All(InputArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Powiat boundary shapefile (.shp)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub shapes: PathBuf,

    /// Per-powiat vote-share spreadsheet (.xls/.xlsx)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub support: PathBuf,

    /// GUS demographic spreadsheet with the natural-increase rate
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub increase: PathBuf,

    /// Output directory for the rendered PNGs
    #[arg(long, default_value = "out", value_hint = ValueHint::DirPath)]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct SupportArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Party name, case-insensitive: ko, konfederacja, nowa lewica, pis, trzecia droga
    pub party: String,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Party name, case-insensitive
    pub party: String,

    /// Placement rank: 1, 2 or 3
    #[arg(long, default_value_t = 2)]
    pub place: u8,
}
