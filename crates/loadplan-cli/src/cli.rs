//! CLI definition using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use loadplan_domain::model::PreferredSide;
use loadplan_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "loadplan")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Truck load planning: axle weights, legal limits and cargo placement")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Skip the suspension correction for this run (rigid-body split only)
    #[arg(long, global = true)]
    pub no_correction: bool,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Which profile file and which vehicle in it
#[derive(Args, Debug, Clone)]
pub struct VehicleArgs {
    /// Vehicle profile TOML file. Uses config value if not specified.
    #[arg(long, short = 'p')]
    pub profiles: Option<PathBuf>,

    /// Vehicle name within the profile file
    #[arg(long, short = 't')]
    pub vehicle: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the vehicles in a profile file
    Profiles {
        /// Vehicle profile TOML file. Uses config value if not specified.
        #[arg(long, short = 'p')]
        profiles: Option<PathBuf>,
    },

    /// Show axle positions in cargo-area coordinates
    Axles {
        #[command(flatten)]
        target: VehicleArgs,
    },

    /// Show manufacturer, regulatory and effective limits
    Limits {
        #[command(flatten)]
        target: VehicleArgs,
    },

    /// Compute axle weights for a cargo manifest
    Distribution {
        #[command(flatten)]
        target: VehicleArgs,

        /// Cargo manifest CSV (id,length,width,weight,x,y)
        #[arg(long, short = 'c')]
        cargo: PathBuf,
    },

    /// Place new items of one footprint onto the floor
    Autofill {
        #[command(flatten)]
        target: VehicleArgs,

        /// Cargo already on board (CSV). Placement works around it.
        #[arg(long, short = 'c')]
        cargo: Option<PathBuf>,

        /// Item length along the body, metres
        #[arg(long)]
        item_length: f64,

        /// Item width across the body, metres
        #[arg(long)]
        item_width: f64,

        /// Weights to place in kg, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        weights: Vec<f64>,

        /// Discard the existing cargo instead of packing around it
        #[arg(long)]
        replace: bool,

        /// Place at most this many items
        #[arg(long)]
        max_items: Option<usize>,

        /// Write the resulting manifest (kept plus placed items) to CSV
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Check a profile and optional cargo manifest for rule violations
    Validate {
        #[command(flatten)]
        target: VehicleArgs,

        /// Cargo manifest CSV
        #[arg(long, short = 'c')]
        cargo: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default vehicle profile file
        #[arg(long)]
        set_profiles: Option<PathBuf>,

        /// Enable/disable suspension correction
        #[arg(long)]
        set_correction: Option<bool>,

        /// Set nominal cab length in metres
        #[arg(long)]
        set_cab_length: Option<f64>,

        /// Set the side autofill fills first
        #[arg(long)]
        set_preferred_side: Option<SideArg>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    Left,
    Right,
}

impl From<SideArg> for PreferredSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Left => PreferredSide::Left,
            SideArg::Right => PreferredSide::Right,
        }
    }
}
