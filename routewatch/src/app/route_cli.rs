use super::RouteCliError;
use clap::{Parser, Subcommand};

/// command line tool for traffic-aware route planning
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RouteCliArguments {
    /// select the routing operation to run
    #[command(subcommand)]
    pub op: RouteOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum RouteOperation {
    /// calculates route alternatives between two locations and prints them
    /// ranked by traffic impact
    Route {
        /// start location: a named place or a "lat,lng" pair
        #[arg(short, long)]
        from: String,
        /// destination location: a named place or a "lat,lng" pair
        #[arg(short, long)]
        to: String,
        /// path to a TOML or JSON configuration file
        #[arg(short, long)]
        config: Option<String>,
        /// emit the computed plan as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// replays recorded position fixes toward a destination, recomputing the
    /// route whenever displacement exceeds the tracking threshold
    Track {
        /// path to a JSON file of recorded position fixes
        #[arg(short = 'x', long)]
        fixes_file: String,
        /// destination location: a named place or a "lat,lng" pair
        #[arg(short, long)]
        to: String,
        /// path to a TOML or JSON configuration file
        #[arg(short, long)]
        config: Option<String>,
    },
    /// lists the traffic zone catalog
    Zones {
        /// path to a TOML or JSON configuration file
        #[arg(short, long)]
        config: Option<String>,
    },
}

impl RouteOperation {
    pub fn run(&self) -> Result<(), RouteCliError> {
        match self {
            RouteOperation::Route {
                from,
                to,
                config,
                json,
            } => crate::app::run_route(from, to, config, *json),
            RouteOperation::Track {
                fixes_file,
                to,
                config,
            } => crate::app::run_track(fixes_file, to, config),
            RouteOperation::Zones { config } => crate::app::run_zones(config),
        }
    }
}
