mod config;
mod route_cli;
mod route_cli_error;
mod run;

pub use config::{AppConfig, FallbackServiceConfig, NamedPlace, PrimaryServiceConfig};
pub use route_cli::{RouteCliArguments, RouteOperation};
pub use route_cli_error::RouteCliError;
pub use run::{run_route, run_track, run_zones};
