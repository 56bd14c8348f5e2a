mod raw_route;
mod route_ops;
mod route_option;

pub use raw_route::RawRoute;
pub use route_ops::{build_route_option, build_route_options, rank_route_options, ROUTE_COLORS};
pub use route_option::RouteOption;
