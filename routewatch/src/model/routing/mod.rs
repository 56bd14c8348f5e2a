mod backend;
mod osrm;
mod routing_error;
mod tomtom;

pub use backend::RoutingBackend;
pub use osrm::OsrmClient;
pub use routing_error::RoutingError;
pub use tomtom::TomTomClient;
