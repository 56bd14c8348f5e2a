mod catalog;
mod catalog_error;
mod congestion_band;
mod traffic_level;
mod traffic_zone;
mod zone_ops;

pub use catalog::ZoneCatalog;
pub use catalog_error::ZoneCatalogError;
pub use congestion_band::CongestionBand;
pub use traffic_level::{TimeOfDay, TrafficLevel};
pub use traffic_zone::TrafficZone;
pub use zone_ops::{traffic_impact, zones_along_route};
