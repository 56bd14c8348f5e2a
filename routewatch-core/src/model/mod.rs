mod coords;

pub mod clock;
pub mod route;
pub mod zone;

pub use coords::LocationCoords;
