mod map_scene;

pub use map_scene::{zone_color, MapScene, Marker, MarkerKind, RoutePolyline, ZoneCircle};
