pub mod use_geolocation;
pub mod use_map;
pub mod use_venue_search;

pub use use_geolocation::use_geolocation;
pub use use_map::use_map;
pub use use_venue_search::use_venue_search;
