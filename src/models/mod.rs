pub mod coordinate;
pub mod venue;
pub mod filters;
pub mod map;

pub use coordinate::Coordinate;
pub use venue::{Venue, VenueListResponse};
pub use filters::{FilterState, PRICE_MAX_DEFAULT, PRICE_MIN_DEFAULT};
pub use map::{LocationSource, LocationState, MapLoadError, MapStatus, MarkerDescriptor, MarkerIcon};
