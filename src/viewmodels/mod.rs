pub mod map_viewmodel;
pub mod search_viewmodel;
pub mod location_viewmodel;

pub use map_viewmodel::{MapViewModel, SelectionState};
pub use search_viewmodel::{SearchFilterBuilder, SearchSequencer, SearchViewModel};
pub use location_viewmodel::{LocationViewModel, LookupMode};
