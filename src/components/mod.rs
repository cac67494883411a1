pub mod app;
pub mod alert;
pub mod search_bar;
pub mod filter_panel;
pub mod active_filters;
pub mod venue_card;
pub mod venue_list;
pub mod venue_info_panel;
pub mod map_view;

pub use app::App;
pub use alert::Alert;
pub use search_bar::SearchBar;
pub use filter_panel::FilterPanel;
pub use active_filters::ActiveFilters;
pub use venue_list::VenueList;
pub use map_view::MapView;
