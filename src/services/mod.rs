pub mod api_client;
pub mod geolocation_service;
pub mod maps_loader;

pub use api_client::ApiClient;
pub use geolocation_service::{current_position, GeolocationError, GeolocationOptions};
pub use maps_loader::{load_google_maps, on_auth_failure};
