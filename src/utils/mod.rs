// Utils compartidos

pub mod constants;
pub mod google_maps_ffi;
pub mod storage;

pub use constants::*;
pub use storage::*;
