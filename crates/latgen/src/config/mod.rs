/// Backend availability config module.
pub mod backends;
/// Type universe and catalog config module.
pub mod types;

mod base;
mod logger;

pub use backends::BackendAvailability;
pub use base::*;
pub use logger::*;
