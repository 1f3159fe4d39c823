//! Profile write path

pub mod ports;
pub mod service;

pub use ports::ProfileStore;
pub use service::AvailabilityService;
