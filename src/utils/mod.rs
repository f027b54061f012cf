// Utils compartidos

pub mod leaflet_ffi;
pub mod timer;

pub use timer::{Scheduler, TimeoutScheduler};
