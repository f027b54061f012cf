pub mod vehicle;

pub use vehicle::{GeoCoordinate, VehicleRecord};
