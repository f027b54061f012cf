// Módulo de mapas: trait común + implementación web (Leaflet)

pub mod traits;
pub mod web;

pub use traits::{MapError, MapRenderer};
pub use web::LeafletMapRenderer;
