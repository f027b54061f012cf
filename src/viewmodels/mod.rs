pub mod map_viewmodel;
pub mod panel_viewmodel;

pub use map_viewmodel::{MapMarker, MapViewModel, ViewportController};
pub use panel_viewmodel::{car_list_items, CarListItem, DetailsContent, DetailsPanelModel};
