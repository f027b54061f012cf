pub mod app;
pub mod car_list;
pub mod details_panel;

pub use app::render_app;
pub use car_list::{render_car_list, CAR_ITEM_CLASS};
pub use details_panel::{render_details_panel, fill_details_panel, DETAILS_PANEL_ID};
