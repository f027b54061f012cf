// ============================================================================
// APP VIEW - Composición principal: lista + panel + contenedor del mapa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use std::rc::Rc;
use crate::config::MapConfig;
use crate::dom::{ElementBuilder, append_child, set_attribute};
use crate::models::VehicleRecord;
use crate::state::AppState;
use crate::viewmodels::{car_list_items, DetailsPanelModel};
use crate::views::{render_car_list, render_details_panel};

/// Renderizar aplicación completa
pub fn render_app(
    state: &AppState,
    map_config: &MapConfig,
    on_select: Rc<dyn Fn(&VehicleRecord)>,
    on_close: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    let vehicles = state.vehicles();
    let (items, panel) = {
        let selection = state.selection.borrow();
        (
            car_list_items(&vehicles, &selection),
            DetailsPanelModel::from_selection(&selection),
        )
    };

    let layout = ElementBuilder::new("div")?
        .class("d-flex col-12 fleet-dashboard")
        .build();

    // Columna izquierda: tarjeta con panel de detalles + lista
    let sidebar = ElementBuilder::new("div")?
        .id("car-list-container")?
        .class("col-4 col-md-3 overflow-auto")
        .build();
    set_attribute(&sidebar, "style", "height: 100vh")?;

    let card = ElementBuilder::new("div")?
        .class("card")
        .build();
    append_child(&card, &render_details_panel(&panel, on_close)?)?;

    let header = ElementBuilder::new("div")?
        .class("card-header text-center")
        .text("List of Drivers")
        .build();
    append_child(&card, &header)?;
    append_child(&card, &render_car_list(&items, &vehicles, on_select)?)?;
    append_child(&sidebar, &card)?;

    // Columna derecha: mapa (Leaflet se monta después del append)
    let map_column = ElementBuilder::new("div")?
        .class("col-8 col-md-9")
        .build();
    let map = ElementBuilder::new("div")?
        .id(&map_config.container_id)?
        .class("fleet-map")
        .build();
    set_attribute(&map, "style", "height: 100vh; width: 100%")?;
    append_child(&map_column, &map)?;

    append_child(&layout, &sidebar)?;
    append_child(&layout, &map_column)?;

    log::debug!("🧱 [VIEW] App renderizada con {} vehículos", vehicles.len());
    Ok(layout)
}
