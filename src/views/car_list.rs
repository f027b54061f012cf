// ============================================================================
// CAR LIST VIEW - Lista de conductores (Rust puro)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use std::rc::Rc;
use crate::dom::{ElementBuilder, append_child, on_click, set_attribute};
use crate::models::VehicleRecord;
use crate::viewmodels::CarListItem;

pub const CAR_ITEM_CLASS: &str = "car-item";

/// Clases de un item según esté activo o no
pub fn car_item_class(active: bool) -> String {
    if active {
        format!("list-group-item {} active", CAR_ITEM_CLASS)
    } else {
        format!("list-group-item {}", CAR_ITEM_CLASS)
    }
}

/// Renderizar lista de vehículos (un item por registro)
pub fn render_car_list(
    items: &[CarListItem],
    vehicles: &[VehicleRecord],
    on_select: Rc<dyn Fn(&VehicleRecord)>,
) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("div")?
        .id("car-list")?
        .class("list-group list-group-flush")
        .build();

    for (item, vehicle) in items.iter().zip(vehicles) {
        let element = render_car_item(item, vehicle.clone(), on_select.clone())?;
        append_child(&list, &element)?;
    }

    Ok(list)
}

/// Renderizar un item: matrícula + primer segmento de la dirección
pub fn render_car_item(
    item: &CarListItem,
    vehicle: VehicleRecord,
    on_select: Rc<dyn Fn(&VehicleRecord)>,
) -> Result<Element, JsValue> {
    let element = ElementBuilder::new("div")?
        .class(&car_item_class(item.active))
        .attr("data-index", &item.index.to_string())?
        .attr("data-plate", &item.plate)?
        .build();

    let icon = ElementBuilder::new("span")?
        .class("car-icon")
        .text("🚗")
        .build();
    set_attribute(&icon, "style", "margin-right: 8px")?;

    let title = ElementBuilder::new("h6")?
        .child(icon)?
        .build();
    let plate = ElementBuilder::new("span")?
        .class("car-plate")
        .text(&item.plate)
        .build();
    append_child(&title, &plate)?;

    let address = ElementBuilder::new("span")?
        .class("car-address")
        .text(&item.short_address)
        .build();

    append_child(&element, &title)?;
    append_child(&element, &address)?;

    on_click(&element, move |_| {
        on_select(&vehicle);
    })?;

    Ok(element)
}
