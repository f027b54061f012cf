// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo actualiza elementos específicos que cambiaron, sin re-renderizar todo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use std::rc::Rc;
use crate::dom::{elements_by_class_name, get_attribute, get_element_by_id, has_class, toggle_class};
use crate::viewmodels::DetailsPanelModel;
use crate::views::{fill_details_panel, CAR_ITEM_CLASS, DETAILS_PANEL_ID};

/// Actualizar clases "active" de la lista.
/// Solo hace scroll a los items que pasan de inactivo a activo.
pub fn update_car_selection(selected_plate: Option<&str>) -> Result<(), JsValue> {
    let mut scrolled = false;
    for item in elements_by_class_name(CAR_ITEM_CLASS)? {
        let plate = get_attribute(&item, "data-plate");
        let active = selected_plate.is_some() && plate.as_deref() == selected_plate;
        let was_active = has_class(&item, "active");
        toggle_class(&item, "active", active)?;

        if active && !was_active && !scrolled {
            log::debug!("📜 [LIST] Scroll al item {:?}", plate);
            scroll_item_into_view(&item);
            scrolled = true;
        }
    }
    Ok(())
}

/// Centrar el item dentro de su contenedor con animación suave
fn scroll_item_into_view(item: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    options.set_inline(ScrollLogicalPosition::Nearest);
    item.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Repintar el panel de detalles a partir del modelo
pub fn update_details_panel(model: &DetailsPanelModel, on_close: Rc<dyn Fn()>) -> Result<(), JsValue> {
    match get_element_by_id(DETAILS_PANEL_ID) {
        Some(panel) => fill_details_panel(&panel, model, on_close),
        None => {
            log::warn!("⚠️ Panel #{} no existe, necesita re-render completo", DETAILS_PANEL_ID);
            Err(JsValue::from_str("Details panel not found, needs full render"))
        }
    }
}
