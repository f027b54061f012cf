// ============================================================================
// DETAILS PANEL VIEW - Panel lateral con dirección y combustible (Rust puro)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use std::rc::Rc;
use crate::dom::{ElementBuilder, append_child, on_click, set_attribute, set_inner_html, toggle_class};
use crate::viewmodels::{DetailsContent, DetailsPanelModel};

pub const DETAILS_PANEL_ID: &str = "details-panel";

/// Renderizar el contenedor del panel (siempre presente en el DOM)
pub fn render_details_panel(model: &DetailsPanelModel, on_close: Rc<dyn Fn()>) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?
        .id(DETAILS_PANEL_ID)?
        .class("details-panel")
        .build();
    fill_details_panel(&panel, model, on_close)?;
    Ok(panel)
}

/// (Re)pinta el contenido del panel dentro de `panel`
pub fn fill_details_panel(panel: &Element, model: &DetailsPanelModel, on_close: Rc<dyn Fn()>) -> Result<(), JsValue> {
    set_inner_html(panel, "");
    toggle_class(panel, "show", model.visible)?;

    // Sin selección el cuerpo no se monta
    let Some(content) = &model.content else {
        return Ok(());
    };

    let backdrop = ElementBuilder::new("div")?
        .class("offcanvas-backdrop backdrop")
        .build();
    {
        let on_close = on_close.clone();
        on_click(&backdrop, move |_| on_close())?;
    }
    append_child(panel, &backdrop)?;

    let offcanvas = ElementBuilder::new("div")?
        .class("offcanvas offcanvas-end off-canvas")
        .build();

    append_child(&offcanvas, &render_header(content, on_close)?)?;
    append_child(&offcanvas, &render_body(content)?)?;
    append_child(panel, &offcanvas)?;

    Ok(())
}

fn render_header(content: &DetailsContent, on_close: Rc<dyn Fn()>) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("offcanvas-header")
        .build();

    let title = ElementBuilder::new("h5")?
        .class("offcanvas-title")
        .text(&content.title)
        .build();

    let close_btn = ElementBuilder::new("button")?
        .class("btn-close")
        .attr("type", "button")?
        .attr("aria-label", "Close")?
        .text("✕")
        .build();
    on_click(&close_btn, move |_| on_close())?;

    append_child(&header, &title)?;
    append_child(&header, &close_btn)?;
    Ok(header)
}

fn render_body(content: &DetailsContent) -> Result<Element, JsValue> {
    let body = ElementBuilder::new("div")?
        .class("offcanvas-body")
        .build();

    // Dirección completa
    let address_row = ElementBuilder::new("div")?
        .class("mb-1 d-flex column align-items-center")
        .build();
    let arrow = ElementBuilder::new("span")?
        .class("location-icon")
        .text("➤")
        .build();
    set_attribute(&arrow, "style", "margin-right: 8px")?;
    let address = ElementBuilder::new("span")?
        .class("details-address")
        .text(&content.address)
        .build();
    append_child(&address_row, &arrow)?;
    append_child(&address_row, &address)?;

    // Combustible
    let fuel_row = ElementBuilder::new("div")?
        .class("mb-1 fuel-level")
        .build();
    let fuel_title = ElementBuilder::new("span")?
        .text("🚗 Fuel Level:")
        .build();
    append_child(&fuel_row, &fuel_title)?;
    append_child(&fuel_row, &render_progress_bar(content.fuel_percent, &content.fuel_label)?)?;

    append_child(&body, &address_row)?;
    append_child(&body, &fuel_row)?;
    Ok(body)
}

/// Barra de progreso estilo bootstrap con etiqueta numérica
fn render_progress_bar(percent: f64, label: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("progress mt-1")
        .build();

    let bar = ElementBuilder::new("div")?
        .class("progress-bar")
        .attr("role", "progressbar")?
        .attr("aria-valuemin", "0")?
        .attr("aria-valuemax", "100")?
        .attr("aria-valuenow", &percent.to_string())?
        .text(label)
        .build();
    set_attribute(&bar, "style", &format!("width: {}%", percent))?;

    append_child(&container, &bar)?;
    Ok(container)
}
