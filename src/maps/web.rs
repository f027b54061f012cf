use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use crate::config::MapConfig;
use crate::models::GeoCoordinate;
use crate::utils::leaflet_ffi;
use crate::viewmodels::MapMarker;
use super::{MapError, MapRenderer};

/// Renderizador de mapas para web usando Leaflet (js/map.js)
#[derive(Default)]
pub struct LeafletMapRenderer {
    is_ready: bool,
    click_closure: Option<Closure<dyn FnMut(String)>>,
}

impl LeafletMapRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

fn js_error(e: JsValue) -> MapError {
    MapError::Js(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

impl MapRenderer for LeafletMapRenderer {
    fn initialize(&mut self, config: &MapConfig) -> Result<(), MapError> {
        log::info!(
            "🗺️ [MAP] Inicializando Leaflet en #{} ({}, {}) zoom {}",
            config.container_id,
            config.initial_center_lat,
            config.initial_center_lng,
            config.initial_zoom
        );
        leaflet_ffi::init_fleet_map(
            &config.container_id,
            config.initial_center_lat,
            config.initial_center_lng,
            config.initial_zoom,
            &config.tile_url,
            &config.attribution,
        )
        .map_err(js_error)?;
        self.is_ready = true;
        Ok(())
    }

    fn set_markers(&mut self, markers: &[MapMarker]) -> Result<(), MapError> {
        if !self.is_ready {
            return Err(MapError::NotReady);
        }
        let json = serde_json::to_string(markers).map_err(|e| MapError::Js(e.to_string()))?;
        log::debug!("📍 [MAP] Enviando {} marcadores ({} bytes)", markers.len(), json.len());
        leaflet_ffi::set_vehicle_markers(&json).map_err(js_error)
    }

    fn fly_to(&mut self, coordinate: GeoCoordinate, zoom: f64) -> Result<(), MapError> {
        if !self.is_ready {
            return Err(MapError::NotReady);
        }
        if !coordinate.is_valid() {
            return Err(MapError::InvalidCoordinates(coordinate.latitude, coordinate.longitude));
        }
        log::info!("🎯 [MAP] flyTo ({}, {}) zoom {}", coordinate.latitude, coordinate.longitude, zoom);
        leaflet_ffi::fly_to_coordinate(coordinate.latitude, coordinate.longitude, zoom).map_err(js_error)
    }

    fn on_marker_click(&mut self, handler: Rc<dyn Fn(String)>) -> Result<(), MapError> {
        let closure = Closure::wrap(Box::new(move |plate: String| {
            handler(plate);
        }) as Box<dyn FnMut(String)>);
        leaflet_ffi::set_marker_click_handler(closure.as_ref().unchecked_ref()).map_err(js_error)?;
        // Guardado (no forget): reinstalar el handler libera el anterior
        self.click_closure = Some(closure);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.is_ready
    }
}
