// ============================================================================
// LEAFLET FFI - Foreign Function Interface para js/map.js
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Crea (o recrea) el mapa Leaflet dentro del contenedor indicado
    #[wasm_bindgen(js_name = initFleetMap, catch)]
    pub fn init_fleet_map(
        container_id: &str,
        center_lat: f64,
        center_lng: f64,
        zoom: f64,
        tile_url: &str,
        attribution: &str,
    ) -> Result<(), JsValue>;

    /// Reemplaza los marcadores (JSON de `MapMarker[]`)
    #[wasm_bindgen(js_name = setVehicleMarkers, catch)]
    pub fn set_vehicle_markers(markers_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = flyToCoordinate, catch)]
    pub fn fly_to_coordinate(lat: f64, lng: f64, zoom: f64) -> Result<(), JsValue>;

    /// El handler recibe la matrícula del marcador pulsado
    #[wasm_bindgen(js_name = setMarkerClickHandler, catch)]
    pub fn set_marker_click_handler(handler: &js_sys::Function) -> Result<(), JsValue>;
}
