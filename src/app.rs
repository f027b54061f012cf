// ============================================================================
// APP - Aplicación principal (composición raíz)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use crate::config::AppConfig;
use crate::dom::{get_element_by_id, set_inner_html, append_child, update_car_selection, update_details_panel};
use crate::maps::{LeafletMapRenderer, MapRenderer};
use crate::models::VehicleRecord;
use crate::services::{load_into_state, vehicles_or_empty, HttpVehicleProvider, StaticVehicleProvider};
use crate::state::app_state::{AppState, UpdateType};
use crate::utils::TimeoutScheduler;
use crate::viewmodels::{DetailsPanelModel, MapViewModel, ViewportController};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    config: AppConfig,
    root: Option<Element>,
    map: LeafletMapRenderer,
    viewport: ViewportController,
    /// Matrícula activa en el último DOM pintado
    rendered_plate: Option<String>,
    on_select: Rc<dyn Fn(&VehicleRecord)>,
    on_close: Rc<dyn Fn()>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new(config: AppConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(&config.panel_config, Rc::new(TimeoutScheduler));
        log::info!(
            "🪟 [APP] Panel: reveal a {} ms, modo {:?}",
            config.panel_config.reveal_delay_ms,
            state.selection.borrow().mode()
        );

        // Dataset embebido: disponible antes del primer render
        let bundled = StaticVehicleProvider::bundled();
        state.set_vehicles(vehicles_or_empty("bundled", bundled.load()));

        // Dataset nuevo -> re-render completo (batcheado con Timeout 0)
        state.vehicles.subscribe(|_| {
            Timeout::new(0, crate::rerender_app).forget();
        });

        // Selección / panel -> actualización incremental
        state.selection.subscribe(|_| {
            crate::rerender_app_with_type(UpdateType::Selection);
        });

        if let Some(url) = config.data_config.vehicles_url.clone() {
            log::info!("🌐 [APP] Dataset remoto configurado: {}", url);
            wasm_bindgen_futures::spawn_local(load_into_state(HttpVehicleProvider::new(url), state.clone()));
        }

        let on_select: Rc<dyn Fn(&VehicleRecord)> = {
            let state = state.clone();
            Rc::new(move |vehicle: &VehicleRecord| state.select_vehicle(vehicle))
        };
        let on_close: Rc<dyn Fn()> = {
            let state = state.clone();
            Rc::new(move || state.dismiss_panel())
        };

        Ok(Self {
            state,
            config,
            root: Some(root),
            map: LeafletMapRenderer::new(),
            viewport: ViewportController::new(),
            rendered_plate: None,
            on_select,
            on_close,
        })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::info!("🎬 [APP] Render completo");

        let Some(root) = &self.root else {
            return Ok(());
        };

        set_inner_html(root, "");
        let app_view = render_app(
            &self.state,
            &self.config.map_config,
            self.on_select.clone(),
            self.on_close.clone(),
        )?;
        append_child(root, &app_view)?;

        // El contenedor del mapa ya existe: montar Leaflet
        match self.map.initialize(&self.config.map_config) {
            Ok(()) => {
                let state = self.state.clone();
                let handler: Rc<dyn Fn(String)> = Rc::new(move |plate: String| {
                    state.select_by_plate(&plate);
                });
                if let Err(e) = self.map.on_marker_click(handler) {
                    log::error!("❌ [MAP] No se pudo registrar el click de marcadores: {}", e);
                }
            }
            Err(e) => log::error!("❌ [MAP] Error inicializando mapa: {}", e),
        }

        self.push_markers();
        self.rendered_plate = self.state.selection.borrow().selected_plate().map(str::to_string);
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&mut self, update_type: UpdateType) -> Result<(), JsValue> {
        match update_type {
            UpdateType::FullRender => self.render(),
            UpdateType::Selection => {
                let selected = self.state.selected();
                let (phase, panel) = {
                    let selection = self.state.selection.borrow();
                    (selection.phase(), DetailsPanelModel::from_selection(&selection))
                };
                log::debug!("🔄 [SELECTION] Fase {:?}", phase);
                let selected_plate = selected.as_ref().map(|v| v.plate.clone());

                if selected_plate != self.rendered_plate {
                    update_car_selection(selected_plate.as_deref())?;
                    self.push_markers();
                    self.rendered_plate = selected_plate;
                }

                if let Err(e) = self.viewport.on_selection(selected.as_ref(), &mut self.map, &self.config.map_config) {
                    log::warn!("⚠️ [MAP] flyTo falló: {}", e);
                }

                update_details_panel(&panel, self.on_close.clone())
            }
        }
    }

    fn push_markers(&mut self) {
        if !self.map.is_ready() {
            log::debug!("🗺️ [MAP] Mapa no listo, marcadores omitidos");
            return;
        }
        let markers = {
            let vehicles = self.state.vehicles.borrow();
            let selection = self.state.selection.borrow();
            MapViewModel::prepare_markers(&vehicles, &selection, &self.config.marker_config)
        };
        MapViewModel::push_markers(&mut self.map, &markers);
    }
}
