// ============================================================================
// FLEET DASHBOARD - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Derivan lo que se pinta a partir del estado
// - Services: Carga del dataset de vehículos
// - State: Selección + panel con Rc<RefCell> y subscribers
// - Maps: Trait MapRenderer + implementación Leaflet
// ============================================================================

mod models;
mod error;
mod config;
mod services;
mod viewmodels;
mod state;
mod maps;
mod dom;
mod views;
mod utils;
mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_logger::Config;
use crate::app::App;
use crate::config::AppConfig;
use crate::state::app_state::UpdateType;
use std::cell::RefCell;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging (ENABLE_LOGGING=false deja solo errores)
    let config = AppConfig::from_env();
    wasm_logger::init(Config::new(config.log_level()));
    log::info!("🚀 [APP] Fleet Dashboard - Rust Puro + MVVM");

    // Crear y renderizar app
    let mut app = App::new(config)?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Escape limpia la selección. Se registra una sola vez aquí.
    if let Some(win) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            if e.key() == "Escape" {
                clear_selection();
            }
        }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

        win.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Función pública para re-renderizar la app (re-render completo)
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Función pública para actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let Ok(mut guard) = app_cell.try_borrow_mut() else {
            log::warn!("⚠️ [UPDATE] App ocupada, se descarta {:?}", update_type);
            return;
        };
        let Some(app) = guard.as_mut() else {
            log::warn!("⚠️ [UPDATE] App no está inicializada");
            return;
        };

        match update_type {
            UpdateType::Selection => {
                log::debug!("🔄 [UPDATE] Actualización incremental de selección");
                if let Err(e) = app.update_incremental(UpdateType::Selection) {
                    let needs_full_render = format!("{:?}", e).contains("needs full render");
                    if needs_full_render {
                        log::info!("🔄 [UPDATE] Cambiando a re-render completo");
                        if let Err(e) = app.render() {
                            log::error!("❌ Error re-renderizando: {:?}", e);
                        }
                    } else {
                        log::error!("❌ Error en actualización incremental: {:?}", e);
                    }
                }
            }
            UpdateType::FullRender => {
                log::info!("🔄 [RERENDER] Re-render completo");
                if let Err(e) = app.render() {
                    log::error!("❌ Error re-renderizando: {:?}", e);
                }
            }
        }
    });
}

/// Limpia la selección actual (cierra el panel y anula revelados pendientes)
pub fn clear_selection() {
    // El estado se clona fuera del borrow: sus subscribers vuelven a tomar APP
    let state = APP.with(|app_cell| app_cell.borrow().as_ref().map(|app| app.state().clone()));
    match state {
        Some(state) => state.clear_selection(),
        None => log::warn!("⚠️ [SELECTION] App no está inicializada"),
    }
}

/// Re-render completo (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

/// Limpiar selección (llamable desde JavaScript)
#[wasm_bindgen]
pub fn clear_selection_wasm() {
    clear_selection();
}
