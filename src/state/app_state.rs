// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Dueño único de la selección y de la visibilidad del panel.
// Lista y mapa convergen en `select_vehicle`.
// ============================================================================

use std::rc::Rc;
use crate::config::PanelConfig;
use crate::models::VehicleRecord;
use crate::state::ReactiveState;
use crate::state::selection::{RevealEffect, SelectionMachine};
use crate::utils::Scheduler;

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Selección o panel cambiaron (clases de la lista, marcadores, mapa, panel)
    Selection,
    /// Re-render completo (dataset nuevo)
    FullRender,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub vehicles: ReactiveState<Vec<VehicleRecord>>,
    pub selection: ReactiveState<SelectionMachine>,
    scheduler: Rc<dyn Scheduler>,
    reveal_delay_ms: u32,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(panel_config: &PanelConfig, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            vehicles: ReactiveState::new(Vec::new()),
            selection: ReactiveState::new(SelectionMachine::new(panel_config.reveal_mode)),
            scheduler,
            reveal_delay_ms: panel_config.reveal_delay_ms,
        }
    }

    /// Reemplaza el dataset (carga inicial o proveedor remoto)
    pub fn set_vehicles(&self, vehicles: Vec<VehicleRecord>) {
        log::info!("🚗 [STATE] Dataset con {} vehículos", vehicles.len());
        self.vehicles.set(vehicles);
    }

    pub fn vehicles(&self) -> Vec<VehicleRecord> {
        self.vehicles.get()
    }

    /// Punto único de selección para lista y marcadores.
    /// Selecciona de inmediato y programa un reveal del panel.
    pub fn select_vehicle(&self, vehicle: &VehicleRecord) {
        let outcome = self.selection.update(|machine| machine.select(vehicle.clone()));
        log::info!(
            "📍 [SELECTION] {} seleccionado (cambio: {}, reveal #{}, pendientes: {})",
            vehicle.plate,
            outcome.changed,
            outcome.ticket.event_id,
            self.pending_reveals()
        );

        let selection = self.selection.clone();
        self.scheduler.schedule(
            self.reveal_delay_ms,
            Box::new(move || {
                let effect = selection.update(|machine| machine.fire_reveal(outcome.ticket));
                match effect {
                    RevealEffect::Opened => log::debug!("🪟 [SELECTION] Panel abierto (reveal #{})", outcome.ticket.event_id),
                    RevealEffect::Closed => log::debug!("🪟 [SELECTION] Panel cerrado por toggle (reveal #{})", outcome.ticket.event_id),
                    RevealEffect::Discarded => log::debug!("⏭️ [SELECTION] Reveal #{} obsoleto, descartado", outcome.ticket.event_id),
                }
            }),
        );
    }

    /// Selección desde el mapa: el marcador solo conoce la matrícula
    pub fn select_by_plate(&self, plate: &str) -> bool {
        let vehicle = self
            .vehicles
            .borrow()
            .iter()
            .find(|v| v.plate == plate)
            .cloned();
        match vehicle {
            Some(vehicle) => {
                self.select_vehicle(&vehicle);
                true
            }
            None => {
                log::warn!("⚠️ [SELECTION] Matrícula desconocida desde el mapa: {}", plate);
                false
            }
        }
    }

    /// Cerrar panel (botón o backdrop). La selección se mantiene.
    pub fn dismiss_panel(&self) {
        let was_open = self.selection.update(|machine| machine.dismiss());
        if was_open {
            log::info!("✖️ [SELECTION] Panel cerrado");
        }
    }

    /// Limpia la selección y fuerza el cierre del panel
    pub fn clear_selection(&self) {
        if self.selection.update(|machine| machine.clear()) {
            log::info!("🧹 [SELECTION] Selección limpiada");
        }
    }

    pub fn selected(&self) -> Option<VehicleRecord> {
        self.selection.borrow().selected().cloned()
    }

    #[cfg(test)]
    pub fn is_panel_visible(&self) -> bool {
        self.selection.borrow().is_panel_visible()
    }

    pub fn pending_reveals(&self) -> usize {
        self.selection.borrow().pending_reveals()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MarkerConfig, RevealMode};
    use crate::models::vehicle::sample_vehicle;
    use crate::viewmodels::{car_list_items, MapViewModel};
    use crate::utils::timer::manual::ManualScheduler;
    use std::cell::RefCell;

    fn state_with(mode: RevealMode) -> (AppState, Rc<ManualScheduler>) {
        let scheduler = Rc::new(ManualScheduler::new());
        let config = PanelConfig {
            reveal_delay_ms: 1000,
            reveal_mode: mode,
        };
        let state = AppState::new(&config, scheduler.clone());
        state.set_vehicles(vec![
            sample_vehicle("AB-123", "Main St, Hamburg", 42.0, 53.55, 10.0),
            sample_vehicle("HH-777", "Reeperbahn 1, Hamburg", 80.0, 53.549, 9.96),
        ]);
        (state, scheduler)
    }

    #[test]
    fn panel_opens_after_reveal_delay() {
        let (state, scheduler) = state_with(RevealMode::Latest);
        let vehicle = state.vehicles()[0].clone();

        state.select_vehicle(&vehicle);
        assert_eq!(state.selected().map(|v| v.plate), Some("AB-123".to_string()));
        assert!(!state.is_panel_visible());

        scheduler.advance(999);
        assert!(!state.is_panel_visible());
        scheduler.advance(1);
        assert!(state.is_panel_visible());
        let shown = state.selected().unwrap();
        assert_eq!(shown.address, "Main St, Hamburg");
        assert_eq!(shown.fuel_label(), "42%");
    }

    #[test]
    fn marker_and_list_selection_converge() {
        let (from_list, list_clock) = state_with(RevealMode::Latest);
        let (from_map, map_clock) = state_with(RevealMode::Latest);

        let target = from_list.vehicles()[1].clone();
        from_list.select_vehicle(&target);
        assert!(from_map.select_by_plate("HH-777"));
        list_clock.advance(1000);
        map_clock.advance(1000);

        assert_eq!(from_list.selected(), from_map.selected());
        assert_eq!(from_list.is_panel_visible(), from_map.is_panel_visible());
        assert!(from_map.is_panel_visible());
    }

    #[test]
    fn marker_click_reaches_shared_selection() {
        use crate::config::MapConfig;
        use crate::maps::traits::recording::RecordingMapRenderer;
        use crate::maps::MapRenderer;

        let (state, scheduler) = state_with(RevealMode::Latest);
        let mut map = RecordingMapRenderer::default();
        map.initialize(&MapConfig::default()).unwrap();
        {
            let state = state.clone();
            map.on_marker_click(Rc::new(move |plate: String| {
                state.select_by_plate(&plate);
            }))
            .unwrap();
        }

        map.click("HH-777");
        assert_eq!(state.selected().map(|v| v.plate), Some("HH-777".to_string()));
        scheduler.advance(1000);
        assert!(state.is_panel_visible());
    }

    #[test]
    fn unknown_plate_from_map_is_ignored() {
        let (state, scheduler) = state_with(RevealMode::Latest);
        assert!(!state.select_by_plate("ZZ-000"));
        assert!(state.selected().is_none());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dismiss_hides_panel_but_keeps_selection() {
        let (state, scheduler) = state_with(RevealMode::Latest);
        let vehicle = state.vehicles()[0].clone();
        state.select_vehicle(&vehicle);
        scheduler.advance(1000);

        state.dismiss_panel();
        assert!(!state.is_panel_visible());

        // Lista y marcador siguen activos para V
        let vehicles = state.vehicles();
        let selection = state.selection.borrow();
        assert!(selection.is_selected(&vehicle));
        let items = car_list_items(&vehicles, &selection);
        assert!(items[0].active);
        assert!(!items[1].active);
        let markers = MapViewModel::prepare_markers(&vehicles, &selection, &MarkerConfig::default());
        assert!(markers[0].active);
        assert!(!markers[1].active);
        assert_eq!(markers[0].icon.class_name, "carIconActive");
    }

    #[test]
    fn toggle_reveal_scheduled_before_clear_does_not_close_new_selection() {
        let (state, scheduler) = state_with(RevealMode::Toggle);
        let a = state.vehicles()[0].clone();
        let b = state.vehicles()[1].clone();

        state.select_vehicle(&a);
        scheduler.advance(200);
        state.clear_selection();
        state.select_vehicle(&b);

        scheduler.advance(800);
        assert!(!state.is_panel_visible(), "el reveal de A quedó anulado por el clear");
        scheduler.advance(200);
        assert!(state.is_panel_visible());
        assert_eq!(state.selected().map(|v| v.plate), Some("HH-777".to_string()));
    }

    #[test]
    fn two_quick_selections_in_toggle_mode_end_closed() {
        let (state, scheduler) = state_with(RevealMode::Toggle);
        let a = state.vehicles()[0].clone();
        let b = state.vehicles()[1].clone();

        state.select_vehicle(&a);
        scheduler.advance(400);
        state.select_vehicle(&b);
        assert_eq!(scheduler.pending(), 2);
        assert_eq!(state.pending_reveals(), 2);

        scheduler.advance(600);
        assert!(state.is_panel_visible(), "el reveal de A abre el panel");
        scheduler.advance(400);
        assert!(!state.is_panel_visible(), "el reveal de B lo vuelve a cerrar");
        assert_eq!(state.pending_reveals(), 0);
        assert_eq!(state.selected().map(|v| v.plate), Some("HH-777".to_string()));
    }

    #[test]
    fn two_quick_selections_in_latest_mode_open_for_last() {
        let (state, scheduler) = state_with(RevealMode::Latest);
        let a = state.vehicles()[0].clone();
        let b = state.vehicles()[1].clone();

        state.select_vehicle(&a);
        scheduler.advance(400);
        state.select_vehicle(&b);

        scheduler.advance(600);
        assert!(!state.is_panel_visible(), "el reveal de A está obsoleto");
        scheduler.advance(400);
        assert!(state.is_panel_visible());
        assert_eq!(state.selected().map(|v| v.plate), Some("HH-777".to_string()));
    }

    #[test]
    fn clearing_selection_force_closes_panel() {
        let (state, scheduler) = state_with(RevealMode::Latest);
        let vehicle = state.vehicles()[0].clone();
        state.select_vehicle(&vehicle);
        scheduler.advance(1000);

        state.clear_selection();
        assert!(!state.is_panel_visible());
        assert!(state.selected().is_none());
    }

    #[test]
    fn selection_changes_notify_subscribers() {
        let (state, scheduler) = state_with(RevealMode::Latest);
        let notifications = Rc::new(RefCell::new(0));
        {
            let notifications = notifications.clone();
            state.selection.subscribe(move |_| *notifications.borrow_mut() += 1);
        }
        let vehicle = state.vehicles()[0].clone();
        state.select_vehicle(&vehicle);
        scheduler.advance(1000);
        state.dismiss_panel();
        assert_eq!(*notifications.borrow(), 3);
    }
}
