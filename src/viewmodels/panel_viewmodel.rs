// ============================================================================
// PANEL + LIST VIEWMODEL - Datos a pintar, sin DOM
// ============================================================================

use crate::models::VehicleRecord;
use crate::state::SelectionMachine;

/// Fila de la lista de conductores
#[derive(Debug, Clone, PartialEq)]
pub struct CarListItem {
    pub index: usize,
    pub plate: String,
    pub short_address: String,
    pub active: bool,
}

/// Una fila por registro, en el orden del dataset
pub fn car_list_items(vehicles: &[VehicleRecord], selection: &SelectionMachine) -> Vec<CarListItem> {
    vehicles
        .iter()
        .enumerate()
        .map(|(index, vehicle)| CarListItem {
            index,
            plate: vehicle.plate.clone(),
            short_address: vehicle.short_address().to_string(),
            active: selection.is_selected(vehicle),
        })
        .collect()
}

/// Contenido del panel de detalles
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsContent {
    pub title: String,
    pub address: String,
    /// Ancho de la barra, acotado a [0, 100]
    pub fuel_percent: f64,
    pub fuel_label: String,
}

/// Estado del panel tal como se debe pintar
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsPanelModel {
    pub visible: bool,
    /// `None` cuando no hay selección: el cuerpo no se monta
    pub content: Option<DetailsContent>,
}

impl DetailsPanelModel {
    pub fn from_selection(selection: &SelectionMachine) -> Self {
        let content = selection.selected().map(|vehicle| DetailsContent {
            title: vehicle.plate.clone(),
            address: vehicle.address.clone(),
            fuel_percent: vehicle.fuel_percent(),
            fuel_label: vehicle.fuel_label(),
        });
        Self {
            visible: selection.is_panel_visible() && content.is_some(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RevealMode;
    use crate::models::vehicle::sample_vehicle;

    #[test]
    fn list_has_one_item_per_vehicle_with_short_address() {
        let vehicles = vec![
            sample_vehicle("AB-123", "Main St, Hamburg", 42.0, 53.55, 10.0),
            sample_vehicle("HH-777", "Speicherstadt", 80.0, 53.54, 9.99),
        ];
        let mut selection = SelectionMachine::new(RevealMode::Latest);
        selection.select(vehicles[0].clone());

        let items = car_list_items(&vehicles, &selection);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].short_address, "Main St");
        assert!(items[0].active);
        assert_eq!(items[1].short_address, "Speicherstadt");
        assert!(!items[1].active);
    }

    #[test]
    fn duplicate_records_are_both_active() {
        let twin = sample_vehicle("AB-123", "Main St, Hamburg", 42.0, 53.55, 10.0);
        let vehicles = vec![twin.clone(), twin.clone()];
        let mut selection = SelectionMachine::new(RevealMode::Latest);
        selection.select(twin);

        let active = car_list_items(&vehicles, &selection).iter().filter(|i| i.active).count();
        assert_eq!(active, 2);
    }

    #[test]
    fn hamburg_scenario_panel_content() {
        let vehicle = sample_vehicle("AB-123", "Main St, Hamburg", 42.0, 53.55, 10.0);
        let mut selection = SelectionMachine::new(RevealMode::Latest);
        let outcome = selection.select(vehicle);

        let hidden = DetailsPanelModel::from_selection(&selection);
        assert!(!hidden.visible);

        selection.fire_reveal(outcome.ticket);
        let shown = DetailsPanelModel::from_selection(&selection);
        assert!(shown.visible);
        assert_eq!(
            shown.content,
            Some(DetailsContent {
                title: "AB-123".to_string(),
                address: "Main St, Hamburg".to_string(),
                fuel_percent: 42.0,
                fuel_label: "42%".to_string(),
            })
        );
    }

    #[test]
    fn panel_without_selection_renders_nothing() {
        let selection = SelectionMachine::new(RevealMode::Toggle);
        let model = DetailsPanelModel::from_selection(&selection);
        assert!(!model.visible);
        assert!(model.content.is_none());
    }
}
