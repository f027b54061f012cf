// ============================================================================
// MAP VIEWMODEL - Lógica de negocio del mapa
// ============================================================================
// Preparación de marcadores + control de cámara. Sin DOM.
// ============================================================================

use serde::Serialize;
use crate::config::{MapConfig, MarkerConfig};
use crate::maps::{MapError, MapRenderer};
use crate::models::VehicleRecord;
use crate::state::SelectionMachine;

/// Icono de un marcador (mismo PNG/SVG, distinto tamaño y clase)
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
    pub icon_url: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
    pub class_name: String,
}

/// Estructura para enviar al mapa
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapMarker {
    /// Matrícula: es lo que vuelve en el click
    pub id: String,
    pub coords: [f64; 2], // [lat, lng]
    pub active: bool,
    pub icon: MarkerIcon,
}

/// ViewModel del mapa - SOLO lógica de negocio
pub struct MapViewModel;

impl MapViewModel {
    pub fn icon_for(active: bool, config: &MarkerConfig) -> MarkerIcon {
        let (size, class_name) = if active {
            (config.active_size, &config.active_class)
        } else {
            (config.inactive_size, &config.inactive_class)
        };
        MarkerIcon {
            icon_url: config.icon_url.clone(),
            icon_size: [size, size],
            icon_anchor: config.anchor,
            class_name: class_name.clone(),
        }
    }

    /// Un marcador por registro, en el orden del dataset
    pub fn prepare_markers(
        vehicles: &[VehicleRecord],
        selection: &SelectionMachine,
        config: &MarkerConfig,
    ) -> Vec<MapMarker> {
        vehicles
            .iter()
            .map(|vehicle| {
                let active = selection.is_selected(vehicle);
                MapMarker {
                    id: vehicle.plate.clone(),
                    coords: vehicle.geo_coordinate.as_lat_lng(),
                    active,
                    icon: Self::icon_for(active, config),
                }
            })
            .collect()
    }

    /// Enviar marcadores al mapa; un fallo se registra y no toca la selección
    pub fn push_markers(map: &mut dyn MapRenderer, markers: &[MapMarker]) {
        if let Err(e) = map.set_markers(markers) {
            log::warn!("⚠️ [MAP] No se pudieron actualizar los marcadores: {}", e);
        }
    }
}

/// Observer de la selección que mueve la cámara.
/// Vuela una vez por cada cambio de matrícula seleccionada; nada al limpiar.
#[derive(Debug, Default)]
pub struct ViewportController {
    focused_plate: Option<String>,
}

impl ViewportController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Devuelve `Ok(true)` si se ordenó un vuelo
    pub fn on_selection(
        &mut self,
        selected: Option<&VehicleRecord>,
        map: &mut dyn MapRenderer,
        config: &MapConfig,
    ) -> Result<bool, MapError> {
        let Some(vehicle) = selected else {
            self.focused_plate = None;
            return Ok(false);
        };
        if self.focused_plate.as_deref() == Some(vehicle.id()) {
            return Ok(false);
        }
        map.fly_to(vehicle.geo_coordinate, config.focus_zoom)?;
        self.focused_plate = Some(vehicle.plate.clone());
        Ok(true)
    }
}
