use std::rc::Rc;
use thiserror::Error;
use crate::config::MapConfig;
use crate::models::GeoCoordinate;
use crate::viewmodels::MapMarker;

/// Control de cámara + capa de marcadores.
/// La selección mueve la cámara; la cámara nunca cambia la selección.
pub trait MapRenderer {
    /// Crear el mapa en su contenedor con centro y zoom iniciales
    fn initialize(&mut self, config: &MapConfig) -> Result<(), MapError>;

    /// Reemplazar todos los marcadores
    fn set_markers(&mut self, markers: &[MapMarker]) -> Result<(), MapError>;

    /// Animar el centro del mapa hasta `coordinate` con el zoom indicado
    fn fly_to(&mut self, coordinate: GeoCoordinate, zoom: f64) -> Result<(), MapError>;

    /// Callback con la matrícula del marcador pulsado
    fn on_marker_click(&mut self, handler: Rc<dyn Fn(String)>) -> Result<(), MapError>;

    /// Verificar si el mapa está listo
    fn is_ready(&self) -> bool;
}

/// Error del mapa
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MapError {
    #[error("Map is not ready")]
    NotReady,
    #[error("Invalid coordinates ({0}, {1})")]
    InvalidCoordinates(f64, f64),
    #[error("Map JS error: {0}")]
    Js(String),
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Llamada registrada por `RecordingMapRenderer`
    #[derive(Debug, Clone, PartialEq)]
    pub enum MapCall {
        Initialize { center: GeoCoordinate, zoom: f64 },
        SetMarkers(Vec<MapMarker>),
        FlyTo { coordinate: GeoCoordinate, zoom: f64 },
    }

    /// Renderer de tests: guarda cada llamada en memoria
    #[derive(Default)]
    pub struct RecordingMapRenderer {
        pub calls: Vec<MapCall>,
        pub click_handler: Option<Rc<dyn Fn(String)>>,
        ready: bool,
    }

    impl RecordingMapRenderer {
        pub fn fly_calls(&self) -> Vec<(GeoCoordinate, f64)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    MapCall::FlyTo { coordinate, zoom } => Some((*coordinate, *zoom)),
                    _ => None,
                })
                .collect()
        }

        pub fn last_markers(&self) -> Option<&[MapMarker]> {
            self.calls.iter().rev().find_map(|c| match c {
                MapCall::SetMarkers(markers) => Some(markers.as_slice()),
                _ => None,
            })
        }

        /// Simula un click en el marcador de `plate`
        pub fn click(&self, plate: &str) {
            if let Some(handler) = &self.click_handler {
                handler(plate.to_string());
            }
        }
    }

    impl MapRenderer for RecordingMapRenderer {
        fn initialize(&mut self, config: &MapConfig) -> Result<(), MapError> {
            self.ready = true;
            self.calls.push(MapCall::Initialize {
                center: GeoCoordinate::new(config.initial_center_lat, config.initial_center_lng),
                zoom: config.initial_zoom,
            });
            Ok(())
        }

        fn set_markers(&mut self, markers: &[MapMarker]) -> Result<(), MapError> {
            if !self.ready {
                return Err(MapError::NotReady);
            }
            self.calls.push(MapCall::SetMarkers(markers.to_vec()));
            Ok(())
        }

        fn fly_to(&mut self, coordinate: GeoCoordinate, zoom: f64) -> Result<(), MapError> {
            if !self.ready {
                return Err(MapError::NotReady);
            }
            self.calls.push(MapCall::FlyTo { coordinate, zoom });
            Ok(())
        }

        fn on_marker_click(&mut self, handler: Rc<dyn Fn(String)>) -> Result<(), MapError> {
            self.click_handler = Some(handler);
            Ok(())
        }

        fn is_ready(&self) -> bool {
            self.ready
        }
    }
}
