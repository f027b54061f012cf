// ============================================================================
// VEHICLE SERVICE - Proveedores del dataset de vehículos
// ============================================================================
// SOLO obtención de datos - Sin estado de UI
// ============================================================================

use gloo_net::http::Request;
use crate::error::DataError;
use crate::models::VehicleRecord;
use crate::state::AppState;

/// Dataset embebido en tiempo de compilación
const BUNDLED_VEHICLES: &str = include_str!("../../data/vehicles.json");

/// Fuente ordenada de vehículos (fichero estático o API)
#[allow(async_fn_in_trait)]
pub trait VehicleProvider {
    fn name(&self) -> &str;

    async fn fetch_vehicles(&self) -> Result<Vec<VehicleRecord>, DataError>;
}

/// Proveedor del JSON embebido (o de cualquier JSON en memoria)
#[derive(Debug, Clone)]
pub struct StaticVehicleProvider {
    json: &'static str,
}

impl StaticVehicleProvider {
    pub fn bundled() -> Self {
        Self { json: BUNDLED_VEHICLES }
    }

    #[cfg(test)]
    pub fn from_json(json: &'static str) -> Self {
        Self { json }
    }

    /// Carga síncrona, disponible antes del primer render
    pub fn load(&self) -> Result<Vec<VehicleRecord>, DataError> {
        parse_vehicles(self.json)
    }
}

impl VehicleProvider for StaticVehicleProvider {
    fn name(&self) -> &str {
        "bundled"
    }

    async fn fetch_vehicles(&self) -> Result<Vec<VehicleRecord>, DataError> {
        self.load()
    }
}

/// Proveedor remoto: mismo formato JSON servido por HTTP
#[derive(Debug, Clone)]
pub struct HttpVehicleProvider {
    url: String,
}

impl HttpVehicleProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl VehicleProvider for HttpVehicleProvider {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch_vehicles(&self) -> Result<Vec<VehicleRecord>, DataError> {
        log::info!("🌐 [DATA] GET {}", self.url);
        let response = Request::get(&self.url).send().await?;
        if !response.ok() {
            return Err(DataError::Status(response.status()));
        }
        let body = response.text().await?;
        parse_vehicles(&body)
    }
}

/// Decodifica el dataset conservando el orden del fichero
pub fn parse_vehicles(json: &str) -> Result<Vec<VehicleRecord>, DataError> {
    let vehicles: Vec<VehicleRecord> = serde_json::from_str(json)?;
    Ok(vehicles)
}

/// Resultado de carga "atrapado": un error se registra y deja la lista vacía
pub fn vehicles_or_empty(source: &str, result: Result<Vec<VehicleRecord>, DataError>) -> Vec<VehicleRecord> {
    match result {
        Ok(vehicles) => {
            log::info!("✅ [DATA] {} vehículos cargados desde {}", vehicles.len(), source);
            vehicles
        }
        Err(e) => {
            log::error!("❌ [DATA] Error cargando vehículos desde {}: {}", source, e);
            Vec::new()
        }
    }
}

/// Carga asíncrona desde cualquier proveedor y publica el resultado en el estado
pub async fn load_into_state<P: VehicleProvider>(provider: P, state: AppState) {
    let result = provider.fetch_vehicles().await;
    let vehicles = vehicles_or_empty(provider.name(), result);
    state.set_vehicles(vehicles);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses_in_order() {
        let vehicles = StaticVehicleProvider::bundled().load().unwrap();
        assert!(!vehicles.is_empty());
        assert_eq!(vehicles[0].plate, "AB-123");
        assert_eq!(vehicles[0].address, "Main St, Hamburg");

        let mut plates: Vec<&str> = vehicles.iter().map(|v| v.plate.as_str()).collect();
        plates.sort_unstable();
        plates.dedup();
        assert_eq!(plates.len(), vehicles.len(), "las matrículas del dataset son únicas");
    }

    #[test]
    fn every_bundled_record_is_placeable() {
        for v in StaticVehicleProvider::bundled().load().unwrap() {
            assert!(v.geo_coordinate.is_valid(), "{} sin coordenadas válidas", v.plate);
            assert!((0.0..=100.0).contains(&v.fuel_level), "{} fuera de rango", v.plate);
        }
    }

    #[test]
    fn malformed_dataset_degrades_to_empty_list() {
        let provider = StaticVehicleProvider::from_json(r#"[{ "plate": "AB-123" }]"#);
        let result = provider.load();
        assert!(matches!(result, Err(DataError::Parse(_))));
        assert!(vehicles_or_empty("test", result).is_empty());
    }

    #[test]
    fn empty_array_is_a_valid_dataset() {
        assert!(parse_vehicles("[]").unwrap().is_empty());
    }
}
