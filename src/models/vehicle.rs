use serde::{Deserialize, Serialize};

/// Coordenada geográfica de un vehículo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    #[cfg(test)]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Leaflet trabaja con [lat, lng]
    pub fn as_lat_lng(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Registro de un vehículo de la flota (inmutable, viene del dataset)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub plate: String,
    pub address: String,
    pub fuel_level: f64,
    pub geo_coordinate: GeoCoordinate,
}

impl VehicleRecord {
    /// Identificador usado para la selección (la matrícula)
    pub fn id(&self) -> &str {
        &self.plate
    }

    /// Primer segmento de la dirección ("Main St, Hamburg" -> "Main St").
    /// Sin coma devuelve la dirección completa.
    pub fn short_address(&self) -> &str {
        self.address
            .split(',')
            .next()
            .unwrap_or(&self.address)
    }

    /// Nivel de combustible acotado a [0, 100] para la barra de progreso
    pub fn fuel_percent(&self) -> f64 {
        if self.fuel_level.is_nan() {
            return 0.0;
        }
        self.fuel_level.clamp(0.0, 100.0)
    }

    /// Etiqueta de la barra de combustible, con el valor tal cual viene del dataset
    pub fn fuel_label(&self) -> String {
        format!("{}%", self.fuel_level)
    }
}

#[cfg(test)]
pub(crate) fn sample_vehicle(plate: &str, address: &str, fuel_level: f64, lat: f64, lng: f64) -> VehicleRecord {
    VehicleRecord {
        plate: plate.to_string(),
        address: address.to_string(),
        fuel_level,
        geo_coordinate: GeoCoordinate::new(lat, lng),
    }
}
