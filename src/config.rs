use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cómo reacciona el panel de detalles a los reveals programados
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealMode {
    /// Cada reveal lleva el id de su selección; solo el último abre el panel
    Latest,
    /// Cada reveal invierte la visibilidad (comportamiento histórico)
    Toggle,
}

impl FromStr for RevealMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(RevealMode::Latest),
            "toggle" => Ok(RevealMode::Toggle),
            other => Err(format!("REVEAL_MODE desconocido: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub enable_logging: bool,
    pub log_level: String,
    pub map_config: MapConfig,
    pub marker_config: MarkerConfig,
    pub panel_config: PanelConfig,
    pub data_config: DataConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            log_level: "info".to_string(),
            map_config: MapConfig::default(),
            marker_config: MarkerConfig::default(),
            panel_config: PanelConfig::default(),
            data_config: DataConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub container_id: String,
    pub initial_center_lat: f64,
    pub initial_center_lng: f64,
    pub initial_zoom: f64,
    /// Zoom al que vuela el mapa cuando se selecciona un vehículo
    pub focus_zoom: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "map".to_string(),
            initial_center_lat: 53.55, // Hamburgo
            initial_center_lng: 10.0,
            initial_zoom: 13.0,
            focus_zoom: 18.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    pub icon_url: String,
    pub inactive_size: u32,
    pub active_size: u32,
    pub anchor: [u32; 2],
    pub inactive_class: String,
    pub active_class: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            icon_url: "assets/car-top-view.svg".to_string(),
            inactive_size: 32,
            active_size: 45,
            anchor: [16, 32],
            inactive_class: "carIconDeactive".to_string(),
            active_class: "carIconActive".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    pub reveal_delay_ms: u32,
    pub reveal_mode: RevealMode,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 1000,
            reveal_mode: RevealMode::Latest,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// Si está definida, el dataset se descarga de aquí en vez de usar el JSON embebido
    pub vehicles_url: Option<String>,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self::from_lookup(|key| compile_time_env(key).map(str::to_string), defaults)
    }

    /// Resuelve cada clave con `lookup`, usando `defaults` si falta o no parsea
    pub fn from_lookup<F>(lookup: F, defaults: AppConfig) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_or = |key: &str, default: f64| -> f64 {
            lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
        };
        let parse_u32_or = |key: &str, default: u32| -> u32 {
            lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
        };

        let reveal_mode = match lookup("REVEAL_MODE").map(|v| v.parse::<RevealMode>()) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                log::warn!("⚠️ [CONFIG] {}, usando {:?}", e, defaults.panel_config.reveal_mode);
                defaults.panel_config.reveal_mode
            }
            None => defaults.panel_config.reveal_mode,
        };

        Self {
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            map_config: MapConfig {
                container_id: defaults.map_config.container_id,
                initial_center_lat: parse_or("DEFAULT_MAP_CENTER_LAT", defaults.map_config.initial_center_lat),
                initial_center_lng: parse_or("DEFAULT_MAP_CENTER_LNG", defaults.map_config.initial_center_lng),
                initial_zoom: parse_or("DEFAULT_MAP_ZOOM", defaults.map_config.initial_zoom),
                focus_zoom: parse_or("FOCUS_MAP_ZOOM", defaults.map_config.focus_zoom),
                tile_url: lookup("MAP_TILE_URL").unwrap_or(defaults.map_config.tile_url),
                attribution: lookup("MAP_ATTRIBUTION").unwrap_or(defaults.map_config.attribution),
            },
            marker_config: MarkerConfig {
                icon_url: lookup("MARKER_ICON_URL").unwrap_or(defaults.marker_config.icon_url),
                inactive_size: parse_u32_or("MARKER_SIZE", defaults.marker_config.inactive_size),
                active_size: parse_u32_or("ACTIVE_MARKER_SIZE", defaults.marker_config.active_size),
                ..defaults.marker_config
            },
            panel_config: PanelConfig {
                reveal_delay_ms: parse_u32_or("REVEAL_DELAY_MS", defaults.panel_config.reveal_delay_ms),
                reveal_mode,
            },
            data_config: DataConfig {
                vehicles_url: lookup("VEHICLES_URL")
                    .filter(|url| !url.trim().is_empty())
                    .or(defaults.data_config.vehicles_url),
            },
        }
    }

    /// Nivel de log efectivo para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// `option_env!` necesita literales, así que se enumeran aquí las claves conocidas
fn compile_time_env(key: &str) -> Option<&'static str> {
    match key {
        "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
        "LOG_LEVEL" => option_env!("LOG_LEVEL"),
        "DEFAULT_MAP_CENTER_LAT" => option_env!("DEFAULT_MAP_CENTER_LAT"),
        "DEFAULT_MAP_CENTER_LNG" => option_env!("DEFAULT_MAP_CENTER_LNG"),
        "DEFAULT_MAP_ZOOM" => option_env!("DEFAULT_MAP_ZOOM"),
        "FOCUS_MAP_ZOOM" => option_env!("FOCUS_MAP_ZOOM"),
        "MAP_TILE_URL" => option_env!("MAP_TILE_URL"),
        "MAP_ATTRIBUTION" => option_env!("MAP_ATTRIBUTION"),
        "MARKER_ICON_URL" => option_env!("MARKER_ICON_URL"),
        "MARKER_SIZE" => option_env!("MARKER_SIZE"),
        "ACTIVE_MARKER_SIZE" => option_env!("ACTIVE_MARKER_SIZE"),
        "REVEAL_DELAY_MS" => option_env!("REVEAL_DELAY_MS"),
        "REVEAL_MODE" => option_env!("REVEAL_MODE"),
        "VEHICLES_URL" => option_env!("VEHICLES_URL"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_dashboard_layout() {
        let config = AppConfig::from_lookup(|_| None, AppConfig::default());
        assert_eq!(config.map_config.initial_center_lat, 53.55);
        assert_eq!(config.map_config.initial_center_lng, 10.0);
        assert_eq!(config.map_config.initial_zoom, 13.0);
        assert_eq!(config.map_config.focus_zoom, 18.0);
        assert_eq!(config.panel_config.reveal_delay_ms, 1000);
        assert_eq!(config.panel_config.reveal_mode, RevealMode::Latest);
        assert_eq!(config.marker_config.inactive_size, 32);
        assert_eq!(config.marker_config.active_size, 45);
        assert!(config.data_config.vehicles_url.is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let lookup = lookup_from(&[
            ("REVEAL_MODE", "Toggle"),
            ("REVEAL_DELAY_MS", "250"),
            ("FOCUS_MAP_ZOOM", "16"),
            ("VEHICLES_URL", "https://fleet.example/vehicles.json"),
        ]);
        let config = AppConfig::from_lookup(lookup, AppConfig::default());
        assert_eq!(config.panel_config.reveal_mode, RevealMode::Toggle);
        assert_eq!(config.panel_config.reveal_delay_ms, 250);
        assert_eq!(config.map_config.focus_zoom, 16.0);
        assert_eq!(
            config.data_config.vehicles_url.as_deref(),
            Some("https://fleet.example/vehicles.json")
        );
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let lookup = lookup_from(&[
            ("REVEAL_MODE", "sometimes"),
            ("REVEAL_DELAY_MS", "soon"),
            ("VEHICLES_URL", "   "),
        ]);
        let config = AppConfig::from_lookup(lookup, AppConfig::default());
        assert_eq!(config.panel_config.reveal_mode, RevealMode::Latest);
        assert_eq!(config.panel_config.reveal_delay_ms, 1000);
        assert!(config.data_config.vehicles_url.is_none());
    }

    #[test]
    fn disabled_logging_only_reports_errors() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Error);
        assert_eq!(AppConfig::default().log_level(), log::Level::Info);
    }
}
