use std::env;
use std::fs;
use std::path::Path;

/// Claves que `AppConfig::from_env` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "FOCUS_MAP_ZOOM",
    "MAP_TILE_URL",
    "MAP_ATTRIBUTION",
    "MARKER_ICON_URL",
    "MARKER_SIZE",
    "ACTIVE_MARKER_SIZE",
    "REVEAL_DELAY_MS",
    "REVEAL_MODE",
    "VEHICLES_URL",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    // Cargar variables de configuración desde .env si existe
    let env_file = Path::new(".env");
    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE, comillas opcionales
                let Some((key, value)) = line.split_once('=') else {
                    continue;
                };
                let key = key.trim();
                let value = value.trim().trim_matches('"');

                if !CONFIG_KEYS.contains(&key) {
                    println!("cargo:warning=Ignoring unknown key in .env: {}", key);
                    continue;
                }

                // El entorno del proceso tiene prioridad sobre .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default fleet settings. Copy .env.example to .env to override them.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    println!("cargo:rerun-if-changed=data/vehicles.json");
}
