use thiserror::Error;

/// Errores al cargar el dataset de vehículos
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Dataset JSON inválido: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Error de red: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("El servidor respondió con estado {0}")]
    Status(u16),
}
