use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_API_BASE;

/// Cómo se resuelven respuestas solapadas de `/images-list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListPolicy {
    /// Gana la última respuesta en llegar, sin importar el orden de las peticiones
    #[default]
    LastResponseWins,
    /// Solo se aplica la respuesta de la petición más reciente
    LatestRequestWins,
}

impl ListPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "last-response" | "last_response" => Some(Self::LastResponseWins),
            "latest-request" | "latest_request" => Some(Self::LatestRequestWins),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
    pub enable_logging: bool,
    pub list_policy: ListPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            enable_logging: true,
            list_policy: ListPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE"),
            option_env!("ENABLE_LOGGING"),
            option_env!("IMAGE_LIST_POLICY"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        enable_logging: Option<&str>,
        list_policy: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(normalize_base_url)
                .filter(|base| !base.is_empty())
                .unwrap_or(defaults.api_base),
            enable_logging: enable_logging
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            list_policy: list_policy
                .and_then(ListPolicy::parse)
                .unwrap_or(defaults.list_policy),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Nivel para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Error
        }
    }
}

/// Quita espacios y barras finales para poder concatenar rutas tipo `/upload`
pub fn normalize_base_url(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
