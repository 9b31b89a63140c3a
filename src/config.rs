// src/config.rs

use std::{env, path::PathBuf, sync::Arc};

use crate::common::error::AppError;
use crate::db::{
    seeds, BlobStore, DishRepository, EventRepository, FsBlobStore, JsonStore, MenuRepository,
    SettingsRepository,
};
use crate::models::RestaurantSettings;

const DEFAULT_DATA_DIR: &str = "./data";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub seed_defaults: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed_defaults: true,
        }
    }
}

impl AppConfig {
    // Lê o .env (se existir) e as variáveis CATALOG_*
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("CATALOG_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let seed_defaults = match lookup("CATALOG_SEED_DEFAULTS") {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::ConfigError(format!(
                    "CATALOG_SEED_DEFAULTS deve ser true ou false (recebido '{raw}')"
                ))
            })?,
        };

        Ok(Self {
            data_dir,
            seed_defaults,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

// O estado da aplicação: um repositório por coleção, todos no mesmo store.
// Sem Clone: cada slot tem um único dono gravando nele.
pub struct AppState {
    pub dishes: DishRepository,
    pub menus: MenuRepository,
    pub events: EventRepository,
    pub settings: SettingsRepository,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Self::from_config(config)
    }

    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let blobs = FsBlobStore::new(config.data_dir.clone())?;
        tracing::info!(data_dir = %config.data_dir.display(), "Diretório de dados pronto");

        Ok(Self::with_store(Arc::new(blobs), config.seed_defaults))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_store(blobs: Arc<dyn BlobStore>, seed_defaults: bool) -> Self {
        let store = JsonStore::new(blobs);

        let (dishes, menus, events, settings) = if seed_defaults {
            (
                DishRepository::load_or_seed(store.clone(), seeds::default_dishes),
                MenuRepository::load_or_seed(store.clone(), seeds::default_menus),
                EventRepository::load_or_seed(store.clone(), seeds::default_events),
                SettingsRepository::load_or_seed(store, seeds::default_settings),
            )
        } else {
            (
                DishRepository::load_or_seed(store.clone(), Vec::new),
                MenuRepository::load_or_seed(store.clone(), Vec::new),
                EventRepository::load_or_seed(store.clone(), Vec::new),
                SettingsRepository::load_or_seed(store, RestaurantSettings::default),
            )
        };

        Self {
            dishes,
            menus,
            events,
            settings,
        }
    }
}
