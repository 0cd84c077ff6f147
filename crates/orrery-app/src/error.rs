//! Top-level failures of the headless driver.

use orrery_catalog::CatalogError;
use orrery_config::ConfigError;
use orrery_system::RegistryError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("body registry: {0}")]
    Registry(#[from] RegistryError),
}
