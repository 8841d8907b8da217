pub mod app_config;
pub mod config;
pub mod products;
pub mod raw;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use products::{ProductLine, ProductSource, SourceKind, UnifiedProduct};
pub use raw::{
    ProductImage, RawFlag, RawId, RawManualProduct, RawMarketplaceItem, RawTags,
};
