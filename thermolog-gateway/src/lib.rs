pub mod api;
pub mod cache;
pub mod config;
pub mod fatal;

pub use cache::WeatherCache;
pub use cache::memory::{MemoryCache, MemoryCacheError};
pub use config::{Config, ConfigError};
