pub mod config;
pub mod doc;
pub mod dto;
pub mod entity;
pub mod error;
pub mod mappers;
pub mod telemetry;

pub use config::MapperConfig;
pub use error::{MapperError, MapperResult};
pub use mappers::Mappers;
