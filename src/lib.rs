pub mod analysis;
pub mod config;
pub mod error;
pub mod payload;
pub mod server;
pub mod types;

pub use analysis::{classify, classify_cells, CellColor, ImageRegion, Zone};
pub use config::Configuration;
pub use error::{DecodeError, RequestError, ServiceError};
