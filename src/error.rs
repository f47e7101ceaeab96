use thiserror::Error;

// Main application error type

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] RequestError),
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Server error: {0}")]
    Server(#[from] ServerError),
}

// Structural problems the boundary rejects before the pipeline runs.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Cell {0} has no vertices")]
    EmptyCell(i64),
}

// Failures turning the request payload into a raster.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to decode image payload: {0}")]
    Payload(#[from] base64::DecodeError),
    #[error("Failed to decode image bytes: {0}")]
    Image(#[from] image::ImageError),
    #[error("Unsupported data URL: {0}")]
    DataUrl(String),
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind to {1}: {0}")]
    Bind(std::io::Error, String),
    #[error("Server terminated abnormally: {0}")]
    Runtime(std::io::Error),
}
