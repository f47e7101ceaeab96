use actix_web::http::StatusCode;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, ResponseError};
use serde_json::json;
use tracing::{debug, error, info, info_span};
use uuid::Uuid;

use crate::analysis::classify_cells;
use crate::config::Configuration;
use crate::error::{ServerError, ServiceError};
use crate::payload::decode_image;
use crate::types::ClassifyRequest;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Config(_) | ServiceError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok", "service": "zonemap" }))
}

#[post("/classify")]
pub async fn classify(request: web::Json<ClassifyRequest>) -> Result<HttpResponse, ServiceError> {
    let request = request.into_inner();
    let span = info_span!("classify", request_id = %Uuid::new_v4());
    let _guard = span.enter();

    request.validate()?;

    let rgb = decode_image(&request.image).map_err(|e| {
        error!(error = %e, "image decode failed");
        ServiceError::from(e)
    })?;

    let (actual_width, actual_height) = rgb.dimensions();
    if (actual_width, actual_height) != (request.width, request.height) {
        debug!(
            declared_width = request.width,
            declared_height = request.height,
            actual_width,
            actual_height,
            "declared dimensions differ from decoded image"
        );
    }

    let positions = classify_cells(&rgb, &request.cells);
    info!(cells = positions.len(), "request classified");
    Ok(HttpResponse::Ok().json(positions))
}

fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit).error_handler(|err, _req| {
        let body = json!({ "error": err.to_string() });
        actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
            .into()
    })
}

/// Bind and serve until shutdown.
pub async fn startup(configuration: Configuration) -> Result<(), ServerError> {
    let address = configuration.bind_address();
    let payload_limit = configuration.max_payload_bytes;
    info!(%address, "starting zonemap server");

    HttpServer::new(move || {
        App::new()
            .app_data(json_config(payload_limit))
            .service(health)
            .service(classify)
    })
    .bind(address.as_str())
    .map_err(|e| ServerError::Bind(e, address.clone()))?
    .run()
    .await
    .map_err(ServerError::Runtime)
}
