use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};

use crate::error::ErrorPayload;
use crate::lookup::WorldInfoService;

/// Query of `/info`. A repeated `city` keeps its last value.
#[derive(Debug, PartialEq)]
pub struct InfoParams {
    pub city: String,
}

impl InfoParams {
    fn from_pairs(pairs: Vec<(String, String)>) -> Option<Self> {
        pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "city")
            .map(|(_, city)| Self { city })
    }
}

pub fn router(service: WorldInfoService) -> Router {
    Router::new()
        .route("/info", get(get_info))
        .with_state(Arc::new(service))
}

fn unprocessable(message: String) -> Response {
    tracing::debug!("Rejected /info query: {}", message);
    let payload = ErrorPayload { errore: message };
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

async fn get_info(
    State(service): State<Arc<WorldInfoService>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };
    let Some(params) = InfoParams::from_pairs(pairs) else {
        return unprocessable("Missing required query parameter `city`".to_string());
    };

    match service.city_info(&params.city).await {
        Ok(info) => Json(info).into_response(),
        Err(e) => {
            tracing::warn!("Lookup for '{}' failed: {}", params.city, e);
            e.into_response()
        }
    }
}
