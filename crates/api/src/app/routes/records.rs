//! Generic CRUD handlers shared by every record kind.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use meterops_core::RecordId;
use meterops_infra::RecordGateway;
use meterops_records::Record;

use crate::app::dto::{self, Mutation};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router<R: Record>() -> Router {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", get(get_one::<R>).put(update::<R>).delete(delete::<R>))
}

pub async fn list<R: Record>(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.gateway::<R>().list().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}

pub async fn get_one<R: Record>(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::invalid_id(&id),
    };

    match services.gateway::<R>().get(id).await {
        Ok(stored) => (StatusCode::OK, Json(stored)).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}

pub async fn create<R: Record>(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<R>,
) -> axum::response::Response {
    match services.gateway::<R>().create(body).await {
        Ok(stored) => envelope(StatusCode::CREATED, Mutation::Created, &stored),
        Err(e) => errors::gateway_error_to_response(e),
    }
}

/// Full replacement: every field of the record is taken from the body.
pub async fn update<R: Record>(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<R>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::invalid_id(&id),
    };

    match services.gateway::<R>().update(id, body).await {
        Ok(stored) => envelope(StatusCode::OK, Mutation::Updated, &stored),
        Err(e) => errors::gateway_error_to_response(e),
    }
}

pub async fn delete<R: Record>(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::invalid_id(&id),
    };

    match services.gateway::<R>().delete(id).await {
        Ok(stored) => envelope(StatusCode::OK, Mutation::Deleted, &stored),
        Err(e) => errors::gateway_error_to_response(e),
    }
}

fn envelope<R: Record>(
    status: StatusCode,
    mutation: Mutation,
    stored: &meterops_records::Stored<R>,
) -> axum::response::Response {
    match dto::mutation_envelope(mutation, stored) {
        Ok(body) => (status, Json(body)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode response");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", "Server error")
        }
    }
}
