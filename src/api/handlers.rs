//! API handlers

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::AppState;
use crate::error::Error;
use crate::json::{parse_id_param, read_json, write_json, Envelope};

/// Liveness probe with deployment metadata.
pub async fn healthcheck(State(state): State<AppState>) -> Response {
    let mut system_info = Envelope::new();
    system_info.insert("environment".to_string(), json!(state.environment()));
    system_info.insert("version".to_string(), json!(env!("CARGO_PKG_VERSION")));

    let mut data = Envelope::new();
    data.insert("status".to_string(), json!("available"));
    data.insert("system_info".to_string(), json!(system_info));

    respond(StatusCode::OK, data)
}

/// Create a movie.
///
/// Storage is out of scope at this stage; the validated input is echoed
/// back so clients can already integrate against the endpoint.
pub async fn create_movie(req: Request) -> Response {
    let input: CreateMovieInput = match read_json(req).await {
        Ok(input) => input,
        Err(err) => return error_response(err),
    };

    let mut data = Envelope::new();
    data.insert("movie".to_string(), json!(input));

    respond(StatusCode::CREATED, data)
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovieInput {
    pub title: String,
    pub year: i32,
    pub runtime: i32,
    pub genres: Vec<String>,
}

/// Fetch a movie by numeric id.
pub async fn show_movie(Path(id): Path<String>) -> Response {
    let id = match parse_id_param(&id) {
        Ok(id) => id,
        Err(err) => return error_response(err),
    };

    let mut data = Envelope::new();
    data.insert("id".to_string(), json!(id));

    respond(StatusCode::OK, data)
}

/// Status code a helper failure maps to. The helpers only hand back
/// descriptive errors; picking the code is the handler layer's call.
fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        Error::InvalidIdParameter => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    }
}

fn error_response(err: Error) -> Response {
    let mut data = Envelope::new();
    data.insert("error".to_string(), json!(err.to_string()));

    respond(status_for(&err), data)
}

fn respond(status: StatusCode, data: Envelope) -> Response {
    match write_json(status, data, None) {
        Ok(response) => response.into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialise response envelope");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
