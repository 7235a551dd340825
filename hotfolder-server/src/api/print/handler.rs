//! Print API Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::core::ServerState;
use crate::printing::{FieldErrors, PrintRequest};

/// GET /api/printers - 配置的打印机列表 (保持配置顺序)
pub async fn list_printers(State(state): State<ServerState>) -> Json<Vec<String>> {
    Json(state.printing.printers().to_vec())
}

/// Submit outcome
pub enum SubmitResponse {
    /// Legacy success sentinel - existing consumers read the literal 200 body
    Accepted,
    /// 400 with the field → messages map
    Rejected(FieldErrors),
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            SubmitResponse::Accepted => (StatusCode::OK, Json(200)).into_response(),
            SubmitResponse::Rejected(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
        }
    }
}

/// POST /api/print - 提交打印任务
///
/// A missing, non-JSON or malformed body is the "absent request" case and
/// reports the single `printRequest` violation; a JSON `null` body behaves
/// the same way.
pub async fn submit(
    State(state): State<ServerState>,
    payload: Result<Json<Option<PrintRequest>>, JsonRejection>,
) -> SubmitResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "print request body rejected before validation");
            None
        }
    };

    match state.printing.submit(request).await {
        Ok(()) => SubmitResponse::Accepted,
        Err(err) => SubmitResponse::Rejected(err.into_field_errors()),
    }
}
