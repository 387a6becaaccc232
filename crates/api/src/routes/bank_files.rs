//! Bank file upload route.

use axum::{
    Json, Router,
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};

use crate::{AppState, response::error_response};
use jaarrekening_shared::{AppError, AppResult};

/// Multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// Creates the bank file routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/bank-files", post(upload_bank_file))
}

fn multipart_error(err: &MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}

/// Pulls the `file` field out of the upload as (filename, bytes).
async fn read_file_field(multipart: &mut Multipart) -> AppResult<(String, Vec<u8>)> {
    while let Some(field) = multipart.next_field().await.map_err(|e| multipart_error(&e))? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .map(ToString::to_string)
            .ok_or_else(|| AppError::BadRequest("Uploaded file has no file name".to_string()))?;
        let bytes = field.bytes().await.map_err(|e| multipart_error(&e))?;
        return Ok((filename, bytes.to_vec()));
    }

    Err(AppError::BadRequest(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}

/// POST /bank-files
///
/// Returns the row and column shape of an uploaded CSV or spreadsheet.
async fn upload_bank_file(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let (filename, bytes) = match read_file_field(&mut multipart).await {
        Ok(file) => file,
        Err(e) => {
            warn!(error = %e, "Rejected bank file upload");
            return error_response(&e);
        }
    };

    match state.ingestor.inspect(&filename, &bytes) {
        Ok(summary) => {
            info!(
                filename = %summary.filename,
                rows = summary.rows,
                columns = summary.columns,
                "Bank file inspected"
            );
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(e) => {
            warn!(error = %e, filename = %filename, "Failed to inspect bank file");
            error_response(&AppError::from(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use jaarrekening_shared::AppConfig;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::create_router;

    const BOUNDARY: &str = "jaarrekening-test-boundary";

    fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    async fn upload(body: Vec<u8>, config: &AppConfig) -> Response {
        create_router(AppState::from_config(config))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/bank-files")
                    .header(
                        "Content-Type",
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_upload_csv() {
        let body = multipart_body(
            "file",
            "mutaties.csv",
            b"datum,omschrijving,bedrag\n2024-01-02,Huur,-1200.00\n2024-01-05,Factuur,2500.00\n2024-01-09,Bankkosten,-7.50",
        );

        let response = upload(body, &AppConfig::default()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["filename"], "mutaties.csv");
        assert_eq!(json["format"], "csv");
        assert_eq!(json["rows"], 3);
        assert_eq!(json["columns"], 3);
        assert_eq!(json["column_names"][2], "bedrag");
    }

    #[tokio::test]
    async fn test_upload_xlsx() {
        let workbook = include_bytes!("../../../core/src/ingest/fixtures/mutaties.xlsx");
        let body = multipart_body("file", "mutaties.xlsx", workbook);

        let response = upload(body, &AppConfig::default()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["format"], "spreadsheet");
        assert_eq!(json["rows"], 3);
        assert_eq!(json["columns"], 3);
        assert_eq!(json["column_names"][0], "datum");
    }

    #[tokio::test]
    async fn test_upload_unsupported_format() {
        let body = multipart_body("file", "afschrift.txt", b"iets");

        let response = upload(body, &AppConfig::default()).await;
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(json_body(response).await["error"], "UNSUPPORTED_MEDIA");
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let body = multipart_body("bijlage", "mutaties.csv", b"a,b\n1,2");

        let response = upload(body, &AppConfig::default()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["message"],
            "Bad request: Multipart field 'file' is required"
        );
    }

    #[tokio::test]
    async fn test_upload_over_limit() {
        let mut config = AppConfig::default();
        config.server.max_upload_bytes = 64;
        let body = multipart_body("file", "groot.csv", "a,b\n".repeat(100).as_bytes());

        let response = upload(body, &config).await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
