use axum::{
    body::Body,
    extract::{rejection::FormRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Form,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;

/// Custom form extractor that provides consistent error responses
pub struct AppForm<T>(pub T);

impl<T, S> FromRequest<S> for AppForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppFormRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppFormRejection(rejection)),
        }
    }
}

pub struct AppFormRejection(FormRejection);

impl IntoResponse for AppFormRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            FormRejection::FailedToDeserializeFormBody(err) => {
                format!("Invalid form data: {}", err.body_text())
            }
            FormRejection::FailedToDeserializeForm(err) => {
                format!("Invalid form data: {}", err.body_text())
            }
            FormRejection::InvalidFormContentType(err) => {
                format!("Invalid form content type: {}", err.body_text())
            }
            _ => "Failed to parse form body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Positive integer record id taken from the `{id}` path segment.
///
/// Anything that is not a plain run of digits, or is zero, does not name a
/// record and is answered with 404 like an unmatched route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound("Page not found".to_string()))?;

        parse_record_id(&raw)
            .map(RecordId)
            .ok_or_else(|| AppError::NotFound("Page not found".to_string()))
    }
}

fn parse_record_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id("1"), Some(1));
        assert_eq!(parse_record_id("00042"), Some(42));
        assert_eq!(parse_record_id("0"), None);
        assert_eq!(parse_record_id("-3"), None);
        assert_eq!(parse_record_id("+3"), None);
        assert_eq!(parse_record_id("abc"), None);
        assert_eq!(parse_record_id(""), None);
        assert_eq!(parse_record_id("99999999999999999999"), None);
    }

    async fn echo_id(RecordId(id): RecordId) -> String {
        id.to_string()
    }

    #[tokio::test]
    async fn test_record_id_extractor() {
        let app = Router::new().route("/kategori_sil/{id}", get(echo_id));
        let server = TestServer::new(app).unwrap();

        let ok = server.get("/kategori_sil/15").await;
        ok.assert_status_ok();
        ok.assert_text("15");

        server
            .get("/kategori_sil/-1")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .get("/kategori_sil/abc")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[derive(serde::Deserialize)]
    struct NameForm {
        #[allow(dead_code)]
        name: String,
    }

    async fn accept_form(AppForm(_form): AppForm<NameForm>) -> &'static str {
        "ok"
    }

    #[tokio::test]
    async fn test_app_form_missing_field_is_bad_request() {
        let app = Router::new().route("/f", axum::routing::post(accept_form));
        let server = TestServer::new(app).unwrap();

        server
            .post("/f")
            .form(&[("name", "Music")])
            .await
            .assert_status_ok();

        let missing = server.post("/f").form(&[("other", "x")]).await;
        missing.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = missing.json();
        assert_eq!(body["success"], false);
    }
}
