use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use devkit_diff::{compute_diff_within, DiffError, DiffMode, TextDiff};
use serde_json::{json, Value};

use crate::api::ApiError;
use crate::config::ServerConfig;
use crate::endpoint::{HealthResponse, TOOLS};

/// Per-request limits shared with the diff handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffLimits {
    pub max_table_cells: usize,
}

impl From<&ServerConfig> for DiffLimits {
    fn from(config: &ServerConfig) -> Self {
        Self { max_table_cells: config.max_table_cells }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler() -> Json<Value> {
    Json(json!({
        "name": "devkit-server",
        "version": env!("CARGO_PKG_VERSION"),
        "tools": TOOLS,
    }))
}

/// Fields of a diff-checker request, still as raw JSON.
///
/// Field types are checked only after presence and mode, so a request with a
/// non-string text and a bad mode is reported as a bad mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiffRequest {
    pub text1: Option<Value>,
    pub text2: Option<Value>,
    pub mode: Option<Value>,
}

impl DiffRequest {
    /// Pick the request fields out of a parsed body.
    ///
    /// A JSON `null` body has no fields to read and is an internal failure.
    /// Any other non-object body simply has every field absent.
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        match body {
            Value::Object(mut fields) => Ok(Self {
                text1: fields.remove("text1"),
                text2: fields.remove("text2"),
                mode: fields.remove("mode"),
            }),
            Value::Null => Err(ApiError::Internal("request body is null".into())),
            _ => Ok(Self::default()),
        }
    }

    /// Check, in order: both texts present, mode valid, texts are strings.
    ///
    /// A `null` text counts as present. Only an omitted mode falls back to
    /// `lines`; an explicit `null` mode is invalid.
    pub fn validate(self) -> Result<(String, String, DiffMode), ApiError> {
        let (Some(text1), Some(text2)) = (self.text1, self.text2) else {
            return Err(DiffError::MissingInput.into());
        };
        let mode = match self.mode {
            None => DiffMode::default(),
            Some(Value::String(raw)) => raw.parse::<DiffMode>()?,
            Some(other) => return Err(DiffError::InvalidMode(other.to_string()).into()),
        };
        Ok((into_text("text1", text1)?, into_text("text2", text2)?, mode))
    }
}

fn into_text(field: &str, value: Value) -> Result<String, ApiError> {
    match value {
        Value::String(text) => Ok(text),
        _ => Err(ApiError::Internal(format!("{field} is not a string"))),
    }
}

/// `POST /api/tools/diff-checker`.
///
/// The body is read as JSON whatever its content type. The diff runs on the
/// blocking pool so the request timeout still applies to slow inputs.
pub async fn diff_handler(
    State(limits): State<DiffLimits>,
    body: Bytes,
) -> Result<Json<TextDiff>, ApiError> {
    let body: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "unreadable diff request body");
        ApiError::Internal(e.to_string())
    })?;
    let (text1, text2, mode) = DiffRequest::from_body(body)?.validate()?;

    let result = tokio::task::spawn_blocking(move || {
        compute_diff_within(&text1, &text2, mode, limits.max_table_cells)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("diff task failed: {e}")))??;

    tracing::debug!(
        additions = result.stats.additions,
        deletions = result.stats.deletions,
        unchanged = result.stats.unchanged,
        "diff computed"
    );
    Ok(Json(result))
}
