use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::models::{ExtractError, SummarizeError};

/// Everything the API can answer with. `Display` is the wire message,
/// rendered into a `{ "error": ... }` body.
#[derive(Debug)]
pub enum ApiError {
    MissingFile,
    InvalidFileType,
    FileTooLarge(usize),
    InvalidApiKey,
    Upstream { status: u16, message: String },
    EmptySummary,
    Internal(String),
    Io(std::io::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingFile => write!(f, "No PDF file uploaded"),
            ApiError::InvalidFileType => write!(f, "Only PDF files are allowed!"),
            ApiError::FileTooLarge(max) => write!(
                f,
                "File size too large. Maximum size is {}MB",
                max / (1024 * 1024)
            ),
            ApiError::InvalidApiKey => write!(f, "Invalid Groq API key"),
            ApiError::Upstream { message, .. } => write!(f, "{}", message),
            ApiError::EmptySummary => {
                write!(f, "Internal server error: No summary generated from the API")
            }
            ApiError::Internal(msg) => write!(f, "Internal server error: {}", msg),
            ApiError::Io(e) => write!(f, "Internal server error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFile | ApiError::InvalidFileType | ApiError::FileTooLarge(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = serde_json::json!({ "error": self.to_string() });
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Io(err)
    }
}

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        ApiError::Internal(err.0)
    }
}

impl From<SummarizeError> for ApiError {
    fn from(err: SummarizeError) -> Self {
        match err {
            SummarizeError::InvalidApiKey => ApiError::InvalidApiKey,
            SummarizeError::Upstream { status, message } => ApiError::Upstream { status, message },
            SummarizeError::EmptySummary => ApiError::EmptySummary,
            SummarizeError::Transport(msg) => ApiError::Internal(msg),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Last line of defense for 500s that did not come from `ApiError`.
/// Typed errors already carry a JSON body and pass through untouched;
/// anything else gets the generic body.
pub fn render_500<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let is_json = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);

    if is_json {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let (req, res) = res.into_parts();
    let mut res = res.set_body(serde_json::json!({ "error": "Internal server error" }).to_string());
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    let res = ServiceResponse::new(req, res)
        .map_into_boxed_body()
        .map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
