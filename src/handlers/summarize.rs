use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use futures::TryStreamExt;
use log::info;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::constants;
use crate::error::{ApiError, ApiResult};
use crate::models::{SummarizeResponse, SummaryResult, UploadedDocument};
use crate::services::{SummaryProvider, TextExtractor, UploadStore};

/// POST /api/summarize. Whatever happens after the upload is accepted,
/// the stored file is removed before the response goes out.
pub async fn summarize_pdf(
    req: HttpRequest,
    payload: Multipart,
    store: web::Data<UploadStore>,
    extractor: web::Data<dyn TextExtractor>,
    provider: web::Data<dyn SummaryProvider>,
) -> ApiResult<HttpResponse> {
    let document = receive_pdf(&req, payload, &store).await?;
    info!(
        "Accepted upload {:?} ({} bytes) as {:?}",
        document.original_name, document.size, document.stored_path
    );

    let outcome = process(&document, extractor.get_ref(), provider.get_ref()).await;
    store.remove(&document.stored_path).await;

    let result = outcome?;
    Ok(HttpResponse::Ok().json(SummarizeResponse::from(result)))
}

async fn process(
    document: &UploadedDocument,
    extractor: &dyn TextExtractor,
    provider: &dyn SummaryProvider,
) -> ApiResult<SummaryResult> {
    let text = extractor.extract_text(&document.stored_path).await?;
    let result = provider.summarize(&text).await?;
    Ok(result)
}

/// Walks the multipart stream until it finds the file part named `pdf`,
/// validates it and streams it to disk. Unrelated form fields are drained
/// and ignored.
async fn receive_pdf(
    req: &HttpRequest,
    mut payload: Multipart,
    store: &UploadStore,
) -> ApiResult<UploadedDocument> {
    let is_multipart = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("multipart/form-data"))
        .unwrap_or(false);
    if !is_multipart {
        return Err(ApiError::MissingFile);
    }

    while let Some(mut field) = payload.try_next().await.map_err(malformed_upload)? {
        let Some(disposition) = field.content_disposition() else {
            continue;
        };
        if disposition.get_name() != Some(constants::UPLOAD_FIELD) {
            continue;
        }
        // a "pdf" part without a filename is a plain form value, not a file
        let Some(original_name) = disposition.get_filename().map(str::to_string) else {
            continue;
        };

        let mime_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();
        if mime_type != constants::PDF_MIME {
            return Err(ApiError::InvalidFileType);
        }

        let stored_path = store.assign_path();
        return match save_field(&mut field, &stored_path, store.max_file_size()).await {
            Ok(size) => Ok(UploadedDocument {
                original_name,
                stored_path,
                mime_type,
                size,
            }),
            Err(e) => {
                store.remove(&stored_path).await;
                Err(e)
            }
        };
    }

    Err(ApiError::MissingFile)
}

async fn save_field(field: &mut Field, path: &Path, max_size: usize) -> ApiResult<usize> {
    let mut file = File::create(path).await?;
    let mut size = 0usize;

    while let Some(chunk) = field.try_next().await.map_err(malformed_upload)? {
        size += chunk.len();
        if size > max_size {
            return Err(ApiError::FileTooLarge(max_size));
        }
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    Ok(size)
}

fn malformed_upload(err: MultipartError) -> ApiError {
    ApiError::Internal(format!("Malformed upload: {}", err))
}
