//! Print submission workflow - validate, decode, name, deposit
//!
//! 提交工作流：校验 → 解码 → 命名 → 写入热文件夹。写入是成功路径
//! 唯一的可观察副作用；任何校验失败都不触碰文件系统。

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Local};
use thiserror::Error;

use super::messages::Messages;
use super::types::{FieldErrors, PrintRequest, fields};
use crate::core::PrintConfig;

/// Submission failure
///
/// Every variant carries the rendered field violations so the HTTP layer
/// serializes the rejection without re-deriving messages.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Request body entirely absent - nothing else was checked
    #[error("print request body missing")]
    MissingRequest(FieldErrors),

    /// One or more request fields rejected; no file was written
    #[error("print request rejected: {}", .0.fields().join(", "))]
    Invalid(FieldErrors),

    /// Request was valid but the hot folder write failed
    #[error("hot folder write failed")]
    Write(FieldErrors),
}

impl SubmitError {
    /// The rendered field → messages set for the rejection response body
    pub fn into_field_errors(self) -> FieldErrors {
        match self {
            SubmitError::MissingRequest(errors)
            | SubmitError::Invalid(errors)
            | SubmitError::Write(errors) => errors,
        }
    }

    pub fn field_errors(&self) -> &FieldErrors {
        match self {
            SubmitError::MissingRequest(errors)
            | SubmitError::Invalid(errors)
            | SubmitError::Write(errors) => errors,
        }
    }
}

/// Print submission service
///
/// Holds the read-only [`PrintConfig`] snapshot injected at construction;
/// concurrent submissions share it without locking. Clone is cheap (two
/// `Arc`s).
#[derive(Clone)]
pub struct PrintService {
    config: Arc<PrintConfig>,
    messages: Arc<Messages>,
}

impl PrintService {
    pub fn new(config: Arc<PrintConfig>, messages: Arc<Messages>) -> Self {
        Self { config, messages }
    }

    /// Configured printer display names, order preserved
    pub fn printers(&self) -> &[String] {
        &self.config.printers
    }

    /// Validate a request, decode its document and deposit it into the
    /// hot folder
    ///
    /// `None` signals an absent request body. All field violations are
    /// collected before failing, so the caller sees every problem in one
    /// round-trip.
    pub async fn submit(&self, request: Option<PrintRequest>) -> Result<(), SubmitError> {
        let Some(request) = request else {
            return Err(SubmitError::MissingRequest(FieldErrors::single(
                fields::PRINT_REQUEST,
                self.messages.body_required.clone(),
            )));
        };

        let document = validate(&request, &self.messages).map_err(SubmitError::Invalid)?;

        let file_name = hot_folder_name(&request, Local::now());
        let path = self.config.hot_folder.join(&file_name);

        if let Err(err) = tokio::fs::write(&path, &document).await {
            tracing::error!(
                path = %path.display(),
                error = %err,
                "failed to write print job into hot folder"
            );
            return Err(SubmitError::Write(FieldErrors::single(
                fields::WRITE_FILE,
                format!("{} '{}'. {}", self.messages.write_failed, path.display(), err),
            )));
        }

        tracing::info!(
            file = %file_name,
            printer = %request.printer_name,
            user = %request.username,
            size = document.len(),
            "print job deposited"
        );

        Ok(())
    }
}

/// Collect every field violation, decoding the document along the way
///
/// Pure: returns either the decoded bytes or the full ordered violation
/// set. Decode is not attempted on an empty document - emptiness is
/// already its own violation.
fn validate(request: &PrintRequest, messages: &Messages) -> Result<Vec<u8>, FieldErrors> {
    let mut errors = FieldErrors::new();

    if request.document.is_empty() {
        errors.push(fields::DOCUMENT, messages.document_required.clone());
    }
    if request.file_name.is_empty() {
        errors.push(fields::FILE_NAME, messages.file_name_required.clone());
    }
    if request.printer_name.is_empty() {
        errors.push(fields::PRINTER_NAME, messages.printer_name_required.clone());
    }
    if request.username.is_empty() {
        errors.push(fields::USERNAME, messages.username_required.clone());
    }

    let mut document = Vec::new();
    if !request.document.is_empty() {
        match STANDARD.decode(&request.document) {
            Ok(bytes) => document = bytes,
            Err(err) => errors.push(
                fields::CONVERT_BASE64,
                format!("{} {}", messages.convert_base64_failed, err),
            ),
        }
    }

    if errors.is_empty() {
        Ok(document)
    } else {
        Err(errors)
    }
}

/// Derive the hot folder file name for a request
///
/// `{yymmdd_HHMMSS}_{stem}_{username}_{printer}{ext}`. The timestamp is
/// captured at processing time in 24-hour form. Any directory part the
/// client put into `FileName` is discarded; the extension keeps its
/// leading dot when present. Spaces in the printer name become
/// underscores, remaining edge whitespace is trimmed.
fn hot_folder_name(request: &PrintRequest, now: DateTime<Local>) -> String {
    let base = request
        .file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(request.file_name.as_str());
    let (stem, ext) = match base.rfind('.') {
        Some(dot) => base.split_at(dot),
        None => (base, ""),
    };

    let printer = request.printer_name.replace(' ', "_");

    format!(
        "{}_{}_{}_{}{}",
        now.format("%y%m%d_%H%M%S"),
        stem,
        request.username,
        printer.trim(),
        ext
    )
}
