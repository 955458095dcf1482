//! Admin handler implementations

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
    Json,
};
use std::path::Path;

use crate::{
    config::ImportConfig,
    constants::roles,
    error::{AppError, AppResult},
    middleware::{auth::AuthenticatedUser, logging::CorrelationId},
    services::ImportService,
    state::AppState,
};

use super::{request::ImportedProblem, response::ImportResult};

/// Verify user is admin
fn require_admin(auth_user: &AuthenticatedUser) -> AppResult<()> {
    if auth_user.role != roles::ADMIN {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    Ok(())
}

/// Import a batch of problems
///
/// Accepts either a raw JSON array of problem records, or a multipart upload
/// whose first file part is a `.json` document with the same array.
pub async fn import_problems(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    request: Request,
) -> AppResult<Json<ImportResult>> {
    require_admin(&auth_user)?;

    let correlation_id = request
        .extensions()
        .get::<CorrelationId>()
        .map(|c| c.0.clone())
        .unwrap_or_default();

    let import_config = &state.config().import;
    let problems = parse_import_request(request, import_config).await?;

    if problems.len() > import_config.max_rows {
        return Err(AppError::PayloadTooLarge(format!(
            "Too many rows. Maximum {} allowed",
            import_config.max_rows
        )));
    }

    let result = ImportService::import_problems(state.db(), &problems).await?;

    tracing::info!(
        inserted = result.inserted,
        correlation_id = %correlation_id,
        requested_by = %auth_user.username,
        "Imported problems"
    );

    Ok(Json(result))
}

/// Extract the batch from the request body, whatever its shape
async fn parse_import_request(
    request: Request,
    config: &ImportConfig,
) -> AppResult<Vec<ImportedProblem>> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| AppError::InvalidInput(format!("Malformed multipart request: {e}")))?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Malformed multipart request: {e}")))?
        {
            let Some(file_name) = field.file_name().map(str::to_owned) else {
                continue;
            };

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read upload: {e}")))?;

            if data.len() > config.max_upload_bytes {
                return Err(AppError::PayloadTooLarge("File too large".to_string()));
            }

            return parse_import_file(&file_name, &data);
        }

        Err(AppError::InvalidInput(
            "No file in multipart request".to_string(),
        ))
    } else {
        let bytes = axum::body::to_bytes(request.into_body(), config.max_upload_bytes)
            .await
            .map_err(|_| {
                AppError::PayloadTooLarge(format!(
                    "Import payload exceeds {} bytes",
                    config.max_upload_bytes
                ))
            })?;

        parse_json(&bytes)
    }
}

/// Dispatch an uploaded file on its extension
fn parse_import_file(file_name: &str, data: &[u8]) -> AppResult<Vec<ImportedProblem>> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => parse_json(data),
        _ => Err(AppError::InvalidInput(format!(
            "Unsupported file format: .{extension}"
        ))),
    }
}

fn parse_json(data: &[u8]) -> AppResult<Vec<ImportedProblem>> {
    serde_json::from_slice(data)
        .map_err(|e| AppError::InvalidInput(format!("Malformed import document: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_batch() {
        let data = br#"[
            {"slug": "two-sum", "title": "Two Sum", "timeLimitMs": 1000},
            {"slug": "three-sum"}
        ]"#;
        let problems = parse_json(data).unwrap();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].slug, "two-sum");
        assert_eq!(problems[0].time_limit_ms, 1000);
        assert!(problems[1].is_public);
    }

    #[test]
    fn test_parse_json_rejects_malformed_document() {
        assert!(matches!(
            parse_json(b"{not json"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_import_file_dispatches_on_extension() {
        assert!(parse_import_file("problems.json", b"[]").is_ok());
        assert!(parse_import_file("problems.JSON", b"[]").is_ok());
        assert!(matches!(
            parse_import_file("problems.csv", b""),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_import_file("problems", b""),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_require_admin() {
        let admin = AuthenticatedUser {
            id: uuid::Uuid::new_v4(),
            username: "root".to_string(),
            role: roles::ADMIN.to_string(),
        };
        let participant = AuthenticatedUser {
            role: roles::PARTICIPANT.to_string(),
            ..admin.clone()
        };
        assert!(require_admin(&admin).is_ok());
        assert!(matches!(
            require_admin(&participant),
            Err(AppError::Forbidden(_))
        ));
    }
}
