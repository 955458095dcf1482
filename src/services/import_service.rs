//! Problem import service

use sqlx::PgPool;

use crate::{
    db::repositories::ProblemRepository,
    error::{AppError, AppResult},
    handlers::admin::{request::ImportedProblem, response::ImportResult},
    services::ImportValidator,
};

/// Import service for business logic
pub struct ImportService;

impl ImportService {
    /// Validate a batch and upsert it into the problem bank
    ///
    /// All-or-nothing: any validation error rejects the whole batch and
    /// nothing is persisted.
    pub async fn import_problems(
        pool: &PgPool,
        problems: &[ImportedProblem],
    ) -> AppResult<ImportResult> {
        let errors = ImportValidator::validate_batch(problems);
        if !errors.is_empty() {
            tracing::warn!(
                rows = problems.len(),
                errors = errors.len(),
                "Import batch rejected by validation"
            );
            return Err(AppError::ImportFailed(errors));
        }

        let imported = ProblemRepository::import_batch(pool, problems).await?;

        tracing::info!(
            problems = imported.len(),
            test_cases = problems.iter().map(|p| p.test_cases.len()).sum::<usize>(),
            "Import batch persisted"
        );

        Ok(ImportResult {
            ok: true,
            inserted: imported.len() as i64,
            slugs: imported.into_iter().map(|p| p.slug).collect(),
            errors: Vec::new(),
        })
    }
}
