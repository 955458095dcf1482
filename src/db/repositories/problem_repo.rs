//! Problem repository

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::admin::request::{ImportedProblem, ImportedTestCase},
    models::{Problem, TestCase},
};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Upsert a whole import batch inside one transaction
    ///
    /// Records are keyed by slug: a re-imported slug replaces the stored
    /// problem and all of its test cases.
    pub async fn import_batch(
        pool: &PgPool,
        problems: &[ImportedProblem],
    ) -> AppResult<Vec<Problem>> {
        let mut tx = pool.begin().await?;
        let mut imported = Vec::with_capacity(problems.len());

        for record in problems {
            let problem = Self::upsert_problem(&mut tx, record).await?;
            let cases = Self::replace_test_cases(&mut tx, &problem.id, &record.test_cases).await?;
            tracing::debug!(slug = %problem.slug, test_cases = cases.len(), "Upserted problem");
            imported.push(problem);
        }

        tx.commit().await?;
        Ok(imported)
    }

    /// Insert or update one problem by slug
    async fn upsert_problem(
        tx: &mut Transaction<'_, Postgres>,
        record: &ImportedProblem,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (
                slug, title, description, difficulty, tags,
                is_public, is_active, time_limit_ms, memory_limit_mb
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (slug) DO UPDATE
            SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                difficulty = EXCLUDED.difficulty,
                tags = EXCLUDED.tags,
                is_public = EXCLUDED.is_public,
                is_active = EXCLUDED.is_active,
                time_limit_ms = EXCLUDED.time_limit_ms,
                memory_limit_mb = EXCLUDED.memory_limit_mb,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(&record.slug)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.difficulty)
        .bind(&record.tags)
        .bind(record.is_public)
        .bind(record.is_active)
        .bind(record.time_limit_ms)
        .bind(record.memory_limit_mb)
        .fetch_one(&mut **tx)
        .await?;

        Ok(problem)
    }

    /// Replace a problem's test cases, preserving source order
    async fn replace_test_cases(
        tx: &mut Transaction<'_, Postgres>,
        problem_id: &Uuid,
        test_cases: &[ImportedTestCase],
    ) -> AppResult<Vec<TestCase>> {
        sqlx::query(r#"DELETE FROM test_cases WHERE problem_id = $1"#)
            .bind(problem_id)
            .execute(&mut **tx)
            .await?;

        let mut inserted = Vec::with_capacity(test_cases.len());
        for (position, test_case) in test_cases.iter().enumerate() {
            let row = sqlx::query_as::<_, TestCase>(
                r#"
                INSERT INTO test_cases (problem_id, input, expected_output, is_sample, position)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(problem_id)
            .bind(&test_case.input)
            .bind(&test_case.expected_output)
            .bind(test_case.is_sample)
            .bind(position as i32)
            .fetch_one(&mut **tx)
            .await?;

            inserted.push(row);
        }

        Ok(inserted)
    }
}
