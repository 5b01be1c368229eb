/// Task model and database operations
///
/// A task is a single to-do item. Titles are unique across the table; the
/// service layer checks this before insert and the schema enforces it with
/// a unique constraint.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title VARCHAR(255) NOT NULL UNIQUE,
///     description TEXT,
///     completed BOOLEAN NOT NULL DEFAULT FALSE,
///     due_date DATE NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use ticklist_shared::models::task::{CreateTask, Task};
/// use chrono::NaiveDate;
///
/// # async fn example(pool: sqlx::PgPool) -> Result<(), sqlx::Error> {
/// let task = Task::create(&pool, CreateTask {
///     title: "Water the plants".to_string(),
///     description: None,
///     completed: false,
///     due_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
/// }).await?;
///
/// let found = Task::find_by_title(&pool, "Water the plants").await?;
/// assert_eq!(found.map(|t| t.id), Some(task.id));
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Surrogate task ID (UUID v4, store-generated)
    pub id: Uuid,

    /// Task title, unique across all tasks
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Whether the task has been completed
    pub completed: bool,

    /// Calendar date the task is due
    pub due_date: NaiveDate,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task title (must not collide with an existing title)
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial completion state
    #[serde(default)]
    pub completed: bool,

    /// Due date
    pub due_date: NaiveDate,
}

/// Input for updating an existing task
///
/// Fields are overwritten wholesale; identity is the task id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: String,

    /// New description
    pub description: Option<String>,

    /// New completion state
    pub completed: bool,

    /// New due date
    pub due_date: NaiveDate,
}

impl Task {
    /// Inserts a new task and returns the stored row
    ///
    /// # Errors
    ///
    /// Returns an error if the title violates the unique constraint or the
    /// database is unreachable.
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, completed, due_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, completed, due_date, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.completed)
        .bind(data.due_date)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID, `None` when absent
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, completed, due_date, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by its unique title, `None` when absent
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, completed, due_date, created_at, updated_at
            FROM tasks
            WHERE title = $1
            "#,
        )
        .bind(title)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks ordered by due date
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, completed, due_date, created_at, updated_at
            FROM tasks
            ORDER BY due_date, created_at
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Overwrites a task's fields, keyed by id
    ///
    /// Returns the updated row, or `None` when no task has that id. The
    /// `updated_at` timestamp is bumped automatically.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = $2, description = $3, completed = $4, due_date = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, completed, due_date, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.completed)
        .bind(data.due_date)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a task by id
    ///
    /// Returns true when a row was deleted, false when no task had that id.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_struct() {
        let create = CreateTask {
            title: "Buy milk".to_string(),
            description: Some("Semi-skimmed".to_string()),
            completed: false,
            due_date: NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
        };

        assert_eq!(create.title, "Buy milk");
        assert!(!create.completed);
    }

    #[test]
    fn test_create_task_completed_defaults_to_false_in_json() {
        let create: CreateTask = serde_json::from_str(
            r#"{"title":"Buy milk","description":null,"due_date":"2026-08-23"}"#,
        )
        .unwrap();

        assert!(!create.completed);
    }

    // Database-backed tests exercise these operations through the services
    // in tests/service_tests.rs.
}
