/// Task service: business rules for task CRUD and derived list views
///
/// Update and delete are keyed by the task id; title uniqueness is a
/// separate constraint validated on both insert and rename. The three list
/// views (pending, completed, due today) are in-memory filters over the
/// loaded collection.
///
/// # Example
///
/// ```no_run
/// use ticklist_shared::service::task::TaskService;
/// use ticklist_shared::models::task::CreateTask;
/// use chrono::NaiveDate;
///
/// # async fn example(pool: sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let tasks = TaskService::new(pool);
///
/// let task = tasks.add_task(CreateTask {
///     title: "File taxes".to_string(),
///     description: None,
///     completed: false,
///     due_date: NaiveDate::from_ymd_opt(2027, 4, 15).unwrap(),
/// }).await?;
///
/// let pending = tasks.pending_tasks().await?;
/// assert!(pending.iter().any(|t| t.id == task.id));
/// # Ok(())
/// # }
/// ```

use chrono::{Local, NaiveDate};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};
use crate::models::task::{CreateTask, Task, UpdateTask};

/// Business service for managing tasks
#[derive(Clone)]
pub struct TaskService {
    pool: PgPool,
}

impl TaskService {
    /// Creates a task service backed by the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Adds a new task
    ///
    /// # Errors
    ///
    /// - `Validation` when the title is blank
    /// - `Conflict` when a task with the same title already exists
    pub async fn add_task(&self, data: CreateTask) -> ServiceResult<Task> {
        if data.title.trim().is_empty() {
            return Err(ServiceError::Validation(
                "Title cannot be blank".to_string(),
            ));
        }

        if Task::find_by_title(&self.pool, &data.title).await?.is_some() {
            error!(title = %data.title, "Task already exists");
            return Err(ServiceError::Conflict("Task already exists".to_string()));
        }

        Ok(Task::create(&self.pool, data).await?)
    }

    /// Retrieves a task by its id
    ///
    /// # Errors
    ///
    /// `NotFound` when no task has that id.
    pub async fn task_by_id(&self, id: Uuid) -> ServiceResult<Task> {
        Task::find_by_id(&self.pool, id).await?.ok_or_else(|| {
            error!(%id, "Task not found");
            ServiceError::NotFound("Task not found".to_string())
        })
    }

    /// Retrieves a task by its unique title
    ///
    /// # Errors
    ///
    /// - `Validation` when the title is blank
    /// - `NotFound` when no task has that title
    pub async fn task_by_title(&self, title: &str) -> ServiceResult<Task> {
        if title.trim().is_empty() {
            return Err(ServiceError::Validation(
                "Title cannot be blank".to_string(),
            ));
        }

        Task::find_by_title(&self.pool, title).await?.ok_or_else(|| {
            error!(title, "Task not found");
            ServiceError::NotFound("Task not found".to_string())
        })
    }

    /// Lists all tasks; empty when there are none
    pub async fn all_tasks(&self) -> ServiceResult<Vec<Task>> {
        Ok(Task::find_all(&self.pool).await?)
    }

    /// Overwrites a task's fields, keyed by id
    ///
    /// Renaming onto a title held by a different task is rejected, so title
    /// uniqueness holds across updates as well as inserts.
    ///
    /// # Errors
    ///
    /// - `Validation` when the new title is blank
    /// - `NotFound` when no task has that id
    /// - `Conflict` when the new title belongs to another task
    pub async fn update_task(&self, id: Uuid, changes: UpdateTask) -> ServiceResult<Task> {
        if changes.title.trim().is_empty() {
            return Err(ServiceError::Validation(
                "Title cannot be blank".to_string(),
            ));
        }

        if Task::find_by_id(&self.pool, id).await?.is_none() {
            error!(%id, "Task not found for update");
            return Err(ServiceError::NotFound("Task not found".to_string()));
        }

        if let Some(other) = Task::find_by_title(&self.pool, &changes.title).await? {
            if other.id != id {
                error!(title = %changes.title, "Task already exists");
                return Err(ServiceError::Conflict("Task already exists".to_string()));
            }
        }

        Task::update(&self.pool, id, changes)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Task not found".to_string()))
    }

    /// Deletes a task by id
    ///
    /// # Errors
    ///
    /// `NotFound` when no task has that id.
    pub async fn delete_task(&self, id: Uuid) -> ServiceResult<()> {
        if !Task::delete(&self.pool, id).await? {
            error!(%id, "Task not found for deletion");
            return Err(ServiceError::NotFound("Task not found".to_string()));
        }
        Ok(())
    }

    /// Marks a task as completed, keeping its other fields
    ///
    /// # Errors
    ///
    /// `NotFound` when no task has that id.
    pub async fn complete_task(&self, id: Uuid) -> ServiceResult<Task> {
        let task = self.task_by_id(id).await?;

        self.update_task(
            id,
            UpdateTask {
                title: task.title,
                description: task.description,
                completed: true,
                due_date: task.due_date,
            },
        )
        .await
    }

    /// Lists tasks that are not yet completed
    pub async fn pending_tasks(&self) -> ServiceResult<Vec<Task>> {
        Ok(filter_pending(self.all_tasks().await?))
    }

    /// Lists tasks that have been completed
    pub async fn completed_tasks(&self) -> ServiceResult<Vec<Task>> {
        Ok(filter_completed(self.all_tasks().await?))
    }

    /// Lists tasks that are due today and not yet completed
    ///
    /// "Today" is the server-local calendar date.
    pub async fn today_tasks(&self) -> ServiceResult<Vec<Task>> {
        let today = Local::now().date_naive();
        Ok(filter_due_on(self.all_tasks().await?, today))
    }
}

/// Keeps tasks where `completed` is false
fn filter_pending(tasks: Vec<Task>) -> Vec<Task> {
    tasks.into_iter().filter(|task| !task.completed).collect()
}

/// Keeps tasks where `completed` is true
fn filter_completed(tasks: Vec<Task>) -> Vec<Task> {
    tasks.into_iter().filter(|task| task.completed).collect()
}

/// Keeps tasks that are not completed and due on the given date
///
/// A completed task due on `date` is excluded.
fn filter_due_on(tasks: Vec<Task>, date: NaiveDate) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| !task.completed && task.due_date == date)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(title: &str, completed: bool, due: NaiveDate) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            completed,
            due_date: due,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_pending_and_completed_partition_all_tasks() {
        let all = vec![
            task("a", false, day(2026, 8, 23)),
            task("b", true, day(2026, 8, 23)),
            task("c", false, day(2026, 8, 24)),
            task("d", true, day(2026, 8, 25)),
        ];

        let pending = filter_pending(all.clone());
        let completed = filter_completed(all.clone());

        assert_eq!(pending.len() + completed.len(), all.len());
        assert!(pending.iter().all(|t| !t.completed));
        assert!(completed.iter().all(|t| t.completed));
        assert!(pending.iter().all(|p| completed.iter().all(|c| c.id != p.id)));
    }

    #[test]
    fn test_filters_on_empty_collection() {
        assert!(filter_pending(vec![]).is_empty());
        assert!(filter_completed(vec![]).is_empty());
        assert!(filter_due_on(vec![], day(2026, 8, 23)).is_empty());
    }

    #[test]
    fn test_due_on_excludes_completed_tasks_due_that_day() {
        let today = day(2026, 8, 23);
        let all = vec![
            task("due today", false, today),
            task("done today", true, today),
            task("due tomorrow", false, day(2026, 8, 24)),
        ];

        let due = filter_due_on(all, today);

        assert_eq!(due.len(), 1);
        assert_eq!(due[0].title, "due today");
    }

    #[test]
    fn test_due_on_matches_exact_date_only() {
        let all = vec![
            task("past", false, day(2026, 8, 22)),
            task("future", false, day(2026, 8, 24)),
        ];

        assert!(filter_due_on(all, day(2026, 8, 23)).is_empty());
    }
}
