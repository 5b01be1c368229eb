/// Task endpoints
///
/// Read endpoints answer JSON; the form-style write endpoints (`/add`,
/// `/update`, `/complete/:id`, `/delete/:id`) answer redirects for the
/// server-rendered task pages, mirroring the form flow of the original UI.
///
/// # Endpoints
///
/// - `GET    /api/tasks/all` - all tasks
/// - `GET    /api/tasks/:id` - task by id
/// - `GET    /api/tasks/title/:title` - task by unique title
/// - `POST   /api/tasks/add` - create (form-encoded), redirect
/// - `GET    /api/tasks/update/:id` - edit-form payload
/// - `POST   /api/tasks/update` - overwrite (form-encoded), redirect
/// - `POST   /api/tasks/complete/:id` - mark completed, redirect
/// - `DELETE /api/tasks/delete/:id` - delete, redirect
/// - `GET    /api/tasks/pending|completed|today` - filtered lists

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{app::AppState, error::ApiResult};
use ticklist_shared::models::task::{CreateTask, Task, UpdateTask};

/// Form payload for creating a task
#[derive(Debug, Deserialize)]
pub struct AddTaskForm {
    /// Task title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial completion state (absent in the add form)
    #[serde(default)]
    pub completed: bool,

    /// Due date (yyyy-mm-dd)
    pub due_date: NaiveDate,
}

/// Form payload for updating a task, keyed by id
#[derive(Debug, Deserialize)]
pub struct UpdateTaskForm {
    /// Id of the task being edited
    pub id: Uuid,

    /// New title
    pub title: String,

    /// New description
    pub description: Option<String>,

    /// New completion state
    #[serde(default)]
    pub completed: bool,

    /// New due date (yyyy-mm-dd)
    pub due_date: NaiveDate,
}

/// `GET /api/tasks/all` - lists every task (empty array when none)
pub async fn all_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.tasks.all_tasks().await?))
}

/// `GET /api/tasks/:id` - task by id, 404 when absent
pub async fn task_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Task>> {
    Ok(Json(state.tasks.task_by_id(id).await?))
}

/// `GET /api/tasks/title/:title` - task by unique title
///
/// 400 on a blank title, 404 when no task has the title.
pub async fn task_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Json<Task>> {
    Ok(Json(state.tasks.task_by_title(&title).await?))
}

/// `POST /api/tasks/add` - creates a task from the add form
///
/// Redirects to the task list on success; on any failure, logs and sends
/// the browser back to the add form.
pub async fn add_task(State(state): State<AppState>, Form(form): Form<AddTaskForm>) -> Redirect {
    let result = state
        .tasks
        .add_task(CreateTask {
            title: form.title.clone(),
            description: form.description,
            completed: form.completed,
            due_date: form.due_date,
        })
        .await;

    match result {
        Ok(_) => Redirect::to("/tasks"),
        Err(e) => {
            error!(title = %form.title, "Error adding task: {}", e);
            Redirect::to("/tasks/add")
        }
    }
}

/// `GET /api/tasks/update/:id` - payload for pre-filling the edit form
pub async fn edit_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Task>> {
    Ok(Json(state.tasks.task_by_id(id).await?))
}

/// `POST /api/tasks/update` - overwrites a task from the edit form
///
/// Keyed by the form's id field; renaming onto another task's title
/// answers 409.
pub async fn update_task(
    State(state): State<AppState>,
    Form(form): Form<UpdateTaskForm>,
) -> ApiResult<Redirect> {
    state
        .tasks
        .update_task(
            form.id,
            UpdateTask {
                title: form.title,
                description: form.description,
                completed: form.completed,
                due_date: form.due_date,
            },
        )
        .await?;

    Ok(Redirect::to("/tasks"))
}

/// `POST /api/tasks/complete/:id` - marks a task completed
///
/// Always redirects home; failures are logged but do not change the
/// redirect, matching the form flow.
pub async fn complete_task(State(state): State<AppState>, Path(id): Path<Uuid>) -> Redirect {
    if let Err(e) = state.tasks.complete_task(id).await {
        error!(%id, "Error completing task: {}", e);
    }
    Redirect::to("/")
}

/// `DELETE /api/tasks/delete/:id` - deletes a task
///
/// Always redirects home; failures are logged but do not change the
/// redirect.
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<Uuid>) -> Redirect {
    if let Err(e) = state.tasks.delete_task(id).await {
        error!(%id, "Error deleting task: {}", e);
    }
    Redirect::to("/")
}

/// `GET /api/tasks/pending` - tasks not yet completed
pub async fn pending_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.tasks.pending_tasks().await?))
}

/// `GET /api/tasks/completed` - completed tasks
pub async fn completed_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.tasks.completed_tasks().await?))
}

/// `GET /api/tasks/today` - pending tasks due on the server-local date
pub async fn today_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.tasks.today_tasks().await?))
}
