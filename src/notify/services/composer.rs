//! Template-driven notice composition.

use crate::notify::domain::Notice;
use chrono::NaiveDate;
use minijinja::{Environment, context};
use thiserror::Error;

/// Subject line shared by the supervisor escalation notices.
const BOARD_SUBJECT: &str = "Task board update";

/// Body template for the notice sent to a task's assignee.
const TASK_ASSIGNED_BODY: &str = "You have been assigned the task \"{{ task }}\" by \
{{ registered_by }}. It is due on {{ due_on }} ({{ expected_days }} expected day(s)).";

/// Subject template for the notice sent to a task's assignee.
const TASK_ASSIGNED_SUBJECT: &str = "New task: {{ task }}";

/// Body template for the supervisor notice about a new task.
const TASK_LOGGED_BODY: &str =
    "{{ registered_by }} added the task \"{{ task }}\" assigned to {{ assignee }}.";

/// Body template for the supervisor notice about a board edit.
const BOARD_UPDATED_BODY: &str = "{{ editor }} updated task statuses on the board.";

/// Errors returned while composing notice content.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// A notice template failed to render.
    #[error("notice template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

/// Result type for notice composition.
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Renders the fixed set of notice templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoticeComposer;

impl NoticeComposer {
    /// Creates a notice composer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Composes the notice sent to the member a new task is assigned to.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Template`] when rendering fails.
    pub fn task_assigned(
        &self,
        task: &str,
        registered_by: &str,
        due_on: NaiveDate,
        expected_days: u32,
    ) -> ComposeResult<Notice> {
        let ctx = context! {
            task,
            registered_by,
            due_on => due_on.to_string(),
            expected_days,
        };
        let subject = render(TASK_ASSIGNED_SUBJECT, &ctx)?;
        let body = render(TASK_ASSIGNED_BODY, &ctx)?;
        Ok(Notice::new(subject, body))
    }

    /// Composes the supervisor notice about a newly logged task.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Template`] when rendering fails.
    pub fn task_logged(
        &self,
        task: &str,
        assignee: &str,
        registered_by: &str,
    ) -> ComposeResult<Notice> {
        let body = render(
            TASK_LOGGED_BODY,
            &context! { task, assignee, registered_by },
        )?;
        Ok(Notice::new(BOARD_SUBJECT, body))
    }

    /// Composes the supervisor notice about a bulk status edit.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Template`] when rendering fails.
    pub fn board_updated(&self, editor: &str) -> ComposeResult<Notice> {
        let body = render(BOARD_UPDATED_BODY, &context! { editor })?;
        Ok(Notice::new(BOARD_SUBJECT, body))
    }
}

/// Renders a one-shot template against the given context.
fn render(template: &str, ctx: &minijinja::Value) -> ComposeResult<String> {
    let environment = Environment::new();
    Ok(environment.render_str(template, ctx)?)
}
