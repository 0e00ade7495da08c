use crate::domain::a001_employee::api;
use crate::shared::status_message::StatusMessage;
use contracts::domain::a001_employee::{Employee, MessageResponse};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Pause between the delete confirmation message and leaving the page.
pub const DELETE_REDIRECT_DELAY_MS: u32 = 1500;

pub fn delete_success_text(reply: Option<MessageResponse>) -> String {
    reply
        .and_then(|r| r.message)
        .unwrap_or_else(|| "Employee deleted successfully!".to_string())
}

#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub emp_no: i64,
    pub employee: RwSignal<Option<Employee>>,
    pub message: RwSignal<Option<StatusMessage>>,
    pub loading: RwSignal<bool>,
    pub deleting: RwSignal<bool>,
}

impl EmployeeDetailsViewModel {
    pub fn new(emp_no: i64) -> Self {
        Self {
            emp_no,
            employee: RwSignal::new(None),
            message: RwSignal::new(None),
            loading: RwSignal::new(false),
            deleting: RwSignal::new(false),
        }
    }

    pub fn load(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api::fetch_employee(this.emp_no).await {
                Ok(employee) => this.employee.set(Some(employee)),
                Err(e) => {
                    log::error!("Failed to load employee {}: {:?}", this.emp_no, e);
                    this.message.set(Some(StatusMessage::error(format!("Error: {}", e))));
                }
            }
            this.loading.set(false);
        });
    }

    /// Deletes the record; `on_deleted` runs after the success message has been shown.
    pub fn delete_command(&self, on_deleted: impl FnOnce() + 'static) {
        if self.deleting.get_untracked() {
            return;
        }
        let this = *self;
        this.deleting.set(true);
        spawn_local(async move {
            match api::delete_employee(this.emp_no).await {
                Ok(reply) => {
                    this.message
                        .set(Some(StatusMessage::success(delete_success_text(reply))));
                    TimeoutFuture::new(DELETE_REDIRECT_DELAY_MS).await;
                    on_deleted();
                }
                Err(e) => {
                    log::error!("Failed to delete employee {}: {:?}", this.emp_no, e);
                    this.message.set(Some(StatusMessage::error(format!("Error: {}", e))));
                    this.deleting.set(false);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_success_text() {
        assert_eq!(delete_success_text(None), "Employee deleted successfully!");
        let reply = MessageResponse {
            message: Some("Employee 10001 deleted".into()),
        };
        assert_eq!(delete_success_text(Some(reply)), "Employee 10001 deleted");
    }
}
