use crate::domain::a001_employee::{api, EmployeeTab};
use crate::shared::api_utils::ApiError;
use crate::shared::status_message::StatusMessage;
use contracts::domain::a001_employee::{EmployeeForm, MessageResponse};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const CREATE_REDIRECT_DELAY_MS: u32 = 2000;
pub const UPDATE_REDIRECT_DELAY_MS: u32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn tab(&self) -> EmployeeTab {
        match self {
            FormMode::Create => EmployeeTab::New,
            FormMode::Edit(emp_no) => EmployeeTab::Edit(*emp_no),
        }
    }

    /// Tab opened once the save has been acknowledged.
    pub fn next_tab(&self, emp_no: i64) -> EmployeeTab {
        match self {
            FormMode::Create => EmployeeTab::List,
            FormMode::Edit(_) => EmployeeTab::Detail(emp_no),
        }
    }

    pub fn redirect_delay_ms(&self) -> u32 {
        match self {
            FormMode::Create => CREATE_REDIRECT_DELAY_MS,
            FormMode::Edit(_) => UPDATE_REDIRECT_DELAY_MS,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Employee",
            FormMode::Edit(_) => "Edit Employee",
        }
    }
}

pub fn created_text(emp_no: i64) -> String {
    format!("Employee added! ID: {}", emp_no)
}

pub fn updated_text(reply: Option<MessageResponse>) -> String {
    reply
        .and_then(|r| r.message)
        .unwrap_or_else(|| "Employee updated successfully!".to_string())
}

#[derive(Clone, Copy)]
pub struct EmployeeFormViewModel {
    pub mode: FormMode,
    pub form: RwSignal<EmployeeForm>,
    pub message: RwSignal<Option<StatusMessage>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl EmployeeFormViewModel {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            form: RwSignal::new(EmployeeForm::default()),
            message: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    /// Pre-fills the form in edit mode.
    pub fn load_if_needed(&self) {
        let FormMode::Edit(emp_no) = self.mode else {
            return;
        };
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api::fetch_employee(emp_no).await {
                Ok(employee) => this.form.set(employee.editable_fields()),
                Err(e) => {
                    log::error!("Failed to load employee {}: {:?}", emp_no, e);
                    this.message
                        .set(Some(StatusMessage::error(format!("Error: {}", e))));
                }
            }
            this.loading.set(false);
        });
    }

    /// Validates and submits; `on_saved` gets the target tab after the redirect delay.
    pub fn save_command(&self, on_saved: impl FnOnce(EmployeeTab) + 'static) {
        if self.saving.get_untracked() {
            return;
        }
        let validated = match self.form.get_untracked().validated() {
            Ok(form) => form,
            Err(e) => {
                self.message.set(Some(StatusMessage::error(e.to_string())));
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        this.message.set(None);
        spawn_local(async move {
            let outcome: Result<(i64, String), ApiError> = match this.mode {
                FormMode::Create => api::create_employee(&validated)
                    .await
                    .map(|created| (created.emp_no, created_text(created.emp_no))),
                FormMode::Edit(emp_no) => api::update_employee(emp_no, &validated)
                    .await
                    .map(|reply| (emp_no, updated_text(reply))),
            };

            match outcome {
                Ok((emp_no, text)) => {
                    log::debug!("Employee {} saved", emp_no);
                    this.message.set(Some(StatusMessage::success(text)));
                    TimeoutFuture::new(this.mode.redirect_delay_ms()).await;
                    this.saving.set(false);
                    on_saved(this.mode.next_tab(emp_no));
                }
                Err(e) => {
                    log::error!("Failed to save employee: {:?}", e);
                    this.message
                        .set(Some(StatusMessage::error(format!("Error: {}", e))));
                    this.saving.set(false);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mode_navigation() {
        let mode = FormMode::Create;
        assert_eq!(mode.tab(), EmployeeTab::New);
        assert_eq!(mode.next_tab(500001), EmployeeTab::List);
        assert_eq!(mode.redirect_delay_ms(), 2000);
    }

    #[test]
    fn test_edit_mode_navigation() {
        let mode = FormMode::Edit(10001);
        assert_eq!(mode.tab(), EmployeeTab::Edit(10001));
        assert_eq!(mode.next_tab(10001), EmployeeTab::Detail(10001));
        assert_eq!(mode.redirect_delay_ms(), 1500);
    }

    #[test]
    fn test_success_texts() {
        assert_eq!(created_text(500001), "Employee added! ID: 500001");
        assert_eq!(updated_text(None), "Employee updated successfully!");
        assert_eq!(
            updated_text(Some(MessageResponse {
                message: Some("Employee updated".into())
            })),
            "Employee updated"
        );
        assert_eq!(
            updated_text(Some(MessageResponse::default())),
            "Employee updated successfully!"
        );
    }
}
