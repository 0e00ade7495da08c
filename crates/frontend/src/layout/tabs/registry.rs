//! Tab content registry: the one place mapping a tab key to its view.

use crate::domain::a001_employee::ui::columns::EmployeeColumns;
use crate::domain::a001_employee::ui::details::EmployeeDetails;
use crate::domain::a001_employee::ui::form::{EmployeeFormPage, FormMode};
use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::domain::a001_employee::EmployeeTab;
use crate::usecases::u101_query_builder::QueryBuilderPage;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_query_builder::QueryBuilder;
use leptos::prelude::*;

/// Renders a tab's content by key, or a placeholder for unknown keys.
pub fn render_tab_content(key: &str) -> AnyView {
    if let Some(tab) = EmployeeTab::parse(key) {
        return match tab {
            EmployeeTab::List => view! { <EmployeeList /> }.into_any(),
            EmployeeTab::New => view! { <EmployeeFormPage mode=FormMode::Create /> }.into_any(),
            EmployeeTab::Columns => view! { <EmployeeColumns /> }.into_any(),
            EmployeeTab::Detail(emp_no) => view! { <EmployeeDetails emp_no=emp_no /> }.into_any(),
            EmployeeTab::Edit(emp_no) => {
                view! { <EmployeeFormPage mode=FormMode::Edit(emp_no) /> }.into_any()
            }
        };
    }

    if key == QueryBuilder::full_name() {
        return view! { <QueryBuilderPage /> }.into_any();
    }

    log::warn!("Unknown tab key: {}", key);
    view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
}
