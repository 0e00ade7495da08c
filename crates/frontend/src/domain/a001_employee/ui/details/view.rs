use super::view_model::EmployeeDetailsViewModel;
use crate::domain::a001_employee::EmployeeTab;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::status_message::StatusBanner;
use contracts::domain::a001_employee::ENTITY_INDEX;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EmployeeDetails(emp_no: i64) -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();
    let vm = EmployeeDetailsViewModel::new(emp_no);
    Effect::new(move |_| {
        tabs_store.data_revision.track();
        // a deleted record is about to leave; refetching it would only produce an error
        if !vm.deleting.get_untracked() {
            vm.load();
        }
    });

    let own_key = EmployeeTab::Detail(emp_no).key();

    let open_edit = move |_| {
        let tab = EmployeeTab::Edit(emp_no);
        tabs_store.open_tab(&tab.key(), &tab.title());
    };

    let back = move |_| {
        let tab = EmployeeTab::List;
        tabs_store.open_tab(&tab.key(), &tab.title());
    };

    let delete = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Are you sure you want to delete this employee?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let own_key = own_key.clone();
        vm.delete_command(move || {
            let list = EmployeeTab::List;
            tabs_store.finish_write(&own_key, &list.key(), &list.title());
        });
    };

    let field = move |label: &'static str, value: String| {
        view! {
            <div class="details-field">
                <span class="details-field__label">{label}</span>
                <span class="details-field__value">{value}</span>
            </div>
        }
    };

    view! {
        <PageFrame entity=ENTITY_INDEX category=PageCategory::Detail>
            <div class="page__header">
                <h1 class="page__title">"Employee Details"</h1>
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Primary on_click=open_edit>
                        {icon("edit")}
                        " Edit"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=delete
                        disabled=vm.deleting
                    >
                        {icon("delete")}
                        " Delete"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=back>
                        {icon("arrow-left")}
                        " Back"
                    </Button>
                </Flex>
            </div>

            <StatusBanner message=vm.message />

            <Show when=move || vm.loading.get()>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Spinner size=SpinnerSize::Small />
                    "Loading..."
                </Flex>
            </Show>

            {move || vm.employee.get().map(|e| view! {
                <Card>
                    <div class="details-form">
                        {field("Employee No", e.emp_no.to_string())}
                        {field("First Name", e.first_name.clone())}
                        {field("Last Name", e.last_name.clone())}
                        {field("Gender", e.gender.to_string())}
                        {field("Birth Date", format_date(&e.birth_date))}
                        {field("Hire Date", format_date(&e.hire_date))}
                    </div>
                </Card>
            })}
        </PageFrame>
    }
}
