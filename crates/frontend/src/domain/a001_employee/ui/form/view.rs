use super::view_model::{EmployeeFormViewModel, FormMode};
use crate::domain::a001_employee::EmployeeTab;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::date_input_value;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::status_message::StatusBanner;
use contracts::domain::a001_employee::{EmployeeForm, Gender, ENTITY_INDEX};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EmployeeFormPage(mode: FormMode) -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();
    let vm = EmployeeFormViewModel::new(mode);
    vm.load_if_needed();

    let own_key = mode.tab().key();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let own_key = own_key.clone();
        vm.save_command(move |next: EmployeeTab| {
            tabs_store.finish_write(&own_key, &next.key(), &next.title());
        });
    };

    let cancel = move |_| {
        let back = match mode {
            FormMode::Create => EmployeeTab::List,
            FormMode::Edit(emp_no) => EmployeeTab::Detail(emp_no),
        };
        tabs_store.open_tab(&back.key(), &back.title());
    };

    view! {
        <PageFrame entity=ENTITY_INDEX category=PageCategory::Detail>
            <div class="page__header">
                <h1 class="page__title">{mode.title()}</h1>
            </div>

            <Show when=move || vm.loading.get()>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Spinner size=SpinnerSize::Small />
                    "Loading..."
                </Flex>
            </Show>

            <form class="details-form" on:submit=on_submit>
                {match mode {
                    FormMode::Edit(emp_no) => Some(view! {
                        <div class="form-group">
                            <label for="emp_no">"Employee No"</label>
                            <input type="text" id="emp_no" value=emp_no.to_string() readonly=true />
                        </div>
                    }),
                    FormMode::Create => None,
                }}

                <EmployeeInput vm=vm id="first_name" label="First Name" read=|f| f.first_name.clone() write=|f, v| f.first_name = v />
                <EmployeeInput vm=vm id="last_name" label="Last Name" read=|f| f.last_name.clone() write=|f, v| f.last_name = v />

                <div class="form-group">
                    <label for="gender">"Gender"</label>
                    <select
                        id="gender"
                        on:change=move |ev| vm.form.update(|f| f.gender = event_target_value(&ev))
                    >
                        <option value="" disabled=true selected=move || vm.form.with(|f| f.gender.is_empty())>
                            "-- Select --"
                        </option>
                        {Gender::all()
                            .into_iter()
                            .map(|g| {
                                let code = g.code();
                                let label = match g {
                                    Gender::Male => "Male",
                                    Gender::Female => "Female",
                                };
                                view! {
                                    <option value=code selected=move || vm.form.with(|f| f.gender == code)>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <EmployeeInput vm=vm id="birth_date" label="Birth Date" input_type="date" read=|f| date_input_value(&f.birth_date) write=|f, v| f.birth_date = v />
                <EmployeeInput vm=vm id="hire_date" label="Hire Date" input_type="date" read=|f| date_input_value(&f.hire_date) write=|f, v| f.hire_date = v />

                <StatusBanner message=vm.message />

                <div class="details-actions">
                    <button type="submit" class="button button--primary" disabled=move || vm.saving.get()>
                        {icon("save")}
                        {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                    </button>
                    <button type="button" class="button button--secondary" on:click=cancel>
                        {icon("x")}
                        " Cancel"
                    </button>
                </div>
            </form>
        </PageFrame>
    }
}

#[component]
fn EmployeeInput(
    vm: EmployeeFormViewModel,
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    read: fn(&EmployeeForm) -> String,
    write: fn(&mut EmployeeForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                prop:value=move || vm.form.with(read)
                on:input=move |ev| vm.form.update(|f| write(f, event_target_value(&ev)))
            />
        </div>
    }
}
