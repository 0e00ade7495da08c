use crate::domain::a001_employee::api;
use crate::domain::a001_employee::EmployeeTab;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::status_message::{StatusBanner, StatusMessage};
use contracts::domain::a001_employee::{Employee, ENTITY_INDEX};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// One table line, already formatted for display.
#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeRow {
    pub emp_no: i64,
    pub full_name: String,
    pub gender: String,
    pub hire_date: String,
    pub birth_date: String,
}

impl From<Employee> for EmployeeRow {
    fn from(e: Employee) -> Self {
        Self {
            emp_no: e.emp_no,
            full_name: e.full_name(),
            gender: e.gender.code().to_string(),
            hire_date: format_date(&e.hire_date),
            birth_date: format_date(&e.birth_date),
        }
    }
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();

    let (items, set_items) = signal::<Vec<EmployeeRow>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (message, set_message) = signal::<Option<StatusMessage>>(None);

    let load = move || {
        set_loading.set(true);
        set_message.set(None);
        spawn_local(async move {
            match api::fetch_employees().await {
                Ok(list) => {
                    set_items.set(list.into_iter().map(EmployeeRow::from).collect());
                }
                Err(e) => {
                    log::error!("Failed to fetch employees: {:?}", e);
                    set_message.set(Some(StatusMessage::error(format!("Error: {}", e))));
                }
            }
            set_loading.set(false);
        });
    };

    // initial load, and again after any create, edit or delete
    Effect::new(move |_| {
        tabs_store.data_revision.track();
        load();
    });

    let open = move |tab: EmployeeTab| tabs_store.open_tab(&tab.key(), &tab.title());

    view! {
        <PageFrame entity=ENTITY_INDEX category=PageCategory::List>
            <div class="page__header">
                <h1 class="page__title">"Employee Dashboard"</h1>
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open(EmployeeTab::New)>
                        {icon("plus")}
                        " Add New Employee"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| open(EmployeeTab::Columns)>
                        {icon("columns")}
                        " View Columns"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Flex>
            </div>

            <StatusBanner message=message />

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell attr:style="width: 120px;">"Emp No"</TableHeaderCell>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 90px;">"Gender"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 140px;">"Hire Date"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 140px;">"Birth Date"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        if loading.get() {
                            view! {
                                <TableRow>
                                    <TableCell attr:colspan="5" attr:style="padding: 40px; text-align: center;">
                                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                            <Spinner />
                                            "Loading employees..."
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }.into_any()
                        } else {
                            let rows = items.get();
                            if rows.is_empty() {
                                view! {
                                    <TableRow>
                                        <TableCell attr:colspan="5" attr:style="padding: 40px; text-align: center; color: var(--colorNeutralForeground3);">
                                            "No employees found"
                                        </TableCell>
                                    </TableRow>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|row| {
                                    let emp_no = row.emp_no;
                                    view! {
                                        <TableRow on:click=move |_| open(EmployeeTab::Detail(emp_no)) attr:style="cursor: pointer;">
                                            <TableCell>{row.emp_no}</TableCell>
                                            <TableCell>{row.full_name}</TableCell>
                                            <TableCell>{row.gender}</TableCell>
                                            <TableCell>{row.hire_date}</TableCell>
                                            <TableCell>{row.birth_date}</TableCell>
                                        </TableRow>
                                    }
                                }).collect_view().into_any()
                            }
                        }
                    }}
                </TableBody>
            </Table>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::Gender;

    #[test]
    fn test_row_formats_dates() {
        let row = EmployeeRow::from(Employee {
            emp_no: 10001,
            first_name: "Georgi".into(),
            last_name: "Facello".into(),
            gender: Gender::Male,
            birth_date: "1953-09-02".into(),
            hire_date: String::new(),
        });
        assert_eq!(row.full_name, "Georgi Facello");
        assert_eq!(row.gender, "M");
        assert_eq!(row.birth_date, "02/09/1953");
        assert_eq!(row.hire_date, "N/A");
    }
}
