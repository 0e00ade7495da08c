use crate::domain::a001_employee::api;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::status_message::{StatusBanner, StatusMessage};
use contracts::domain::a001_employee::TABLE_NAME;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Column names of the employee table.
#[component]
pub fn EmployeeColumns() -> impl IntoView {
    let (columns, set_columns) = signal::<Vec<String>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (message, set_message) = signal::<Option<StatusMessage>>(None);

    spawn_local(async move {
        match api::fetch_employee_columns().await {
            Ok(names) => set_columns.set(names),
            Err(e) => {
                log::error!("Failed to fetch employee columns: {:?}", e);
                set_message.set(Some(StatusMessage::error(format!("Error: {}", e))));
            }
        }
        set_loading.set(false);
    });

    view! {
        <PageFrame entity="a001_employee_columns" category=PageCategory::List>
            <div class="page__header">
                <h1 class="page__title">{format!("Columns of '{}'", TABLE_NAME)}</h1>
            </div>

            <StatusBanner message=message />

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Spinner size=SpinnerSize::Small />
                        "Loading columns..."
                    </Flex>
                }
            >
                <Card>
                    <ul class="column-list">
                        <For
                            each=move || columns.get()
                            key=|name| name.clone()
                            children=|name: String| view! { <li><code>{name}</code></li> }
                        />
                    </ul>
                </Card>
            </Show>
        </PageFrame>
    }
}
