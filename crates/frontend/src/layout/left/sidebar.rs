//! Sidebar with collapsible menu groups

use crate::domain::a001_employee::EmployeeTab;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_query_builder::QueryBuilder;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: String,
    label: String,
    icon: &'static str,
}

impl MenuItem {
    fn new(key: String, icon: &'static str) -> Self {
        let label = tab_label_for_key(&key);
        Self { key, label, icon }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "employees",
            label: "Employees",
            icon: "users",
            items: vec![
                MenuItem::new(EmployeeTab::List.key(), "users"),
                MenuItem::new(EmployeeTab::New.key(), "plus"),
                MenuItem::new(EmployeeTab::Columns.key(), "columns"),
            ],
        },
        MenuGroup {
            id: "tools",
            label: "Tools",
            icon: "database",
            items: vec![MenuItem::new(QueryBuilder::full_name(), "database")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(
        groups
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<String>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|ids| ids.contains(&group_id_for_exp))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        // Children
                        <Show when=move || expanded_groups.with(|ids| ids.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|item| {
                                    let key_for_active = item.key.clone();
                                    let key_for_click = item.key.clone();
                                    let label_for_click = item.label.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(key_for_active.as_str()))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(&key_for_click, &label_for_click)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(item.icon)}
                                                <span>{item.label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
