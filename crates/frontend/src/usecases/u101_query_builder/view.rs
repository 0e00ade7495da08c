use super::state::{ClauseDraft, ClauseField, Phase};
use super::view_model::QueryBuilderViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::status_message::StatusBanner;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_query_builder::{
    cell_text, result_columns, ComparisonOperator, QueryBuilder,
};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

#[component]
pub fn QueryBuilderPage() -> impl IntoView {
    let vm = QueryBuilderViewModel::new();
    vm.load_tables();
    let state = vm.state;

    let message = Signal::derive(move || state.with(|s| s.message.clone()));
    let tables_failed = move || state.with(|s| s.phase == Phase::TablesLoadFailed);
    let has_columns = move || state.with(|s| !s.columns.is_empty());

    view! {
        <PageFrame entity="u101_query_builder" category=PageCategory::UseCase>
            <div class="page__header">
                <h1 class="page__title">{QueryBuilder::display_name()}</h1>
                <p class="page__subtitle">{QueryBuilder::description()}</p>
            </div>

            <div class="page__content query-builder">
                <Show
                    when=move || !tables_failed()
                    fallback=move || view! { <StatusBanner message=message /> }
                >
                    <div class="form-group">
                        <label for="qb-table">"1. Select a Table"</label>
                        <select
                            id="qb-table"
                            on:change=move |ev| vm.select_table(event_target_value(&ev))
                        >
                            <option
                                value=""
                                disabled=true
                                selected=move || state.with(|s| s.selected_table.is_empty())
                            >
                                "-- Please choose a table --"
                            </option>
                            <For
                                each=move || state.with(|s| s.tables.clone())
                                key=|name| name.clone()
                                children=move |name: String| {
                                    let name_for_selected = name.clone();
                                    let name_for_value = name.clone();
                                    view! {
                                        <option
                                            value=name_for_value
                                            selected=move || state.with(|s| s.selected_table == name_for_selected)
                                        >
                                            {name}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        <Show when=move || state.with(|s| s.phase == Phase::ColumnsLoading)>
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                <Spinner size=SpinnerSize::Small />
                                "Loading columns..."
                            </Flex>
                        </Show>
                    </div>

                    <Show when=has_columns>
                        <ColumnPicker vm=vm />
                        <ClauseList vm=vm />

                        <div class="execute-section">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm.execute()
                                disabled=Signal::derive(move || !state.with(|s| s.can_execute()))
                            >
                                {icon("play")}
                                {move || if vm.is_executing() { " Executing..." } else { " Execute Query" }}
                            </Button>
                        </div>
                    </Show>

                    <div class="results-section">
                        <StatusBanner message=message />
                        <ResultGrid vm=vm />
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn ColumnPicker(vm: QueryBuilderViewModel) -> impl IntoView {
    let state = vm.state;

    view! {
        <div class="form-group">
            <label>"2. Select Columns"</label>
            <div class="checkbox-group">
                <For
                    each=move || state.with(|s| s.columns.clone())
                    key=|name| name.clone()
                    children=move |name: String| {
                        let input_id = format!("col-{}", name);
                        let name_for_checked = name.clone();
                        let name_for_toggle = name.clone();
                        view! {
                            <div class="checkbox-item">
                                <input
                                    type="checkbox"
                                    id=input_id.clone()
                                    name=name.clone()
                                    prop:checked=move || state.with(|s| s.is_column_checked(&name_for_checked))
                                    on:change=move |ev| {
                                        vm.toggle_column(name_for_toggle.clone(), event_target_checked(&ev))
                                    }
                                />
                                <label for=input_id>{name}</label>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn ClauseList(vm: QueryBuilderViewModel) -> impl IntoView {
    let state = vm.state;

    view! {
        <div class="form-group">
            <label>"3. Add Conditions (WHERE)"</label>
            <div class="where-clauses-container">
                <For
                    each=move || state.with(|s| s.clauses.iter().map(|c| c.id).collect::<Vec<_>>())
                    key=|id| *id
                    children=move |id: Uuid| view! { <ClauseRow vm=vm id=id /> }
                />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_clause()>
                    {icon("plus")}
                    " Add Condition"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn ClauseRow(vm: QueryBuilderViewModel, id: Uuid) -> impl IntoView {
    let state = vm.state;
    let field = move |read: fn(&ClauseDraft) -> String| {
        state.with(|s| {
            s.clauses
                .iter()
                .find(|c| c.id == id)
                .map(read)
                .unwrap_or_default()
        })
    };
    let column = move || field(|c| c.column.clone());
    let operator = move || field(|c| c.operator.symbol().to_string());
    let value = move || field(|c| c.value.clone());

    view! {
        <div class="where-clause-row">
            <select on:change=move |ev| vm.update_clause(id, ClauseField::Column, event_target_value(&ev))>
                <option value="" disabled=true selected=move || column().is_empty()>
                    "Select Column"
                </option>
                {move || {
                    state
                        .with(|s| s.columns.clone())
                        .into_iter()
                        .map(|name| {
                            let is_selected = column() == name;
                            let value = name.clone();
                            view! { <option value=value selected=is_selected>{name}</option> }
                        })
                        .collect_view()
                }}
            </select>

            <select on:change=move |ev| vm.update_clause(id, ClauseField::Operator, event_target_value(&ev))>
                {ComparisonOperator::all()
                    .into_iter()
                    .map(move |op| {
                        let symbol = op.symbol();
                        view! {
                            <option value=symbol selected=move || operator() == symbol>{symbol}</option>
                        }
                    })
                    .collect_view()}
            </select>

            <input
                type="text"
                placeholder="Value"
                prop:value=value
                on:input=move |ev| vm.update_clause(id, ClauseField::Value, event_target_value(&ev))
            />

            <button class="remove-btn" title="Remove condition" on:click=move |_| vm.remove_clause(id)>
                "-"
            </button>
        </div>
    }
}

#[component]
fn ResultGrid(vm: QueryBuilderViewModel) -> impl IntoView {
    let state = vm.state;

    move || {
        let rows = state.with(|s| s.results.clone());
        if rows.is_empty() {
            return None;
        }
        let count = rows.len();
        let header = result_columns(&rows);
        let header_for_rows = header.clone();

        Some(view! {
            <div class="results-table-container">
                <h3>{format!("Results ({})", count)}</h3>
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header
                                .into_iter()
                                .map(|name| view! { <TableHeaderCell>{name}</TableHeaderCell> })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                let cells = header_for_rows
                                    .iter()
                                    .map(|name| {
                                        let text = row.get(name).map(cell_text).unwrap_or_default();
                                        view! { <TableCell>{text}</TableCell> }
                                    })
                                    .collect_view();
                                view! { <TableRow>{cells}</TableRow> }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            </div>
        })
    }
}
