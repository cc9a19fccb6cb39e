use dioxus::prelude::*;

use crate::io::api::ApiClient;
use crate::state::data_model::PLACEHOLDER;
use crate::state::i18n::{self, Language};
use crate::state::request_generation::RequestGeneration;
use crate::state::schedule_grid::{CarGroup, GridCell, GridRow, SERIES_COLUMNS};
use crate::state::table_state::TableView;
use crate::ui::actions::{self, Selection};
use crate::ui::widgets::{hidden_style, FilterBox, SortableHeader};

pub const SERIES_HEADER_KEYS: [&str; SERIES_COLUMNS] = [
    "header.serie",
    "header.licence",
    "header.race_week",
    "header.category",
    "header.cars",
];

#[component]
pub fn ScheduleTable(
    selection: Signal<Selection>,
    language: Signal<Language>,
    loading: Signal<bool>,
) -> Element {
    let client = use_context::<ApiClient>();
    let mut grid_view = use_signal::<Option<TableView<GridRow>>>(|| None);
    let generation = use_signal(RequestGeneration::new);

    let current_language = *language.read();
    let load_label = i18n::tr(current_language, "series.load_table");
    let search_placeholder = i18n::tr(current_language, "table.search_placeholder");
    let empty_label = i18n::tr(current_language, "table.empty");
    let snapshot = grid_view.read().clone();

    rsx! {
        div { class: "toolbar",
            button {
                class: "toolbar-btn",
                id: "loadTableButton",
                onclick: move |_| {
                    let client = client.clone();
                    spawn(async move {
                        actions::load_schedule_table(client, selection, grid_view, loading, generation)
                            .await;
                    });
                },
                "{load_label}"
            }
            if let Some(view) = snapshot.as_ref() {
                FilterBox {
                    id: "table-search-box",
                    placeholder: search_placeholder.to_string(),
                    value: view.filter_query().to_string(),
                    on_input: move |value: String| {
                        grid_view.with_mut(|view| {
                            if let Some(view) = view {
                                view.set_filter(value);
                            }
                        });
                    },
                }
            }
        }
        {match snapshot {
            Some(view) if !view.is_empty() => rsx! {
                div { class: "table-container", id: "table-container",
                    table {
                        thead {
                            tr {
                                for (index, column) in view.columns().iter().enumerate() {
                                    SortableHeader {
                                        label: header_label(current_language, index, column),
                                        index,
                                        sort_spec: view.sort_spec().cloned(),
                                        on_sort: move |index: usize| {
                                            grid_view.with_mut(|view| {
                                                if let Some(view) = view {
                                                    view.sort_by_column_toggle(index);
                                                }
                                            });
                                        },
                                    }
                                }
                            }
                        }
                        tbody {
                            for row in view.rows() {
                                ScheduleRow {
                                    key: "{row.serie_name}",
                                    row: row.clone(),
                                    visible: view.row_matches_filter(row),
                                }
                            }
                        }
                    }
                }
            },
            _ => rsx! {
                p { class: "empty-message", id: "empty-message", "{empty_label}" }
            },
        }}
    }
}

#[component]
fn ScheduleRow(row: GridRow, visible: bool) -> Element {
    let race_week = row.race_week.clone().unwrap_or_else(|| PLACEHOLDER.to_string());

    rsx! {
        tr { style: hidden_style(visible),
            td { class: "bordered", "{row.serie_name}" }
            td { class: "bordered", "{row.licence_group}" }
            td { class: "bordered", "{race_week}" }
            td { class: "bordered", "{row.category}" }
            td { class: "bordered cars-cell",
                for group in row.car_groups.iter() {
                    CarGroupLine { group: group.clone() }
                }
            }
            for cell in row.cells.iter() {
                TrackCell { cell: cell.clone() }
            }
        }
    }
}

#[component]
fn CarGroupLine(group: CarGroup) -> Element {
    let last = group.cars.len().saturating_sub(1);

    rsx! {
        div { class: "car-group",
            strong { "{group.car_class}" }
            ": "
            for (idx, car) in group.cars.iter().enumerate() {
                span { class: owned_class(car.owned), "{car.name}" }
                if idx < last {
                    ", "
                }
            }
        }
    }
}

#[component]
fn TrackCell(cell: GridCell) -> Element {
    let style = cell.inline_style();
    let label = cell.track_label().to_string();

    rsx! {
        td { style: "{style}",
            if cell.owned() {
                span { class: "owned", "{label}" }
            } else {
                "{label}"
            }
        }
    }
}

fn header_label(language: Language, index: usize, column: &str) -> String {
    match SERIES_HEADER_KEYS.get(index) {
        Some(key) => i18n::tr(language, *key).to_string(),
        None => column.to_string(),
    }
}

fn owned_class(owned: bool) -> &'static str {
    if owned {
        "owned"
    } else {
        ""
    }
}
