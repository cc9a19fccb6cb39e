use dioxus::prelude::*;

use crate::io::api::ApiClient;
use crate::state::car_list::CarRow;
use crate::state::i18n::{self, Language};
use crate::state::request_generation::RequestGeneration;
use crate::state::table_state::TableView;
use crate::ui::actions;
use crate::ui::widgets::{hidden_style, FilterBox, SortableHeader};

pub const CAR_HEADER_KEYS: [&str; 10] = [
    "cars.header.image",
    "cars.header.make",
    "cars.header.model",
    "cars.header.name",
    "cars.header.hp",
    "cars.header.weight",
    "cars.header.headlights",
    "cars.header.not_retired",
    "cars.header.price",
    "cars.header.link",
];

/// Flat roster of every car, one row each.
#[component]
pub fn CarsTable(language: Signal<Language>, loading: Signal<bool>) -> Element {
    let client = use_context::<ApiClient>();
    let mut cars_view = use_signal::<Option<TableView<CarRow>>>(|| None);
    let generation = use_signal(RequestGeneration::new);

    let current_language = *language.read();
    let load_label = i18n::tr(current_language, "cars.load");
    let search_placeholder = i18n::tr(current_language, "table.search_placeholder");
    let empty_label = i18n::tr(current_language, "cars.empty");
    let snapshot = cars_view.read().clone();

    rsx! {
        div { class: "toolbar",
            button {
                class: "toolbar-btn",
                id: "load-cars-button",
                onclick: move |_| {
                    let client = client.clone();
                    spawn(async move {
                        actions::load_cars(client, cars_view, loading, generation).await;
                    });
                },
                "{load_label}"
            }
            if let Some(view) = snapshot.as_ref() {
                FilterBox {
                    id: "cars-search-box",
                    placeholder: search_placeholder.to_string(),
                    value: view.filter_query().to_string(),
                    on_input: move |value: String| {
                        cars_view.with_mut(|view| {
                            if let Some(view) = view {
                                view.set_filter(value);
                            }
                        });
                    },
                }
            }
        }
        {match snapshot {
            Some(view) => rsx! {
                div { class: "table-container", id: "cars-container",
                    table {
                        thead {
                            tr {
                                for (index, key) in CAR_HEADER_KEYS.iter().enumerate() {
                                    SortableHeader {
                                        label: i18n::tr(current_language, *key).to_string(),
                                        index,
                                        sort_spec: view.sort_spec().cloned(),
                                        on_sort: move |index: usize| {
                                            cars_view.with_mut(|view| {
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
                                CarLine {
                                    key: "{row.id}",
                                    row: row.clone(),
                                    visible: view.row_matches_filter(row),
                                }
                            }
                        }
                    }
                }
            },
            None => rsx! {
                p { class: "empty-message", "{empty_label}" }
            },
        }}
    }
}

#[component]
fn CarLine(row: CarRow, visible: bool) -> Element {
    let href = row.site_url.clone().unwrap_or_default();
    let link_text = row.link_text().to_string();

    rsx! {
        tr { style: hidden_style(visible),
            td {
                img { src: "{row.image_url}", alt: "{row.car_name}", class: "car-thumb" }
            }
            td { "{row.car_make}" }
            td { "{row.car_model}" }
            td { "{row.car_name}" }
            td { "{row.hp}" }
            td { "{row.weight}" }
            td { "{row.headlights}" }
            td { "{row.active}" }
            td { "{row.price}" }
            td {
                a { href: "{href}", target: "_blank", class: "car-link", "{link_text}" }
            }
        }
    }
}
