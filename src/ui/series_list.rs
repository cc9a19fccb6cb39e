use dioxus::prelude::*;

use crate::io::api::ApiClient;
use crate::state::catalog;
use crate::state::data_model::CatalogEntry;
use crate::state::i18n::{self, Language};
use crate::state::request_generation::RequestGeneration;
use crate::state::table_state;
use crate::ui::actions::{self, Selection};
use crate::ui::widgets::{hidden_style, FilterBox};

/// Checkbox picker over the whole series catalog.
#[component]
pub fn SeriesList(
    selection: Signal<Selection>,
    language: Signal<Language>,
    loading: Signal<bool>,
) -> Element {
    let client = use_context::<ApiClient>();
    let entries = use_signal::<Option<Vec<CatalogEntry>>>(|| None);
    let mut query = use_signal(String::new);
    let generation = use_signal(RequestGeneration::new);

    let current_language = *language.read();
    let licence_label = i18n::tr(current_language, "series.licence");
    let category_label = i18n::tr(current_language, "series.category");
    let load_label = i18n::tr(current_language, "series.load_list");
    let clear_label = i18n::tr(current_language, "series.clear_selection");
    let search_placeholder = i18n::tr(current_language, "series.search_placeholder");

    let loaded = entries.read().is_some();
    let query_value = query.read().clone();
    let rows = entries
        .read()
        .as_deref()
        .map(|list| catalog::catalog_rows(list, selection.read().selection()))
        .unwrap_or_default();

    rsx! {
        div { class: "toolbar",
            if !loaded {
                button {
                    class: "toolbar-btn",
                    id: "load-series-button",
                    onclick: move |_| {
                        let client = client.clone();
                        spawn(async move {
                            actions::load_series_list(client, entries, loading, generation).await;
                        });
                    },
                    "{load_label}"
                }
            } else {
                FilterBox {
                    id: "search-box",
                    placeholder: search_placeholder.to_string(),
                    value: query_value.clone(),
                    on_input: move |value| query.set(value),
                }
                button {
                    class: "toolbar-btn toolbar-btn-danger",
                    id: "btn-clear-selection",
                    onclick: move |_| {
                        let mut selection = selection;
                        selection.with_mut(|store| store.clear());
                    },
                    "{clear_label}"
                }
            }
        }
        div { class: "series-list", id: "series-list",
            for row in rows {
                SeriesRow {
                    key: "{row.entry.serie_name}",
                    name: row.entry.serie_name.clone(),
                    label: row.label(licence_label, category_label),
                    checked: row.checked,
                    query: query_value.clone(),
                    selection,
                }
            }
        }
    }
}

#[component]
fn SeriesRow(
    name: String,
    label: String,
    checked: bool,
    query: String,
    selection: Signal<Selection>,
) -> Element {
    let visible = table_state::matches_filter(&label, &query);

    rsx! {
        div { style: hidden_style(visible),
            label {
                input {
                    r#type: "checkbox",
                    value: "{name}",
                    checked,
                    onchange: move |evt: FormEvent| {
                        let mut selection = selection;
                        selection.with_mut(|store| {
                            store.toggle(&name, evt.checked());
                        });
                    },
                }
                " {label}"
            }
        }
    }
}
