use dioxus::prelude::*;

use crate::state::table_state::{SortOrder, SortSpec};

#[component]
pub fn SortableHeader(
    label: String,
    index: usize,
    sort_spec: Option<SortSpec>,
    on_sort: EventHandler<usize>,
) -> Element {
    rsx! {
        th {
            class: header_class(index, &sort_spec),
            id: format!("col-{index}"),
            onclick: move |_| on_sort.call(index),
            "{label}"
        }
    }
}

#[component]
pub fn FilterBox(id: String, placeholder: String, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "toolbar-input",
            id: "{id}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| on_input.call(evt.value()),
        }
    }
}

pub fn hidden_style(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        "display:none"
    }
}

fn header_class(index: usize, sort_spec: &Option<SortSpec>) -> String {
    let sort_class = match sort_spec.as_ref() {
        Some(spec) if spec.column == index => match spec.order {
            SortOrder::Asc => "sorted-asc",
            SortOrder::Desc => "sorted-desc",
        },
        _ => "",
    };
    join_classes("sortable", sort_class)
}

fn join_classes(a: &str, b: &str) -> String {
    if a.is_empty() {
        return b.to_string();
    }
    if b.is_empty() {
        return a.to_string();
    }
    format!("{a} {b}")
}
