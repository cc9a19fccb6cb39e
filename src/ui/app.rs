use clap::ValueEnum;
use dioxus::prelude::*;
use tracing::info;

use crate::config::AppConfig;
use crate::io::api::ApiClient;
use crate::io::storage::ProfileStore;
use crate::state::i18n::{self, Language};
use crate::state::selection::SelectionStore;
use crate::ui::cars_table::CarsTable;
use crate::ui::schedule_table::ScheduleTable;
use crate::ui::series_list::SeriesList;

const STYLES: Asset = asset!("/assets/styles.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    Series,
    Cars,
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    use_context_provider(|| {
        info!("using backend {}", config.base_url);
        ApiClient::new(config.base_url.clone())
    });
    let mut language = use_signal(|| config.language);
    let selection =
        use_signal(|| SelectionStore::load(ProfileStore::open_or_memory(config.open_storage())));
    let loading = use_signal(|| false);
    let mut view = use_signal(|| View::Series);

    let current_language = *language.read();
    let current_view = *view.read();
    let title = i18n::tr(current_language, "app.title");
    let series_label = i18n::tr(current_language, "nav.series");
    let cars_label = i18n::tr(current_language, "nav.cars");
    let loading_label = i18n::tr(current_language, "status.loading");

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            div { class: "toolbar",
                h1 { class: "app-title", "{title}" }
                button {
                    class: "toolbar-btn",
                    id: "nav-series",
                    disabled: current_view == View::Series,
                    onclick: move |_| view.set(View::Series),
                    "{series_label}"
                }
                button {
                    class: "toolbar-btn",
                    id: "nav-cars",
                    disabled: current_view == View::Cars,
                    onclick: move |_| view.set(View::Cars),
                    "{cars_label}"
                }
                select {
                    class: "toolbar-select toolbar-select-sm",
                    id: "select-language",
                    value: "{current_language.code()}",
                    onchange: move |evt| {
                        if let Some(next_language) = Language::from_code(&evt.value()) {
                            language.set(next_language);
                        }
                    },
                    for lang in Language::value_variants().iter().copied() {
                        option { value: "{lang.code()}", "{lang.native_name()}" }
                    }
                }
                if *loading.read() {
                    span { class: "loading", id: "loading", "{loading_label}" }
                }
            }
            {match current_view {
                View::Series => rsx! {
                    SeriesList { selection, language, loading }
                    ScheduleTable { selection, language, loading }
                },
                View::Cars => rsx! {
                    CarsTable { language, loading }
                },
            }}
        }
    }
}
