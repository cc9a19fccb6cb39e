use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::io::api::ApiClient;
use crate::io::storage::ProfileStore;
use crate::state::car_list::{self, CarRow};
use crate::state::catalog;
use crate::state::data_model::CatalogEntry;
use crate::state::request_generation::RequestGeneration;
use crate::state::schedule_grid::{self, GridRow};
use crate::state::selection::SelectionStore;
use crate::state::table_state::TableView;
use crate::ui::cars_table::CAR_HEADER_KEYS;
use crate::ui::schedule_table::SERIES_HEADER_KEYS;

pub type Selection = SelectionStore<ProfileStore>;

/// Fetches and sorts the series catalog. A failed fetch leaves the list as
/// it was.
pub async fn load_series_list(
    client: ApiClient,
    mut entries: Signal<Option<Vec<CatalogEntry>>>,
    mut loading: Signal<bool>,
    mut generation: Signal<RequestGeneration>,
) {
    let token = generation.with_mut(|generation| generation.begin());
    loading.set(true);

    match client.fetch_series_list().await {
        Ok(mut list) if generation.read().is_current(token) => {
            catalog::sort_catalog(&mut list);
            entries.set(Some(list));
        }
        Ok(_) => debug!("dropping stale series list response"),
        Err(err) => warn!("series list unavailable: {err}"),
    }

    loading.set(false);
}

/// Fetches the schedule and rebuilds the grid from scratch for the current
/// selection. A failed fetch keeps the grid already on screen.
pub async fn load_schedule_table(
    client: ApiClient,
    selection: Signal<Selection>,
    mut table: Signal<Option<TableView<GridRow>>>,
    mut loading: Signal<bool>,
    mut generation: Signal<RequestGeneration>,
) {
    let token = generation.with_mut(|generation| generation.begin());
    loading.set(true);

    match client.fetch_series_table().await {
        Ok(data) if generation.read().is_current(token) => {
            let grid = schedule_grid::build_grid(&data, selection.read().selection());
            debug!(
                "schedule grid: {} rows x {} dates",
                grid.rows.len(),
                grid.date_axis.len()
            );
            table.set(Some(grid.into_table_view(SERIES_HEADER_KEYS)));
        }
        Ok(_) => debug!("dropping stale schedule response"),
        Err(err) => warn!("schedule table unavailable: {err}"),
    }

    loading.set(false);
}

pub async fn load_cars(
    client: ApiClient,
    mut table: Signal<Option<TableView<CarRow>>>,
    mut loading: Signal<bool>,
    mut generation: Signal<RequestGeneration>,
) {
    let token = generation.with_mut(|generation| generation.begin());
    loading.set(true);

    match client.fetch_all_cars().await {
        Ok(cars) if generation.read().is_current(token) => {
            let columns = CAR_HEADER_KEYS.iter().map(|key| key.to_string()).collect();
            table.set(Some(TableView::new(columns, car_list::car_rows(&cars))));
        }
        Ok(_) => debug!("dropping stale car list response"),
        Err(err) => warn!("car list unavailable: {err}"),
    }

    loading.set(false);
}
