//! Dense schedule grid: one row per selected series, one column per date of
//! the shared date axis.

use tracing::debug;

use crate::state::data_model::{Car, ScheduleEntry, Series, SeriesTable, PLACEHOLDER};
use crate::state::selection::SelectionSet;
use crate::state::table_state::{TableRow, TableView};

/// Fixed columns in front of the date columns: series, licence, race week,
/// category, cars.
pub const SERIES_COLUMNS: usize = 5;

pub const TRANSPARENT: &str = "transparent";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarLabel {
    pub name: String,
    pub owned: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarGroup {
    pub car_class: String,
    pub cars: Vec<CarLabel>,
}

impl CarGroup {
    pub fn text(&self) -> String {
        let names: Vec<&str> = self.cars.iter().map(|car| car.name.as_str()).collect();
        format!("{}: {}", self.car_class, names.join(", "))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderStyle {
    Solid,
    Dotted,
}

impl BorderStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dotted => "dotted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridCell {
    Scheduled {
        track_id: String,
        color: Option<String>,
        owned: bool,
    },
    Absent,
}

impl GridCell {
    pub fn track_label(&self) -> &str {
        match self {
            Self::Scheduled { track_id, .. } => track_id.as_str(),
            Self::Absent => PLACEHOLDER,
        }
    }

    pub fn background(&self) -> &str {
        match self {
            Self::Scheduled {
                color: Some(color), ..
            } => color.as_str(),
            _ => TRANSPARENT,
        }
    }

    pub fn owned(&self) -> bool {
        matches!(self, Self::Scheduled { owned: true, .. })
    }

    /// Presence is solid, absence dotted, whatever the ownership.
    pub fn border_style(&self) -> BorderStyle {
        match self {
            Self::Scheduled { .. } => BorderStyle::Solid,
            Self::Absent => BorderStyle::Dotted,
        }
    }

    pub fn inline_style(&self) -> String {
        format!(
            "background-color:{};border-style:{}",
            self.background(),
            self.border_style().as_css()
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridRow {
    pub serie_name: String,
    pub licence_group: String,
    pub race_week: Option<String>,
    pub category: String,
    pub car_groups: Vec<CarGroup>,
    pub cells: Vec<GridCell>,
}

impl TableRow for GridRow {
    fn cell_text(&self, column: usize) -> String {
        match column {
            0 => self.serie_name.clone(),
            1 => self.licence_group.clone(),
            2 => self
                .race_week
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            3 => self.category.clone(),
            4 => self
                .car_groups
                .iter()
                .map(CarGroup::text)
                .collect::<Vec<_>>()
                .join("\n"),
            _ => self
                .cells
                .get(column - SERIES_COLUMNS)
                .map(|cell| cell.track_label().to_string())
                .unwrap_or_default(),
        }
    }

    fn column_count(&self) -> usize {
        SERIES_COLUMNS + self.cells.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ScheduleGrid {
    pub date_axis: Vec<String>,
    pub rows: Vec<GridRow>,
}

impl ScheduleGrid {
    /// Wraps the grid in a sortable, filterable view. `series_headers` name
    /// the fixed columns; dates name the rest.
    pub fn into_table_view(self, series_headers: [&str; SERIES_COLUMNS]) -> TableView<GridRow> {
        let columns = series_headers
            .iter()
            .map(|header| header.to_string())
            .chain(self.date_axis)
            .collect();
        TableView::new(columns, self.rows)
    }
}

/// Keeps the selected series in fetch order and aligns each one onto the
/// shared date axis.
pub fn build_grid(table: &SeriesTable, selection: &SelectionSet) -> ScheduleGrid {
    let rows = table
        .series
        .iter()
        .filter(|serie| selection.contains(&serie.serie_name))
        .map(|serie| build_row(serie, &table.all_dates))
        .collect();

    ScheduleGrid {
        date_axis: table.all_dates.clone(),
        rows,
    }
}

fn build_row(serie: &Series, date_axis: &[String]) -> GridRow {
    GridRow {
        serie_name: serie.serie_name.clone(),
        licence_group: serie.licence_group.clone(),
        race_week: serie.race_week.clone(),
        category: serie.category.clone(),
        car_groups: group_cars_by_class(&serie.cars_ids),
        cells: date_axis
            .iter()
            .map(|date| resolve_cell(&serie.schedules, date))
            .collect(),
    }
}

/// Buckets cars by class. Classes keep first-seen order, and so do the cars
/// inside a class.
pub fn group_cars_by_class(cars: &[Car]) -> Vec<CarGroup> {
    let mut groups: Vec<CarGroup> = Vec::new();
    for car in cars {
        let label = CarLabel {
            name: car.car_name.clone(),
            owned: car.car_owned,
        };
        match groups.iter_mut().find(|group| group.car_class == car.car_class) {
            Some(group) => group.cars.push(label),
            None => groups.push(CarGroup {
                car_class: car.car_class.clone(),
                cars: vec![label],
            }),
        }
    }
    groups
}

/// Finds the schedule entry for `date`. Should several entries share the
/// date, the last one wins.
pub fn resolve_cell(schedules: &[ScheduleEntry], date: &str) -> GridCell {
    let mut matches = schedules
        .iter()
        .filter(|entry| entry.start_date_week == date);
    let Some(first) = matches.next() else {
        return GridCell::Absent;
    };
    let entry = match matches.last() {
        Some(last) => {
            debug!("duplicate schedule entries for {date}, keeping the last");
            last
        }
        None => first,
    };

    GridCell::Scheduled {
        track_id: entry.track_id.clone(),
        color: entry
            .track_id_color
            .clone()
            .filter(|color| !color.is_empty()),
        owned: entry.track_owned,
    }
}
