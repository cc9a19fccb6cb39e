use crate::state::data_model::{CarRecord, CarsResponse, PLACEHOLDER};
use crate::state::table_state::TableRow;

pub const CHECK_MARK: &str = "✔️";
pub const CROSS_MARK: &str = "❌";

/// One line of the car roster, already formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarRow {
    pub id: String,
    pub image_url: String,
    pub car_make: String,
    pub car_model: String,
    pub car_name: String,
    pub hp: String,
    pub weight: String,
    pub headlights: &'static str,
    pub active: &'static str,
    pub price: String,
    pub site_url: Option<String>,
}

impl CarRow {
    pub fn from_record(id: &str, record: &CarRecord) -> Self {
        Self {
            id: id.to_string(),
            image_url: record.image_url(),
            car_make: or_placeholder(&record.car_make),
            car_model: or_placeholder(&record.car_model),
            car_name: or_placeholder(&record.car_name),
            hp: format!("{} HP", or_placeholder(&record.hp)),
            weight: format!("{} Kg", or_placeholder(&record.car_weight)),
            headlights: mark(record.has_headlights),
            active: mark(!record.retired),
            price: or_placeholder(&record.price_display),
            site_url: record.site_url.clone(),
        }
    }

    pub fn link_text(&self) -> &str {
        self.site_url.as_deref().unwrap_or(PLACEHOLDER)
    }
}

impl TableRow for CarRow {
    fn cell_text(&self, column: usize) -> String {
        match column {
            1 => self.car_make.clone(),
            2 => self.car_model.clone(),
            3 => self.car_name.clone(),
            4 => self.hp.clone(),
            5 => self.weight.clone(),
            6 => self.headlights.to_string(),
            7 => self.active.to_string(),
            8 => self.price.clone(),
            9 => self.link_text().to_string(),
            _ => String::new(),
        }
    }

    fn column_count(&self) -> usize {
        10
    }
}

/// Flattens the roster into rows. Numeric ids come first in numeric order,
/// then any other ids in string order.
pub fn car_rows(response: &CarsResponse) -> Vec<CarRow> {
    let mut entries: Vec<(&String, &CarRecord)> = response.cars.iter().collect();
    entries.sort_by_key(|(id, _)| match id.parse::<u64>() {
        Ok(number) => (0, number, String::new()),
        Err(_) => (1, 0, (*id).clone()),
    });
    entries
        .into_iter()
        .map(|(id, record)| CarRow::from_record(id, record))
        .collect()
}

fn or_placeholder(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn mark(flag: bool) -> &'static str {
    if flag {
        CHECK_MARK
    } else {
        CROSS_MARK
    }
}
