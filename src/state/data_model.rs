use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Rendered in place of any optional field the backend left out.
pub const PLACEHOLDER: &str = "-";

pub const CAR_IMAGE_BASE: &str = "https://images-static.iracing.com";

/// One entry of `/get_series_list`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub serie_name: String,
    #[serde(default)]
    pub licence_group: String,
    #[serde(default)]
    pub category: String,
}

/// Response of `/get_series_table`.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct SeriesTable {
    #[serde(default)]
    pub all_dates: Vec<String>,
    #[serde(default)]
    pub series: Vec<Series>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Series {
    pub serie_name: String,
    #[serde(default)]
    pub licence_group: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_display")]
    pub race_week: Option<String>,
    #[serde(default)]
    pub cars_ids: Vec<Car>,
    #[serde(default)]
    pub schedules: Vec<ScheduleEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Car {
    pub car_name: String,
    #[serde(default)]
    pub car_class: String,
    #[serde(default, deserialize_with = "string_bool")]
    pub car_owned: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ScheduleEntry {
    pub start_date_week: String,
    #[serde(deserialize_with = "required_display")]
    pub track_id: String,
    #[serde(default)]
    pub track_id_color: Option<String>,
    #[serde(default, deserialize_with = "string_bool")]
    pub track_owned: bool,
}

/// Response of `/get_all_cars`. Keys are backend car ids.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct CarsResponse {
    #[serde(default)]
    pub cars: BTreeMap<String, CarRecord>,
}

#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct CarRecord {
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub small_image: Option<String>,
    #[serde(default)]
    pub car_make: Option<String>,
    #[serde(default)]
    pub car_model: Option<String>,
    #[serde(default)]
    pub car_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_display")]
    pub hp: Option<String>,
    #[serde(default, deserialize_with = "lenient_display")]
    pub car_weight: Option<String>,
    #[serde(default, deserialize_with = "string_bool")]
    pub has_headlights: bool,
    #[serde(default, deserialize_with = "string_bool")]
    pub retired: bool,
    #[serde(default, deserialize_with = "lenient_display")]
    pub price_display: Option<String>,
    #[serde(default)]
    pub site_url: Option<String>,
}

impl CarRecord {
    pub fn image_url(&self) -> String {
        format!(
            "{CAR_IMAGE_BASE}/{}/{}",
            self.folder.as_deref().unwrap_or_default(),
            self.small_image.as_deref().unwrap_or_default()
        )
    }
}

/// Formats a JSON scalar the way it shows up in a table cell. `null` has no
/// display form.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Truthiness of the backend's string-typed booleans. Only `"true"` (or a
/// real JSON `true`) counts.
pub fn parse_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}

fn string_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_flag(&value))
}

fn lenient_display<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(display_value(&value))
}

fn required_display<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(display_value(&value).unwrap_or_else(|| PLACEHOLDER.to_string()))
}
