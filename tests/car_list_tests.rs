use serde_json::json;

use seriesgrid::state::car_list::{self, CHECK_MARK, CROSS_MARK};
use seriesgrid::state::data_model::CarsResponse;
use seriesgrid::state::table_state::{TableRow, TableView};

fn response() -> CarsResponse {
    serde_json::from_value(json!({
        "cars": {
            "10": {
                "folder": "f10", "small_image": "s10.jpg",
                "car_make": "Porsche", "car_model": "911 GT3 R", "car_name": "Porsche 911 GT3 R",
                "hp": 557, "car_weight": 1320, "has_headlights": true, "retired": false,
                "price_display": "$11.95", "site_url": "https://example.com/porsche"
            },
            "2": {
                "folder": "f2", "small_image": "s2.jpg",
                "car_name": "Legends Ford '34 Coupe",
                "hp": 125, "has_headlights": false, "retired": true
            }
        }
    }))
    .unwrap()
}

#[test]
fn test_rows_follow_numeric_id_order() {
    let rows = car_list::car_rows(&response());
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "10"]);
}

#[test]
fn test_missing_fields_render_placeholder() {
    let rows = car_list::car_rows(&response());
    let legends = &rows[0];
    assert_eq!(legends.car_make, "-");
    assert_eq!(legends.car_model, "-");
    assert_eq!(legends.weight, "- Kg");
    assert_eq!(legends.price, "-");
    assert_eq!(legends.link_text(), "-");
    assert_eq!(legends.headlights, CROSS_MARK);
    assert_eq!(legends.active, CROSS_MARK);
}

#[test]
fn test_full_record_formatting() {
    let rows = car_list::car_rows(&response());
    let porsche = &rows[1];
    assert_eq!(porsche.hp, "557 HP");
    assert_eq!(porsche.weight, "1320 Kg");
    assert_eq!(porsche.headlights, CHECK_MARK);
    assert_eq!(porsche.active, CHECK_MARK);
    assert_eq!(porsche.image_url, "https://images-static.iracing.com/f10/s10.jpg");
    assert_eq!(porsche.cell_text(9), "https://example.com/porsche");
}

#[test]
fn test_car_table_sorts_and_filters() {
    let columns = (0..10).map(|i| format!("c{i}")).collect();
    let mut view = TableView::new(columns, car_list::car_rows(&response()));

    view.sort_by_column_toggle(4);
    assert_eq!(view.rows()[0].hp, "125 HP");
    view.sort_by_column_toggle(4);
    assert_eq!(view.rows()[0].hp, "557 HP");

    view.set_filter("legends".to_string());
    assert_eq!(view.visible_row_indices(), vec![1]);
}
