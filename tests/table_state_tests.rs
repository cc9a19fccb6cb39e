use std::cmp::Ordering;

use seriesgrid::state::table_state::{self, SortKey, SortOrder, TableRow, TableView};

#[derive(Clone, Debug, PartialEq)]
struct TextRow(Vec<&'static str>);

impl TableRow for TextRow {
    fn cell_text(&self, column: usize) -> String {
        self.0.get(column).map(|s| s.to_string()).unwrap_or_default()
    }

    fn column_count(&self) -> usize {
        self.0.len()
    }
}

fn view(rows: &[&[&'static str]]) -> TableView<TextRow> {
    TableView::new(
        vec!["name".to_string(), "value".to_string()],
        rows.iter().map(|cells| TextRow(cells.to_vec())).collect(),
    )
}

fn column(view: &TableView<TextRow>, index: usize) -> Vec<String> {
    view.rows().iter().map(|row| row.cell_text(index)).collect()
}

#[test]
fn test_numeric_column_sorts_by_value() {
    let mut v = view(&[&["a", "10"], &["b", "2"], &["c", "33"]]);
    assert!(v.sort_by_column_toggle(1));
    assert_eq!(column(&v, 1), vec!["2", "10", "33"]);
}

#[test]
fn test_decimal_comma_is_a_decimal_point() {
    assert_eq!(SortKey::from_cell("10,5"), SortKey::Number(10.5));
    let mut v = view(&[&["a", "10,7"], &["b", "10,5"], &["c", "9"]]);
    v.sort_by_column_toggle(1);
    assert_eq!(column(&v, 1), vec!["9", "10,5", "10,7"]);
}

#[test]
fn test_unit_suffix_still_sorts_numerically() {
    let mut v = view(&[&["a", "600 HP"], &["b", "95 HP"], &["c", "180 HP"]]);
    v.sort_by_column_toggle(1);
    assert_eq!(column(&v, 1), vec!["95 HP", "180 HP", "600 HP"]);
}

#[test]
fn test_text_sort_is_natural_and_case_insensitive() {
    let mut v = view(&[&["Row10", ""], &["row2", ""], &["Row1", ""], &["Älpha", ""]]);
    v.sort_by_column_toggle(0);
    assert_eq!(column(&v, 0), vec!["Älpha", "Row1", "row2", "Row10"]);
}

#[test]
fn test_cells_are_trimmed() {
    assert_eq!(table_state::compare_cells("  Spa ", "Spa"), Ordering::Equal);
    assert_eq!(SortKey::from_cell(" 42 "), SortKey::Number(42.0));
}

#[test]
fn test_toggle_same_column_reverses() {
    let mut v = view(&[&["a", "1"], &["b", "3"], &["c", "2"]]);
    v.sort_by_column_toggle(1);
    assert_eq!(v.sort_spec().map(|s| s.order), Some(SortOrder::Asc));
    v.sort_by_column_toggle(1);
    assert_eq!(v.sort_spec().map(|s| s.order), Some(SortOrder::Desc));
    assert_eq!(column(&v, 0), vec!["b", "c", "a"]);
}

#[test]
fn test_other_column_resets_to_ascending() {
    let mut v = view(&[&["b", "1"], &["a", "2"]]);
    v.sort_by_column_toggle(1);
    v.sort_by_column_toggle(1);
    v.sort_by_column_toggle(0);
    let spec = v.sort_spec().unwrap();
    assert_eq!(spec.column, 0);
    assert_eq!(spec.order, SortOrder::Asc);
    assert_eq!(column(&v, 0), vec!["a", "b"]);
}

#[test]
fn test_sorting_twice_same_direction_is_idempotent() {
    let mut v = view(&[&["x", "Monza"], &["y", "-"], &["z", "Spa"], &["w", "-"]]);
    v.sort_by_column_toggle(1);
    let first = v.rows().to_vec();
    v.sort_by_column_toggle(1);
    v.sort_by_column_toggle(1);
    assert_eq!(v.rows(), first.as_slice());
}

#[test]
fn test_descending_keeps_ties_in_place() {
    let mut v = view(&[&["first", "-"], &["mid", "Spa"], &["second", "-"]]);
    v.sort_by_column_toggle(1);
    v.sort_by_column_toggle(1);
    assert_eq!(column(&v, 0), vec!["mid", "first", "second"]);
}

#[test]
fn test_placeholder_sorts_ahead_of_numbers() {
    let mut v = view(&[&["a", "- Kg"], &["b", "1200 Kg"], &["c", "900 Kg"]]);
    v.sort_by_column_toggle(1);
    assert_eq!(column(&v, 1), vec!["- Kg", "900 Kg", "1200 Kg"]);

    let mut weeks = view(&[&["a", "5"], &["b", "-"]]);
    weeks.sort_by_column_toggle(1);
    assert_eq!(column(&weeks, 1), vec!["-", "5"]);
    weeks.sort_by_column_toggle(1);
    assert_eq!(column(&weeks, 1), vec!["5", "-"]);
}

#[test]
fn test_words_sort_after_numbers() {
    let mut v = view(&[&["a", "TBD"], &["b", "12"], &["c", "-"], &["d", "3"]]);
    v.sort_by_column_toggle(1);
    assert_eq!(column(&v, 1), vec!["-", "3", "12", "TBD"]);
    assert_eq!(table_state::compare_cells("7", "abc"), Ordering::Less);
    assert_eq!(table_state::compare_cells("-", "7"), Ordering::Less);
}

#[test]
fn test_unknown_column_is_rejected() {
    let mut v = view(&[&["a", "1"]]);
    assert!(!v.sort_by_column_toggle(5));
    assert!(v.sort_spec().is_none());
}

#[test]
fn test_filter_hides_without_removing() {
    let mut v = view(&[&["Daytona", "1"], &["Sebring", "2"], &["daytona road", "3"]]);
    v.set_filter("DAYTONA".to_string());
    assert_eq!(v.visible_row_indices(), vec![0, 2]);
    assert_eq!(v.rows().len(), 3);

    v.set_filter(String::new());
    assert_eq!(v.visible_row_indices(), vec![0, 1, 2]);
}

#[test]
fn test_filter_survives_sort() {
    let mut v = view(&[&["Daytona", "3"], &["Sebring", "2"], &["Daytona Road", "1"]]);
    v.set_filter("daytona".to_string());
    v.sort_by_column_toggle(1);
    let visible: Vec<String> = v
        .visible_row_indices()
        .into_iter()
        .map(|idx| v.rows()[idx].cell_text(0))
        .collect();
    assert_eq!(visible, vec!["Daytona Road", "Daytona"]);
}

#[test]
fn test_visible_text_joins_cells() {
    let row = TextRow(vec!["a", "b"]);
    assert_eq!(row.visible_text(), "a\tb");
}
