use std::cmp::Ordering;

use crate::state::collation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: usize,
    pub order: SortOrder,
}

/// A rendered row as the sorter and the filter see it: plain cell text.
pub trait TableRow {
    /// Visible text of the cell at `column`, before trimming.
    fn cell_text(&self, column: usize) -> String;

    fn column_count(&self) -> usize;

    /// Everything the row shows, cells separated by tabs.
    fn visible_text(&self) -> String {
        (0..self.column_count())
            .map(|column| self.cell_text(column))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// Rows of one rendered table plus its sort and filter state. The state
/// lives exactly as long as the table: rebuilding the table starts over.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView<R> {
    columns: Vec<String>,
    rows: Vec<R>,
    sort_spec: Option<SortSpec>,
    filter_query: String,
}

impl<R> Default for TableView<R> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            sort_spec: None,
            filter_query: String::new(),
        }
    }
}

impl<R: TableRow> TableView<R> {
    pub fn new(columns: Vec<String>, rows: Vec<R>) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort_spec.as_ref()
    }

    pub fn filter_query(&self) -> &str {
        &self.filter_query
    }

    /// Sorts by `column`, ascending on first click and flipping on each
    /// repeated click of the same column. Returns false for an unknown
    /// column.
    pub fn sort_by_column_toggle(&mut self, column: usize) -> bool {
        if column >= self.columns.len() {
            return false;
        }

        let order = match self.sort_spec.as_ref() {
            Some(spec) if spec.column == column => toggle_sort_order(spec.order),
            _ => SortOrder::Asc,
        };

        let mut keyed: Vec<(SortKey, R)> = self
            .rows
            .drain(..)
            .map(|row| (SortKey::from_cell(&row.cell_text(column)), row))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| match order {
            SortOrder::Asc => a.compare(b),
            SortOrder::Desc => b.compare(a),
        });
        self.rows = keyed.into_iter().map(|(_, row)| row).collect();
        self.sort_spec = Some(SortSpec { column, order });
        true
    }

    pub fn set_filter(&mut self, query: String) {
        self.filter_query = query;
    }

    pub fn row_matches_filter(&self, row: &R) -> bool {
        matches_filter(&row.visible_text(), &self.filter_query)
    }

    pub fn visible_row_indices(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| self.row_matches_filter(row).then_some(idx))
            .collect()
    }
}

/// Case-insensitive substring match shared by every live filter box.
pub fn matches_filter(visible_text: &str, query: &str) -> bool {
    query.is_empty() || visible_text.to_lowercase().contains(&query.to_lowercase())
}

/// Sort key of one cell, typed per sort invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    pub fn from_cell(text: &str) -> Self {
        let text = text.trim();
        match collation::parse_leading_number(text) {
            Some(number) => Self::Number(number),
            None => Self::Text(text.to_string()),
        }
    }

    /// Two numbers compare numerically and two texts compare naturally.
    /// A number against text falls back to where the text sorts relative to a
    /// leading digit: `"-"` and blanks come first, words come after.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Text(a), Self::Text(b)) => text_rank(a)
                .cmp(&text_rank(b))
                .then_with(|| collation::compare_natural(a, b)),
            (Self::Number(_), Self::Text(text)) => TextRank::Number.cmp(&text_rank(text)),
            (Self::Text(text), Self::Number(_)) => text_rank(text).cmp(&TextRank::Number),
        }
    }
}

/// Bands of a mixed column. Ordering within a band is natural; across bands
/// it is fixed, so the comparator stays total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum TextRank {
    BelowDigits,
    Number,
    AboveDigits,
}

fn text_rank(text: &str) -> TextRank {
    match collation::fold(text).chars().next() {
        Some(first) if first >= '0' => TextRank::AboveDigits,
        _ => TextRank::BelowDigits,
    }
}

/// Compares two cell texts the way a column sort does.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    SortKey::from_cell(a).compare(&SortKey::from_cell(b))
}

fn toggle_sort_order(order: SortOrder) -> SortOrder {
    match order {
        SortOrder::Asc => SortOrder::Desc,
        SortOrder::Desc => SortOrder::Asc,
    }
}
