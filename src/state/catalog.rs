use crate::state::collation;
use crate::state::data_model::CatalogEntry;
use crate::state::selection::SelectionSet;

/// One checkbox line of the series picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogRow {
    pub entry: CatalogEntry,
    pub checked: bool,
}

impl CatalogRow {
    pub fn label(&self, licence_label: &str, category_label: &str) -> String {
        format!(
            "{licence_label}: {} - {category_label}: {} - {}",
            self.entry.licence_group, self.entry.category, self.entry.serie_name
        )
    }
}

/// Orders the catalog by licence group, then category, then series name.
/// The sort is stable, so entries equal on all three keys keep fetch order.
pub fn sort_catalog(entries: &mut [CatalogEntry]) {
    entries.sort_by(|a, b| {
        collation::compare_base(&a.licence_group, &b.licence_group)
            .then_with(|| collation::compare_base(&a.category, &b.category))
            .then_with(|| collation::compare_base(&a.serie_name, &b.serie_name))
    });
}

/// Pairs each entry of an already sorted catalog with its checkbox state.
pub fn catalog_rows(entries: &[CatalogEntry], selection: &SelectionSet) -> Vec<CatalogRow> {
    entries
        .iter()
        .map(|entry| CatalogRow {
            checked: selection.contains(&entry.serie_name),
            entry: entry.clone(),
        })
        .collect()
}
