use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::io::storage::KeyValueStore;

/// Storage key holding the JSON array of selected series names.
pub const SELECTION_KEY: &str = "selectedSeries";

/// Series names the user chose to show in the schedule grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Parses the persisted form. Anything other than a JSON array of
    /// strings yields `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        let names: Vec<String> = serde_json::from_str(raw).ok()?;
        Some(names.into_iter().collect())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.names).unwrap_or_else(|_| "[]".to_string())
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Owns the selection and writes it through to durable storage.
#[derive(Clone, Debug)]
pub struct SelectionStore<S> {
    storage: S,
    selection: SelectionSet,
}

impl<S: KeyValueStore> SelectionStore<S> {
    /// Reads the persisted selection. Absent or malformed data gives an
    /// empty selection.
    pub fn load(storage: S) -> Self {
        let selection = match storage.get(SELECTION_KEY) {
            None => SelectionSet::new(),
            Some(raw) => SelectionSet::from_json(&raw).unwrap_or_else(|| {
                warn!("discarding malformed {SELECTION_KEY} value");
                SelectionSet::new()
            }),
        };
        debug!("loaded {} selected series", selection.len());
        Self { storage, selection }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn contains(&self, name: &str) -> bool {
        self.selection.contains(name)
    }

    /// Adds or removes `name`, then persists the full set. Returns whether
    /// membership changed.
    pub fn toggle(&mut self, name: &str, included: bool) -> bool {
        let changed = if included {
            self.selection.names.insert(name.to_string())
        } else {
            self.selection.names.remove(name)
        };
        self.persist();
        changed
    }

    /// Empties the selection and persists it.
    pub fn clear(&mut self) {
        self.selection.names.clear();
        self.persist();
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        if let Err(err) = self.storage.set(SELECTION_KEY, self.selection.to_json()) {
            warn!("failed to persist {SELECTION_KEY}: {err}");
        }
    }
}
