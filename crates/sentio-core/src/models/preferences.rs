use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Free-form, non-scored preference selections collected at the end of
/// the flow, grouped by topic (e.g. support format, availability).
/// The engine stores and forwards them verbatim; option catalogs are a
/// host concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PreferenceSelections {
    #[serde(default)]
    pub groups: BTreeMap<String, Vec<String>>,
}

impl PreferenceSelections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, group: impl Into<String>, option: impl Into<String>) {
        self.groups.entry(group.into()).or_default().push(option.into());
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(|options| options.is_empty())
    }
}
