//! Cleanup run report
//!
//! Per-item delete outcomes plus run totals, serialized as pretty JSON so
//! the file is readable without tooling.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

/// Outcome of one item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    pub item_id: String,
    /// Final HTTP status of the delete, absent on transport failure.
    pub delete_status: Option<u16>,
    pub deleted: bool,
    /// Post-delete existence check: `true` means the item is gone (404).
    /// Absent when the delete itself failed or the check errored.
    pub verified_gone: Option<bool>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanupReport {
    pub collection: String,
    pub total: usize,
    pub deleted: usize,
    pub failed: usize,
    pub items: Vec<ItemReport>,
}

impl CleanupReport {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            total: 0,
            deleted: 0,
            failed: 0,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ItemReport) {
        self.total += 1;
        if item.deleted {
            self.deleted += 1;
        } else {
            self.failed += 1;
        }
        self.items.push(item);
    }

    pub fn to_pretty_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serializing report")
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let json = self.to_pretty_json()?;
        fs::write(path, json).with_context(|| format!("writing report to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_item(id: &str) -> ItemReport {
        ItemReport {
            item_id: id.to_string(),
            delete_status: Some(204),
            deleted: true,
            verified_gone: Some(true),
            error: None,
        }
    }

    #[test]
    fn counters_track_pushed_items() {
        let mut report = CleanupReport::new("col");
        report.push(ok_item("a"));
        report.push(ItemReport {
            item_id: "b".to_string(),
            delete_status: Some(404),
            deleted: false,
            verified_gone: None,
            error: None,
        });

        assert_eq!(report.total, 2);
        assert_eq!(report.deleted, 1);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn report_serializes_as_pretty_json() {
        let mut report = CleanupReport::new("col");
        report.push(ok_item("a"));

        let json = report.to_pretty_json().unwrap();
        assert!(json.contains("\n"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["collection"], "col");
        assert_eq!(value["items"][0]["item_id"], "a");
        assert_eq!(value["items"][0]["verified_gone"], true);
    }
}
