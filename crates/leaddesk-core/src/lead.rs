//! The lead record and its workflow bucket.
//!
//! Wire field names are camelCase (`assignedOn`, `leadType`) to match the
//! payloads the front end already consumes.

use serde::{Deserialize, Serialize};

/// A potential customer record with assignment metadata.
///
/// Leads are immutable: the set is seeded at startup and never changes, so
/// queries can share the collection without synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Unique positive identifier.
    pub id: u32,
    /// Free-text contact name.
    pub name: String,
    /// Free-text location.
    pub location: String,
    /// Unix timestamp (seconds) when the lead was assigned.
    pub assigned_on: i64,
    /// Priority/temperature label ("Hot", "Medium", "Cold" observed).
    /// Open set, so this stays a plain string.
    pub lead_type: String,
    /// Workflow bucket the lead sits in.
    pub tab: Tab,
}

/// Coarse bucket label grouping leads by workflow stage.
///
/// Closed set. "All Leads" doubles as the filter sentinel that matches every
/// record; the comparison lives in [`crate::query`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    #[serde(rename = "New Leads")]
    NewLeads,
    #[serde(rename = "Active Leads")]
    ActiveLeads,
    #[serde(rename = "All Leads")]
    AllLeads,
}

impl Tab {
    /// The label as it appears on the wire and in `activeTab` parameters.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::NewLeads => "New Leads",
            Tab::ActiveLeads => "Active Leads",
            Tab::AllLeads => "All Leads",
        }
    }
}
