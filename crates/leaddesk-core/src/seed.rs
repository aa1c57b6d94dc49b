//! Lead seed data.
//!
//! The lead set is a fixture, not domain logic: deployments either use the
//! built-in list or point `LEADDESK_SEED_PATH` at a JSON array with the same
//! wire shape. Nothing mutates the collection after startup.

use std::path::{Path, PathBuf};

use crate::lead::{Lead, Tab};

/// Seed loading failures.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file was not a JSON array of leads.
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a lead collection from a JSON file.
///
/// The file holds a JSON array of leads in wire form (camelCase fields,
/// tab labels like "New Leads").
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Vec<Lead>, SeedError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn lead(id: u32, name: &str, location: &str, assigned_on: i64, lead_type: &str, tab: Tab) -> Lead {
    Lead {
        id,
        name: name.to_string(),
        location: location.to_string(),
        assigned_on,
        lead_type: lead_type.to_string(),
        tab,
    }
}

/// The built-in 33-record lead fixture.
pub fn builtin() -> Vec<Lead> {
    use Tab::{ActiveLeads, AllLeads, NewLeads};

    vec![
        lead(1, "Srinivas Ram", "Hyderabad", 1705410720, "Hot", NewLeads),
        lead(2, "Janani Ramesh", "Vizag", 1705746720, "Medium", ActiveLeads),
        lead(3, "Seema Rao", "Vijayawada", 1706082720, "Cold", AllLeads),
        lead(4, "Madhu Kumar", "Bangalore", 1706418720, "Hot", NewLeads),
        lead(5, "Ravi Charan", "Gujarat", 1706754720, "Medium", ActiveLeads),
        lead(6, "Rajesh Kumar", "Chennai", 1707090720, "Cold", AllLeads),
        lead(7, "Srinivas Ram", "Hyderabad", 1707426720, "Hot", NewLeads),
        lead(8, "Janani Ramesh", "Vizag", 1707762720, "Medium", ActiveLeads),
        lead(9, "Seema Rao", "Vijayawada", 1708098720, "Cold", AllLeads),
        lead(10, "Madhu Kumar", "Bangalore", 1708434720, "Hot", NewLeads),
        lead(11, "Ravi Charan", "Gujarat", 1708770720, "Medium", ActiveLeads),
        lead(12, "Rajesh Kumar", "Chennai", 1709106720, "Cold", AllLeads),
        lead(13, "Srinivas Ram", "Hyderabad", 1709442720, "Hot", NewLeads),
        lead(14, "Janani Ramesh", "Vizag", 1709778720, "Medium", ActiveLeads),
        lead(15, "Seema Rao", "Vijayawada", 1710114720, "Cold", AllLeads),
        lead(16, "Madhu Kumar", "Bangalore", 1710450720, "Hot", NewLeads),
        lead(17, "Ravi Charan", "Gujarat", 1710786720, "Medium", ActiveLeads),
        lead(18, "Rajesh Kumar", "Chennai", 1711122720, "Cold", AllLeads),
        lead(19, "Srinivas Ram", "Hyderabad", 1711458720, "Hot", NewLeads),
        lead(20, "Janani Ramesh", "Vizag", 1711794720, "Medium", ActiveLeads),
        lead(21, "Seema Rao", "Vijayawada", 1712130720, "Cold", AllLeads),
        lead(22, "Madhu Kumar", "Bangalore", 1712466720, "Hot", NewLeads),
        lead(23, "Ravi Charan", "Gujarat", 1712802720, "Medium", ActiveLeads),
        lead(24, "Rajesh Kumar", "Chennai", 1713138720, "Cold", AllLeads),
        lead(25, "Srinivas Ram", "Hyderabad", 1713474720, "Hot", NewLeads),
        lead(26, "Janani Ramesh", "Vizag", 1735740720, "Medium", ActiveLeads),
        lead(27, "Seema Rao", "Vijayawada", 1736076720, "Cold", AllLeads),
        lead(28, "Madhu Kumar", "Bangalore", 1736412720, "Hot", NewLeads),
        lead(29, "Ravi Charan", "Gujarat", 1736748720, "Medium", ActiveLeads),
        lead(30, "Rajesh Kumar", "Chennai", 1737084720, "Cold", AllLeads),
        lead(31, "Srinivas Ram", "Hyderabad", 1737420720, "Hot", NewLeads),
        lead(32, "Janani Ramesh", "Vizag", 1737756720, "Medium", ActiveLeads),
        lead(33, "Seema Rao", "Vijayawada", 1738092720, "Cold", AllLeads),
    ]
}
