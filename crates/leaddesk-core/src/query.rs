//! The LeadQuery filter/paginate pass.
//!
//! [`query`] is a pure function over an immutable lead snapshot: each active
//! filter is applied as a sequential narrowing pass, then the result is
//! paginated. The predicates are independent and commutative, so the fixed
//! application order (search, leadType, location, activeTab, date range) only
//! matters for performance.
//!
//! Malformed input never errors: [`LeadQuery::from_raw`] degrades bad numeric
//! values to defaults and drops half-open date ranges, mirroring the
//! input-validation-by-default-substitution policy of the HTTP surface.

use serde::{Deserialize, Serialize};

use crate::lead::{Lead, Tab};

/// Default page number when the parameter is absent or malformed.
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size when the parameter is absent or malformed.
pub const DEFAULT_LIMIT: u32 = 10;

/// Query-string values exactly as received on the wire.
///
/// Everything is an optional string; numeric degradation happens in
/// [`LeadQuery::from_raw`], not during deserialization, so a malformed
/// `page=abc` can never fail extraction with a 400.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLeadQuery {
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub lead_type: Option<String>,
    pub location: Option<String>,
    pub active_tab: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Decoded query parameters with the degradation policy already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadQuery {
    /// Case-insensitive substring match on `name`.
    pub search: Option<String>,
    /// Exact match on `leadType`.
    pub lead_type: Option<String>,
    /// Case-insensitive substring match on `location`.
    pub location: Option<String>,
    /// Exact match on the tab label. The sentinel "All Leads" matches every
    /// record; an unrecognized label matches none.
    pub active_tab: Option<String>,
    /// Inclusive `(start, end)` window over `assignedOn`. Present only when
    /// both bounds were supplied and numeric.
    pub date_range: Option<(i64, i64)>,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl Default for LeadQuery {
    fn default() -> Self {
        LeadQuery {
            search: None,
            lead_type: None,
            location: None,
            active_tab: None,
            date_range: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl LeadQuery {
    /// Decodes raw wire values, substituting defaults for anything malformed.
    ///
    /// - Empty strings disable the corresponding filter (the original
    ///   front end sends `search=` for a cleared search box).
    /// - `page`/`limit` fall back to 1/10 unless they parse as a positive
    ///   integer.
    /// - The date filter activates only when BOTH bounds parse; a single
    ///   bound never filters.
    pub fn from_raw(raw: &RawLeadQuery) -> Self {
        let date_range = match (trimmed(&raw.start_date), trimmed(&raw.end_date)) {
            (Some(start), Some(end)) => {
                start.parse::<i64>().ok().zip(end.parse::<i64>().ok())
            }
            _ => None,
        };

        LeadQuery {
            search: trimmed(&raw.search).map(str::to_owned),
            lead_type: trimmed(&raw.lead_type).map(str::to_owned),
            location: trimmed(&raw.location).map(str::to_owned),
            active_tab: trimmed(&raw.active_tab).map(str::to_owned),
            date_range,
            page: positive_or(&raw.page, DEFAULT_PAGE),
            limit: positive_or(&raw.limit, DEFAULT_LIMIT),
        }
    }
}

/// Treats absent and empty values the same, like the original's truthiness
/// guards did.
fn trimmed(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn positive_or(value: &Option<String>, default: u32) -> u32 {
    value
        .as_deref()
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(default)
}

/// Pagination metadata returned alongside every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Size of the filtered set before pagination.
    pub total_records: usize,
    /// The page that was requested (1-based), even when out of range.
    pub current_page: u32,
    /// `ceil(total_records / limit)`; 0 for an empty result set.
    pub total_pages: usize,
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadPage {
    pub items: Vec<Lead>,
    pub meta: PageMeta,
}

/// Filters and paginates a lead snapshot.
///
/// Out-of-range pages are not an error: `items` comes back empty while
/// `meta` still reports the filtered totals.
pub fn query(leads: &[Lead], params: &LeadQuery) -> LeadPage {
    let mut filtered: Vec<&Lead> = leads.iter().collect();

    if let Some(search) = &params.search {
        let needle = search.to_lowercase();
        filtered.retain(|lead| lead.name.to_lowercase().contains(&needle));
    }

    if let Some(lead_type) = &params.lead_type {
        filtered.retain(|lead| lead.lead_type == *lead_type);
    }

    if let Some(location) = &params.location {
        let needle = location.to_lowercase();
        filtered.retain(|lead| lead.location.to_lowercase().contains(&needle));
    }

    if let Some(tab) = &params.active_tab {
        if tab != Tab::AllLeads.label() {
            filtered.retain(|lead| lead.tab.label() == tab);
        }
    }

    if let Some((start, end)) = params.date_range {
        filtered.retain(|lead| start <= lead.assigned_on && lead.assigned_on <= end);
    }

    // `from_raw` never produces 0, but `LeadQuery` is constructible by hand.
    let limit = params.limit.max(1) as usize;
    let page = params.page.max(1);

    let total_records = filtered.len();
    let total_pages = total_records.div_ceil(limit);
    let start = (page as usize - 1).saturating_mul(limit);

    let items = filtered
        .into_iter()
        .skip(start)
        .take(limit)
        .cloned()
        .collect();

    LeadPage {
        items,
        meta: PageMeta {
            total_records,
            current_page: page,
            total_pages,
        },
    }
}
