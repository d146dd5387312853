//! Listing helpers shared by `zooconnect list` and the web UI.

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::core::filter::FilterOptions;
use crate::core::query::{QueryBinding, bind_query};
use crate::core::summary::ResultSummary;
use crate::experience::Experience;

/// One evaluated listing: the applied options and the matching records.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<'a> {
    pub options: FilterOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub summary: ResultSummary,
    pub experiences: Vec<&'a Experience>,
}

/// Run the filter against the full catalog.
pub fn list(catalog: &Catalog, options: FilterOptions, search: Option<String>) -> Listing<'_> {
    let experiences = catalog.filter(&options);
    let summary = ResultSummary::of(experiences.iter().copied());
    debug!(
        matched = summary.total,
        catalog = catalog.len(),
        "filter applied"
    );
    Listing {
        options,
        search,
        summary,
        experiences,
    }
}

/// Bind navigation parameters, then list.
pub fn list_from_query<'a>(catalog: &'a Catalog, query: &str) -> Listing<'a> {
    let QueryBinding {
        options, search, ..
    } = bind_query(query);
    list(catalog, options, search)
}
