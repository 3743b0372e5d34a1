//! Product catalog browsing: incremental paginated listing and faceted
//! filtering of category subtypes.

pub mod browser;
pub mod criteria;
pub mod facets;

pub use browser::{
    CatalogBrowser, CatalogView, CommitOutcome, DEFAULT_PAGE_SIZE, FetchTicket, LoadState,
    PageCursor, PrefetchTrigger,
};
pub use criteria::{FilterCriteria, is_meaningful_search};
pub use facets::FacetSelection;
