//! Incremental catalog browser.
//!
//! Accumulates server-paginated product search results for one set of
//! [`FilterCriteria`]. The browser never performs I/O itself: every
//! operation that needs data hands out a [`FetchTicket`], the caller runs the
//! request and passes the result back to [`CatalogBrowser::commit`]. Each
//! ticket carries the serial of the dispatch that produced it and only the
//! most recent dispatch may commit, so responses that arrive after the
//! criteria (or page) moved on are dropped without touching state.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::criteria::FilterCriteria;
use crate::domain::category::CategoryCatalog;
use crate::domain::product::{Product, ProductPage};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ProductReader, ProductSearchQuery};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageCursor {
    pub page_number: usize,
    pub page_size: usize,
}

impl PageCursor {
    pub fn first(page_size: usize) -> Self {
        Self {
            page_number: 1,
            page_size: page_size.max(1),
        }
    }

    /// Whether results beyond the current page exist for `total` matches.
    pub fn has_more(&self, total: usize) -> bool {
        self.page_number.saturating_mul(self.page_size) < total
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum LoadState {
    Idle,
    Loading,
    Error(String),
}

/// A fetch the caller must perform on behalf of the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    serial: u64,
    page: usize,
    query: ProductSearchQuery,
}

impl FetchTicket {
    pub fn query(&self) -> &ProductSearchQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }
}

/// What [`CatalogBrowser::commit`] did with a response.
#[derive(Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// First page of a criteria session replaced the item list.
    Replaced(usize),
    /// A later page was appended.
    Appended(usize),
    /// The fetch failed; the browser is in [`LoadState::Error`].
    Failed,
    /// The ticket was superseded; nothing changed.
    Discarded,
}

/// Read-only snapshot handed to the rendering layer.
#[derive(Debug, Serialize)]
pub struct CatalogView<'a> {
    pub items: &'a [Product],
    pub total_count: usize,
    pub has_more: bool,
    pub load_state: &'a LoadState,
    pub page: usize,
    pub criteria: Option<&'a FilterCriteria>,
}

/// Gate consulted by the end-of-list sentinel before it calls
/// [`CatalogBrowser::request_more`].
pub struct PrefetchTrigger;

impl PrefetchTrigger {
    pub fn should_fire(view: &CatalogView<'_>) -> bool {
        Self::armed(view.has_more, view.load_state)
    }

    fn armed(has_more: bool, load_state: &LoadState) -> bool {
        has_more && *load_state == LoadState::Idle
    }
}

pub struct CatalogBrowser {
    categories: Arc<CategoryCatalog>,
    page_size: usize,
    criteria: Option<FilterCriteria>,
    query: Option<ProductSearchQuery>,
    cursor: PageCursor,
    items: Vec<Product>,
    total_count: usize,
    has_more: bool,
    load_state: LoadState,
    next_serial: u64,
    in_flight: Option<u64>,
}

impl CatalogBrowser {
    pub fn new(categories: Arc<CategoryCatalog>, page_size: usize) -> Self {
        Self {
            categories,
            page_size,
            criteria: None,
            query: None,
            cursor: PageCursor::first(page_size),
            items: Vec::new(),
            total_count: 0,
            has_more: false,
            load_state: LoadState::Idle,
            next_serial: 0,
            in_flight: None,
        }
    }

    /// Switches to new criteria, clearing accumulated results.
    ///
    /// No-op when `criteria` equals the active criteria. Returns the page-1
    /// ticket, or `None` when the criteria do not resolve to a plant.
    pub fn set_filters(&mut self, criteria: FilterCriteria) -> Option<FetchTicket> {
        if self.criteria.as_ref() == Some(&criteria) {
            return None;
        }

        self.items.clear();
        self.total_count = 0;
        self.cursor = PageCursor::first(self.page_size);
        self.query = criteria.to_query(&self.categories);
        self.criteria = Some(criteria);
        // Any fetch still running belongs to the previous criteria.
        self.in_flight = None;

        if self.query.is_none() {
            log::debug!("Catalog criteria do not resolve to a plant; nothing to fetch");
            self.has_more = false;
            self.load_state = LoadState::Idle;
            return None;
        }

        self.has_more = true;
        self.dispatch()
    }

    /// Asks for the next page. Silently ignored unless more results exist
    /// and the browser is idle.
    pub fn request_more(&mut self) -> Option<FetchTicket> {
        if !PrefetchTrigger::armed(self.has_more, &self.load_state) || self.query.is_none() {
            return None;
        }
        self.cursor.page_number += 1;
        self.dispatch()
    }

    /// Re-issues the request for the current criteria and page after a failure.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if !matches!(self.load_state, LoadState::Error(_)) {
            return None;
        }
        self.dispatch()
    }

    /// Applies the outcome of the fetch described by `ticket`.
    pub fn commit(
        &mut self,
        ticket: &FetchTicket,
        result: RepositoryResult<ProductPage>,
    ) -> CommitOutcome {
        if self.in_flight != Some(ticket.serial) {
            log::debug!(
                "Discarding stale catalog response for page {} (request #{})",
                ticket.page,
                ticket.serial
            );
            return CommitOutcome::Discarded;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                let count = page.products.len();
                let outcome = if ticket.page == 1 {
                    self.items = page.products;
                    CommitOutcome::Replaced(count)
                } else {
                    self.items.extend(page.products);
                    CommitOutcome::Appended(count)
                };
                self.total_count = page.total;
                self.has_more = self.cursor.has_more(page.total);
                self.load_state = LoadState::Idle;
                outcome
            }
            Err(err) => {
                log::warn!("Failed to load catalog page {}: {err}", ticket.page);
                self.load_state = LoadState::Error(err.to_string());
                CommitOutcome::Failed
            }
        }
    }

    /// Performs the fetch for `ticket` through `source` and commits it.
    pub async fn load<R>(&mut self, source: &R, ticket: FetchTicket) -> CommitOutcome
    where
        R: ProductReader + ?Sized,
    {
        let result = source.search_products(ticket.query()).await;
        self.commit(&ticket, result)
    }

    pub fn view(&self) -> CatalogView<'_> {
        CatalogView {
            items: &self.items,
            total_count: self.total_count,
            has_more: self.has_more,
            load_state: &self.load_state,
            page: self.cursor.page_number,
            criteria: self.criteria.as_ref(),
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    fn dispatch(&mut self) -> Option<FetchTicket> {
        let query = self
            .query
            .clone()?
            .paginate(self.cursor.page_number, self.cursor.page_size);
        self.next_serial += 1;
        self.in_flight = Some(self.next_serial);
        self.load_state = LoadState::Loading;
        Some(FetchTicket {
            serial: self.next_serial,
            page: self.cursor.page_number,
            query,
        })
    }
}
