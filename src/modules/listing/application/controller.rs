/// Listing Controller
///
/// Owns one listing's unfiltered collection, its criteria and pagination
/// state, and the fetch lifecycle `IDLE -> LOADING -> {READY, ERROR}`.
/// Filtering and pagination are recomputed synchronously after every
/// mutation, always from the latest collection and criteria.
use super::ports::RecordSource;
use super::profile::ListingProfile;
use crate::modules::listing::domain::{Criteria, FilterContext, ListingEngine};
use crate::shared::application::{PaginatedResult, PaginationState};
use crate::shared::config::ClientConfig;
use crate::shared::domain::value_objects::Session;
use crate::shared::errors::{AppError, AppResult, ErrorDisplay};
use crate::shared::infrastructure::{Clock, SessionProvider};
use crate::shared::utils::{LogContext, TimedOperation, Validator};
use crate::{log_debug, log_info, log_warn};
use chrono_tz::Tz;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingState {
    Idle,
    Loading,
    Ready,
    Error(ErrorDisplay),
}

impl ListingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListingState::Loading)
    }

    pub fn error(&self) -> Option<&ErrorDisplay> {
        match self {
            ListingState::Error(display) => Some(display),
            _ => None,
        }
    }
}

/// What the rendering layer gets
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView<R> {
    pub state: ListingState,
    /// Current page when READY, an empty page otherwise
    pub page: PaginatedResult<R>,
    pub page_size_options: &'static [usize],
}

/// One pending fetch, detached from the controller so the UI loop can await it
pub struct FetchRequest<R> {
    generation: u64,
    listing: &'static str,
    source: Arc<dyn RecordSource<R>>,
    session: Option<Session>,
    timeout: Duration,
    cancellation: CancellationToken,
}

pub struct FetchOutcome<R> {
    generation: u64,
    pub result: AppResult<Vec<R>>,
}

impl<R: Send + 'static> FetchRequest<R> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Run the fetch under the timeout; resolves early with `Cancelled` on disposal
    pub async fn run(self) -> FetchOutcome<R> {
        let FetchRequest {
            generation,
            listing,
            source,
            session,
            timeout,
            cancellation,
        } = self;

        let endpoint = source.describe();
        LogContext::fetch(listing, &endpoint, "start", None);
        let timer = TimedOperation::new(&format!("fetch {}", listing));

        let result = tokio::select! {
            biased;
            _ = cancellation.cancelled() => Err(AppError::Cancelled),
            fetched = tokio::time::timeout(timeout, source.fetch(session)) => match fetched {
                Ok(result) => result,
                Err(_) => Err(AppError::Timeout(timeout.as_millis() as u64)),
            },
        };

        let status = match &result {
            Ok(records) => format!("ok ({} records)", records.len()),
            Err(e) => format!("failed ({})", e),
        };
        let duration_ms = timer.finish_with_info(&status);
        LogContext::fetch(listing, &endpoint, &status, Some(duration_ms));

        FetchOutcome { generation, result }
    }
}

pub struct ListingController<C: Criteria> {
    profile: ListingProfile,
    source: Arc<dyn RecordSource<C::Record>>,
    session: Arc<dyn SessionProvider>,
    clock: Arc<dyn Clock>,
    timezone: Tz,
    fetch_timeout: Duration,
    initial_criteria: C,
    criteria: C,
    pagination: PaginationState,
    records: Vec<C::Record>,
    page: PaginatedResult<C::Record>,
    state: ListingState,
    generation: u64,
    cancellation: CancellationToken,
}

impl<C: Criteria> ListingController<C> {
    pub fn new(
        profile: ListingProfile,
        source: Arc<dyn RecordSource<C::Record>>,
        session: Arc<dyn SessionProvider>,
        clock: Arc<dyn Clock>,
        config: &ClientConfig,
    ) -> Self {
        let page_size = profile.default_page_size();
        Self {
            profile,
            source,
            session,
            clock,
            timezone: config.timezone,
            fetch_timeout: config.request_timeout,
            initial_criteria: C::default(),
            criteria: C::default(),
            pagination: PaginationState::new(page_size),
            records: Vec::new(),
            page: PaginatedResult::empty(page_size),
            state: ListingState::Idle,
            generation: 0,
            cancellation: CancellationToken::new(),
        }
    }

    /// Starting criteria; `clear_criteria` returns to these
    pub fn with_criteria(mut self, criteria: C) -> Self {
        self.initial_criteria = criteria.clone();
        self.criteria = criteria;
        self.refresh_view();
        self
    }

    // =============================================================================
    // FETCH LIFECYCLE
    // =============================================================================

    /// Enter LOADING and hand out the fetch to run.
    ///
    /// Returns `None` when a fetch is already in flight, or when the access
    /// guard fails (the state then becomes a blocked error without fetching).
    pub fn begin_fetch(&mut self) -> Option<FetchRequest<C::Record>> {
        if self.state.is_loading() {
            log_debug!("[{}] fetch already in progress, ignoring trigger", self.profile.name);
            return None;
        }

        let session = self.session.current();
        if !self.profile.access.permits(session.as_ref()) {
            log_warn!(
                "[{}] access denied ({:?}), not fetching",
                self.profile.name,
                self.profile.access
            );
            self.state = ListingState::Error(ErrorDisplay::blocked(
                &self.profile.access,
                self.profile.redirect_on_unauthorized,
            ));
            return None;
        }

        // a token cancelled from outside only applies to fetches already running
        if self.cancellation.is_cancelled() {
            self.cancellation = CancellationToken::new();
        }

        self.generation += 1;
        self.state = ListingState::Loading;

        Some(FetchRequest {
            generation: self.generation,
            listing: self.profile.name,
            source: Arc::clone(&self.source),
            session,
            timeout: self.fetch_timeout,
            cancellation: self.cancellation.child_token(),
        })
    }

    /// Apply a fetch outcome. Outcomes from superseded fetches are dropped.
    pub fn complete_fetch(&mut self, outcome: FetchOutcome<C::Record>) -> &ListingState {
        if outcome.generation != self.generation || !self.state.is_loading() {
            log_debug!(
                "[{}] discarding stale fetch result (generation {} vs {})",
                self.profile.name,
                outcome.generation,
                self.generation
            );
            return &self.state;
        }

        match outcome.result {
            Ok(records) => {
                log_info!("[{}] loaded {} records", self.profile.name, records.len());
                self.records = records;
                self.state = ListingState::Ready;
                self.refresh_view();
            }
            Err(AppError::Cancelled) => {
                log_debug!("[{}] fetch cancelled", self.profile.name);
                self.state = ListingState::Idle;
            }
            Err(e) => {
                LogContext::error_with_context(&e, &format!("[{}] fetch failed", self.profile.name));
                self.state = ListingState::Error(ErrorDisplay::for_listing(
                    &e,
                    &self.profile.access,
                    self.profile.redirect_on_unauthorized,
                ));
            }
        }

        &self.state
    }

    /// Fetch and apply in one go
    pub async fn load(&mut self) -> &ListingState {
        if let Some(request) = self.begin_fetch() {
            let outcome = request.run().await;
            self.complete_fetch(outcome);
        }
        &self.state
    }

    /// User-triggered retry after an error
    pub async fn retry(&mut self) -> &ListingState {
        self.load().await
    }

    /// Handle for cancelling in-flight fetches from outside the controller
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Tear-down: cancel in-flight fetches and go back to IDLE
    pub fn dispose(&mut self) {
        self.cancellation.cancel();
        self.cancellation = CancellationToken::new();
        self.generation += 1;
        self.state = ListingState::Idle;
        log_debug!("[{}] disposed", self.profile.name);
    }

    // =============================================================================
    // FILTER AND PAGE STATE
    // =============================================================================

    pub fn set_criteria(&mut self, criteria: C) {
        self.criteria = criteria;
        self.refresh_view();
    }

    pub fn update_criteria<F>(&mut self, update: F)
    where
        F: FnOnce(&mut C),
    {
        update(&mut self.criteria);
        self.refresh_view();
    }

    pub fn clear_criteria(&mut self) {
        self.criteria = self.initial_criteria.clone();
        self.refresh_view();
    }

    /// Change the page size and go back to page 1
    pub fn set_page_size(&mut self, page_size: usize) -> AppResult<()> {
        Validator::validate_page_size(page_size)?;
        if !self.profile.offers_page_size(page_size) {
            log_debug!(
                "[{}] page size {} is not one of {:?}",
                self.profile.name,
                page_size,
                self.profile.page_size_options
            );
        }
        self.pagination.set_page_size(page_size);
        self.refresh_view();
        Ok(())
    }

    /// Jump to `page`; out-of-range pages are ignored
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let moved = self.pagination.go_to_page(page);
        if moved {
            self.refresh_view();
        }
        moved
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.pagination.next_page();
        if moved {
            self.refresh_view();
        }
        moved
    }

    pub fn previous_page(&mut self) -> bool {
        let moved = self.pagination.previous_page();
        if moved {
            self.refresh_view();
        }
        moved
    }

    /// Re-run filter, sort and paginate (also picks up a new "now")
    pub fn refresh_view(&mut self) {
        let ctx = FilterContext::new(self.clock.now(), self.timezone);
        let predicate = self.criteria.predicate(&ctx);
        let sort_key = self.criteria.sort_key(&ctx);

        let page = ListingEngine::apply(
            &self.records,
            &predicate,
            sort_key.as_ref(),
            self.pagination.current_page(),
            self.pagination.page_size(),
        );
        self.pagination.sync_total(page.total_count);

        LogContext::listing_recomputed(
            self.profile.name,
            page.total_count,
            page.page,
            page.total_pages,
        );
        self.page = page;
    }

    // =============================================================================
    // ACCESSORS
    // =============================================================================

    pub fn profile(&self) -> &ListingProfile {
        &self.profile
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    /// Full fetched collection, unfiltered
    pub fn records(&self) -> &[C::Record] {
        &self.records
    }

    /// Last computed page, regardless of state
    pub fn page(&self) -> &PaginatedResult<C::Record> {
        &self.page
    }

    pub fn view(&self) -> ListingView<C::Record> {
        let page = match self.state {
            ListingState::Ready => self.page.clone(),
            _ => PaginatedResult::empty(self.pagination.page_size()),
        };
        ListingView {
            state: self.state.clone(),
            page,
            page_size_options: self.profile.page_size_options,
        }
    }
}
