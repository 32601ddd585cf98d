//! Dashboard State
//!
//! View-model behind the dashboard: the last good dataset, the first-load error,
//! in-flight fetches and pagination. It has no GPUI dependency; the view owns one
//! and calls `cx.notify()` after mutating it.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::constants::FETCH_ERROR_MESSAGE;
use crate::domain::{ChartPoint, Dataset, NodeRecord, PageSize, Pagination, chart_points};
use crate::error::Result;
use crate::services::FetchEvent;

/// What the content area shows, in priority order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayState<'a> {
    /// No data yet and a fetch is running (also the initial state)
    Loading,
    /// No data yet and the last fetch failed
    Error(&'a str),
    /// Data is held; later failures are not surfaced
    Ready(&'a Dataset),
}

/// Realtime data view-model
#[derive(Debug, Default)]
pub struct DashboardState {
    dataset: Option<Arc<Dataset>>,
    error: Option<&'static str>,
    pagination: Pagination,
    in_flight: BTreeSet<u64>,
    /// Sequence of the fetch that produced `dataset` (0 before any data)
    data_seq: u64,
    last_updated: Option<DateTime<Local>>,
}

impl DashboardState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Default::default()
        }
    }

    // ==================== Fetch Lifecycle ====================

    /// Apply a poller event; returns whether anything visible changed
    pub fn apply(&mut self, event: FetchEvent) -> bool {
        match event {
            FetchEvent::Started { seq } => self.begin_fetch(seq),
            FetchEvent::Finished { seq, outcome } => self.finish_fetch(seq, outcome),
        }
    }

    /// Record that fetch `seq` is in flight
    pub fn begin_fetch(&mut self, seq: u64) -> bool {
        let was_loading = self.is_loading();
        self.in_flight.insert(seq);
        debug!(seq, in_flight = self.in_flight.len(), "Fetch started");
        was_loading != self.is_loading()
    }

    /// Settle fetch `seq`
    ///
    /// Outcomes older than the fetch that produced the held dataset are
    /// dropped. A success replaces the dataset and clears the error; a failure
    /// records the user-facing message and keeps any previous dataset.
    pub fn finish_fetch(&mut self, seq: u64, outcome: Result<Dataset>) -> bool {
        let was_loading = self.is_loading();
        self.in_flight.remove(&seq);

        if seq < self.data_seq {
            debug!(seq, data_seq = self.data_seq, "Discarding stale fetch result");
            return was_loading != self.is_loading();
        }

        match outcome {
            Ok(dataset) => {
                info!(seq, nodes = dataset.nodes.len(), "MISO data updated");
                self.dataset = Some(Arc::new(dataset));
                self.data_seq = seq;
                self.error = None;
                self.last_updated = Some(Local::now());
            }
            Err(e) => {
                warn!(
                    seq,
                    error = %e,
                    has_data = self.dataset.is_some(),
                    "Failed to fetch MISO data"
                );
                self.error = Some(FETCH_ERROR_MESSAGE);
            }
        }
        true
    }

    // ==================== Getters ====================

    pub fn display_state(&self) -> DisplayState<'_> {
        match (&self.dataset, self.error) {
            (Some(dataset), _) => DisplayState::Ready(dataset),
            (None, Some(message)) if !self.is_loading() => DisplayState::Error(message),
            (None, _) => DisplayState::Loading,
        }
    }

    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        self.dataset.as_ref()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn last_updated(&self) -> Option<&DateTime<Local>> {
        self.last_updated.as_ref()
    }

    /// Row total used by the pagination control
    pub fn total_rows(&self) -> usize {
        self.dataset.as_ref().map_or(0, |d| d.node_count)
    }

    /// Rows on the current page of the latest dataset
    pub fn visible_nodes(&self) -> &[NodeRecord] {
        match &self.dataset {
            Some(dataset) => self.pagination.project(&dataset.nodes),
            None => &[],
        }
    }

    /// Chart input for the current page
    pub fn chart_points(&self) -> Vec<ChartPoint> {
        chart_points(self.visible_nodes())
    }

    // ==================== Pagination ====================

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.pagination.set_page_size(size);
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_rows();
        self.pagination.next_page(total)
    }

    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn dataset(n: usize) -> Dataset {
        Dataset::from_nodes(
            (0..n)
                .map(|i| NodeRecord::new(format!("NODE{i}"), i as f64, 0.0, 0.0))
                .collect(),
        )
    }

    fn failure() -> Result<Dataset> {
        Err(Error::MissingNodes {
            url: "http://localhost:8000/api/miso-rt-data/".to_string(),
        })
    }

    fn names(state: &DashboardState) -> Vec<String> {
        state.visible_nodes().iter().map(|n| n.node.clone()).collect()
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = DashboardState::new(PageSize::Five);
        assert_eq!(state.display_state(), DisplayState::Loading);
        assert!(state.visible_nodes().is_empty());
        assert_eq!(state.total_rows(), 0);
    }

    #[test]
    fn test_first_load_success() {
        let mut state = DashboardState::new(PageSize::Five);
        state.begin_fetch(1);
        assert_eq!(state.display_state(), DisplayState::Loading);

        state.finish_fetch(1, Ok(dataset(7)));
        assert!(matches!(state.display_state(), DisplayState::Ready(d) if d.nodes.len() == 7));
        assert!(state.last_updated().is_some());
        assert_eq!(names(&state).len(), 5);
    }

    #[test]
    fn test_first_load_failure_shows_error() {
        let mut state = DashboardState::new(PageSize::Five);
        state.begin_fetch(1);
        state.finish_fetch(1, failure());

        assert_eq!(state.display_state(), DisplayState::Error(FETCH_ERROR_MESSAGE));
        assert!(state.visible_nodes().is_empty());
        assert!(state.chart_points().is_empty());
    }

    #[test]
    fn test_retry_after_error_shows_loading() {
        let mut state = DashboardState::new(PageSize::Five);
        state.begin_fetch(1);
        state.finish_fetch(1, failure());
        state.begin_fetch(2);
        assert_eq!(state.display_state(), DisplayState::Loading);

        state.finish_fetch(2, Ok(dataset(3)));
        assert!(matches!(state.display_state(), DisplayState::Ready(_)));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_later_failure_keeps_last_good_data() {
        let mut state = DashboardState::new(PageSize::Five);
        state.begin_fetch(1);
        state.finish_fetch(1, Ok(dataset(7)));
        let before = names(&state);

        state.begin_fetch(2);
        state.finish_fetch(2, failure());

        assert!(matches!(state.display_state(), DisplayState::Ready(d) if d.nodes.len() == 7));
        assert_eq!(names(&state), before);
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut state = DashboardState::new(PageSize::Five);
        state.begin_fetch(1);
        state.begin_fetch(2);

        state.finish_fetch(2, Ok(dataset(3)));
        assert!(state.is_loading());

        // Slow fetch #1 settles last but must not overwrite #2
        state.finish_fetch(1, Ok(dataset(9)));
        assert!(!state.is_loading());
        assert_eq!(state.dataset().map(|d| d.nodes.len()), Some(3));
    }

    #[test]
    fn test_stale_failure_does_not_surface() {
        let mut state = DashboardState::new(PageSize::Five);
        state.begin_fetch(1);
        state.begin_fetch(2);
        state.finish_fetch(2, Ok(dataset(2)));
        state.finish_fetch(1, failure());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_older_success_after_newer_failure_is_applied() {
        let mut state = DashboardState::new(PageSize::Five);
        state.begin_fetch(1);
        state.begin_fetch(2);
        state.finish_fetch(2, failure());
        assert_eq!(state.display_state(), DisplayState::Loading);

        state.finish_fetch(1, Ok(dataset(1)));
        assert!(matches!(state.display_state(), DisplayState::Ready(d) if d.nodes.len() == 1));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_does_not_block_newer_data_than_held() {
        let mut state = DashboardState::new(PageSize::Five);
        state.finish_fetch(1, Ok(dataset(1)));
        state.begin_fetch(2);
        state.begin_fetch(3);
        state.finish_fetch(3, failure());
        state.finish_fetch(2, Ok(dataset(4)));

        assert_eq!(state.dataset().map(|d| d.nodes.len()), Some(4));
        assert!(!state.is_loading());

        // A success older than the held data is still dropped
        state.finish_fetch(1, Ok(dataset(9)));
        assert_eq!(state.dataset().map(|d| d.nodes.len()), Some(4));
    }

    #[test]
    fn test_second_page_of_seven() {
        let mut state = DashboardState::new(PageSize::Five);
        state.apply(FetchEvent::Started { seq: 1 });
        state.apply(FetchEvent::Finished {
            seq: 1,
            outcome: Ok(dataset(7)),
        });
        state.set_page(1);

        assert_eq!(names(&state), vec!["NODE5", "NODE6"]);
        let points = state.chart_points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].node_name, "NODE5");
    }

    #[test]
    fn test_shrinking_dataset_degrades_to_empty_page() {
        let mut state = DashboardState::new(PageSize::Five);
        state.finish_fetch(1, Ok(dataset(12)));
        state.set_page(2);
        assert_eq!(names(&state).len(), 2);

        state.finish_fetch(2, Ok(dataset(4)));
        assert_eq!(state.pagination().page(), 2);
        assert!(state.visible_nodes().is_empty());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = DashboardState::new(PageSize::Five);
        state.finish_fetch(1, Ok(dataset(30)));
        state.set_page(3);
        state.set_page_size(PageSize::Ten);
        assert_eq!(state.pagination().page(), 0);
        assert_eq!(names(&state).len(), 10);
    }

    #[test]
    fn test_next_page_uses_node_count() {
        let mut state = DashboardState::new(PageSize::Five);
        assert!(!state.next_page());

        state.finish_fetch(1, Ok(dataset(7)));
        assert!(state.next_page());
        assert!(!state.next_page());
        assert!(state.previous_page());
        assert!(!state.previous_page());
    }
}
