//! End-to-end scenarios for the search controller on a paused clock.
//!
//! Every test drives a real [`SearchController`] through its input channels and
//! observes the published states, pages and accumulated results.

use async_trait::async_trait;
use photosearch::app::{LoadingPhase, PaginationState, SearchState};
use photosearch::controller::{Input, InputSender, Output, SearchController};
use photosearch::domain::{Photo, PhotoSearchError, ResultPage, SearchItem, SearchQuery};
use photosearch::ports::{CatalogSearch, RecentTermPort, SearchPort};
use photosearch::storage::MemoryRecentTerms;
use photosearch::worker::RequestExecutor;
use photosearch::Result;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

struct Reply {
    delay: Duration,
    result: std::result::Result<ResultPage, String>,
}

/// Search port answering from a fixed table keyed by term and page.
#[derive(Default)]
struct ScriptedSearch {
    replies: HashMap<(String, u32), Reply>,
    calls: AtomicUsize,
}

impl ScriptedSearch {
    fn ok(mut self, term: &str, page: u32, total_pages: u32, items: Vec<Photo>, delay_ms: u64) -> Self {
        self.replies.insert(
            (term.to_string(), page),
            Reply {
                delay: Duration::from_millis(delay_ms),
                result: Ok(ResultPage {
                    page,
                    total_pages,
                    items,
                }),
            },
        );
        self
    }

    fn err(mut self, term: &str, page: u32, delay_ms: u64) -> Self {
        self.replies.insert(
            (term.to_string(), page),
            Reply {
                delay: Duration::from_millis(delay_ms),
                result: Err("connection reset".to_string()),
            },
        );
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchPort for ScriptedSearch {
    async fn search(&self, query: &SearchQuery) -> Result<ResultPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let Some(reply) = self.replies.get(&(query.term.as_str().to_string(), query.page)) else {
            return Err(PhotoSearchError::Transport(format!("no reply for {query:?}")));
        };

        tokio::time::sleep(reply.delay).await;
        reply.result.clone().map_err(PhotoSearchError::Transport)
    }
}

struct FailingRecent;

#[async_trait]
impl RecentTermPort for FailingRecent {
    async fn save(&self, _item: SearchItem) -> Result<()> {
        Err(PhotoSearchError::Storage("read-only".to_string()))
    }

    async fn recent_items(&self) -> Result<Vec<SearchItem>> {
        Err(PhotoSearchError::Storage("read-only".to_string()))
    }
}

fn photo(id: &str, title: &str) -> Photo {
    Photo::new(id, "secret", "server", 1, title)
}

fn start(search: Arc<dyn SearchPort>, recent: Arc<dyn RecentTermPort>, state: SearchState) -> (InputSender, Output) {
    let (sender, input) = Input::channel();
    let output = SearchController::new(RequestExecutor::new(search, recent), state).transform(input);
    (sender, output)
}

/// Closes the inputs, waits for the loop to stop and returns every published state.
async fn finish(sender: InputSender, mut output: Output) -> (Vec<PaginationState>, Vec<Vec<Photo>>) {
    drop(sender);
    output.task.await.expect("controller task");

    let mut states = Vec::new();
    while let Some(state) = output.pagination_state.recv().await {
        states.push(state);
    }
    let mut results = Vec::new();
    while let Some(items) = output.results.recv().await {
        results.push(items);
    }
    (states, results)
}

fn idle(current: u32, total: Option<u32>, new: bool) -> PaginationState {
    PaginationState::new(LoadingPhase::Idle, current, total, new)
}

fn loading(current: u32, total: Option<u32>, new: bool) -> PaginationState {
    PaginationState::new(LoadingPhase::Loading, current, total, new)
}

fn failure(current: u32, total: Option<u32>, new: bool) -> PaginationState {
    PaginationState::new(LoadingPhase::Failure, current, total, new)
}

#[tokio::test(start_paused = true)]
async fn first_page_of_a_new_search() {
    let photo_a = photo("a", "Kittens");
    let search = Arc::new(ScriptedSearch::default().ok("Kittens", 1, 100, vec![photo_a.clone()], 50));
    let (sender, output) = start(search, Arc::new(MemoryRecentTerms::new(10)), SearchState::new(20));

    sender.search_text("Kittens").expect("loop running");
    let (states, results) = finish(sender, output).await;

    assert_eq!(
        states,
        vec![idle(0, None, true), loading(1, None, true), idle(1, Some(100), true)]
    );
    assert_eq!(results, vec![vec![photo_a]]);
}

#[tokio::test(start_paused = true)]
async fn load_more_appends_second_page() {
    let photo_a = photo("a", "Kittens");
    let search = Arc::new(
        ScriptedSearch::default()
            .ok("Kittens", 1, 100, vec![photo_a.clone()], 50)
            .ok("Kittens", 2, 100, vec![photo_a.clone()], 50),
    );
    let (sender, mut output) = start(search, Arc::new(MemoryRecentTerms::new(10)), SearchState::new(20));

    sender.search_text("Kittens").expect("loop running");
    let first = output.results.recv().await.expect("first page");
    assert_eq!(first, vec![photo_a.clone()]);

    sender.load_more().expect("loop running");
    let (states, results) = finish(sender, output).await;

    assert_eq!(
        states,
        vec![
            idle(0, None, true),
            loading(1, None, true),
            idle(1, Some(100), true),
            loading(2, Some(100), false),
            idle(2, Some(100), false),
        ]
    );
    assert_eq!(results, vec![vec![photo_a.clone(), photo_a]]);
}

#[tokio::test(start_paused = true)]
async fn search_is_dropped_while_seeded_loading() {
    let search = Arc::new(ScriptedSearch::default().ok("Kittens", 1, 100, vec![photo("a", "Kittens")], 0));
    let seeded = SearchState::with_pagination(loading(0, None, true), 20);
    let (sender, output) = start(search.clone(), Arc::new(MemoryRecentTerms::new(10)), seeded);

    sender.search_text("Kittens").expect("loop running");
    let (states, results) = finish(sender, output).await;

    assert_eq!(states, vec![loading(0, None, true)]);
    assert!(results.is_empty());
    assert_eq!(search.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn failed_first_page_rolls_back() {
    let search = Arc::new(ScriptedSearch::default().err("Kittens", 1, 50));
    let (sender, mut output) = start(search, Arc::new(MemoryRecentTerms::new(10)), SearchState::new(20));

    sender.search_text("Kittens").expect("loop running");
    let page = output.pages.recv().await.expect("failure page");
    assert!(page.items.is_empty());
    assert!(page.is_new_search);

    let (states, results) = finish(sender, output).await;

    assert_eq!(
        states,
        vec![idle(0, None, true), loading(1, None, true), failure(0, None, true)]
    );
    assert_eq!(results, vec![Vec::<Photo>::new()]);
}

#[tokio::test(start_paused = true)]
async fn newer_term_wins_when_older_resolves_last() {
    let kittens = photo("k", "Kittens");
    let dogs = photo("d", "Dogs");
    let search = Arc::new(
        ScriptedSearch::default()
            .ok("Kittens", 1, 100, vec![kittens], 500)
            .ok("Dogs", 1, 7, vec![dogs.clone()], 10),
    );
    let (sender, mut output) = start(search.clone(), Arc::new(MemoryRecentTerms::new(10)), SearchState::new(20));

    sender.search_text("Kittens").expect("loop running");
    sender.search_text("Dogs").expect("loop running");

    let page = output.pages.recv().await.expect("dogs page");
    assert_eq!(page.items, vec![dogs.clone()]);

    // Let the abandoned fetch resolve before shutting down.
    tokio::time::sleep(Duration::from_secs(1)).await;
    let (states, results) = finish(sender, output).await;

    assert_eq!(
        states,
        vec![
            idle(0, None, true),
            loading(1, None, true),
            loading(1, None, true),
            idle(1, Some(7), true),
        ]
    );
    assert_eq!(results, vec![vec![dogs]]);
    assert_eq!(search.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn newer_term_wins_when_older_resolves_first() {
    let kittens = photo("k", "Kittens");
    let dogs = photo("d", "Dogs");
    let search = Arc::new(
        ScriptedSearch::default()
            .ok("Kittens", 1, 100, vec![kittens], 10)
            .ok("Dogs", 1, 7, vec![dogs.clone()], 500),
    );
    let (sender, output) = start(search, Arc::new(MemoryRecentTerms::new(10)), SearchState::new(20));

    sender.search_text("Kittens").expect("loop running");
    sender.search_text("Dogs").expect("loop running");
    let (states, results) = finish(sender, output).await;

    assert_eq!(states.last(), Some(&idle(1, Some(7), true)));
    assert!(!states.contains(&idle(1, Some(100), true)));
    assert_eq!(results, vec![vec![dogs]]);
}

#[tokio::test(start_paused = true)]
async fn load_more_after_failure_retries_the_same_page() {
    let first = photo("1", "Beach");
    let search = Arc::new(
        ScriptedSearch::default()
            .ok("Beach", 1, 5, vec![first.clone()], 10)
            .err("Beach", 2, 10),
    );
    let (sender, mut output) = start(search.clone(), Arc::new(MemoryRecentTerms::new(10)), SearchState::new(20));

    sender.search_text("Beach").expect("loop running");
    output.results.recv().await.expect("page 1");

    sender.load_more().expect("loop running");
    output.results.recv().await.expect("failed page 2");

    sender.load_more().expect("loop running");
    let (states, results) = finish(sender, output).await;

    assert_eq!(
        &states[3..],
        &[
            loading(2, Some(5), false),
            failure(1, Some(5), false),
            loading(2, Some(5), false),
            failure(1, Some(5), false),
        ]
    );
    assert_eq!(results, vec![vec![first]]);
    assert_eq!(search.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn load_more_is_ignored_while_loading_and_after_last_page() {
    let search = Arc::new(ScriptedSearch::default().ok("City", 1, 1, vec![photo("c", "City")], 100));
    let (sender, mut output) = start(search.clone(), Arc::new(MemoryRecentTerms::new(10)), SearchState::new(20));

    sender.search_text("City").expect("loop running");
    sender.load_more().expect("loop running");
    output.results.recv().await.expect("only page");

    sender.load_more().expect("loop running");
    let (states, _) = finish(sender, output).await;

    assert_eq!(states.last(), Some(&idle(1, Some(1), true)));
    assert_eq!(search.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn repeated_and_empty_text_do_not_search() {
    let search = Arc::new(ScriptedSearch::default().ok("Dogs", 1, 3, vec![photo("d", "Dogs")], 10));
    let (sender, output) = start(search.clone(), Arc::new(MemoryRecentTerms::new(10)), SearchState::new(20));

    sender.search_text("").expect("loop running");
    sender.search_text("Dogs").expect("loop running");
    sender.search_text("Dogs").expect("loop running");
    let (states, _) = finish(sender, output).await;

    assert_eq!(states.len(), 3);
    assert_eq!(search.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn scripted_input_streams_drive_the_loop() {
    let search = Arc::new(ScriptedSearch::default().ok("Dogs", 1, 3, vec![photo("d", "Dogs")], 10));
    let executor = RequestExecutor::new(search, Arc::new(MemoryRecentTerms::new(10)));
    let input = Input::new(
        futures_util::stream::iter(vec!["Dogs".to_string()]),
        futures_util::stream::empty(),
    );

    let output = SearchController::new(executor, SearchState::new(20)).transform(input);
    let last = output.task.await.expect("controller task");

    assert_eq!(last, idle(1, Some(3), true));
}

#[tokio::test(start_paused = true)]
async fn recent_save_failure_is_invisible() {
    let dogs = photo("d", "Dogs");
    let search = Arc::new(ScriptedSearch::default().ok("Dogs", 1, 3, vec![dogs.clone()], 10));
    let (sender, output) = start(search, Arc::new(FailingRecent), SearchState::new(20));

    sender.search_text("Dogs").expect("loop running");
    let (states, results) = finish(sender, output).await;

    assert_eq!(states.last(), Some(&idle(1, Some(3), true)));
    assert_eq!(results, vec![vec![dogs]]);
}

#[tokio::test(start_paused = true)]
async fn dispatched_terms_are_remembered() {
    let search = Arc::new(
        ScriptedSearch::default()
            .ok("Kittens", 1, 3, vec![], 10)
            .ok("Dogs", 1, 3, vec![], 10),
    );
    let recent = Arc::new(MemoryRecentTerms::new(10));
    let (sender, mut output) = start(search, recent.clone(), SearchState::new(20));

    sender.search_text("Kittens").expect("loop running");
    output.results.recv().await.expect("kittens page");
    sender.search_text("Dogs").expect("loop running");
    finish(sender, output).await;

    let mut names = Vec::new();
    for _ in 0..10 {
        names = recent
            .recent_items()
            .await
            .expect("list")
            .into_iter()
            .map(|item| item.name)
            .collect::<Vec<_>>();
        if names.len() == 2 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    assert_eq!(names, vec!["Dogs".to_string(), "Kittens".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn sender_reports_closed_loop() {
    let (sender, output) = start(
        Arc::new(ScriptedSearch::default()),
        Arc::new(MemoryRecentTerms::new(10)),
        SearchState::new(20),
    );

    output.task.abort();
    assert!(output.task.await.is_err());

    assert!(matches!(sender.search_text("Dogs"), Err(PhotoSearchError::Closed)));
    assert!(matches!(sender.load_more(), Err(PhotoSearchError::Closed)));
}

#[tokio::test(start_paused = true)]
async fn sample_catalog_paginates_to_the_end() {
    let (sender, mut output) = start(
        Arc::new(CatalogSearch::sample()),
        Arc::new(MemoryRecentTerms::new(10)),
        SearchState::new(20),
    );

    sender.search_text("Kittens").expect("loop running");
    let mut latest = output.results.recv().await.expect("page 1");
    for _ in 0..2 {
        sender.load_more().expect("loop running");
        latest = output.results.recv().await.expect("next page");
    }
    sender.load_more().expect("loop running");
    let (states, results) = finish(sender, output).await;

    assert_eq!(latest.len(), 45);
    assert!(results.is_empty());
    assert_eq!(states.last(), Some(&idle(3, Some(3), false)));
}

#[tokio::test(start_paused = true)]
async fn search_without_matches_stays_within_total() {
    let (sender, output) = start(
        Arc::new(CatalogSearch::sample()),
        Arc::new(MemoryRecentTerms::new(10)),
        SearchState::new(20),
    );

    sender.search_text("Zebra").expect("loop running");
    let (states, results) = finish(sender, output).await;

    assert_eq!(
        states,
        vec![idle(0, None, true), loading(1, None, true), idle(0, Some(0), true)]
    );
    assert_eq!(results, vec![Vec::<Photo>::new()]);
    for state in &states {
        if let Some(total) = state.total_pages {
            assert!(state.current_page <= total, "{state} exceeds its total");
        }
    }
}
