//! Search session state machine.
//!
//! `Idle -> Loading -> Displaying | Error`, and back to `Loading` on every new
//! search or follow-up. Backend flows run as spawned tasks and report back
//! through the completion channel; [`Controller::complete`] is the only way
//! out of `Loading`, so the fact ticker is stopped on every outcome.
//!
//! Overlapping submissions are not guarded: whichever flow completes last
//! overwrites what is displayed.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use advisor_api::{follow_up_prompt, AdviceBackend, AdvicePayload, DestinationId};
use futures::FutureExt;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::error::AppError;
use crate::history::SessionHistory;
use crate::layout::{Accordion, Sidebar};
use crate::render::{render, EmptyResult, RenderedAdvice};
use crate::ticker::FactTicker;
use crate::view::Frame;

pub const SEARCH_ERROR_MESSAGE: &str =
    "An error occurred while getting travel advice. Please try again.";
pub const FOLLOW_UP_ERROR_MESSAGE: &str =
    "An error occurred while processing your follow-up question. Please try again.";
pub const EMPTY_RESULT_MESSAGE: &str = "No travel advice found for this destination.";

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Loading,
    Displaying(RenderedAdvice),
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub city: String,
    pub country: String,
    pub hobbies: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Search,
    FollowUp,
}

/// What a flow resolved to, with the name/country the header should show.
#[derive(Debug)]
pub struct Outcome {
    pub payload: AdvicePayload,
    pub city: String,
    pub country: String,
}

#[derive(Debug)]
pub struct Completion {
    pub kind: FlowKind,
    pub result: Result<Outcome, AppError>,
}

pub struct Controller<B> {
    backend: Arc<B>,
    history: SessionHistory,
    ticker: FactTicker,
    phase: Phase,
    current_fact: Option<String>,
    accordion: Accordion,
    sidebar: Sidebar,
    completions: mpsc::UnboundedSender<Completion>,
}

impl<B: AdviceBackend + 'static> Controller<B> {
    pub fn new(backend: Arc<B>, ticker: FactTicker) -> (Self, mpsc::UnboundedReceiver<Completion>) {
        let (completions, rx) = mpsc::unbounded_channel();
        let controller = Self {
            backend,
            history: SessionHistory::new(),
            ticker,
            phase: Phase::Idle,
            current_fact: None,
            accordion: Accordion::default(),
            sidebar: Sidebar::default(),
            completions,
        };
        (controller, rx)
    }

    /// Ignored unless both city and country are non-blank.
    pub fn submit_search(&mut self, form: SearchForm) -> bool {
        let city = form.city.trim().to_string();
        let country = form.country.trim().to_string();
        let hobbies = form.hobbies.trim().to_string();
        if city.is_empty() || country.is_empty() {
            return false;
        }

        info!(city = %city, country = %country, hobbies = !hobbies.is_empty(), "search submitted");
        self.enter_loading();
        let backend = Arc::clone(&self.backend);
        self.spawn_flow(FlowKind::Search, async move {
            search_flow(backend.as_ref(), &city, &country, &hobbies).await
        });
        true
    }

    /// Follow-up for the destination currently on screen. Ignored when the
    /// question is blank or nothing is displayed.
    pub fn submit_follow_up(&mut self, question: &str) -> bool {
        let question = question.trim().to_string();
        let Some(destination_id) = self.follow_up_target().cloned() else {
            return false;
        };
        if question.is_empty() {
            return false;
        }

        info!(id = %destination_id, "follow-up submitted");
        self.enter_loading();
        let backend = Arc::clone(&self.backend);
        self.spawn_flow(FlowKind::FollowUp, async move {
            follow_up_flow(backend.as_ref(), &destination_id, &question).await
        });
        true
    }

    pub fn complete(&mut self, completion: Completion) {
        self.leave_loading();
        let Completion { kind, result } = completion;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => return self.fail(kind, e),
        };

        match render(&outcome.payload, &outcome.city, &outcome.country) {
            Ok(rendered) => {
                info!(
                    id = %outcome.payload.id,
                    sections = rendered.sections.len(),
                    "advice displayed"
                );
                self.display(rendered);
                if kind == FlowKind::Search && self.history.record(outcome.payload) {
                    info!(entries = self.history.len(), "destination added to history");
                }
            }
            Err(EmptyResult) => self.fail(kind, AppError::EmptyResult),
        }
    }

    /// Re-displays a history entry from its stored snapshot; no network.
    pub fn select_history(&mut self, index: usize, narrow: bool) -> bool {
        let Some(entry) = self.history.get(index) else {
            return false;
        };
        let rendered = render(&entry.payload, &entry.payload.name, &entry.payload.country);

        if self.phase == Phase::Loading {
            self.leave_loading();
        }
        match rendered {
            Ok(rendered) => self.display(rendered),
            Err(EmptyResult) => self.phase = Phase::Error(EMPTY_RESULT_MESSAGE.to_string()),
        }
        if narrow {
            self.sidebar.close();
        }
        true
    }

    pub fn toggle_section(&mut self, index: usize) -> bool {
        matches!(self.phase, Phase::Displaying(_)) && self.accordion.toggle(index)
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    /// Only shown while loading; late ticks after a flow finished are dropped.
    pub fn show_fact(&mut self, fact: String) {
        if self.phase == Phase::Loading {
            self.current_fact = Some(fact);
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn sidebar(&self) -> Sidebar {
        self.sidebar
    }

    pub fn current_fact(&self) -> Option<&str> {
        self.current_fact.as_deref()
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            phase: &self.phase,
            accordion: &self.accordion,
            sidebar: self.sidebar,
            history: &self.history,
            fact: self.current_fact.as_deref(),
        }
    }

    pub fn follow_up_target(&self) -> Option<&DestinationId> {
        match &self.phase {
            Phase::Displaying(rendered) => Some(&rendered.follow_up.destination_id),
            _ => None,
        }
    }

    fn enter_loading(&mut self) {
        self.phase = Phase::Loading;
        self.current_fact = None;
        self.ticker.start();
    }

    fn leave_loading(&mut self) {
        self.ticker.stop();
        self.current_fact = None;
    }

    fn display(&mut self, rendered: RenderedAdvice) {
        self.accordion.reset(rendered.sections.len());
        self.phase = Phase::Displaying(rendered);
    }

    fn fail(&mut self, kind: FlowKind, err: AppError) {
        warn!(?kind, error = %err, "flow failed");
        let message = match (&err, kind) {
            (AppError::EmptyResult, _) => EMPTY_RESULT_MESSAGE,
            (_, FlowKind::Search) => SEARCH_ERROR_MESSAGE,
            (_, FlowKind::FollowUp) => FOLLOW_UP_ERROR_MESSAGE,
        };
        self.phase = Phase::Error(message.to_string());
    }

    fn spawn_flow<F>(&self, kind: FlowKind, flow: F)
    where
        F: Future<Output = Result<Outcome, AppError>> + Send + 'static,
    {
        let tx = self.completions.clone();
        tokio::spawn(async move {
            let result = AssertUnwindSafe(flow)
                .catch_unwind()
                .await
                .unwrap_or_else(|panic| Err(AppError::Aborted(panic_message(panic.as_ref()))));
            let _ = tx.send(Completion { kind, result });
        });
    }
}

async fn search_flow<B: AdviceBackend + ?Sized>(
    backend: &B,
    city: &str,
    country: &str,
    hobbies: &str,
) -> Result<Outcome, AppError> {
    let id = backend.resolve_or_create_destination(city, country).await?;
    let hobbies = (!hobbies.is_empty()).then_some(hobbies);
    backend.trigger_advice_generation(&id, hobbies, None).await?;
    let payload = backend.fetch_advice(&id).await?;
    Ok(Outcome {
        payload,
        city: city.to_string(),
        country: country.to_string(),
    })
}

async fn follow_up_flow<B: AdviceBackend + ?Sized>(
    backend: &B,
    destination_id: &DestinationId,
    question: &str,
) -> Result<Outcome, AppError> {
    let current = backend.fetch_advice(destination_id).await?;
    let prompt = follow_up_prompt(&current.name, &current.country, question);
    backend
        .trigger_advice_generation(destination_id, None, Some(&prompt))
        .await?;
    let payload = backend.fetch_advice(destination_id).await?;
    Ok(Outcome {
        payload,
        city: current.name,
        country: current.country,
    })
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "flow panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use advisor_api::{AdviceItem, ApiError, Category, StatusCode};
    use async_trait::async_trait;

    use super::*;
    use crate::facts::FactSource;

    struct Fixed;

    impl FactSource for Fixed {
        fn next_fact(&self) -> String {
            "fact".to_string()
        }
    }

    #[derive(Default)]
    struct FakeState {
        ids: HashMap<(String, String), DestinationId>,
        names: HashMap<DestinationId, (String, String)>,
        advice: HashMap<DestinationId, Vec<AdviceItem>>,
        generate_calls: Vec<(DestinationId, Option<String>, Option<String>)>,
        fetches: usize,
        fail_generation: bool,
        generate_nothing: bool,
        panic_on_fetch: bool,
    }

    #[derive(Default)]
    struct FakeBackend {
        state: Mutex<FakeState>,
    }

    impl FakeBackend {
        fn with(f: impl FnOnce(&mut FakeState)) -> Arc<Self> {
            let backend = Self::default();
            f(&mut backend.state.lock().unwrap());
            Arc::new(backend)
        }
    }

    #[async_trait]
    impl AdviceBackend for FakeBackend {
        async fn resolve_or_create_destination(
            &self,
            city: &str,
            country: &str,
        ) -> Result<DestinationId, ApiError> {
            let mut state = self.state.lock().unwrap();
            let key = (city.to_string(), country.to_string());
            if let Some(id) = state.ids.get(&key) {
                return Ok(id.clone());
            }
            let id = DestinationId::new((state.ids.len() + 1).to_string());
            state.ids.insert(key.clone(), id.clone());
            state.names.insert(id.clone(), key);
            Ok(id)
        }

        async fn trigger_advice_generation(
            &self,
            destination_id: &DestinationId,
            hobbies: Option<&str>,
            follow_up_question: Option<&str>,
        ) -> Result<(), ApiError> {
            let mut state = self.state.lock().unwrap();
            state.generate_calls.push((
                destination_id.clone(),
                hobbies.map(str::to_string),
                follow_up_question.map(str::to_string),
            ));
            if state.fail_generation {
                return Err(ApiError::Generation {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: "{\"error\":\"boom\"}".to_string(),
                });
            }
            if state.generate_nothing {
                return Ok(());
            }
            let content = match follow_up_question {
                Some(q) => format!("Answer to: {q}"),
                None => "Stay alert.\n\nKeep copies of documents.".to_string(),
            };
            state.advice.insert(
                destination_id.clone(),
                vec![
                    AdviceItem {
                        category: Category::Attractions,
                        content: Some("Old town".to_string()),
                    },
                    AdviceItem {
                        category: Category::Safety,
                        content: Some(content),
                    },
                ],
            );
            Ok(())
        }

        async fn fetch_advice(
            &self,
            destination_id: &DestinationId,
        ) -> Result<AdvicePayload, ApiError> {
            let mut state = self.state.lock().unwrap();
            if state.panic_on_fetch {
                drop(state);
                panic!("backend exploded");
            }
            state.fetches += 1;
            let (name, country) = state
                .names
                .get(destination_id)
                .cloned()
                .unwrap_or_default();
            Ok(AdvicePayload {
                id: destination_id.clone(),
                name,
                country,
                description: None,
                advice: state.advice.get(destination_id).cloned().unwrap_or_default(),
            })
        }
    }

    fn controller(
        backend: Arc<FakeBackend>,
    ) -> (
        Controller<FakeBackend>,
        mpsc::UnboundedReceiver<Completion>,
        mpsc::UnboundedReceiver<String>,
    ) {
        let (facts_tx, facts_rx) = mpsc::unbounded_channel();
        let ticker = FactTicker::new(Arc::new(Fixed), Duration::from_secs(8), true, facts_tx);
        let (controller, completions) = Controller::new(backend, ticker);
        (controller, completions, facts_rx)
    }

    fn form(city: &str, country: &str, hobbies: &str) -> SearchForm {
        SearchForm {
            city: city.to_string(),
            country: country.to_string(),
            hobbies: hobbies.to_string(),
        }
    }

    async fn settle(
        controller: &mut Controller<FakeBackend>,
        completions: &mut mpsc::UnboundedReceiver<Completion>,
    ) {
        let completion = completions.recv().await.expect("flow completion");
        controller.complete(completion);
    }

    fn displayed(controller: &Controller<FakeBackend>) -> &RenderedAdvice {
        match controller.phase() {
            Phase::Displaying(rendered) => rendered,
            other => panic!("expected displaying, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn search_displays_sorted_sections_and_records_history() {
        let backend = FakeBackend::with(|_| {});
        let (mut controller, mut completions, mut facts) = controller(Arc::clone(&backend));

        assert!(controller.submit_search(form("  Paris ", "France", "food")));
        assert_eq!(controller.phase(), &Phase::Loading);
        assert!(controller.ticker.is_running());
        let fact = facts.recv().await.expect("immediate fact");
        controller.show_fact(fact);
        assert_eq!(controller.current_fact(), Some("fact"));

        settle(&mut controller, &mut completions).await;

        let rendered = displayed(&controller);
        assert_eq!(rendered.header, "Paris, France");
        let order: Vec<_> = rendered.sections.iter().map(|s| s.category.clone()).collect();
        assert_eq!(order, vec![Category::Safety, Category::Attractions]);
        assert_eq!(rendered.sections[0].paragraphs.len(), 2);
        assert_eq!(controller.accordion().open_index(), Some(0));
        assert!(!controller.ticker.is_running());
        assert_eq!(controller.current_fact(), None);
        assert_eq!(controller.history().len(), 1);

        let state = backend.state.lock().unwrap();
        assert_eq!(state.generate_calls[0].1.as_deref(), Some("food"));
        assert_eq!(state.generate_calls[0].2, None);
    }

    #[tokio::test]
    async fn blank_fields_are_ignored() {
        let backend = FakeBackend::with(|_| {});
        let (mut controller, _completions, _facts) = controller(backend);
        assert!(!controller.submit_search(form("   ", "France", "")));
        assert!(!controller.submit_search(form("Paris", "", "")));
        assert_eq!(controller.phase(), &Phase::Idle);
        assert!(!controller.ticker.is_running());
    }

    #[tokio::test]
    async fn empty_hobbies_are_not_sent() {
        let backend = FakeBackend::with(|_| {});
        let (mut controller, mut completions, _facts) = controller(Arc::clone(&backend));
        controller.submit_search(form("Paris", "France", "  "));
        settle(&mut controller, &mut completions).await;
        assert_eq!(backend.state.lock().unwrap().generate_calls[0].1, None);
    }

    #[tokio::test]
    async fn generation_failure_shows_search_error() {
        let backend = FakeBackend::with(|s| s.fail_generation = true);
        let (mut controller, mut completions, _facts) = controller(backend);

        controller.submit_search(form("Paris", "France", ""));
        settle(&mut controller, &mut completions).await;

        assert_eq!(
            controller.phase(),
            &Phase::Error(SEARCH_ERROR_MESSAGE.to_string())
        );
        assert!(controller.history().is_empty());
        assert!(!controller.ticker.is_running());
    }

    #[tokio::test]
    async fn empty_advice_shows_empty_result_and_is_not_recorded() {
        let backend = FakeBackend::with(|s| s.generate_nothing = true);
        let (mut controller, mut completions, _facts) = controller(backend);

        controller.submit_search(form("Paris", "France", ""));
        settle(&mut controller, &mut completions).await;

        assert_eq!(
            controller.phase(),
            &Phase::Error(EMPTY_RESULT_MESSAGE.to_string())
        );
        assert!(controller.history().is_empty());
    }

    #[tokio::test]
    async fn panicking_flow_still_leaves_loading() {
        let backend = FakeBackend::with(|s| s.panic_on_fetch = true);
        let (mut controller, mut completions, _facts) = controller(backend);

        controller.submit_search(form("Paris", "France", ""));
        let completion = completions.recv().await.expect("completion");
        assert!(matches!(
            completion.result,
            Err(AppError::Aborted(ref m)) if m == "backend exploded"
        ));
        controller.complete(completion);

        assert!(matches!(controller.phase(), Phase::Error(_)));
        assert!(!controller.ticker.is_running());
    }

    #[tokio::test]
    async fn follow_up_regenerates_without_new_history_entry() {
        let backend = FakeBackend::with(|_| {});
        let (mut controller, mut completions, _facts) = controller(Arc::clone(&backend));

        controller.submit_search(form("Paris", "France", ""));
        settle(&mut controller, &mut completions).await;

        assert!(controller.submit_follow_up("  Where to eat?  "));
        assert_eq!(controller.phase(), &Phase::Loading);
        settle(&mut controller, &mut completions).await;

        let rendered = displayed(&controller);
        assert_eq!(rendered.header, "Paris, France");
        let prompt = "Follow-up question about Paris, France: Where to eat?";
        assert_eq!(
            rendered.sections[0].paragraphs,
            vec![vec![format!("Answer to: {prompt}")]]
        );

        assert_eq!(controller.history().len(), 1);
        // History keeps the first snapshot.
        let stored = &controller.history().list()[0].payload;
        assert!(stored
            .advice
            .iter()
            .any(|a| a.content.as_deref() == Some("Stay alert.\n\nKeep copies of documents.")));

        let state = backend.state.lock().unwrap();
        let last = state.generate_calls.last().expect("generate call");
        assert_eq!(last.1, None);
        assert_eq!(last.2.as_deref(), Some(prompt));
    }

    #[tokio::test]
    async fn follow_up_needs_a_displayed_destination_and_a_question() {
        let backend = FakeBackend::with(|_| {});
        let (mut controller, mut completions, _facts) = controller(backend);
        assert!(!controller.submit_follow_up("anything?"));

        controller.submit_search(form("Paris", "France", ""));
        settle(&mut controller, &mut completions).await;
        assert!(!controller.submit_follow_up("   "));
        assert!(matches!(controller.phase(), Phase::Displaying(_)));
    }

    #[tokio::test]
    async fn follow_up_failure_shows_follow_up_error() {
        let backend = FakeBackend::with(|_| {});
        let (mut controller, mut completions, _facts) = controller(Arc::clone(&backend));
        controller.submit_search(form("Paris", "France", ""));
        settle(&mut controller, &mut completions).await;

        backend.state.lock().unwrap().fail_generation = true;
        controller.submit_follow_up("More?");
        settle(&mut controller, &mut completions).await;

        assert_eq!(
            controller.phase(),
            &Phase::Error(FOLLOW_UP_ERROR_MESSAGE.to_string())
        );
        assert_eq!(controller.follow_up_target(), None);
    }

    #[tokio::test]
    async fn history_selection_is_a_cache_read() {
        let backend = FakeBackend::with(|_| {});
        let (mut controller, mut completions, _facts) = controller(Arc::clone(&backend));

        controller.submit_search(form("Paris", "France", ""));
        settle(&mut controller, &mut completions).await;
        controller.submit_search(form("Rome", "Italy", ""));
        settle(&mut controller, &mut completions).await;
        assert_eq!(displayed(&controller).header, "Rome, Italy");

        let fetches = backend.state.lock().unwrap().fetches;
        controller.toggle_sidebar();
        assert!(controller.select_history(0, true));
        assert_eq!(displayed(&controller).header, "Paris, France");
        assert_eq!(backend.state.lock().unwrap().fetches, fetches);
        assert!(!controller.sidebar().is_open());

        controller.toggle_sidebar();
        assert!(controller.select_history(1, false));
        assert!(controller.sidebar().is_open());
        assert!(!controller.select_history(5, false));
    }

    #[tokio::test]
    async fn selecting_history_while_loading_stops_the_ticker() {
        let backend = FakeBackend::with(|_| {});
        let (mut controller, mut completions, _facts) = controller(backend);

        controller.submit_search(form("Paris", "France", ""));
        settle(&mut controller, &mut completions).await;

        controller.submit_search(form("Rome", "Italy", ""));
        assert_eq!(controller.phase(), &Phase::Loading);
        assert!(controller.ticker.is_running());

        assert!(controller.select_history(0, false));
        assert!(!controller.ticker.is_running());
        assert_eq!(controller.current_fact(), None);
        assert_eq!(displayed(&controller).header, "Paris, France");

        settle(&mut controller, &mut completions).await;
        assert_eq!(displayed(&controller).header, "Rome, Italy");
    }

    #[tokio::test]
    async fn not_found_fetch_over_http_shows_empty_result() {
        use advisor_api::{AdvisorClient, ApiClientConfig};
        use axum::http::StatusCode as HttpStatus;
        use axum::routing::{get, post};
        use axum::{Json, Router};
        use serde_json::{json, Value};

        async fn lookup() -> Json<Value> {
            Json(json!({ "results": [{ "id": 7 }] }))
        }
        async fn generate() -> Json<Value> {
            Json(json!({ "status": "ok" }))
        }
        async fn detail() -> (HttpStatus, Json<Value>) {
            (HttpStatus::NOT_FOUND, Json(json!({ "detail": "Not found." })))
        }

        let app = Router::new()
            .route("/api/destinations/", get(lookup))
            .route("/api/destinations/{id}/", get(detail))
            .route("/api/destinations/{id}/generate_advice/", post(generate));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        let client = AdvisorClient::new(ApiClientConfig::with_base_url(&format!("http://{addr}")))
            .expect("client");
        let (facts_tx, _facts_rx) = mpsc::unbounded_channel();
        let ticker = FactTicker::new(Arc::new(Fixed), Duration::from_secs(8), true, facts_tx);
        let (mut controller, mut completions) = Controller::new(Arc::new(client), ticker);

        controller.submit_search(form("Paris", "France", ""));
        let completion = completions.recv().await.expect("flow completion");
        controller.complete(completion);

        assert_eq!(
            controller.phase(),
            &Phase::Error(EMPTY_RESULT_MESSAGE.to_string())
        );
        assert!(controller.history().is_empty());
        assert!(!controller.ticker.is_running());
    }

    #[tokio::test]
    async fn repeated_search_keeps_one_history_entry() {
        let backend = FakeBackend::with(|_| {});
        let (mut controller, mut completions, _facts) = controller(backend);
        for _ in 0..3 {
            controller.submit_search(form("Paris", "France", ""));
            settle(&mut controller, &mut completions).await;
        }
        assert_eq!(controller.history().len(), 1);
    }

    #[tokio::test]
    async fn overlapping_searches_last_completion_wins() {
        let backend = FakeBackend::with(|_| {});
        let (mut controller, mut completions, _facts) = controller(backend);

        controller.submit_search(form("Paris", "France", ""));
        controller.submit_search(form("Rome", "Italy", ""));

        let first = completions.recv().await.expect("first");
        let second = completions.recv().await.expect("second");
        let expected = match &second.result {
            Ok(outcome) => format!("{}, {}", outcome.city, outcome.country),
            Err(e) => panic!("second search failed: {e}"),
        };
        controller.complete(first);
        controller.complete(second);

        assert_eq!(displayed(&controller).header, expected);
        assert_eq!(controller.history().len(), 2);
        assert!(!controller.ticker.is_running());
    }

    #[tokio::test]
    async fn accordion_only_toggles_while_displaying() {
        let backend = FakeBackend::with(|_| {});
        let (mut controller, mut completions, _facts) = controller(backend);
        assert!(!controller.toggle_section(0));

        controller.submit_search(form("Paris", "France", ""));
        settle(&mut controller, &mut completions).await;
        assert!(controller.toggle_section(1));
        assert!(controller.accordion().is_open(1));
        assert!(!controller.accordion().is_open(0));
        assert!(!controller.toggle_section(9));
    }

    #[tokio::test]
    async fn facts_after_loading_are_dropped() {
        let backend = FakeBackend::with(|_| {});
        let (mut controller, mut completions, _facts) = controller(backend);
        controller.show_fact("early".to_string());
        assert_eq!(controller.current_fact(), None);

        controller.submit_search(form("Paris", "France", ""));
        settle(&mut controller, &mut completions).await;
        controller.show_fact("late".to_string());
        assert_eq!(controller.current_fact(), None);
    }
}
