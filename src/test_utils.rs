//! Fakes for the page, the chart library, the backend and the event loop.

use crate::chart::{ChartBackend, ChartError, ChartSpec, SlotId};
use crate::config::ControllerConfig;
use crate::controller::RequestController;
use crate::render::{Field, Region, RenderTarget, Tone};
use crate::scheduler::Scheduler;
use crate::transport::{ForecastTransport, TransportError};
use crate::views::ResultView;
use common::ForecastRequest;
use serde_json::json;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;
use tokio::sync::oneshot;

type Reply = Result<String, TransportError>;

// ===================== Page =====================

#[derive(Default)]
struct PageRecord {
    visible: HashMap<Region, bool>,
    texts: HashMap<Field, String>,
    error_fields: HashSet<Field>,
    change_tone: Option<Tone>,
}

/// Remembers the last value written to every region and field.
#[derive(Clone, Default)]
pub struct RecordingTarget {
    page: Rc<RefCell<PageRecord>>,
}

impl RecordingTarget {
    pub fn is_visible(&self, region: Region) -> bool {
        self.page.borrow().visible.get(&region).copied().unwrap_or(false)
    }

    pub fn text(&self, field: Field) -> Option<String> {
        self.page.borrow().texts.get(&field).cloned()
    }

    pub fn is_error_text(&self, field: Field) -> bool {
        self.page.borrow().error_fields.contains(&field)
    }

    pub fn change_tone(&self) -> Option<Tone> {
        self.page.borrow().change_tone
    }

    /// Result views currently visible, in display order.
    pub fn visible_views(&self) -> Vec<ResultView> {
        ResultView::ALL
            .into_iter()
            .filter(|view| self.is_visible(view.region()))
            .collect()
    }
}

impl RenderTarget for RecordingTarget {
    fn set_visible(&self, region: Region, visible: bool) {
        self.page.borrow_mut().visible.insert(region, visible);
    }

    fn set_text(&self, field: Field, text: &str) {
        let mut page = self.page.borrow_mut();
        page.error_fields.remove(&field);
        page.texts.insert(field, text.to_string());
    }

    fn set_error_text(&self, field: Field, text: &str) {
        let mut page = self.page.borrow_mut();
        page.error_fields.insert(field);
        page.texts.insert(field, text.to_string());
    }

    fn set_change_tone(&self, tone: Tone) {
        self.page.borrow_mut().change_tone = Some(tone);
    }
}

// ===================== Charts =====================

#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    Draw { slot: SlotId, handle: u64 },
    Destroy { handle: u64 },
}

#[derive(Default)]
struct ChartLog {
    next_handle: u64,
    live: HashMap<u64, SlotId>,
    events: Vec<ChartEvent>,
    specs: Vec<(SlotId, ChartSpec)>,
    fail_next: Option<String>,
}

/// Chart handle of the recording backend; ids start at 1.
#[derive(Debug)]
pub struct FakeHandle(pub u64);

/// Records draw/destroy calls instead of drawing.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    log: Rc<RefCell<ChartLog>>,
}

impl RecordingBackend {
    pub fn fail_next_draw(&self, message: &str) {
        self.log.borrow_mut().fail_next = Some(message.to_string());
    }

    pub fn live_count(&self, slot: SlotId) -> usize {
        self.log.borrow().live.values().filter(|s| **s == slot).count()
    }

    pub fn draw_count(&self, slot: SlotId) -> usize {
        self.log
            .borrow()
            .events
            .iter()
            .filter(|e| matches!(e, ChartEvent::Draw { slot: s, .. } if *s == slot))
            .count()
    }

    pub fn destroyed(&self) -> Vec<u64> {
        self.log
            .borrow()
            .events
            .iter()
            .filter_map(|e| match e {
                ChartEvent::Destroy { handle } => Some(*handle),
                ChartEvent::Draw { .. } => None,
            })
            .collect()
    }

    pub fn events(&self) -> Vec<ChartEvent> {
        self.log.borrow().events.clone()
    }

    pub fn last_spec(&self, slot: SlotId) -> Option<ChartSpec> {
        self.log
            .borrow()
            .specs
            .iter()
            .rev()
            .find(|(s, _)| *s == slot)
            .map(|(_, spec)| spec.clone())
    }
}

impl ChartBackend for RecordingBackend {
    type Handle = FakeHandle;

    fn draw(&self, slot: SlotId, spec: &ChartSpec) -> Result<FakeHandle, ChartError> {
        let mut log = self.log.borrow_mut();
        if let Some(message) = log.fail_next.take() {
            return Err(ChartError(message));
        }
        log.next_handle += 1;
        let handle = log.next_handle;
        log.live.insert(handle, slot);
        log.events.push(ChartEvent::Draw { slot, handle });
        log.specs.push((slot, spec.clone()));
        Ok(FakeHandle(handle))
    }

    fn destroy(&self, handle: FakeHandle) {
        let mut log = self.log.borrow_mut();
        log.live.remove(&handle.0);
        log.events.push(ChartEvent::Destroy { handle: handle.0 });
    }
}

// ===================== Scheduler =====================

struct PendingTask {
    due: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    seq: u64,
    pending: Vec<PendingTask>,
}

/// Virtual clock: tasks only run inside [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    /// Moves time forward by `ms`, running due tasks in order.
    pub fn advance(&self, ms: u64) {
        let until = self.clock.borrow().now + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let position = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= until)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                position.map(|i| {
                    let pending = clock.pending.remove(i);
                    clock.now = pending.due;
                    pending.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = until;
    }

    pub fn pending_count(&self) -> usize {
        self.clock.borrow().pending.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        clock.seq += 1;
        let entry = PendingTask {
            due: clock.now + u64::from(delay_ms),
            seq: clock.seq,
            task,
        };
        clock.pending.push(entry);
    }
}

// ===================== Transports =====================

/// Answers requests from a fixed script, in order.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Rc<RefCell<VecDeque<Reply>>>,
    requests: Rc<RefCell<Vec<ForecastRequest>>>,
}

impl ScriptedTransport {
    pub fn with(responses: Vec<Reply>) -> Self {
        Self {
            responses: Rc::new(RefCell::new(responses.into())),
            requests: Rc::default(),
        }
    }

    pub fn requests(&self) -> Vec<ForecastRequest> {
        self.requests.borrow().clone()
    }
}

impl ForecastTransport for ScriptedTransport {
    async fn post_forecast(&self, request: &ForecastRequest) -> Result<String, TransportError> {
        self.requests.borrow_mut().push(*request);
        let reply = self.responses.borrow_mut().pop_front();
        reply.unwrap_or_else(|| Err(TransportError("no scripted response".to_string())))
    }
}

/// Holds every request open until the test resolves it.
#[derive(Clone, Default)]
pub struct DeferredTransport {
    waiting: Rc<RefCell<Vec<Option<oneshot::Sender<Reply>>>>>,
}

/// Test-side handle resolving the requests of a [`DeferredTransport`].
pub struct PendingResponses {
    waiting: Rc<RefCell<Vec<Option<oneshot::Sender<Reply>>>>>,
}

impl DeferredTransport {
    pub fn new() -> (Self, PendingResponses) {
        let transport = Self::default();
        let pending = PendingResponses {
            waiting: transport.waiting.clone(),
        };
        (transport, pending)
    }
}

impl PendingResponses {
    /// Number of requests issued so far.
    pub fn issued(&self) -> usize {
        self.waiting.borrow().len()
    }

    /// Resolves the `index`-th issued request (0-based).
    pub fn resolve(&self, index: usize, reply: Reply) {
        let sender = self.waiting.borrow_mut()[index]
            .take()
            .expect("request already resolved");
        let _ = sender.send(reply);
    }

    /// Resolves the oldest request still open.
    pub fn resolve_next(&self, reply: Reply) {
        let index = self
            .waiting
            .borrow()
            .iter()
            .position(Option::is_some)
            .expect("no open request");
        self.resolve(index, reply);
    }
}

impl ForecastTransport for DeferredTransport {
    async fn post_forecast(&self, _request: &ForecastRequest) -> Result<String, TransportError> {
        let (sender, receiver) = oneshot::channel();
        self.waiting.borrow_mut().push(Some(sender));
        receiver
            .await
            .unwrap_or_else(|_| Err(TransportError("request abandoned".to_string())))
    }
}

// ===================== Page harness =====================

pub type TestController<T> = RequestController<T, RecordingTarget, RecordingBackend, ManualScheduler>;

/// A controller wired to fakes, with the fakes kept at hand for assertions.
pub struct TestPage<T: ForecastTransport> {
    pub controller: TestController<T>,
    pub target: RecordingTarget,
    pub backend: RecordingBackend,
    pub scheduler: ManualScheduler,
}

impl<T: ForecastTransport> TestPage<T> {
    pub fn new(transport: T, config: ControllerConfig) -> Self {
        let target = RecordingTarget::default();
        let backend = RecordingBackend::default();
        let scheduler = ManualScheduler::default();
        let controller = RequestController::new(
            transport,
            target.clone(),
            backend.clone(),
            scheduler.clone(),
            config,
        );
        Self {
            controller,
            target,
            backend,
            scheduler,
        }
    }
}

// ===================== Response bodies =====================

pub fn day_body(next_day: f64, change: f64, change_percent: f64) -> String {
    json!({
        "success": true,
        "current_price": next_day - change,
        "prediction": {
            "next_day": next_day,
            "change": change,
            "change_percent": change_percent,
        }
    })
    .to_string()
}

fn aggregates(values: &[f64]) -> (f64, f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    (min, avg, max)
}

pub fn week_body(daily: &[f64]) -> String {
    let (min, avg, max) = aggregates(daily);
    json!({
        "success": true,
        "prediction": { "min": min, "avg": avg, "max": max, "daily": daily }
    })
    .to_string()
}

pub fn month_body(weekly_avg: &[f64]) -> String {
    let (min, avg, max) = aggregates(weekly_avg);
    json!({
        "success": true,
        "prediction": { "min": min, "avg": avg, "max": max, "weekly_avg": weekly_avg }
    })
    .to_string()
}

pub fn failure_body(error: Option<&str>) -> String {
    let body = match error {
        Some(error) => json!({ "success": false, "error": error }),
        None => json!({ "success": false }),
    };
    body.to_string()
}
