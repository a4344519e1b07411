use gloo_timers::callback::Timeout;
use gold_forecast::Scheduler;

/// Runs delayed tasks on the browser event loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        log::trace!("Scheduling task in {} ms", delay_ms);
        // Dropping a Timeout cancels it, so hand it to the JS side
        Timeout::new(delay_ms, task).forget();
    }
}
