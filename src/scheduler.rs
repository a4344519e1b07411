/// A one-shot delayed callback on the UI event loop.
///
/// There is no cancellation: callers guard their task with a generation token
/// instead.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}
