pub mod fetch_event_sink;

pub use fetch_event_sink::{FetchEventSink, NoopEventSink};
