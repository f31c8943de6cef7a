pub mod channel_event_sink;
pub mod fetch_events_container;
pub(crate) mod hook_adapters;
pub mod progress_event;
pub mod progress_watch_sink;

pub use channel_event_sink::{ChannelEventSink, FetchEvent};
pub use fetch_events_container::FetchEventsContainer;
pub use progress_event::ProgressEvent;
pub use progress_watch_sink::{FetchProgress, FetchStatus, ProgressWatchSink};
