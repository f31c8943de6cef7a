pub mod events;
pub mod fetcher;
pub mod transport;
