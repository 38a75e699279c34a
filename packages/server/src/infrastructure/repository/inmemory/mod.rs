//! In-memory repository implementations.

mod relay;

pub use relay::InMemoryRelayRepository;
