// Adapters layer: concrete implementations of the domain ports.

pub mod fixtures;
pub mod notifier;
pub mod session_store;

pub use fixtures::SeededFixtures;
pub use notifier::{MemoryNotifier, Notification, TracingNotifier};
pub use session_store::InMemoryIdentityStore;
