// TodoMatic - in-memory to-do task store with display filters

pub mod cli;
pub mod filter;
pub mod fixture;
pub mod ident;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use filter::{Filter, UnknownFilter, visible};
pub use fixture::FixtureError;
pub use ident::{ID_PREFIX, IdSource, SequentialSource, UuidSource};
pub use store::{StoreError, TaskStore};
pub use task::Task;
