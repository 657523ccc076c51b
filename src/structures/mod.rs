//! Container abstractions shared by the lock manager and its collaborators.
//!
//! - [`WaiterQueue`]: FIFO sequence with 1-based positional search
//! - [`KeyedStore`]: key to owned value mapping with lazy insertion

mod queue;
mod store;

pub use queue::WaiterQueue;
pub use store::KeyedStore;
