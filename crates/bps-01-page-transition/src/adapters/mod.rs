//! Adapters: in-process implementations of the ports.

pub mod input_lock;
pub mod memory_navigator;

pub use input_lock::InputLock;
pub use memory_navigator::MemoryNavigator;
