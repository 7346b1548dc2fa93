//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the learning core and its
//! collaborators. The traits are owned by the core and implemented by
//! adapters.

pub mod console;
pub mod observer;
pub mod repository;
pub mod selector;

pub use console::Console;
pub use observer::Observer;
pub use repository::TableRepository;
pub use selector::MoveSelector;
