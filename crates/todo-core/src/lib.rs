//! Core types for the todo system.
//!
//! [`Todo`] is a single task and [`TodoList`] an ordered, named collection of
//! them. Both are single-threaded: todos are shared handles, and every view a
//! list hands out aliases the records it stores.

pub mod document;
pub mod error;
pub mod filter;
pub mod list;
pub mod status;
pub mod todo;

pub use error::{Result, TodoError};
pub use filter::TodoFilter;
pub use list::TodoList;
pub use status::Status;
pub use todo::Todo;
