//! Common types used across the application.

pub mod id;
pub mod month;
pub mod pagination;

pub use id::*;
pub use month::{CycleMonth, CycleMonthError};
pub use pagination::{PageMeta, PageRequest, PageResponse};
