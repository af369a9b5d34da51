mod borrow_service;
mod errors;

pub use borrow_service::{AvailabilityPolicy, BorrowCoordinator};
pub use errors::{BorrowError, Result};
