// Service module exports

pub mod availability;
pub mod booking_api;
pub mod reservation;
pub mod selection;
pub mod settings;
pub mod week;

use std::sync::Arc;

/// Called from a worker thread once its result has been sent, so the UI can
/// wake up and collect it.
pub type ResultHook = Arc<dyn Fn() + Send + Sync>;
