mod app;
mod booking_dialog;
pub(crate) mod views;

pub use app::BookingApp;
