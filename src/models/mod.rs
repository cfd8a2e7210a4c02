//! Data models for the application state.
//!
//! Contains:
//! - [`Wave`] - Default wave record type
//! - [`AppSnapshot`] - Serializable copy of every registry value
//! - [`display_account`] - Account identifier formatting

mod account;
mod snapshot;
mod wave;

pub use account::display_account;
pub use snapshot::AppSnapshot;
pub use wave::Wave;
