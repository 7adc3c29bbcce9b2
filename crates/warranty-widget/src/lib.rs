//! Headless warranty registration widget.
//!
//! Drives the two-screen flow of the certificate widget (code entry,
//! then customer registration) against the warranty backend. All
//! screen state lives in explicit per-screen objects a host UI renders;
//! transitions are guarded and only ever move forward:
//! code entry → registration → submitted.

mod client;
mod error;
mod flow;
mod models;

pub use client::{HttpWarrantyClient, WarrantyBackend};
pub use error::WidgetError;
pub use flow::{
    CodeEntryScreen, RegistrationScreen, Screen, ScreenId, SubmittedScreen, WarrantyWidget,
};
pub use models::ModelSuggestions;
