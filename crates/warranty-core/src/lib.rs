//! Building blocks for the warranty registration widget.
//!
//! Pure and synchronous: the warranty code type with its structural
//! validation, the input masks for the code and phone fields, and the
//! registration form draft with field validation and payload assembly.
//! Network and screen flow live in the `warranty-widget` crate.

mod code;
mod error;
mod input;
mod registration;

pub use code::{WarrantyCode, CODE_LEN, GROUP_COUNT, GROUP_LEN, GROUP_MARKERS, SEPARATOR};
pub use error::{Field, FieldError, FormatError};
pub use input::{format_code, format_phone, CodeInput};
pub use registration::{CustomerRegistration, PurchasePlace, RegistrationDraft};
