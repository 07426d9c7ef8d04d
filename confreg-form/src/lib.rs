//! Confreg registration rules
//!
//! Platform-agnostic logic for the Confreg event registration form: the
//! activity catalog with its schedule, selection state with conflict and
//! cost derivation, and the field validators that gate submission. This
//! crate has no UI or browser dependencies and is tested natively.

pub mod catalog;
pub mod payment;
pub mod registrant;
pub mod registration;
pub mod selection;
pub mod shirt;
pub mod validate;

// Re-export commonly used types
pub use catalog::{Activity, ActivityCatalog, TimeSlot};
pub use payment::{CardDetails, PaymentInfo, PaymentMethod};
pub use registrant::{JobRole, RegistrantInfo};
pub use registration::Registration;
pub use selection::ActivitySelection;
pub use shirt::{ShirtColor, ShirtDesign, ShirtSelection};
pub use validate::{
    Field, FieldError, ValidationReport, check_card_number, check_card_zip, check_cvv,
    check_email, check_name,
};
