pub mod model;
pub mod validation;

pub use model::{CreateItemRequest, Item, NewItem};
pub use validation::{validate, FieldViolation, ValidationError, ViolationReason};
