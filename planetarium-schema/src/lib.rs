pub mod planet;

pub use planet::{FieldViolation, Planet};
