pub mod action;
pub mod field_status;
pub mod shift_record;

pub use action::Action;
pub use field_status::FieldStatus;
pub use shift_record::ShiftRecord;
