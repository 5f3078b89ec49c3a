pub mod display_fields;
pub mod metadata;
pub mod period_record;
