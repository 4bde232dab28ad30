pub mod cycle_summary;
pub mod day_field;
pub mod day_kind;
pub mod day_record;
