pub mod hours;
pub mod policy;
pub mod stats;
