pub mod backup;
pub mod calculator;
pub mod cycle;
pub mod export;
pub mod log;
pub mod reconcile;
pub mod state;
