pub mod calculator;
pub mod clock;
pub mod ingest;
pub mod logic;
pub mod store;
