pub mod grouping;
pub mod metrics;
pub mod timeline;
