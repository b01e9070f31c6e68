pub mod analyzers;
pub mod dataset;
pub mod filters;
pub mod output;
pub mod plot;
