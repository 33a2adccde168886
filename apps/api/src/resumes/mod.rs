// Owner-scoped resume storage. Every stored resume carries a cached
// `ats_score` from the structured estimator, refreshed on each write.

pub mod handlers;
pub mod store;
