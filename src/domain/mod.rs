// Domain layer - weather models, chart projection and dashboard view models
pub mod chart;
pub mod condition;
pub mod dashboard;
pub mod weather;
