// Domain layer - models, rules, and errors

pub mod errors;
pub mod model;
pub mod rules;
