pub mod policy;
pub mod rules;
