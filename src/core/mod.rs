// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{contains_ignore_case, is_candidate, is_sensitivity_safe, matches_skin_type};
pub use matcher::{Matcher, MatchResult};
pub use scoring::{calculate_match_breakdown, calculate_match_score};
