//! Rewrite rules that grow one expression into its children

mod candidate;
mod rules;

pub use candidate::Candidate;
pub use rules::CandidateGenerator;
