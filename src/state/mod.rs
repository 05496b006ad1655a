pub mod challenge;
pub mod layout;

pub use challenge::ChallengeRun;
