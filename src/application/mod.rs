//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate the store ports
//! to implement the arena's use cases.

pub mod agent;
pub mod market;
pub mod resolution;
pub mod standings;
pub mod submission;

pub use agent::{AgentProfile, AgentService};
pub use market::MarketService;
pub use resolution::{ResolutionReport, ResolutionService};
pub use standings::StandingsService;
pub use submission::SubmissionService;
