pub mod distribution;
pub mod reports;
pub mod seeds;
pub mod tester;

pub use distribution::{DistributionSummary, summarize_distribution};
pub use seeds::resolve_seed_inputs;
pub use tester::*;
