pub mod types;
pub mod block;
pub mod scenario;

pub use block::Block;
pub use scenario::{ExpectedHead, Scenario, ScenarioError};
pub use types::{BlockId, Weight};
