//! Valuation matrix library
//!
//! This library provides the valuation matrix used as input by fair division
//! algorithms with additive valuations: each row is an agent, each column an object,
//! and each cell the value that agent assigns to that object.

pub mod agent_values;
pub mod display;
pub mod error;
pub mod input;
pub mod valuation_matrix;

// Re-export main types
pub use agent_values::{AgentValues, AgentValuesIter};
pub use display::{DEFAULT_MAX_LINE_WIDTH, RenderOptions};
pub use error::{Result, ValuationError};
pub use input::ValuationInput;
pub use valuation_matrix::ValuationMatrix;
