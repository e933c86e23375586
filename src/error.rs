use thiserror::Error;

/// Error types for valuation matrix construction and access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValuationError {
    /// Input with no rows or no columns
    #[error("A valuation matrix needs at least one agent and one object.")]
    EmptyMatrix,

    /// Row whose length does not match the first row
    #[error("Row {row} has {found} values but the first row has {expected}.")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Agent-indexed access on a matrix reduced to zero agents
    #[error("The valuation matrix has no agents left.")]
    NoAgents,

    /// Object-indexed access on a matrix reduced to zero objects
    #[error("The valuation matrix has no objects left.")]
    NoObjects,

    #[error("Agent {agent} is out of range; there are {num_of_agents} agents.")]
    AgentOutOfRange { agent: usize, num_of_agents: usize },

    #[error("Object {object} is out of range; there are {num_of_objects} objects.")]
    ObjectOutOfRange {
        object: usize,
        num_of_objects: usize,
    },
}

impl ValuationError {
    /// Malformed input, or an axis emptied by reductions
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            ValuationError::EmptyMatrix
                | ValuationError::RaggedRow { .. }
                | ValuationError::NoAgents
                | ValuationError::NoObjects
        )
    }

    /// Agent or object index outside its valid domain
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            ValuationError::AgentOutOfRange { .. } | ValuationError::ObjectOutOfRange { .. }
        )
    }
}

/// Result type alias for valuation matrix operations
pub type Result<T> = std::result::Result<T, ValuationError>;
