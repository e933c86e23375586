//! A valuation matrix is a matrix `v` in which each row represents an agent, each column
//! represents an object, and `v[i][j]` is the value of agent `i` to object `j`.
//!
//! It is the input to fair division algorithms with additive valuations, for both
//! divisible and indivisible goods.

use crate::{
    agent_values::AgentValues,
    display::{RenderOptions, render},
    error::{Result, ValuationError},
    input::ValuationInput,
};
use faer::{Mat, MatRef};
use log::{debug, trace};
use std::{
    fmt::{self, Display, Formatter},
    ops::{Index, Range},
    sync::Arc,
};

/// Immutable view over a dense agents × objects value array.
///
/// Cloning, or constructing from another `ValuationMatrix`, shares the backing
/// storage. Reductions such as [`ValuationMatrix::without_agent`] allocate a fresh
/// array and never touch the source.
///
/// ```
/// use valuation_matrix::ValuationMatrix;
///
/// let v = ValuationMatrix::new([[1, 4, 7], [6, 3, 0]]).unwrap();
/// assert_eq!(v[(0, 1)], 4.0);
/// assert_eq!(v.agent_value_for_bundle(0, Some(&[0, 2])).unwrap(), 8.0);
/// assert_eq!(v.agent_value_for_bundle(1, None).unwrap(), 0.0);
/// assert_eq!(v.without_object(1).unwrap().to_string(), "[[1 7]\n [6 0]]");
/// ```
#[derive(Clone)]
pub struct ValuationMatrix {
    v: Arc<Mat<f64>>,
    num_of_agents: usize,
    num_of_objects: usize,
}

impl ValuationMatrix {
    /// Build from a dense array, a list of rows, or another matrix
    pub fn new(input: impl Into<ValuationInput>) -> Result<Self> {
        let v = input.into().into_storage()?;
        Ok(Self::from_storage(v))
    }

    fn from_storage(v: Arc<Mat<f64>>) -> Self {
        let (num_of_agents, num_of_objects) = (v.nrows(), v.ncols());
        trace!("valuation matrix with {num_of_agents} agents and {num_of_objects} objects");
        Self {
            v,
            num_of_agents,
            num_of_objects,
        }
    }

    pub(crate) fn storage(&self) -> Arc<Mat<f64>> {
        Arc::clone(&self.v)
    }

    pub fn num_of_agents(&self) -> usize {
        self.num_of_agents
    }

    pub fn num_of_objects(&self) -> usize {
        self.num_of_objects
    }

    /// `(num_of_agents, num_of_objects)`
    pub fn shape(&self) -> (usize, usize) {
        (self.num_of_agents, self.num_of_objects)
    }

    /// Agent indices; the range can be cloned to iterate again
    pub fn agents(&self) -> Range<usize> {
        0..self.num_of_agents
    }

    /// Object indices; the range can be cloned to iterate again
    pub fn objects(&self) -> Range<usize> {
        0..self.num_of_objects
    }

    /// Read-only view of the dense value array
    pub fn as_mat(&self) -> MatRef<'_, f64> {
        let values: &Mat<f64> = &self.v;
        values.as_ref()
    }

    /// Whether both handles read the same backing array
    pub fn shares_storage_with(&self, other: &ValuationMatrix) -> bool {
        Arc::ptr_eq(&self.v, &other.v)
    }

    fn check_agent(&self, agent: usize) -> Result<()> {
        if self.num_of_agents == 0 {
            return Err(ValuationError::NoAgents);
        }
        if agent >= self.num_of_agents {
            return Err(ValuationError::AgentOutOfRange {
                agent,
                num_of_agents: self.num_of_agents,
            });
        }
        Ok(())
    }

    fn check_object(&self, object: usize) -> Result<()> {
        if self.num_of_objects == 0 {
            return Err(ValuationError::NoObjects);
        }
        if object >= self.num_of_objects {
            return Err(ValuationError::ObjectOutOfRange {
                object,
                num_of_objects: self.num_of_objects,
            });
        }
        Ok(())
    }

    /// Agent's value for a single object
    pub fn value(&self, agent: usize, object: usize) -> Result<f64> {
        self.check_agent(agent)?;
        self.check_object(object)?;
        Ok(self.v[(agent, object)])
    }

    /// Agent's values for all objects
    pub fn agent_values(&self, agent: usize) -> Result<AgentValues<'_>> {
        self.check_agent(agent)?;
        Ok(AgentValues::new(&self.v, agent))
    }

    /// Every agent's row, in agent order
    pub fn rows(&self) -> impl Iterator<Item = AgentValues<'_>> + '_ {
        self.agents().map(move |agent| AgentValues::new(&self.v, agent))
    }

    /// Copy of the values as a list of rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Total value of `agent` for `bundle`; a missing bundle is worth 0.
    ///
    /// Objects appearing more than once are counted each time.
    pub fn agent_value_for_bundle(&self, agent: usize, bundle: Option<&[usize]>) -> Result<f64> {
        match bundle {
            None => {
                self.check_agent(agent)?;
                Ok(0.0)
            }
            Some(objects) => self.agent_value_for_objects(agent, objects.iter().copied()),
        }
    }

    /// Total value of `agent` for the given objects
    pub fn agent_value_for_objects(
        &self,
        agent: usize,
        objects: impl IntoIterator<Item = usize>,
    ) -> Result<f64> {
        self.check_agent(agent)?;
        objects
            .into_iter()
            .try_fold(0.0, |total: f64, object| -> Result<f64> {
                self.check_object(object)?;
                Ok(total + self.v[(agent, object)])
            })
    }

    /// Copy of this matrix in which the given agent is removed
    pub fn without_agent(&self, agent: usize) -> Result<ValuationMatrix> {
        self.check_agent(agent)?;
        debug!(
            "removing agent {agent} from {}x{} valuation matrix",
            self.num_of_agents, self.num_of_objects
        );

        let reduced = Mat::from_fn(self.num_of_agents - 1, self.num_of_objects, |i, j| {
            let source = if i < agent { i } else { i + 1 };
            self.v[(source, j)]
        });
        Ok(Self::from_storage(Arc::new(reduced)))
    }

    /// Copy of this matrix in which the given object is removed
    pub fn without_object(&self, object: usize) -> Result<ValuationMatrix> {
        self.check_object(object)?;
        debug!(
            "removing object {object} from {}x{} valuation matrix",
            self.num_of_agents, self.num_of_objects
        );

        let reduced = Mat::from_fn(self.num_of_agents, self.num_of_objects - 1, |i, j| {
            let source = if j < object { j } else { j + 1 };
            self.v[(i, source)]
        });
        Ok(Self::from_storage(Arc::new(reduced)))
    }

    /// Same shape and exactly equal elements, with no floating point tolerance
    pub fn equals(&self, other: &ValuationMatrix) -> bool {
        self.shape() == other.shape()
            && self
                .agents()
                .all(|i| self.objects().all(|j| self.v[(i, j)] == other.v[(i, j)]))
    }

    /// Bracketed rendering wrapped to `options.max_line_width`
    pub fn render(&self, options: &RenderOptions) -> String {
        render(self, options)
    }
}

impl Index<(usize, usize)> for ValuationMatrix {
    type Output = f64;

    fn index(&self, (agent, object): (usize, usize)) -> &f64 {
        assert!(
            agent < self.num_of_agents && object < self.num_of_objects,
            "index ({agent}, {object}) out of bounds for {}x{} valuation matrix",
            self.num_of_agents,
            self.num_of_objects
        );
        &self.v[(agent, object)]
    }
}

impl PartialEq for ValuationMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl TryFrom<Vec<Vec<f64>>> for ValuationMatrix {
    type Error = ValuationError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl TryFrom<Mat<f64>> for ValuationMatrix {
    type Error = ValuationError;

    fn try_from(values: Mat<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl Display for ValuationMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &RenderOptions::default()))
    }
}

impl fmt::Debug for ValuationMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuationMatrix")
            .field("num_of_agents", &self.num_of_agents)
            .field("num_of_objects", &self.num_of_objects)
            .field("v", &self.to_rows())
            .finish()
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for ValuationMatrix {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            serializer.collect_seq(self.rows().map(|row| row.to_vec()))
        }
    }

    impl<'de> Deserialize<'de> for ValuationMatrix {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
            let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
            ValuationMatrix::new(rows).map_err(serde::de::Error::custom)
        }
    }
}
