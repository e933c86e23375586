use faer::Mat;
use std::{fmt, ops::Range};

/// Read-only view of one agent's values for every object
#[derive(Clone, Copy)]
pub struct AgentValues<'a> {
    values: &'a Mat<f64>,
    agent: usize,
}

impl<'a> AgentValues<'a> {
    /// The caller guarantees `agent < values.nrows()`
    pub(crate) fn new(values: &'a Mat<f64>, agent: usize) -> Self {
        Self { values, agent }
    }

    /// Index of the agent this row belongs to
    pub fn agent(&self) -> usize {
        self.agent
    }

    /// Number of objects in the row
    pub fn len(&self) -> usize {
        self.values.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value for a single object, `None` when out of range
    pub fn get(&self, object: usize) -> Option<f64> {
        (object < self.len()).then(|| self.values[(self.agent, object)])
    }

    pub fn iter(&self) -> AgentValuesIter<'a> {
        AgentValuesIter {
            values: self.values,
            agent: self.agent,
            objects: 0..self.values.ncols(),
        }
    }

    /// Agent's value for the bundle of all objects
    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

/// Iterator over an agent's values in object order
#[derive(Clone)]
pub struct AgentValuesIter<'a> {
    values: &'a Mat<f64>,
    agent: usize,
    objects: Range<usize>,
}

impl Iterator for AgentValuesIter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.objects
            .next()
            .map(|object| self.values[(self.agent, object)])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.objects.size_hint()
    }
}

impl DoubleEndedIterator for AgentValuesIter<'_> {
    fn next_back(&mut self) -> Option<f64> {
        self.objects
            .next_back()
            .map(|object| self.values[(self.agent, object)])
    }
}

impl ExactSizeIterator for AgentValuesIter<'_> {}

impl<'a> IntoIterator for AgentValues<'a> {
    type Item = f64;
    type IntoIter = AgentValuesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for AgentValues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for AgentValues<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl PartialEq<[f64]> for AgentValues<'_> {
    fn eq(&self, other: &[f64]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter().copied())
    }
}

impl PartialEq<Vec<f64>> for AgentValues<'_> {
    fn eq(&self, other: &Vec<f64>) -> bool {
        *self == other[..]
    }
}

impl<const N: usize> PartialEq<[f64; N]> for AgentValues<'_> {
    fn eq(&self, other: &[f64; N]) -> bool {
        *self == other[..]
    }
}
