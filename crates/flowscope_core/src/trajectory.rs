use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub t: f64,
    pub state: Vec<f64>,
}

/// A sampled solution: points in increasing time starting at `t = 0`, with
/// `state[i]` belonging to `variables[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
    variables: Vec<String>,
}

impl Trajectory {
    pub(crate) fn new(points: Vec<TrajectoryPoint>, variables: Vec<String>) -> Self {
        Self { points, variables }
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.t).collect()
    }

    /// Values of one state variable over time, or `None` for an unknown name
    /// or a point whose state is too short to hold it.
    pub fn series(&self, variable: &str) -> Option<Vec<f64>> {
        let index = self.variables.iter().position(|v| v == variable)?;
        self.points
            .iter()
            .map(|p| p.state.get(index).copied())
            .collect()
    }
}
