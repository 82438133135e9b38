use crate::simplex::objective::{Counted, Objective};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Simplex vertex: a point together with its objective value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: Vec<f64>,
    pub value: f64,
}

impl Vertex {
    /// `NaN` values are ordered after everything else
    fn by_value(a: &Self, b: &Self) -> Ordering {
        a.value
            .partial_cmp(&b.value)
            .unwrap_or_else(|| a.value.is_nan().cmp(&b.value.is_nan()))
    }
}

/// `a * u + b * v`
pub(super) fn combine(a: f64, u: &[f64], b: f64, v: &[f64]) -> Vec<f64> {
    u.iter().zip(v).map(|(&u, &v)| a * u + b * v).collect()
}

/// `n + 1` vertices of an `n`-dimensional simplex ordered from best to worst
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Simplex {
    vertices: Vec<Vertex>,
}

impl Simplex {
    /// Initial simplex around `start`
    ///
    /// The first vertex is `0.9 * start`, the `i`-th of the others is `start` with its `i`-th
    /// component multiplied by 1.1, or set to 0.1 if it is zero.
    pub(super) fn around<O>(start: &[f64], objective: &mut Counted<O>) -> Result<Self, O::Error>
    where
        O: Objective,
    {
        let first = start.iter().map(|&x| 0.9 * x).collect();
        let points = std::iter::once(first).chain((0..start.len()).map(|i| {
            let mut x = start.to_vec();
            x[i] = if x[i] == 0.0 { 0.1 } else { 1.1 * x[i] };
            x
        }));
        let vertices = points
            .map(|mut x| objective.evaluate(&mut x).map(|value| Vertex { x, value }))
            .collect::<Result<Vec<_>, _>>()?;
        let mut simplex = Self { vertices };
        simplex.sort();
        Ok(simplex)
    }

    /// Stable sort by objective value
    pub(super) fn sort(&mut self) {
        self.vertices.sort_by(Vertex::by_value);
    }

    /// Number of dimensions
    #[inline]
    pub fn dim(&self) -> usize {
        self.vertices.len() - 1
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn best(&self) -> &Vertex {
        &self.vertices[0]
    }

    #[inline]
    pub fn worst(&self) -> &Vertex {
        &self.vertices[self.dim()]
    }

    /// Centroid of all vertices but the worst one
    pub(super) fn centroid(&self) -> Vec<f64> {
        let n = self.dim();
        let mut centroid = vec![0.0; n];
        for vertex in &self.vertices[..n] {
            for (c, &x) in centroid.iter_mut().zip(&vertex.x) {
                *c += x;
            }
        }
        let scale = 1.0 / n as f64;
        centroid.iter_mut().for_each(|c| *c *= scale);
        centroid
    }

    /// Every vertex is within `x_tol` of the best one in each coordinate and within `f_tol` of it
    /// in value
    pub fn is_converged(&self, x_tol: f64, f_tol: f64) -> bool {
        let best = self.best();
        self.vertices[1..].iter().all(|vertex| {
            (vertex.value - best.value).abs() <= f_tol
                && vertex
                    .x
                    .iter()
                    .zip(&best.x)
                    .all(|(&x, &b)| (x - b).abs() <= x_tol)
        })
    }

    /// Move all but the best and the worst vertices half way towards the best one
    pub(super) fn shrink_inner<O>(&mut self, objective: &mut Counted<O>) -> Result<(), O::Error>
    where
        O: Objective,
    {
        let n = self.dim();
        let (best, rest) = self.vertices.split_at_mut(1);
        let best = &best[0].x;
        for vertex in &mut rest[..n.saturating_sub(1)] {
            vertex.x = combine(0.5, &vertex.x, 0.5, best);
            vertex.value = objective.evaluate(&mut vertex.x)?;
        }
        Ok(())
    }

    /// Replace the worst vertex and restore the order
    pub(super) fn replace_worst(&mut self, vertex: Vertex) {
        let n = self.dim();
        self.vertices[n] = vertex;
        self.sort();
    }
}
