use crate::error::FrameError;
use crate::float_trait::Float;

use itertools::Itertools;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Measurement window `[start, start + length]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Frame<T> {
    pub start: T,
    pub length: T,
}

impl<T> Frame<T>
where
    T: Float,
{
    pub fn new(start: T, length: T) -> Self {
        Self { start, length }
    }

    #[inline]
    pub fn stop(&self) -> T {
        self.start + self.length
    }

    #[inline]
    pub fn mid(&self) -> T {
        self.start + T::half() * self.length
    }
}

/// Ordered list of [Frame]s
///
/// Stateful frame integration expects frames to be non-overlapping and sorted by start, this is
/// not checked.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrameList<T>(pub Vec<Frame<T>>);

impl<T> FrameList<T>
where
    T: Float,
{
    /// Frames from parallel arrays of starts and lengths
    pub fn from_starts_lengths(starts: &[T], lengths: &[T]) -> Result<Self, FrameError> {
        if starts.len() != lengths.len() {
            return Err(FrameError::LengthMismatch {
                starts: starts.len(),
                lengths: lengths.len(),
            });
        }
        Ok(starts
            .iter()
            .zip(lengths)
            .map(|(&start, &length)| Frame::new(start, length))
            .collect())
    }

    /// Contiguous frames between successive boundaries
    pub fn from_boundaries(boundaries: &[T]) -> Self {
        boundaries
            .iter()
            .tuple_windows()
            .map(|(&a, &b)| Frame::new(a, b - a))
            .collect()
    }

    /// `count` contiguous frames of the same `length` beginning at `start`
    pub fn uniform(start: T, length: T, count: usize) -> Self {
        (0..count)
            .map(|i| Frame::new(start + T::from_count(i) * length, length))
            .collect()
    }

    pub fn starts(&self) -> Vec<T> {
        self.iter().map(|frame| frame.start).collect()
    }

    pub fn lengths(&self) -> Vec<T> {
        self.iter().map(|frame| frame.length).collect()
    }

    pub fn mids(&self) -> Vec<T> {
        self.iter().map(Frame::mid).collect()
    }
}

impl<T> Deref for FrameList<T> {
    type Target = [Frame<T>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<Vec<Frame<T>>> for FrameList<T> {
    fn from(v: Vec<Frame<T>>) -> Self {
        Self(v)
    }
}

impl<T> From<&[(T, T)]> for FrameList<T>
where
    T: Float,
{
    fn from(pairs: &[(T, T)]) -> Self {
        pairs
            .iter()
            .map(|&(start, length)| Frame::new(start, length))
            .collect()
    }
}

impl<T> FromIterator<Frame<T>> for FrameList<T> {
    fn from_iter<I: IntoIterator<Item = Frame<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
