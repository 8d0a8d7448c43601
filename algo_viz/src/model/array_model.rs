// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// The array under sort. Indices passed in by the runners are always in bounds, and no
/// access counting happens here, that lives in [`crate::SortStats`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrayModel {
    values: Vec<i64>,
}

impl ArrayModel {
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self { Self { values } }

    #[must_use]
    pub fn len(&self) -> usize { self.values.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> i64 { self.values[index] }

    pub fn set(&mut self, index: usize, value: i64) { self.values[index] = value; }

    pub fn swap(&mut self, a: usize, b: usize) { self.values.swap(a, b); }

    #[must_use]
    pub fn compare(&self, a: usize, b: usize) -> Ordering {
        self.values[a].cmp(&self.values[b])
    }

    /// Compare the element at `index` with a value held outside the array, eg the key
    /// of an insertion sort.
    #[must_use]
    pub fn compare_with(&self, index: usize, value: i64) -> Ordering {
        self.values[index].cmp(&value)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] { &self.values }

    #[must_use]
    pub fn to_vec(&self) -> Vec<i64> { self.values.clone() }
}

impl From<&[i64]> for ArrayModel {
    fn from(values: &[i64]) -> Self { Self::new(values.to_vec()) }
}

impl From<Vec<i64>> for ArrayModel {
    fn from(values: Vec<i64>) -> Self { Self::new(values) }
}
