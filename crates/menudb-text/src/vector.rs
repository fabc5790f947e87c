use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Sparse vector of `(term_id, weight)` pairs sorted by term id.
/// Zero weights are never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f32)>,
}

impl SparseVector {
    pub fn from_weights(weights: BTreeMap<usize, f32>) -> Self {
        Self { entries: weights.into_iter().filter(|(_, w)| *w != 0.0).collect() }
    }

    pub fn entries(&self) -> &[(usize, f32)] { &self.entries }

    pub fn is_zero(&self) -> bool { self.entries.is_empty() }

    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    /// Scales the vector to unit length. The zero vector stays zero.
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries { *w /= norm; }
        }
        self
    }

    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j, mut sum) = (0, 0, 0.0f32);
        while i < self.entries.len() && j < other.entries.len() {
            let (a_id, a_w) = self.entries[i];
            let (b_id, b_w) = other.entries[j];
            match a_id.cmp(&b_id) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => { sum += a_w * b_w; i += 1; j += 1; }
            }
        }
        sum
    }

    /// Cosine of the angle between the two vectors; 0 if either is zero.
    pub fn cosine(&self, other: &SparseVector) -> f32 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 { 0.0 } else { self.dot(other) / denom }
    }
}
