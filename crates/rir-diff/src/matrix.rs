//! Pairwise mean squared error between versions

use crate::{CompareError, Result};
use serde::{Deserialize, Serialize};

/// Zero-pad every signal to the length of the longest one
pub fn pad_to_common_length(signals: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let len = signals.iter().map(Vec::len).max().unwrap_or(0);
    signals
        .iter()
        .map(|s| {
            let mut padded = s.clone();
            padded.resize(len, 0.0);
            padded
        })
        .collect()
}

/// MSE of two signals, the shorter one treated as zero-padded
pub fn mse(a: &[f64], b: &[f64]) -> f64 {
    let len = a.len().max(b.len());
    if len == 0 {
        return 0.0;
    }
    let sum: f64 = (0..len)
        .map(|i| {
            let d = a.get(i).copied().unwrap_or(0.0) - b.get(i).copied().unwrap_or(0.0);
            d * d
        })
        .sum();
    sum / len as f64
}

/// Full MSE matrix of `signals`.
///
/// The diagonal is exactly zero and the matrix exactly symmetric.
pub fn pairwise_mse(signals: &[&[f64]]) -> Vec<Vec<f64>> {
    let n = signals.len();
    let mut out = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..i {
            let e = mse(signals[i], signals[j]);
            out[i][j] = e;
            out[j][i] = e;
        }
    }
    out
}

/// Version-by-version error matrix averaged over samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMatrix {
    /// Version labels, row and column order
    pub labels: Vec<String>,

    /// Mean MSE per pair, `None` when no sample had both versions
    pub values: Vec<Vec<Option<f64>>>,

    /// Number of samples behind each cell
    pub counts: Vec<Vec<usize>>,
}

impl ErrorMatrix {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn position(&self, version: &str) -> Result<usize> {
        self.labels
            .iter()
            .position(|l| l == version)
            .ok_or_else(|| CompareError::UnknownVersion(version.to_string()))
    }

    /// Mean MSE between two versions
    pub fn get(&self, a: &str, b: &str) -> Result<Option<f64>> {
        let i = self.position(a)?;
        let j = self.position(b)?;
        Ok(self.values[i][j])
    }

    /// Largest mean MSE in the matrix
    pub fn max_error(&self) -> Option<f64> {
        self.values
            .iter()
            .flatten()
            .flatten()
            .copied()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (0..n).all(|j| self.values[i][j] == self.values[j][i]))
    }
}

/// Running per-pair sums of MSE values
#[derive(Debug, Clone)]
pub struct ErrorAccumulator {
    labels: Vec<String>,
    sums: Vec<Vec<f64>>,
    counts: Vec<Vec<usize>>,
}

impl ErrorAccumulator {
    pub fn new(labels: Vec<String>) -> Self {
        let n = labels.len();
        Self {
            labels,
            sums: vec![vec![0.0; n]; n],
            counts: vec![vec![0; n]; n],
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Add one sample's MSE matrix for the given subset of versions
    pub fn add(&mut self, versions: &[String], mse: &[Vec<f64>]) -> Result<()> {
        let positions = versions
            .iter()
            .map(|v| {
                self.labels
                    .iter()
                    .position(|l| l == v)
                    .ok_or_else(|| CompareError::UnknownVersion(v.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        for (a, &i) in positions.iter().enumerate() {
            for (b, &j) in positions.iter().enumerate() {
                self.sums[i][j] += mse[a][b];
                self.counts[i][j] += 1;
            }
        }
        Ok(())
    }

    pub fn finish(self) -> ErrorMatrix {
        let values = self
            .sums
            .iter()
            .zip(&self.counts)
            .map(|(sums, counts)| {
                sums.iter()
                    .zip(counts)
                    .map(|(&s, &c)| (c > 0).then(|| s / c as f64))
                    .collect()
            })
            .collect();

        ErrorMatrix {
            labels: self.labels,
            values,
            counts: self.counts,
        }
    }
}
