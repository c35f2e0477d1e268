use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Square matrix of non-negative flows; `value(i, j)` is the flow from node `i` to node `j`.
///
/// Validation happens once, at construction. Everything downstream (the solver and the shape
/// generators) relies on the matrix being square, finite and non-negative, with a grand total
/// that converts to a finite radians-per-unit scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct FlowMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl FlowMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidMatrix {
                    message: format!(
                        "row {i} has {} entries, expected {n} (matrix must be square)",
                        row.len()
                    ),
                });
            }
            for (j, v) in row.into_iter().enumerate() {
                if !v.is_finite() {
                    return Err(Error::InvalidMatrix {
                        message: format!("cell [{i}][{j}] is not finite ({v})"),
                    });
                }
                if v < 0.0 {
                    return Err(Error::InvalidMatrix {
                        message: format!("cell [{i}][{j}] is negative ({v})"),
                    });
                }
                cells.push(v);
            }
        }
        let matrix = Self { n, cells };
        matrix.check_scale()?;
        Ok(matrix)
    }

    /// Every row and column sum is bounded by the grand total, so checking it covers them all.
    fn check_scale(&self) -> Result<()> {
        let grand = self.grand_total();
        if !grand.is_finite() {
            return Err(Error::InvalidMatrix {
                message: format!("flow sums overflow (grand total is {grand})"),
            });
        }
        if grand > 0.0 && !(std::f64::consts::TAU / grand).is_finite() {
            return Err(Error::InvalidMatrix {
                message: format!("grand total {grand} is too small to scale onto the circle"),
            });
        }
        Ok(())
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let rows: Vec<Vec<f64>> = serde_json::from_str(text)?;
        Self::new(rows)
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn value(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.n + to]
    }

    pub fn row(&self, from: usize) -> &[f64] {
        &self.cells[from * self.n..(from + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.n).map(move |i| self.row(i))
    }

    /// Flow arriving at `node` (column sum).
    pub fn input_sum(&self, node: usize) -> f64 {
        (0..self.n).map(|i| self.value(i, node)).sum()
    }

    /// Flow leaving `node` (row sum).
    pub fn output_sum(&self, node: usize) -> f64 {
        self.row(node).iter().sum()
    }

    pub fn total_sum(&self, node: usize) -> f64 {
        self.input_sum(node) + self.output_sum(node)
    }

    pub fn grand_total(&self) -> f64 {
        (0..self.n).map(|i| self.total_sum(i)).sum()
    }
}

impl TryFrom<Vec<Vec<f64>>> for FlowMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<FlowMatrix> for Vec<Vec<f64>> {
    fn from(m: FlowMatrix) -> Self {
        m.rows().map(|r| r.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_follow_rows_and_columns() {
        let m = FlowMatrix::new(vec![vec![0.0, 5.0], vec![3.0, 0.0]]).unwrap();
        assert_eq!(m.output_sum(0), 5.0);
        assert_eq!(m.input_sum(0), 3.0);
        assert_eq!(m.output_sum(1), 3.0);
        assert_eq!(m.input_sum(1), 5.0);
        assert_eq!(m.total_sum(0), 8.0);
        assert_eq!(m.grand_total(), 16.0);
    }

    #[test]
    fn row_slices_are_contiguous() {
        let m = FlowMatrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.rows().count(), 2);
    }
}
