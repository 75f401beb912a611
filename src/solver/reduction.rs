//! Standard Column Reduction
//!
//! Left-to-right reduction of the sparse boundary matrix over GF(2): each
//! column is repeatedly added to by the recorded pivot column sharing its
//! lowest non-zero row until its low is unclaimed or the column is zero.
//! A non-zero reduced column kills the feature created at its low; a zero
//! column creates one.
//!
//! With representative tracking enabled the reduction also maintains the
//! applied column operations (the V matrix of R = D·V), so that
//!
//! - a pair (b, d) reports the rows of the reduced column d, a cycle born
//!   at b, and
//! - an unpaired column i reports the rows of Vᵢ, the cycle carried by i
//!   itself.

use super::{Solver, SolverOutput};
use crate::basis::SparseColumn;
use crate::error::Result;
use std::collections::{BTreeSet, HashMap};

/// Built-in persistence solver
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReduction {
    representatives: bool,
}

impl StandardReduction {
    pub fn new() -> Self {
        Self {
            representatives: false,
        }
    }

    /// Also return representative cycles for every bar
    pub fn with_representatives() -> Self {
        Self {
            representatives: true,
        }
    }
}

/// Symmetric difference, i.e. addition in GF(2)
fn xor_assign(target: &mut BTreeSet<usize>, other: &BTreeSet<usize>) {
    for &row in other {
        if !target.remove(&row) {
            target.insert(row);
        }
    }
}

impl Solver for StandardReduction {
    fn compute_ph(&self, columns: &[SparseColumn]) -> Result<SolverOutput> {
        let n = columns.len();
        let mut reduced: Vec<BTreeSet<usize>> = Vec::with_capacity(n);
        // V-matrix columns, tracked only when representatives are wanted
        let mut applied: Vec<BTreeSet<usize>> = Vec::new();
        let mut low_to_column: HashMap<usize, usize> = HashMap::new();

        for (position, column) in columns.iter().enumerate() {
            let mut current: BTreeSet<usize> = column.boundary.iter().copied().collect();
            let mut operations = BTreeSet::from([position]);

            while let Some(&low) = current.iter().next_back() {
                match low_to_column.get(&low) {
                    Some(&pivot) => {
                        xor_assign(&mut current, &reduced[pivot]);
                        if self.representatives {
                            xor_assign(&mut operations, &applied[pivot]);
                        }
                    }
                    None => break,
                }
            }

            if let Some(&low) = current.iter().next_back() {
                low_to_column.insert(low, position);
            }
            reduced.push(current);
            if self.representatives {
                applied.push(operations);
            }
        }

        let mut output = SolverOutput::default();
        if self.representatives {
            output.paired_reps = Some(Vec::new());
            output.unpaired_reps = Some(Vec::new());
        }
        let mut is_paired = vec![false; n];

        for (position, column) in reduced.iter().enumerate() {
            if let Some(&low) = column.iter().next_back() {
                output.paired.push((low, position));
                is_paired[low] = true;
                is_paired[position] = true;
                if let Some(reps) = output.paired_reps.as_mut() {
                    reps.push(column.iter().copied().collect());
                }
            }
        }

        for position in 0..n {
            if !is_paired[position] && reduced[position].is_empty() {
                output.unpaired.push(position);
                if let Some(reps) = output.unpaired_reps.as_mut() {
                    reps.push(applied[position].iter().copied().collect());
                }
            }
        }

        Ok(output)
    }
}
