//! Linear solve of the assembled equilibrium system.

use nalgebra::DVector;

use crate::assembly::EquilibriumSystem;
use crate::errors::SingularSystemError;

/// Numerical options for the determinate solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverOptions {
    /// Smallest acceptable ratio between the smallest and largest pivot
    /// magnitudes of the LU factorisation. Systems below this ratio are
    /// treated as singular.
    pub singularity_tolerance: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            singularity_tolerance: 1.0e-10,
        }
    }
}

/// Solve `A * x = b` for the unknown member and reaction forces.
///
/// Uses LU decomposition with partial pivoting rather than explicit matrix
/// inversion. The solution vector keeps the column order of the assembled
/// system: member forces first (positive in tension), then the three
/// reaction components.
///
/// # Errors
///
/// Returns [`SingularSystemError`] when the matrix is singular or
/// ill-conditioned beyond [`SolverOptions::singularity_tolerance`]. Because
/// the model already passed the determinacy count, this indicates a
/// kinematic mechanism in the geometry.
pub fn solve_system(
    system: &EquilibriumSystem,
    options: SolverOptions,
) -> Result<DVector<f64>, SingularSystemError> {
    let lu = system.matrix.clone().lu();

    let upper = lu.u();
    let pivots = upper.nrows().min(upper.ncols());
    let mut smallest = f64::INFINITY;
    let mut largest = 0.0_f64;
    for i in 0..pivots {
        let magnitude = upper[(i, i)].abs();
        smallest = smallest.min(magnitude);
        largest = largest.max(magnitude);
    }
    let pivot_ratio = if largest == 0.0 { 0.0 } else { smallest / largest };
    let failure = SingularSystemError {
        pivot_ratio,
        tolerance: options.singularity_tolerance,
    };
    if pivot_ratio < options.singularity_tolerance {
        return Err(failure);
    }

    lu.solve(&system.loads).ok_or(failure)
}
