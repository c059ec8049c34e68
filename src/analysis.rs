//! The forward analysis pipeline: validate, assemble, solve, classify.

use serde::{Deserialize, Serialize};

use crate::assembly::build_system;
use crate::classify::{classify, MemberRating};
use crate::errors::StructuralError;
use crate::model::StructuralModel;
use crate::solve::{solve_system, SolverOptions};
use crate::validate::validate;

/// Options controlling a single analysis run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnalysisOptions {
    /// Numerical options forwarded to the linear solver.
    pub solver: SolverOptions,
    /// Fail with a material error when no material is available for rating.
    ///
    /// When unset, ratings are produced whenever the model carries a
    /// material and skipped otherwise.
    pub require_ratings: bool,
}

/// Solved support reactions, positive upward / rightward.
///
/// Field order matches the output boundary: fixed-horizontal,
/// fixed-vertical, rolling-vertical.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Horizontal reaction at the fixed support.
    pub fixed_x: f64,
    /// Vertical reaction at the fixed support.
    pub fixed_y: f64,
    /// Vertical reaction at the rolling support.
    pub rolling_y: f64,
}

/// Result of one analysis run, owned by the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    /// Axial force per member, in model member order. Positive is tension.
    member_forces: Vec<f64>,
    /// Support reaction components.
    reactions: Reactions,
    /// Per-member rating, present when a material was available.
    ratings: Option<Vec<MemberRating>>,
}

impl Analysis {
    /// Axial forces in model member order, positive in tension.
    #[must_use]
    pub fn member_forces(&self) -> &[f64] {
        &self.member_forces
    }

    /// Solved support reactions.
    #[must_use]
    pub fn reactions(&self) -> Reactions {
        self.reactions
    }

    /// Per-member ratings in model member order, when a material was
    /// supplied.
    #[must_use]
    pub fn ratings(&self) -> Option<&[MemberRating]> {
        self.ratings.as_deref()
    }
}

/// Analyse a model with default options.
///
/// # Errors
///
/// Returns the first [`StructuralError`] raised by validation or the solve.
pub fn analyze(model: &StructuralModel) -> Result<Analysis, StructuralError> {
    analyze_with(model, AnalysisOptions::default())
}

/// Analyse a model with explicit options.
///
/// The pipeline is a pure function of the model: validation runs first and
/// in full, then the equilibrium system is assembled and solved, then (when
/// a material is present or required) every member force is graded. The
/// model is never mutated; the returned [`Analysis`] is freshly allocated.
///
/// # Errors
///
/// Returns the first [`StructuralError`] raised by validation or the solve.
pub fn analyze_with(
    model: &StructuralModel,
    options: AnalysisOptions,
) -> Result<Analysis, StructuralError> {
    let wants_ratings = options.require_ratings || model.material().is_some();
    validate(model, wants_ratings)?;

    let system = build_system(model);
    let solution = solve_system(&system, options.solver)?;

    let members = model.member_count();
    let member_forces: Vec<f64> = solution.iter().take(members).copied().collect();
    let reactions = Reactions {
        fixed_x: solution[members],
        fixed_y: solution[members + 1],
        rolling_y: solution[members + 2],
    };
    let ratings = model.material().map(|material| {
        member_forces
            .iter()
            .map(|&force| classify(force, material))
            .collect()
    });

    Ok(Analysis {
        member_forces,
        reactions,
        ratings,
    })
}
