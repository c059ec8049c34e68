//! Assembly of the nodal equilibrium system.
//!
//! Each node contributes two equations (sum of horizontal forces, sum of
//! vertical forces), each member one unknown axial force, and the two
//! supports three unknown reaction components. For a determinate truss the
//! result is a square `2N x 2N` system.

use std::f64::consts::FRAC_PI_2;

use nalgebra::{DMatrix, DVector};

use crate::model::{StructuralModel, Support};

/// Coefficient matrix and load vector relating unknown forces to geometry.
///
/// Column order is: one column per member (model order), then the fixed
/// support's horizontal reaction, the fixed support's vertical reaction, and
/// the rolling support's vertical reaction. Row `2i` is node `i`'s
/// horizontal equation and row `2i + 1` its vertical equation.
#[derive(Clone, Debug, PartialEq)]
pub struct EquilibriumSystem {
    /// Coefficient matrix `A` of the system `A * x = b`.
    pub matrix: DMatrix<f64>,
    /// Right-hand side `b` holding the externally applied loads.
    pub loads: DVector<f64>,
}

/// Assemble the equilibrium system for a validated model.
///
/// The equilibrium convention is `internal + reaction + external = 0` at
/// every node. Loads are stored positive downward, so moving the external
/// term to the right-hand side puts `+force` at the loaded node's vertical
/// row. Reaction unknowns come out positive when acting upward / rightward,
/// and member unknowns positive in tension.
#[must_use]
pub fn build_system(model: &StructuralModel) -> EquilibriumSystem {
    let rows = 2 * model.node_count();
    let columns = model.member_count() + 3;
    let mut matrix = DMatrix::zeros(rows, columns);

    // Member columns: a tensile member pulls each endpoint toward the other,
    // so node A sees (cos, sin) of the angle from A to B and node B the
    // negated pair.
    for (column, member) in model.members().iter().enumerate() {
        let start = model.index_of(member.start).expect("model references resolve");
        let end = model.index_of(member.end).expect("model references resolve");
        let (ax, ay) = (model.nodes()[start].x, model.nodes()[start].y);
        let (bx, by) = (model.nodes()[end].x, model.nodes()[end].y);
        let theta = direction_angle(bx - ax, by - ay);
        let (sin, cos) = theta.sin_cos();

        matrix[(2 * start, column)] = cos;
        matrix[(2 * start + 1, column)] = sin;
        matrix[(2 * end, column)] = -cos;
        matrix[(2 * end + 1, column)] = -sin;
    }

    // Reaction columns: fixed-horizontal, fixed-vertical, rolling-vertical.
    let fixed = support_index(model, Support::Fixed);
    let rolling = support_index(model, Support::Rolling);
    let members = model.member_count();
    matrix[(2 * fixed, members)] = 1.0;
    matrix[(2 * fixed + 1, members + 1)] = 1.0;
    matrix[(2 * rolling + 1, members + 2)] = 1.0;

    let mut loads = DVector::zeros(rows);
    for load in model.loads() {
        let index = model.index_of(load.node).expect("model references resolve");
        loads[2 * index + 1] = load.force;
    }

    EquilibriumSystem { matrix, loads }
}

/// Angle of the member direction `(dx, dy)` relative to horizontal.
///
/// An exactly vertical member is its own branch at +/-90 degrees so the
/// magnitudes always come from `cos`/`sin` of the true geometric direction,
/// never from a slope ratio that could divide by zero.
fn direction_angle(dx: f64, dy: f64) -> f64 {
    if dx == 0.0 {
        if dy > 0.0 {
            FRAC_PI_2
        } else {
            -FRAC_PI_2
        }
    } else {
        dy.atan2(dx)
    }
}

fn support_index(model: &StructuralModel, kind: Support) -> usize {
    model
        .nodes()
        .iter()
        .position(|node| node.support == kind)
        .expect("validated model has both supports")
}
