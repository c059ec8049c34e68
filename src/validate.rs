//! Pre-solve validation of structural models.
//!
//! Every check runs eagerly, before any matrix work; the solver is never
//! invoked on a model that fails here.

use std::collections::HashMap;

use crate::errors::{
    ConfigurationError, DeterminacyError, MaterialDataError, StructuralError,
};
use crate::model::{Material, NodeId, StructuralModel, Support};

/// Check that a model is solvable by the determinate pipeline.
///
/// Checks run in a fixed order: support cardinality (exactly one fixed and
/// one rolling support), static determinacy (`members == 2 * nodes - 3`,
/// reporting the exact surplus or deficit), load uniqueness (at most one per
/// node), load existence (at least one), member geometry (no zero-length
/// members), and finally material completeness when `require_material` is
/// set because stress classification was requested.
///
/// # Errors
///
/// Returns the first violated invariant as a [`StructuralError`]; the
/// message states what failed and, where numeric, by how much.
pub fn validate(
    model: &StructuralModel,
    require_material: bool,
) -> Result<(), StructuralError> {
    check_supports(model)?;
    check_determinacy(model)?;
    check_loads(model)?;
    check_member_geometry(model)?;
    if require_material {
        check_material(model.material())?;
    }
    Ok(())
}

/// Exactly one fixed and one rolling support must be present.
fn check_supports(model: &StructuralModel) -> Result<(), ConfigurationError> {
    let fixed = count_supports(model, Support::Fixed);
    if fixed != 1 {
        return Err(ConfigurationError::FixedSupportCount { count: fixed });
    }
    let rolling = count_supports(model, Support::Rolling);
    if rolling != 1 {
        return Err(ConfigurationError::RollingSupportCount { count: rolling });
    }
    Ok(())
}

fn count_supports(model: &StructuralModel, kind: Support) -> usize {
    model
        .nodes()
        .iter()
        .filter(|node| node.support == kind)
        .count()
}

/// The member count must match the determinate requirement exactly.
///
/// One fixed and one rolling support contribute three reaction unknowns, so
/// the 2N joint equations determine the system only when `M = 2N - 3`.
fn check_determinacy(model: &StructuralModel) -> Result<(), DeterminacyError> {
    let nodes = model.node_count();
    let members = model.member_count();
    if members != 2 * nodes - 3 {
        return Err(DeterminacyError { nodes, members });
    }
    Ok(())
}

/// At most one load per node, and at least one load overall.
fn check_loads(model: &StructuralModel) -> Result<(), ConfigurationError> {
    let mut per_node: HashMap<NodeId, usize> = HashMap::new();
    for load in model.loads() {
        *per_node.entry(load.node).or_insert(0) += 1;
    }
    for (node, count) in per_node {
        if count > 1 {
            return Err(ConfigurationError::DuplicateLoad { node, count });
        }
    }
    if model.loads().is_empty() {
        return Err(ConfigurationError::NoLoads);
    }
    Ok(())
}

/// Members whose endpoints coincide have no direction and would poison the
/// matrix assembly.
fn check_member_geometry(model: &StructuralModel) -> Result<(), ConfigurationError> {
    for member in model.members() {
        let start = model.node(member.start).expect("model references resolve");
        let end = model.node(member.end).expect("model references resolve");
        if start.x == end.x && start.y == end.y {
            return Err(ConfigurationError::ZeroLengthMember {
                member: member.id,
                start: member.start,
                end: member.end,
            });
        }
    }
    Ok(())
}

/// All four material properties must be present and physically meaningful.
fn check_material(material: Option<&Material>) -> Result<(), MaterialDataError> {
    let Some(material) = material else {
        return Err(MaterialDataError::Missing);
    };
    let fields = [
        ("density", material.density),
        ("cross-section width", material.width),
        ("cross-section height", material.height),
        ("compressive strength", material.compressive_strength),
        ("tensile strength", material.tensile_strength),
    ];
    for (field, value) in fields {
        if !value.is_finite() || value <= 0.0 {
            return Err(MaterialDataError::InvalidField { field, value });
        }
    }
    Ok(())
}
