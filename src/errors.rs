//! Error types produced while validating or solving structural models.

use thiserror::Error;

use crate::model::{MemberId, NodeId};

/// Top-level error for the analysis pipeline.
///
/// Every failure is fatal to the run; there is no retry or partial-result
/// mode. Each variant carries enough context for an actionable message.
#[derive(Debug, Error, PartialEq)]
pub enum StructuralError {
    /// Boundary conditions or load layout rule out a solve.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// Member count does not match the statically determinate requirement.
    #[error(transparent)]
    Determinacy(#[from] DeterminacyError),
    /// The assembled equilibrium matrix cannot be solved.
    #[error(transparent)]
    Singular(#[from] SingularSystemError),
    /// Stress classification was requested without a usable material record.
    #[error(transparent)]
    Material(#[from] MaterialDataError),
}

/// Error returned when the model's supports, loads or references are
/// ill-formed.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigurationError {
    /// Returned when the model does not have exactly one fixed support.
    #[error("exactly one fixed support is required, found {count}")]
    FixedSupportCount {
        /// Number of fixed supports present.
        count: usize,
    },
    /// Returned when the model does not have exactly one rolling support.
    #[error("exactly one rolling support is required, found {count}")]
    RollingSupportCount {
        /// Number of rolling supports present.
        count: usize,
    },
    /// Returned when a node carries more than one applied load.
    #[error("node {node} carries {count} loads; at most one load per node")]
    DuplicateLoad {
        /// Node with multiple loads.
        node: NodeId,
        /// Number of loads found on the node.
        count: usize,
    },
    /// Returned when the model carries no applied loads at all.
    #[error("no loads are applied; at least one load is required")]
    NoLoads,
    /// Returned when two nodes share an identifier.
    #[error("node id {0} appears more than once")]
    DuplicateNodeId(NodeId),
    /// Returned when two members share an identifier.
    #[error("member id {0} appears more than once")]
    DuplicateMemberId(MemberId),
    /// Returned when a member references a node that is not in the model.
    #[error("member {member} references unknown node {node}")]
    UnknownNode {
        /// Member with the dangling reference.
        member: MemberId,
        /// Identifier that could not be resolved.
        node: NodeId,
    },
    /// Returned when a load references a node that is not in the model.
    #[error("a load references unknown node {node}")]
    UnknownLoadNode {
        /// Identifier that could not be resolved.
        node: NodeId,
    },
    /// Returned when a member connects a node to itself.
    #[error("member {member} connects node {node} to itself")]
    SelfConnectedMember {
        /// Offending member.
        member: MemberId,
        /// Node used for both endpoints.
        node: NodeId,
    },
    /// Returned when a member's endpoints occupy the same position.
    #[error("member {member} has zero length; nodes {start} and {end} coincide")]
    ZeroLengthMember {
        /// Offending member.
        member: MemberId,
        /// First endpoint.
        start: NodeId,
        /// Second endpoint.
        end: NodeId,
    },
}

/// Error returned when the member count violates static determinacy.
///
/// A planar truss with one fixed and one rolling support is solvable by
/// equilibrium alone only when `members == 2 * nodes - 3`.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error(
    "truss is not statically determinate: {members} members for {nodes} nodes; {}",
    determinacy_advice(.members, .nodes)
)]
pub struct DeterminacyError {
    /// Number of nodes in the model.
    pub nodes: usize,
    /// Number of members in the model.
    pub members: usize,
}

impl DeterminacyError {
    /// Member count a determinate truss of this size requires.
    #[must_use]
    pub fn required_members(&self) -> usize {
        2 * self.nodes - 3
    }

    /// Signed surplus of members over the determinate requirement.
    #[must_use]
    pub fn surplus(&self) -> isize {
        self.members as isize - self.required_members() as isize
    }
}

/// Exact fix-up advice for a determinacy failure.
fn determinacy_advice(members: &usize, nodes: &usize) -> String {
    let required = 2 * nodes - 3;
    if *members < required {
        format!(
            "need {required}; add {} more member(s)",
            required - members
        )
    } else {
        format!("need {required}; remove {} member(s)", members - required)
    }
}

/// Error returned when the equilibrium matrix is singular or
/// ill-conditioned.
///
/// The node and member counts passed the determinacy check, so this signals
/// a kinematic mechanism: the geometry itself is unstable.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error(
    "equilibrium matrix is singular (pivot ratio {pivot_ratio:.3e} below \
     tolerance {tolerance:.3e}); the truss geometry forms a mechanism"
)]
pub struct SingularSystemError {
    /// Ratio of the smallest to largest pivot magnitude found by the solver.
    pub pivot_ratio: f64,
    /// Tolerance the ratio was compared against.
    pub tolerance: f64,
}

/// Error returned when stress classification lacks a usable material record.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum MaterialDataError {
    /// Returned when classification was requested but no material exists.
    #[error("stress classification requested but no material was supplied")]
    Missing,
    /// Returned when a material field is absent in practice: zero, negative,
    /// or not finite.
    #[error("material {field} must be positive and finite (received {value})")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Value the loader supplied.
        value: f64,
    },
}
