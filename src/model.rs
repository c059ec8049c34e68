//! Immutable structural model consumed by the analysis pipeline.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigurationError;

/// Stable identifier for a node, assigned by the external loader.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier for a member, assigned by the external loader.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(pub u32);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Support restraint applied at a node.
///
/// A node carries exactly one support kind, so the degenerate case of a node
/// being both fixed and rolling cannot be represented.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Support {
    /// No restraint; both translations are unknowns of the joint equations.
    Free,
    /// Restrains both axes; contributes horizontal and vertical reactions.
    Fixed,
    /// Restrains only the vertical axis; the horizontal reaction is zero.
    Rolling,
}

/// A joint in the truss.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Loader-assigned identifier, unique within the model.
    pub id: NodeId,
    /// Distance along the global X axis.
    pub x: f64,
    /// Distance along the global Y axis.
    pub y: f64,
    /// Support restraint at this joint.
    pub support: Support,
}

impl Node {
    /// Create a node with an explicit support kind.
    #[must_use]
    pub const fn new(id: NodeId, x: f64, y: f64, support: Support) -> Self {
        Self { id, x, y, support }
    }

    /// Create an unrestrained node.
    #[must_use]
    pub const fn free(id: NodeId, x: f64, y: f64) -> Self {
        Self::new(id, x, y, Support::Free)
    }

    /// Create a node with a fixed (pin) support.
    #[must_use]
    pub const fn fixed(id: NodeId, x: f64, y: f64) -> Self {
        Self::new(id, x, y, Support::Fixed)
    }

    /// Create a node with a rolling support.
    #[must_use]
    pub const fn rolling(id: NodeId, x: f64, y: f64) -> Self {
        Self::new(id, x, y, Support::Rolling)
    }
}

/// A two-force axial member connecting two distinct nodes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Loader-assigned identifier, unique within the model.
    pub id: MemberId,
    /// First endpoint.
    pub start: NodeId,
    /// Second endpoint.
    pub end: NodeId,
}

impl Member {
    /// Create a member between two nodes.
    #[must_use]
    pub const fn new(id: MemberId, start: NodeId, end: NodeId) -> Self {
        Self { id, start, end }
    }
}

/// A vertical point load applied at a node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Node the load acts on.
    pub node: NodeId,
    /// Signed force magnitude in newtons, **positive downward**.
    ///
    /// The magnitude is negated exactly once, during load-vector assembly;
    /// nothing else in the pipeline flips its sign.
    pub force: f64,
}

impl Load {
    /// Create a load acting on a node, positive downward.
    #[must_use]
    pub const fn new(node: NodeId, force: f64) -> Self {
        Self { node, force }
    }
}

/// Material and cross-section properties used for stress classification.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Density in kilograms per cubic metre, carried through for reporting.
    pub density: f64,
    /// Cross-section width in metres.
    pub width: f64,
    /// Cross-section height in metres.
    pub height: f64,
    /// Compressive strength in pascals.
    pub compressive_strength: f64,
    /// Tensile strength in pascals.
    pub tensile_strength: f64,
}

impl Material {
    /// Cross-sectional area in square metres.
    #[must_use]
    pub fn cross_section_area(&self) -> f64 {
        self.width * self.height
    }
}

/// Immutable in-memory representation of a truss.
///
/// Constructed once from parsed input and never mutated afterwards; every
/// pipeline stage borrows it. Node lookup goes through an index map built at
/// construction rather than a per-access scan.
#[derive(Clone, Debug)]
pub struct StructuralModel {
    /// Nodes in loader order.
    nodes: Vec<Node>,
    /// Members in loader order.
    members: Vec<Member>,
    /// Applied loads in loader order.
    loads: Vec<Load>,
    /// Optional material record for stress classification.
    material: Option<Material>,
    /// Precomputed id to index lookup for nodes.
    node_index: HashMap<NodeId, usize>,
}

impl StructuralModel {
    /// Build a model from loader output.
    ///
    /// Referential integrity is checked once, here: duplicate node or member
    /// identifiers, members that reference unknown nodes or connect a node to
    /// itself, and loads on unknown nodes are all rejected. Structural
    /// solvability (support cardinality, determinacy, load layout) is the
    /// validator's job, not this constructor's.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] naming the offending identifier.
    pub fn new(
        nodes: Vec<Node>,
        members: Vec<Member>,
        loads: Vec<Load>,
        material: Option<Material>,
    ) -> Result<Self, ConfigurationError> {
        let mut node_index = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            if node_index.insert(node.id, index).is_some() {
                return Err(ConfigurationError::DuplicateNodeId(node.id));
            }
        }

        let mut member_ids = HashSet::with_capacity(members.len());
        for member in &members {
            if !member_ids.insert(member.id) {
                return Err(ConfigurationError::DuplicateMemberId(member.id));
            }
            if member.start == member.end {
                return Err(ConfigurationError::SelfConnectedMember {
                    member: member.id,
                    node: member.start,
                });
            }
            for endpoint in [member.start, member.end] {
                if !node_index.contains_key(&endpoint) {
                    return Err(ConfigurationError::UnknownNode {
                        member: member.id,
                        node: endpoint,
                    });
                }
            }
        }

        for load in &loads {
            if !node_index.contains_key(&load.node) {
                return Err(ConfigurationError::UnknownLoadNode { node: load.node });
            }
        }

        Ok(Self {
            nodes,
            members,
            loads,
            material,
            node_index,
        })
    }

    /// Nodes in loader order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Members in loader order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Applied loads in loader order.
    #[must_use]
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Material record, when one was supplied.
    #[must_use]
    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Position of a node id in [`Self::nodes`].
    #[must_use]
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_index.get(&node).copied()
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.index_of(node).map(|index| &self.nodes[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_nodes() -> Vec<Node> {
        vec![
            Node::fixed(NodeId(1), 0.0, 0.0),
            Node::rolling(NodeId(2), 4.0, 0.0),
            Node::free(NodeId(3), 2.0, 3.0),
        ]
    }

    #[test]
    fn construction_indexes_nodes() {
        let model = StructuralModel::new(
            triangle_nodes(),
            vec![Member::new(MemberId(1), NodeId(1), NodeId(3))],
            vec![Load::new(NodeId(3), 100.0)],
            None,
        )
        .expect("model builds");

        assert_eq!(model.node_count(), 3);
        assert_eq!(model.index_of(NodeId(2)), Some(1));
        assert_eq!(model.node(NodeId(3)).expect("node exists").y, 3.0);
        assert_eq!(model.index_of(NodeId(9)), None);
    }

    #[test]
    fn duplicate_node_id_is_rejected() {
        let mut nodes = triangle_nodes();
        nodes.push(Node::free(NodeId(1), 9.0, 9.0));
        let error = StructuralModel::new(nodes, vec![], vec![], None)
            .expect_err("duplicate id rejected");
        assert_eq!(error, ConfigurationError::DuplicateNodeId(NodeId(1)));
    }

    #[test]
    fn duplicate_member_id_is_rejected() {
        let members = vec![
            Member::new(MemberId(7), NodeId(1), NodeId(2)),
            Member::new(MemberId(7), NodeId(2), NodeId(3)),
        ];
        let error = StructuralModel::new(triangle_nodes(), members, vec![], None)
            .expect_err("duplicate id rejected");
        assert_eq!(error, ConfigurationError::DuplicateMemberId(MemberId(7)));
    }

    #[test]
    fn dangling_member_endpoint_is_rejected() {
        let members = vec![Member::new(MemberId(1), NodeId(1), NodeId(9))];
        let error = StructuralModel::new(triangle_nodes(), members, vec![], None)
            .expect_err("dangling endpoint rejected");
        assert_eq!(
            error,
            ConfigurationError::UnknownNode {
                member: MemberId(1),
                node: NodeId(9),
            }
        );
    }

    #[test]
    fn self_connected_member_is_rejected() {
        let members = vec![Member::new(MemberId(1), NodeId(2), NodeId(2))];
        let error = StructuralModel::new(triangle_nodes(), members, vec![], None)
            .expect_err("self loop rejected");
        assert_eq!(
            error,
            ConfigurationError::SelfConnectedMember {
                member: MemberId(1),
                node: NodeId(2),
            }
        );
    }

    #[test]
    fn load_on_unknown_node_is_rejected() {
        let loads = vec![Load::new(NodeId(42), 10.0)];
        let error = StructuralModel::new(triangle_nodes(), vec![], loads, None)
            .expect_err("dangling load rejected");
        assert_eq!(
            error,
            ConfigurationError::UnknownLoadNode { node: NodeId(42) }
        );
    }
}
