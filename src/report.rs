//! Plain-text summary of an analysis, for CLI callers and logs.

use std::fmt::Write;

use crate::analysis::Analysis;
use crate::model::StructuralModel;

/// Render a textual summary of a solved model.
///
/// Walks through the reactions first, then each member's axial force with
/// its loading mode and, when available, its safety grade. Signs follow the
/// crate conventions: reactions positive upward / rightward, member forces
/// positive in tension.
#[must_use]
pub fn render_summary(model: &StructuralModel, analysis: &Analysis) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Truss analysis: {} nodes, {} members, {} load(s)",
        model.node_count(),
        model.member_count(),
        model.loads().len()
    )
    .expect("writing to string cannot fail");

    let reactions = analysis.reactions();
    writeln!(
        &mut output,
        "Reactions: fixed Rx = {:+.3} N, fixed Ry = {:+.3} N, rolling Ry = {:+.3} N",
        reactions.fixed_x, reactions.fixed_y, reactions.rolling_y
    )
    .expect("writing to string cannot fail");

    for (index, member) in model.members().iter().enumerate() {
        let force = analysis.member_forces()[index];
        let mode = if force < 0.0 { "compression" } else { "tension" };
        let grade = analysis
            .ratings()
            .map(|ratings| format!(" [{}]", ratings[index].grade))
            .unwrap_or_default();
        writeln!(
            &mut output,
            "Member {} ({} -> {}): {:+.3} N {mode}{grade}",
            member.id, member.start, member.end, force
        )
        .expect("writing to string cannot fail");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::model::{Load, Material, Member, MemberId, Node, NodeId, StructuralModel};

    #[test]
    fn formats_reactions_members_and_grades() {
        let model = StructuralModel::new(
            vec![
                Node::fixed(NodeId(1), 0.0, 0.0),
                Node::rolling(NodeId(2), 4.0, 0.0),
                Node::free(NodeId(3), 2.0, 3.0),
            ],
            vec![
                Member::new(MemberId(1), NodeId(1), NodeId(2)),
                Member::new(MemberId(2), NodeId(2), NodeId(3)),
                Member::new(MemberId(3), NodeId(1), NodeId(3)),
            ],
            vec![Load::new(NodeId(3), 100.0)],
            Some(Material {
                density: 7850.0,
                width: 0.05,
                height: 0.05,
                compressive_strength: 250.0e6,
                tensile_strength: 400.0e6,
            }),
        )
        .expect("model builds");
        let analysis = analyze(&model).expect("triangle solves");

        let report = render_summary(&model, &analysis);
        assert!(report.contains("3 nodes, 3 members, 1 load(s)"));
        assert!(report.contains("fixed Ry = +50.000 N"));
        assert!(report.contains("Member 1 (1 -> 2)"));
        assert!(report.contains("tension [safe]"));
        assert!(report.contains("compression [safe]"));
    }
}
