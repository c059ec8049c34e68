use bridgestat::{
    analyze, render_summary, Load, Material, Member, MemberId, Node, NodeId, StructuralModel,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A triangular bridge: fixed abutment at the left, rolling abutment at
    // the right, and a 100 kN traffic load hanging from the apex.
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
        vec![Load::new(NodeId(3), 100_000.0)],
        // Structural steel with a 50 mm square section.
        Some(Material {
            density: 7850.0,
            width: 0.05,
            height: 0.05,
            compressive_strength: 250.0e6,
            tensile_strength: 400.0e6,
        }),
    )?;

    // Validate, assemble, solve and classify in one pass.
    let analysis = analyze(&model)?;

    // Print the reactions and per-member forces with their safety grades.
    print!("{}", render_summary(&model, &analysis));

    Ok(())
}
