#![warn(clippy::all)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod analysis;
pub mod assembly;
pub mod classify;
pub mod errors;
pub mod model;
pub mod report;
pub mod solve;
pub mod validate;

pub use analysis::{analyze, analyze_with, Analysis, AnalysisOptions, Reactions};
pub use assembly::{build_system, EquilibriumSystem};
pub use classify::{classify, LoadingMode, MemberRating, StressGrade};
pub use errors::{
    ConfigurationError, DeterminacyError, MaterialDataError, SingularSystemError,
    StructuralError,
};
pub use model::{Load, Material, Member, MemberId, Node, NodeId, StructuralModel, Support};
pub use report::render_summary;
pub use solve::{solve_system, SolverOptions};
pub use validate::validate;
