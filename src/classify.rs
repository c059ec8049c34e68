//! Post-solve grading of member forces against material capacity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Material;

/// Safety grade for a member under its solved axial force.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum StressGrade {
    /// Force is at or below half the relevant capacity.
    Safe,
    /// Force exceeds half the relevant capacity but not the capacity itself.
    Warning,
    /// Force exceeds the tensile or compressive capacity.
    Failure,
}

impl fmt::Display for StressGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StressGrade::Safe => "safe",
            StressGrade::Warning => "warning",
            StressGrade::Failure => "failure",
        };
        write!(f, "{label}")
    }
}

/// Direction of loading implied by the sign of the axial force.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum LoadingMode {
    /// Positive axial force; the member is being stretched. A zero-force
    /// member reports tension.
    Tension,
    /// Negative axial force; the member is being shortened.
    Compression,
}

impl fmt::Display for LoadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoadingMode::Tension => "tension",
            LoadingMode::Compression => "compression",
        };
        write!(f, "{label}")
    }
}

/// Classification tag for one member, consumed by downstream rendering.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MemberRating {
    /// Safety grade against the material capacity.
    pub grade: StressGrade,
    /// Whether the member carries tension or compression.
    pub mode: LoadingMode,
}

/// Grade a solved axial force against the material's strength limits.
///
/// Capacities are `strength * area` with `area = width * height`. The
/// comparisons are strict, so a force exactly at a capacity is a warning and
/// one exactly at half capacity is safe. Pure and independent per member.
#[must_use]
pub fn classify(axial_force: f64, material: &Material) -> MemberRating {
    let area = material.cross_section_area();
    let max_tensile = material.tensile_strength * area;
    let max_compressive = material.compressive_strength * area;

    let grade = if axial_force > max_tensile || -axial_force > max_compressive {
        StressGrade::Failure
    } else if axial_force > 0.5 * max_tensile || -axial_force > 0.5 * max_compressive {
        StressGrade::Warning
    } else {
        StressGrade::Safe
    };
    let mode = if axial_force < 0.0 {
        LoadingMode::Compression
    } else {
        LoadingMode::Tension
    };

    MemberRating { grade, mode }
}
