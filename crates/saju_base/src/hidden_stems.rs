//! Hidden stems (지장간) buried in each branch.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::Element;
use crate::pillar::{FourPillars, PillarPosition};
use crate::stem::Stem;

/// Ordered hidden stems of a branch (two or three).
pub const fn hidden_stems(branch: Branch) -> &'static [Stem] {
    use Stem::*;
    match branch {
        Branch::Ja => &[Im, Gye],
        Branch::Chuk => &[Gye, Sin, Gi],
        Branch::In => &[Mu, Byeong, Gap],
        Branch::Myo => &[Gap, Eul],
        Branch::Jin => &[Eul, Gye, Mu],
        Branch::Sa => &[Mu, Gyeong, Byeong],
        Branch::O => &[Byeong, Gi, Jeong],
        Branch::Mi => &[Jeong, Eul, Gi],
        Branch::Sin => &[Mu, Im, Gyeong],
        Branch::Yu => &[Gyeong, Sin],
        Branch::Sul => &[Sin, Jeong, Mu],
        Branch::Hae => &[Mu, Gap, Im],
    }
}

/// A hidden stem with its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub element: Element,
}

/// Hidden stems of one branch, annotated with elements.
pub fn resolve(branch: Branch) -> Vec<HiddenStem> {
    hidden_stems(branch)
        .iter()
        .map(|&stem| HiddenStem {
            stem,
            element: stem.element(),
        })
        .collect()
}

/// Hidden stems of one pillar's branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionHiddenStems {
    pub position: PillarPosition,
    pub branch: Branch,
    pub stems: Vec<HiddenStem>,
}

/// Hidden stems for all four branches of a chart.
pub fn chart_hidden_stems(chart: &FourPillars) -> Vec<PositionHiddenStems> {
    chart
        .iter()
        .map(|(position, p)| PositionHiddenStems {
            position,
            branch: p.branch,
            stems: resolve(p.branch),
        })
        .collect()
}
