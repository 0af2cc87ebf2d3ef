//! Proportional sub-period generation.
//!
//! Every level subdivides the same way: the child cycle starts at the
//! parent's own ruler and walks the fixed sequence, each child taking
//! `child_full_years / total_years` of the parent's duration. The last
//! child's end is snapped to the parent's end so sibling sums are exact
//! despite floating-point accumulation.

use crate::graha::Graha;

use super::types::{DashaLevel, DashaPeriod};

/// Snap the last child's end to the parent's end to absorb float drift.
fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Generate the child periods of `parent`.
///
/// `sequence` pairs each graha with its full-cycle years;
/// `total_years` is their sum. The cycle is rotated to start at the
/// parent's ruler.
pub fn proportional_children(
    parent: &DashaPeriod,
    sequence: &[(Graha, f64)],
    total_years: f64,
    child_level: DashaLevel,
    parent_idx: u32,
) -> Vec<DashaPeriod> {
    let n = sequence.len();
    let parent_duration = parent.end_jd - parent.start_jd;
    let start = sequence
        .iter()
        .position(|&(g, _)| g == parent.graha)
        .unwrap_or(0);

    let mut children = Vec::with_capacity(n);
    let mut cursor = parent.start_jd;

    for offset in 0..n {
        let (graha, full_years) = sequence[(start + offset) % n];
        let duration = parent_duration * full_years / total_years;
        let end = cursor + duration;
        children.push(DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            order: offset as u16 + 1,
            parent_idx,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

/// Index of the period containing `jd`, if any.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    periods.iter().position(|p| p.contains(jd))
}
