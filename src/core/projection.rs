//! Projection of sector counts onto the fixed display order, plus the
//! top-archetype selection shown in the summary.

use crate::domain::model::{Sector, SectorCounts, SECTOR_ORDER};

/// (sector, count) pairs following `SECTOR_ORDER`. Always exactly nine
/// entries, absent sectors reported as zero.
pub fn segments_by_order(counts: &SectorCounts) -> [(Sector, u32); 9] {
    SECTOR_ORDER.map(|sector| (sector, counts.get(sector)))
}

/// Up to three sectors ranked by frequency.
///
/// Ordering: count descending, ties broken by lower sector number first.
/// Sectors that never appeared are not eligible.
pub fn top_archetypes(counts: &SectorCounts) -> Vec<Sector> {
    let mut present: Vec<(Sector, u32)> = counts.iter_nonzero().collect();
    present.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.number().cmp(&b.0.number())));
    present.into_iter().take(3).map(|(sector, _)| sector).collect()
}
