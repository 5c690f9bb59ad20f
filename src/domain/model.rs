use serde::{Deserialize, Serialize};

/// One of the nine fixed archetypes. Only values 1..=9 are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sector(u8);

impl Sector {
    /// Returns `None` for anything outside 1..=9.
    pub fn from_number(n: u32) -> Option<Self> {
        if (1..=9).contains(&n) {
            Some(Sector(n as u8))
        } else {
            None
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        SECTOR_LABELS[(self.0 - 1) as usize]
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed traversal/display order of the nine sectors (modified Jung 3-6-9 wheel).
/// A permutation of 1..=9; carries no numeric meaning beyond drawing order.
pub const SECTOR_ORDER: [Sector; 9] = [
    Sector(1),
    Sector(3),
    Sector(4),
    Sector(9),
    Sector(5),
    Sector(8),
    Sector(2),
    Sector(7),
    Sector(6),
];

/// Archetype label per sector, indexed by sector number - 1.
pub const SECTOR_LABELS: [&str; 9] = [
    "Childhood – to be perfect",
    "Values – home life to be connected",
    "Mother – to be the best",
    "Father – to be unique",
    "Personality – norm/religion to be detached",
    "Upbringing – to be safe",
    "Culture – to be enthusiast",
    "Siblings – to be powerful",
    "Society – to be peaceful",
];

/// Narrative struggle annotations drawn next to the chart.
pub const EXTERNAL_STRUGGLE_NOTE: &str = "External: 8+9 (near 5)";
pub const INTERNAL_STRUGGLE_NOTE: &str = "Internal: 8+7 (near 2)";
pub const ANGLE_NOTE: &str = "Note: angle(9,5) ~ 140 deg";

/// Frequency multiset over the nine sectors. Sectors that never appeared
/// hold a zero count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorCounts {
    counts: [u32; 9],
}

impl SectorCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sector: Sector) {
        self.counts[(sector.number() - 1) as usize] += 1;
    }

    pub fn get(&self, sector: Sector) -> u32 {
        self.counts[(sector.number() - 1) as usize]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// True when no sector appeared at all. The presentation layer branches
    /// on this to show a placeholder instead of a chart.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Sectors that appeared at least once, with their counts.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (Sector, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(i, &count)| (Sector(i as u8 + 1), count))
    }
}

/// Calendar date as three plain numeric fields. Built from an already
/// validated date; no calendar semantics live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

/// The two reduced scalars plus the intentionally unreduced bridge sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreNumbers {
    pub personality: u8,
    pub bridge: u32,
    pub life_value: u8,
}

/// Parsed pipeline input: identity, validated date, and the core-list counts.
#[derive(Debug, Clone)]
pub struct ProfileInput {
    pub name: Option<String>,
    pub date_text: String,
    pub date: CalendarDate,
    pub counts: SectorCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub sector: u8,
    pub count: u32,
    pub label: String,
}

/// Serializable profile report handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    pub name: Option<String>,
    pub date_of_birth: String,
    pub core_numbers: CoreNumbers,
    pub segments: Vec<Segment>,
    pub top_archetypes: Vec<u8>,
    pub total_count: u32,
}

/// Transform result: the report plus its rendered artifacts.
#[derive(Debug, Clone)]
pub struct ProfileOutput {
    pub report: ProfileReport,
    pub json_output: String,
    pub summary_output: String,
    pub chart_output: String,
}
