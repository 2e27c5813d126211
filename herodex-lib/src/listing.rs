//! The listing view: multi-predicate filtering and dynamic-field sorting
//! over the full record set.
//!
//! Everything here is a pure function of the records and the query. Invalid
//! query input is never an error: unparsable stat bounds fall back to their
//! defaults and an unrecognized sort field skips sorting altogether.

use std::cmp::Ordering;

use strum::{EnumString, IntoEnumIterator};

use crate::repository::entities::{HeroRecord, Stat, StatBlock};

/// Inclusive bounds on one stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    pub const DEFAULT_MIN: u32 = 1;
    pub const DEFAULT_MAX: u32 = 100;

    /// Build a range from raw query input. A missing or unparsable bound
    /// falls back to that bound's default rather than erroring.
    pub fn resolve(min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            min: parse_bound(min, Self::DEFAULT_MIN),
            max: parse_bound(max, Self::DEFAULT_MAX),
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for StatRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

fn parse_bound(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|text| text.trim().parse().ok()).unwrap_or(default)
}

/// Bounds for all six stats. The default admits the nominal 1-100 range on
/// every stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatBounds {
    intelligence: StatRange,
    strength: StatRange,
    speed: StatRange,
    durability: StatRange,
    power: StatRange,
    combat: StatRange,
}

impl StatBounds {
    pub fn range(&self, stat: Stat) -> StatRange {
        match stat {
            Stat::Intelligence => self.intelligence,
            Stat::Strength => self.strength,
            Stat::Speed => self.speed,
            Stat::Durability => self.durability,
            Stat::Power => self.power,
            Stat::Combat => self.combat,
        }
    }

    pub fn set(&mut self, stat: Stat, range: StatRange) {
        match stat {
            Stat::Intelligence => self.intelligence = range,
            Stat::Strength => self.strength = range,
            Stat::Speed => self.speed = range,
            Stat::Durability => self.durability = range,
            Stat::Power => self.power = range,
            Stat::Combat => self.combat = range,
        }
    }

    fn admits(&self, stats: &StatBlock) -> bool {
        Stat::iter().all(|stat| self.range(stat).contains(stats.get(stat)))
    }
}

/// A record field the listing can be ordered by.
///
/// Resolved once at the query boundary; a name that matches no field resolves
/// to nothing, and the listing keeps its default order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SortField {
    Id,
    Title,
    FullName,
    Birthplace,
    Work,
    FirstAppearance,
    ImageUrl,
    Alignment,
    Gender,
    Role,
    Intelligence,
    Strength,
    Speed,
    Durability,
    Power,
    Combat,
    Score,
}

impl SortField {
    pub fn resolve(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }

    fn compare(self, a: &HeroRecord, b: &HeroRecord) -> Ordering {
        match self {
            Self::Id => a.id.as_str().cmp(b.id.as_str()),
            Self::Title => a.title.cmp(&b.title),
            Self::FullName => a.full_name.cmp(&b.full_name),
            Self::Birthplace => a.birthplace.cmp(&b.birthplace),
            Self::Work => a.work.cmp(&b.work),
            Self::FirstAppearance => a.first_appearance.cmp(&b.first_appearance),
            Self::ImageUrl => a.image_url.cmp(&b.image_url),
            Self::Alignment => a.alignment.cmp(&b.alignment),
            Self::Gender => a.gender.cmp(&b.gender),
            Self::Role => a.role.cmp(&b.role),
            Self::Intelligence => a.stats.intelligence.cmp(&b.stats.intelligence),
            Self::Strength => a.stats.strength.cmp(&b.stats.strength),
            Self::Speed => a.stats.speed.cmp(&b.stats.speed),
            Self::Durability => a.stats.durability.cmp(&b.stats.durability),
            Self::Power => a.stats.power.cmp(&b.stats.power),
            Self::Combat => a.stats.combat.cmp(&b.stats.combat),
            Self::Score => a.score().cmp(&b.score()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The listing recognizes exactly `"desc"`; anything else is ascending.
    pub fn resolve(raw: &str) -> Self {
        if raw == "desc" { Self::Desc } else { Self::Asc }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

/// The recognized listing constraints. The default query matches every
/// record with nominal-range stats and orders by title.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// Case-insensitive substring match against the title.
    pub search: Option<String>,
    pub alignments: Vec<String>,
    pub roles: Vec<String>,
    pub genders: Vec<String>,
    pub bounds: StatBounds,
    pub sort_field: Option<SortField>,
    pub sort_order: SortOrder,
}

impl ListingQuery {
    fn matches(&self, hero: &HeroRecord) -> bool {
        let title_hit = self.search.as_ref().map_or(true, |needle| {
            hero.title.to_lowercase().contains(&needle.to_lowercase())
        });

        title_hit
            && member_of(&self.alignments, &hero.alignment)
            && member_of(&self.roles, &hero.role)
            && member_of(&self.genders, &hero.gender)
            && self.bounds.admits(&hero.stats)
    }
}

// An empty set is "no constraint", not "match nothing"
fn member_of(set: &[String], value: &str) -> bool {
    set.is_empty() || set.iter().any(|candidate| candidate == value)
}

/// Produce the listing view: every record satisfying all of the query's
/// active predicates, ordered per the query.
///
/// The filtered set is first ordered by title (ordinal, case-sensitive) in
/// the requested direction. A resolved sort field then re-orders the whole
/// set by that field, replacing the title order. Both passes are stable, so
/// ties under the sort field keep their title order.
pub fn select(records: Vec<HeroRecord>, query: &ListingQuery) -> Vec<HeroRecord> {
    let mut view: Vec<HeroRecord> = records
        .into_iter()
        .filter(|hero| query.matches(hero))
        .collect();

    view.sort_by(|a, b| query.sort_order.apply(a.title.cmp(&b.title)));

    if let Some(field) = query.sort_field {
        view.sort_by(|a, b| query.sort_order.apply(field.compare(a, b)));
    }

    view
}
