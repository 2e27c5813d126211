//! Side-by-side comparison of two hero records, stat by stat.

use std::cmp::Ordering;

use strum::IntoEnumIterator;

use crate::repository::entities::{HeroRecord, Stat};

/// One row of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatLine {
    pub stat: Stat,
    pub first: u32,
    pub second: u32,
}

impl StatLine {
    /// Which side leads on this stat.
    pub fn edge(&self) -> Ordering {
        self.first.cmp(&self.second)
    }
}

/// View data for comparing two heroes.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub first: HeroRecord,
    pub second: HeroRecord,
}

impl Comparison {
    pub fn new(first: HeroRecord, second: HeroRecord) -> Self {
        Self { first, second }
    }

    /// The six stat rows, in declaration order.
    pub fn lines(&self) -> Vec<StatLine> {
        Stat::iter()
            .map(|stat| StatLine {
                stat,
                first: self.first.stats.get(stat),
                second: self.second.stats.get(stat),
            })
            .collect()
    }

    /// Combined totals for both sides.
    pub fn totals(&self) -> (u32, u32) {
        (self.first.score(), self.second.score())
    }
}
