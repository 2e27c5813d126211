use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Sentinel written in place of a blank optional display field.
pub const BLANK_FIELD: &str = "-";

/// Identifier of a [`HeroRecord`]. Externally assigned; numeric strings by
/// convention, but never enforced as a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, From, Serialize, Deserialize)]
pub struct HeroId(String);

impl HeroId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HeroId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The six numeric attributes of a hero, nominally 0-100, unvalidated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub intelligence: u32,
    pub strength: u32,
    pub speed: u32,
    pub durability: u32,
    pub power: u32,
    pub combat: u32,
}

impl StatBlock {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Intelligence => self.intelligence,
            Stat::Strength => self.strength,
            Stat::Speed => self.speed,
            Stat::Durability => self.durability,
            Stat::Power => self.power,
            Stat::Combat => self.combat,
        }
    }

    /// The combined stat: the sum of all six attributes.
    pub fn combined(&self) -> u32 {
        self.intelligence + self.strength + self.speed + self.durability + self.power + self.combat
    }
}

/// One of the six hero attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum::Display)]
pub enum Stat {
    Intelligence,
    Strength,
    Speed,
    Durability,
    Power,
    Combat,
}

/// One hero's profile and stats as persisted in the record file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRecord {
    pub id: HeroId,
    pub title: String,
    pub full_name: String,
    pub birthplace: String,
    pub work: String,
    pub first_appearance: String,
    pub image_url: String,
    pub alignment: String,
    pub gender: String,
    pub role: String,
    #[serde(flatten)]
    pub stats: StatBlock,
    /// `None` means "no ratings yet" and is distinct from an empty list.
    #[serde(default)]
    pub ratings: Option<Vec<u32>>,
}

impl HeroRecord {
    /// The derived ranking score. Computed on read, never stored.
    pub fn score(&self) -> u32 {
        self.stats.combined()
    }

    pub fn average_rating(&self) -> Option<f64> {
        let ratings = self.ratings.as_ref()?;
        if ratings.is_empty() {
            return None;
        }

        let (sum, count) = ratings
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sum, count), rating| {
                (sum + f64::from(*rating), count + 1.0)
            });

        Some(sum / count)
    }

    /// Coerce blank optional display fields to the `"-"` sentinel. Applied at
    /// write time, so a blank is never persisted.
    pub(crate) fn coerce_blanks(&mut self) {
        for field in [
            &mut self.full_name,
            &mut self.birthplace,
            &mut self.work,
            &mut self.first_appearance,
            &mut self.image_url,
        ] {
            if field.trim().is_empty() {
                *field = BLANK_FIELD.to_string();
            }
        }
    }
}

/// Everything a caller supplies when creating a hero record; the id and the
/// rating history are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct HeroDraft {
    pub title: String,
    pub full_name: String,
    pub birthplace: String,
    pub work: String,
    pub first_appearance: String,
    pub image_url: String,
    pub alignment: String,
    pub gender: String,
    pub role: String,
    pub stats: StatBlock,
}

impl HeroDraft {
    pub(crate) fn into_record(self, id: HeroId) -> HeroRecord {
        let mut record = HeroRecord {
            id,
            title: self.title,
            full_name: self.full_name,
            birthplace: self.birthplace,
            work: self.work,
            first_appearance: self.first_appearance,
            image_url: self.image_url,
            alignment: self.alignment,
            gender: self.gender,
            role: self.role,
            stats: self.stats,
            ratings: None,
        };
        record.coerce_blanks();

        record
    }
}
