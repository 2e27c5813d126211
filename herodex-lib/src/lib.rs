pub mod battle;
pub mod compare;
pub mod fs;
pub mod listing;
pub mod repository;

pub use repository::Repository;
pub use repository::entities::{
    Comment, Error, HeroDraft, HeroId, HeroRecord, PollChoice, PollResult, Result, Stat, StatBlock,
};
