use std::{fs::create_dir_all, path::PathBuf, sync::Arc};

use parking_lot::RwLock;
use tracing::debug;

use crate::repository::{
    config::{Cfg, CoreConfig},
    entities::{
        Comment, HeroDraft, HeroId, HeroRecord, PollChoice, PollResult, Result, next_numeric_id,
    },
    store::JsonFile,
};

pub mod config;
pub mod entities;
mod seed;
mod store;

/// Central access point for all persistent data.
///
/// The [`Repository`] owns the flat record files and provides a single,
/// consistent interface for reading and writing hero records, comments, and
/// the poll tally. Every operation reads its file at call start; mutations
/// rewrite it at call end.
#[derive(Clone, Debug)]
pub struct Repository {
    heroes: JsonFile<Vec<HeroRecord>>,
    comments: JsonFile<Vec<Comment>>,
    poll: JsonFile<PollResult>,
    cfg: Cfg,
}

impl Repository {
    pub fn new() -> Self {
        let cfg: Cfg = Arc::new(RwLock::new(CoreConfig::load()));
        let root = cfg.read().data_dir();

        Self::rooted(root, cfg)
    }

    fn rooted(root: PathBuf, cfg: Cfg) -> Self {
        create_dir_all(&root).unwrap();

        Self {
            heroes: JsonFile::open(root.join("heroes.json")),
            comments: JsonFile::open(root.join("comments.json")),
            poll: JsonFile::open(root.join("poll.json")),
            cfg,
        }
    }

    /// The directory the record files live in.
    pub fn data_dir(&self) -> PathBuf {
        self.cfg.read().data_dir()
    }

    // Heroes

    /// All hero records, in persisted order.
    pub fn heroes(&self) -> Result<Vec<HeroRecord>> {
        self.heroes.read()
    }

    /// Look a hero up by id. An unknown id is not an error.
    pub fn hero(&self, id: &str) -> Result<Option<HeroRecord>> {
        Ok(self
            .heroes
            .read()?
            .into_iter()
            .find(|hero| hero.id.as_str() == id))
    }

    /// Insert a new hero record, assigning the next id under the
    /// numeric-string convention.
    pub fn add_hero(&self, draft: HeroDraft) -> Result<HeroRecord> {
        self.heroes.modify(|all| {
            let id = HeroId::new(next_numeric_id(all.iter().map(|hero| hero.id.as_str())));
            let record = draft.into_record(id);
            all.push(record.clone());

            debug!("Created hero record {}: {}", record.id, record.title);

            record
        })
    }

    /// Replace the stored record with the same id, field for field. Blank
    /// optional fields are coerced before the write; an unknown id is a no-op.
    pub fn update_hero(&self, mut record: HeroRecord) -> Result<()> {
        record.coerce_blanks();

        self.heroes.modify(|all| {
            match all.iter_mut().find(|hero| hero.id == record.id) {
                Some(slot) => {
                    debug!("Updated hero record {}", record.id);
                    *slot = record;
                }
                None => debug!("Ignoring update for unknown hero {}", record.id),
            }
        })
    }

    /// Remove a hero record. An unknown id is a no-op.
    pub fn remove_hero(&self, id: &str) -> Result<()> {
        self.heroes.modify(|all| {
            let before = all.len();
            all.retain(|hero| hero.id.as_str() != id);

            if all.len() < before {
                debug!("Removed hero record {id}");
            } else {
                debug!("Ignoring removal of unknown hero {id}");
            }
        })
    }

    /// Append a rating to a hero's history. The value is taken as given; an
    /// unknown id is a no-op.
    pub fn rate_hero(&self, id: &str, value: u32) -> Result<()> {
        self.heroes.modify(|all| {
            match all.iter_mut().find(|hero| hero.id.as_str() == id) {
                Some(hero) => {
                    hero.ratings.get_or_insert_with(Vec::new).push(value);
                    debug!("Recorded rating {value} for hero {id}");
                }
                None => debug!("Ignoring rating for unknown hero {id}"),
            }
        })
    }

    // Comments

    /// All comments posted on the given hero, oldest first.
    pub fn comments_for(&self, hero_id: &str) -> Result<Vec<Comment>> {
        Ok(self
            .comments
            .read()?
            .into_iter()
            .filter(|comment| comment.hero_id.as_str() == hero_id)
            .collect())
    }

    pub fn add_comment(&self, hero_id: &str, username: &str, message: &str) -> Result<Comment> {
        self.comments.modify(|all| {
            let id = next_numeric_id(all.iter().map(|comment| comment.id.as_str()));
            let comment = Comment::new(id, HeroId::from(hero_id), username, message);
            all.push(comment.clone());

            debug!("Posted comment {} on hero {hero_id}", comment.id);

            comment
        })
    }

    /// Bump a comment's like counter. An unknown id is a no-op.
    pub fn like_comment(&self, id: &str) -> Result<()> {
        self.comments.modify(|all| {
            match all.iter_mut().find(|comment| comment.id == id) {
                Some(comment) => comment.likes += 1,
                None => debug!("Ignoring like for unknown comment {id}"),
            }
        })
    }

    // Poll

    pub fn poll_results(&self) -> Result<PollResult> {
        self.poll.read()
    }

    pub fn vote_poll(&self, choice: PollChoice) -> Result<PollResult> {
        self.poll.modify(|tally| {
            tally.record(choice);
            *tally
        })
    }

    /// Load the starting dataset when the hero store is empty. Returns whether
    /// anything was seeded.
    pub fn seed_if_empty(&self) -> Result<bool> {
        if !self.heroes()?.is_empty() {
            return Ok(false);
        }

        for draft in seed::starting_lineup() {
            self.add_hero(draft)?;
        }

        Ok(true)
    }

    /// Return a mock version of a [`Repository`] with its record files rooted
    /// in a scratch directory.
    #[cfg(test)]
    pub(crate) fn mock() -> Self {
        let root = tempfile::tempdir()
            .expect("temp dir must be creatable")
            .keep();
        let cfg = Arc::new(RwLock::new(CoreConfig::mock(root.clone())));

        Self::rooted(root, cfg)
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::repository::entities::{BLANK_FIELD, StatBlock};

    fn draft(title: &str) -> HeroDraft {
        HeroDraft {
            title: title.to_string(),
            alignment: "good".to_string(),
            gender: "Male".to_string(),
            role: "Core Avenger".to_string(),
            stats: StatBlock {
                intelligence: 50,
                strength: 50,
                speed: 50,
                durability: 50,
                power: 50,
                combat: 50,
            },
            ..HeroDraft::default()
        }
    }

    #[test]
    fn test_add_assigns_incrementing_ids() {
        let repo = Repository::mock();

        let first = repo.add_hero(draft("Iron Man")).unwrap();
        let second = repo.add_hero(draft("Thor")).unwrap();

        assert_eq!(first.id.as_str(), "1");
        assert_eq!(second.id.as_str(), "2");
        assert_eq!(repo.heroes().unwrap().len(), 2);
    }

    #[test]
    fn test_add_coerces_blank_optionals() {
        let repo = Repository::mock();

        let hero = repo.add_hero(draft("Vision")).unwrap();

        assert_eq!(hero.full_name, BLANK_FIELD);
        assert_eq!(repo.hero("1").unwrap().unwrap().image_url, BLANK_FIELD);
    }

    #[test]
    fn test_lookup_miss_is_not_an_error() {
        let repo = Repository::mock();

        assert!(repo.hero("999").unwrap().is_none());
    }

    #[test]
    fn test_update_replaces_the_record() {
        let repo = Repository::mock();

        let mut hero = repo.add_hero(draft("Iron Man")).unwrap();
        hero.work = "Consultant".to_string();
        hero.full_name = "  ".to_string();
        repo.update_hero(hero).unwrap();

        let stored = repo.hero("1").unwrap().unwrap();
        assert_eq!(stored.work, "Consultant");
        assert_eq!(stored.full_name, BLANK_FIELD);
    }

    #[test]
    fn test_update_of_unknown_hero_is_a_noop() {
        let repo = Repository::mock();

        let hero = repo.add_hero(draft("Iron Man")).unwrap();
        let mut ghost = hero.clone();
        ghost.id = HeroId::from("42");
        repo.update_hero(ghost).unwrap();

        assert_eq!(repo.heroes().unwrap(), vec![hero]);
    }

    #[test]
    fn test_remove() {
        let repo = Repository::mock();

        repo.add_hero(draft("Iron Man")).unwrap();
        repo.add_hero(draft("Thor")).unwrap();
        repo.remove_hero("1").unwrap();

        let remaining = repo.heroes().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.first().unwrap().title, "Thor");

        // Removing it again changes nothing
        repo.remove_hero("1").unwrap();
        assert_eq!(repo.heroes().unwrap().len(), 1);
    }

    #[test]
    fn test_rate_starts_and_appends_history() {
        let repo = Repository::mock();

        repo.add_hero(draft("Iron Man")).unwrap();

        assert_eq!(repo.hero("1").unwrap().unwrap().ratings, None);

        repo.rate_hero("1", 5).unwrap();
        repo.rate_hero("1", 3).unwrap();
        repo.rate_hero("999", 1).unwrap();

        assert_eq!(repo.hero("1").unwrap().unwrap().ratings, Some(vec![5, 3]));
    }

    #[test]
    fn test_comments_are_scoped_to_a_hero() {
        let repo = Repository::mock();

        repo.add_hero(draft("Iron Man")).unwrap();
        repo.add_hero(draft("Thor")).unwrap();

        repo.add_comment("1", "pepper", "Genius.").unwrap();
        repo.add_comment("2", "jane", "Worthy.").unwrap();

        let comments = repo.comments_for("1").unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments.first().unwrap().message, "Genius.");
    }

    #[test]
    fn test_comment_likes() {
        let repo = Repository::mock();

        repo.add_hero(draft("Iron Man")).unwrap();
        let comment = repo.add_comment("1", "happy", "Drive safe.").unwrap();

        repo.like_comment(&comment.id).unwrap();
        repo.like_comment(&comment.id).unwrap();
        repo.like_comment("404").unwrap();

        let stored = repo.comments_for("1").unwrap();
        assert_eq!(stored.first().unwrap().likes, 2);
    }

    #[test]
    fn test_poll_tally_persists() {
        let repo = Repository::mock();

        repo.vote_poll(PollChoice::Yes).unwrap();
        repo.vote_poll(PollChoice::No).unwrap();
        let tally = repo.vote_poll(PollChoice::Yes).unwrap();

        assert_eq!(tally.yes_votes, 2);
        assert_eq!(tally.no_votes, 1);

        // A second repository over the same files sees the same tally
        let reopened = Repository::rooted(repo.data_dir(), repo.cfg.clone());
        assert_eq!(reopened.poll_results().unwrap(), tally);
    }

    #[test]
    fn test_seed_runs_once() {
        let repo = Repository::mock();

        assert!(repo.seed_if_empty().unwrap());
        let count = repo.heroes().unwrap().len();
        assert!(count > 0);

        assert!(!repo.seed_if_empty().unwrap());
        assert_eq!(repo.heroes().unwrap().len(), count);
    }
}
