use clap::Subcommand;
use colored::Colorize;
use herodex_lib::{
    HeroDraft, HeroRecord, Repository, Stat,
    listing::{self, ListingQuery, SortField, SortOrder, StatBounds, StatRange},
};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List hero records, filtered and sorted
    List(ListArgs),
    /// Show one hero record in full
    Show { id: String },
    /// Add a new hero record
    Add(HeroArgs),
    /// Replace a hero record's fields
    Edit {
        id: String,
        #[command(flatten)]
        args: HeroArgs,
    },
    /// Remove a hero record
    Remove { id: String },
    /// Rate a hero from 1 to 5
    Rate { id: String, value: u32 },
}

/// Raw listing constraints. Bounds stay strings here so that unparsable
/// input degrades to the defaults instead of a usage error.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Substring to look for in titles
    #[arg(short, long)]
    search: Option<String>,
    /// Keep only these alignments (repeatable)
    #[arg(long)]
    alignment: Vec<String>,
    /// Keep only these roles (repeatable)
    #[arg(long)]
    role: Vec<String>,
    /// Keep only these genders (repeatable)
    #[arg(long)]
    gender: Vec<String>,
    #[arg(long)]
    min_intelligence: Option<String>,
    #[arg(long)]
    max_intelligence: Option<String>,
    #[arg(long)]
    min_strength: Option<String>,
    #[arg(long)]
    max_strength: Option<String>,
    #[arg(long)]
    min_speed: Option<String>,
    #[arg(long)]
    max_speed: Option<String>,
    #[arg(long)]
    min_durability: Option<String>,
    #[arg(long)]
    max_durability: Option<String>,
    #[arg(long)]
    min_power: Option<String>,
    #[arg(long)]
    max_power: Option<String>,
    #[arg(long)]
    min_combat: Option<String>,
    #[arg(long)]
    max_combat: Option<String>,
    /// Field to order by; an unknown name keeps the title order
    #[arg(long)]
    sort: Option<String>,
    /// "desc" for descending; anything else is ascending
    #[arg(long)]
    order: Option<String>,
}

impl ListArgs {
    fn query(&self) -> ListingQuery {
        let mut bounds = StatBounds::default();
        for (stat, min, max) in [
            (Stat::Intelligence, &self.min_intelligence, &self.max_intelligence),
            (Stat::Strength, &self.min_strength, &self.max_strength),
            (Stat::Speed, &self.min_speed, &self.max_speed),
            (Stat::Durability, &self.min_durability, &self.max_durability),
            (Stat::Power, &self.min_power, &self.max_power),
            (Stat::Combat, &self.min_combat, &self.max_combat),
        ] {
            bounds.set(stat, StatRange::resolve(min.as_deref(), max.as_deref()));
        }

        ListingQuery {
            search: self.search.clone(),
            alignments: self.alignment.clone(),
            roles: self.role.clone(),
            genders: self.gender.clone(),
            bounds,
            sort_field: self.sort.as_deref().and_then(SortField::resolve),
            sort_order: self
                .order
                .as_deref()
                .map(SortOrder::resolve)
                .unwrap_or_default(),
        }
    }
}

/// The full set of editable hero fields, shared by `add` and `edit`. Blank
/// optional fields end up stored as "-".
#[derive(clap::Args, Debug, Clone)]
pub struct HeroArgs {
    /// Display name of the hero
    title: String,
    #[arg(long, default_value = "")]
    full_name: String,
    #[arg(long, default_value = "")]
    birthplace: String,
    #[arg(long, default_value = "")]
    work: String,
    #[arg(long, default_value = "")]
    first_appearance: String,
    #[arg(long, default_value = "")]
    image_url: String,
    #[arg(long, default_value = "good")]
    alignment: String,
    #[arg(long, default_value = "Male")]
    gender: String,
    #[arg(long, default_value = "Core Avenger")]
    role: String,
    #[arg(long, default_value_t = 0)]
    intelligence: u32,
    #[arg(long, default_value_t = 0)]
    strength: u32,
    #[arg(long, default_value_t = 0)]
    speed: u32,
    #[arg(long, default_value_t = 0)]
    durability: u32,
    #[arg(long, default_value_t = 0)]
    power: u32,
    #[arg(long, default_value_t = 0)]
    combat: u32,
}

impl HeroArgs {
    fn draft(&self) -> HeroDraft {
        HeroDraft {
            title: self.title.clone(),
            full_name: self.full_name.clone(),
            birthplace: self.birthplace.clone(),
            work: self.work.clone(),
            first_appearance: self.first_appearance.clone(),
            image_url: self.image_url.clone(),
            alignment: self.alignment.clone(),
            gender: self.gender.clone(),
            role: self.role.clone(),
            stats: herodex_lib::StatBlock {
                intelligence: self.intelligence,
                strength: self.strength,
                speed: self.speed,
                durability: self.durability,
                power: self.power,
                combat: self.combat,
            },
        }
    }
}

pub fn handle(repo: &Repository, cmd: &Command) {
    match cmd {
        Command::List(args) => {
            let view = listing::select(repo.heroes().unwrap(), &args.query());
            if view.is_empty() {
                println!("No heroes match");
                return;
            }
            for hero in view {
                println!(
                    "{:>4}  {}  score {}",
                    hero.id.as_str().dimmed(),
                    format!("{:<22}", hero.title).bold(),
                    hero.score()
                );
            }
        }
        Command::Show { id } => match repo.hero(id).unwrap() {
            Some(hero) => show(repo, &hero),
            None => eprintln!("No hero with id {id}"),
        },
        Command::Add(args) => {
            let hero = repo.add_hero(args.draft()).unwrap();
            println!("Added {} with id {}", hero.title, hero.id);
        }
        Command::Edit { id, args } => match repo.hero(id).unwrap() {
            Some(existing) => {
                let draft = args.draft();
                let record = HeroRecord {
                    id: existing.id,
                    title: draft.title,
                    full_name: draft.full_name,
                    birthplace: draft.birthplace,
                    work: draft.work,
                    first_appearance: draft.first_appearance,
                    image_url: draft.image_url,
                    alignment: draft.alignment,
                    gender: draft.gender,
                    role: draft.role,
                    stats: draft.stats,
                    // The edit form never carries the rating history
                    ratings: existing.ratings,
                };
                repo.update_hero(record).unwrap();
                println!("Updated hero {id}");
            }
            None => eprintln!("No hero with id {id}"),
        },
        Command::Remove { id } => {
            repo.remove_hero(id).unwrap();
        }
        Command::Rate { id, value } => {
            repo.rate_hero(id, *value).unwrap();
        }
    }
}

fn show(repo: &Repository, hero: &HeroRecord) {
    println!("{} (id {})", hero.title.bold(), hero.id);
    println!("Full name:         {}", hero.full_name);
    println!("Birthplace:        {}", hero.birthplace);
    println!("Work:              {}", hero.work);
    println!("First appearance:  {}", hero.first_appearance);
    println!("Image:             {}", hero.image_url);
    println!(
        "Alignment / gender / role: {} / {} / {}",
        hero.alignment, hero.gender, hero.role
    );
    println!(
        "Stats: int {} str {} spd {} dur {} pow {} com {}  (score {})",
        hero.stats.intelligence,
        hero.stats.strength,
        hero.stats.speed,
        hero.stats.durability,
        hero.stats.power,
        hero.stats.combat,
        hero.score()
    );
    match hero.average_rating() {
        Some(average) => {
            let votes = hero.ratings.as_ref().map_or(0, Vec::len);
            println!("Rating: {average:.1} from {votes} votes");
        }
        None => println!("Rating: not rated yet"),
    }

    let comments = repo.comments_for(hero.id.as_str()).unwrap();
    if !comments.is_empty() {
        println!("Comments: {}", comments.len());
    }
}
