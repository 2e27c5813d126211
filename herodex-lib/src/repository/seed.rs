//! First-run dataset. Loaded only when the hero store is empty.

use crate::repository::entities::{HeroDraft, StatBlock};

#[allow(clippy::too_many_arguments)]
fn hero(
    title: &str,
    full_name: &str,
    birthplace: &str,
    work: &str,
    first_appearance: &str,
    alignment: &str,
    gender: &str,
    role: &str,
    stats: StatBlock,
) -> HeroDraft {
    HeroDraft {
        title: title.to_string(),
        full_name: full_name.to_string(),
        birthplace: birthplace.to_string(),
        work: work.to_string(),
        first_appearance: first_appearance.to_string(),
        image_url: String::new(),
        alignment: alignment.to_string(),
        gender: gender.to_string(),
        role: role.to_string(),
        stats,
    }
}

const fn stats(
    intelligence: u32,
    strength: u32,
    speed: u32,
    durability: u32,
    power: u32,
    combat: u32,
) -> StatBlock {
    StatBlock {
        intelligence,
        strength,
        speed,
        durability,
        power,
        combat,
    }
}

pub(crate) fn starting_lineup() -> Vec<HeroDraft> {
    vec![
        hero(
            "Iron Man",
            "Tony Stark",
            "Long Island, New York",
            "Inventor, industrialist",
            "Tales of Suspense #39",
            "good",
            "Male",
            "Founding Avenger",
            stats(100, 85, 58, 85, 100, 64),
        ),
        hero(
            "Captain America",
            "Steve Rogers",
            "New York City",
            "Soldier",
            "Captain America Comics #1",
            "good",
            "Male",
            "Founding Avenger",
            stats(63, 19, 35, 56, 60, 100),
        ),
        hero(
            "Thor",
            "Thor Odinson",
            "Asgard",
            "God of Thunder",
            "Journey into Mystery #83",
            "good",
            "Male",
            "Founding Avenger",
            stats(69, 100, 83, 100, 100, 100),
        ),
        hero(
            "Hulk",
            "Bruce Banner",
            "Dayton, Ohio",
            "Physicist",
            "The Incredible Hulk #1",
            "good",
            "Male",
            "Founding Avenger",
            stats(88, 100, 63, 100, 98, 85),
        ),
        hero(
            "Black Widow",
            "Natasha Romanoff",
            "Stalingrad",
            "Spy",
            "Tales of Suspense #52",
            "good",
            "Female",
            "Core Avenger",
            stats(75, 13, 33, 30, 36, 100),
        ),
        hero(
            "Hawkeye",
            "Clint Barton",
            "Waverly, Iowa",
            "Marksman",
            "Tales of Suspense #57",
            "good",
            "Male",
            "Support",
            stats(56, 12, 21, 18, 47, 80),
        ),
        hero(
            "Scarlet Witch",
            "Wanda Maximoff",
            "Sokovia",
            "",
            "The X-Men #4",
            "good",
            "Female",
            "Mystic Defender",
            stats(100, 10, 29, 70, 100, 80),
        ),
        hero(
            "Vision",
            "",
            "Avengers Tower",
            "Synthezoid",
            "The Avengers #57",
            "good",
            "Other",
            "Core Avenger",
            stats(100, 72, 54, 80, 100, 64),
        ),
        hero(
            "Doctor Strange",
            "Stephen Strange",
            "Philadelphia, Pennsylvania",
            "Sorcerer Supreme",
            "Strange Tales #110",
            "good",
            "Male",
            "Mystic Defender",
            stats(100, 10, 12, 84, 100, 60),
        ),
        hero(
            "Loki",
            "Loki Laufeyson",
            "Jotunheim",
            "God of Mischief",
            "Journey into Mystery #85",
            "bad",
            "Male",
            "Mystic Defender",
            stats(88, 52, 28, 85, 100, 60),
        ),
        hero(
            "Star-Lord",
            "Peter Quill",
            "Colorado",
            "Outlaw",
            "Marvel Preview #4",
            "good",
            "Male",
            "Guardian",
            stats(69, 41, 58, 64, 57, 72),
        ),
        hero(
            "Nebula",
            "",
            "Luphom",
            "Mercenary",
            "The Avengers #257",
            "neutral",
            "Female",
            "Guardian",
            stats(69, 80, 67, 76, 63, 84),
        ),
    ]
}
