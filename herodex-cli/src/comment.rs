use clap::Subcommand;
use colored::Colorize;
use herodex_lib::Repository;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Post a comment on a hero
    Add {
        hero_id: String,
        username: String,
        message: String,
    },
    /// List a hero's comments
    List { hero_id: String },
    /// Like a comment
    Like { id: String },
}

pub fn handle(repo: &Repository, cmd: &Command) {
    match cmd {
        Command::Add {
            hero_id,
            username,
            message,
        } => {
            let comment = repo.add_comment(hero_id, username, message).unwrap();
            println!("Posted comment {}", comment.id);
        }
        Command::List { hero_id } => {
            let comments = repo.comments_for(hero_id).unwrap();
            if comments.is_empty() {
                println!("No comments yet");
                return;
            }
            for comment in comments {
                println!(
                    "#{} {} ({}, {} likes): {}",
                    comment.id,
                    comment.username.bold(),
                    comment.posted_at.format("%Y-%m-%d"),
                    comment.likes,
                    comment.message
                );
            }
        }
        Command::Like { id } => {
            repo.like_comment(id).unwrap();
        }
    }
}
