use clap::Subcommand;
use colored::Colorize;
use skillswap_lib::{Catalog, RatingKind};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all offered skills
    List,
    /// Rate a skill on a 1-5 scale
    Rate {
        /// Id of the rating user
        user: u64,
        skill: String,
        score: u8,
        /// "offered" or "interested"
        #[arg(long, default_value = "offered")]
        kind: String,
    },
    /// Show the average rating for a skill
    Average {
        skill: String,
        /// "offered" or "interested"
        #[arg(long, default_value = "offered")]
        kind: String,
    },
}

pub fn handle(catalog: &Catalog, cmd: &Command) {
    match cmd {
        Command::List => {
            for skill in catalog.offered_skills() {
                println!("{skill}");
            }
        }
        Command::Rate {
            user,
            skill,
            score,
            kind,
        } => {
            let kind: RatingKind = kind.parse().unwrap();
            catalog.rate_skill(*user, skill, *score, kind);
        }
        Command::Average { skill, kind } => {
            let kind: RatingKind = kind.parse().unwrap();
            match catalog.average_rating(skill, kind) {
                Some(average) => println!("{}: {average:.1}", skill.bold()),
                None => println!("No ratings recorded for {}.", skill.yellow()),
            }
        }
    }
}
