use clap::Subcommand;
use colored::Colorize;
use skillswap_lib::{Catalog, Profile, ProfileQuery};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Recommend profiles matching the given criteria
    Recommend {
        /// Skill to learn
        #[arg(short, long)]
        skill: Option<String>,
        /// Preferred days
        #[arg(short, long)]
        days: Option<String>,
        /// Preferred time range
        #[arg(short, long)]
        time_range: Option<String>,
    },
    /// Register a new profile and report mutual-interest matches
    Register {
        /// Id of the owning user
        user: u64,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        days: Option<String>,
        #[arg(long)]
        time_range: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Skills this profile offers
        #[arg(long, value_delimiter = ',')]
        offers: Vec<String>,
        /// Skills this profile's owner wants to learn
        #[arg(long, value_delimiter = ',')]
        wants: Vec<String>,
    },
}

pub fn handle(catalog: &Catalog, cmd: &Command) {
    match cmd {
        Command::Recommend {
            skill,
            days,
            time_range,
        } => {
            let mut query = ProfileQuery::new();
            if let Some(skill) = skill {
                query = query.skill(skill);
            }
            if let Some(days) = days {
                query = query.days(days);
            }
            if let Some(time_range) = time_range {
                query = query.time_range(time_range);
            }

            let summaries = catalog.recommend(&query).unwrap();
            if summaries.is_empty() {
                println!("{}", "No profiles match the given criteria.".yellow());
                return;
            }

            for summary in summaries {
                println!(
                    "{} {} ({})",
                    summary.first_name().bold(),
                    summary.last_name().bold(),
                    summary.location().as_deref().unwrap_or("location unknown"),
                );
                if let Some(description) = summary.description() {
                    println!("  {description}");
                }
                if !summary.interested_skills().is_empty() {
                    println!("  interested in: {}", summary.interested_skills().join(", "));
                }
            }
        }
        Command::Register {
            user,
            category,
            days,
            time_range,
            location,
            description,
            offers,
            wants,
        } => {
            let mut profile = Profile::new(*user)
                .with_offered_skills(offers.clone())
                .with_interested_skills(wants.clone());
            if let Some(category) = category {
                profile = profile.with_category(category);
            }
            if let Some(days) = days {
                profile = profile.with_selected_days(days);
            }
            if let Some(time_range) = time_range {
                profile = profile.with_preferred_time_range(time_range);
            }
            if let Some(location) = location {
                profile = profile.with_location(location);
            }
            if let Some(description) = description {
                profile = profile.with_description(description);
            }

            let matches = catalog.register_profile(profile).unwrap();
            println!(
                "Profile registered. {} mutual-interest match(es) found.",
                matches.len()
            );
            for interest_match in matches {
                println!("  {} -> {}", interest_match.address().cyan(), interest_match.message());
            }
        }
    }
}
