use crate::seed::{SeedOutcome, seed_sample_data};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_seed(ctx: CommandContext) -> Result<()> {
    match seed_sample_data(&ctx.db)? {
        SeedOutcome::Seeded {
            students,
            courses,
            enrollments,
        } => println!(
            "{} {} students, {} courses, {} enrollments",
            "Seeded".green(),
            students,
            courses,
            enrollments
        ),
        SeedOutcome::AlreadyPopulated => {
            println!("{} database already has students", "Skipped".yellow())
        }
    }
    Ok(())
}
