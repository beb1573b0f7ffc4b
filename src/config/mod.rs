pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use crate::domain::model::{GroupScope, UserType};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "homie-match")]
#[command(about = "Roommate preference extraction and PG finder tools")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Detect roommate preferences in free text
    Extract {
        text: String,

        #[arg(long = "extra", help = "Supplementary text field (repeatable)")]
        extra: Vec<String>,

        #[arg(long, help = "Print JSON instead of a table")]
        json: bool,
    },

    /// Run the questionnaire for a demo session and print the saved profile
    Questionnaire {
        text: String,

        #[arg(long = "extra")]
        extra: Vec<String>,

        #[arg(long, help = "Flip the non-negotiable flag of the preference at INDEX")]
        toggle: Vec<usize>,

        #[arg(long, default_value = "demo@homie.in")]
        email: String,

        #[arg(long, value_enum, default_value_t = UserType::Student)]
        user_type: UserType,

        #[arg(long, help = "Skip the questionnaire without saving preferences")]
        skip: bool,
    },

    /// Search PG listings
    Pgs {
        #[arg(long)]
        query: Option<String>,

        #[arg(long)]
        locality: Option<String>,

        #[arg(long, help = "e.g. 10-15k or 25k+")]
        budget: Option<String>,

        #[arg(long, help = "e.g. 2-sharing")]
        room_type: Option<String>,
    },

    /// List location groups
    Groups {
        #[arg(long, value_enum, default_value_t = GroupScope::City)]
        scope: GroupScope,

        #[arg(long, default_value = "")]
        query: String,
    },
}
