use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::{RequestDescriptor, Tier};
use crate::errors::StatResult;

pub const DEFAULT_GENERATION: &str = "gen9";

#[derive(Parser, Debug)]
#[command(author, version, about = "Smogon usage statistics lookup")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Show the most common moves for a Pokemon
    Moves {
        #[command(flatten)]
        lookup: LookupArgs,
        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the URL of the stat file that would be used
    Locate {
        #[command(flatten)]
        lookup: LookupArgs,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct LookupArgs {
    /// Pokemon to get stats for
    pub pokemon: String,
    /// Tier to get stats from (ubers, ou, uu, ru, nu, pu, zu)
    pub tier: Tier,
    /// Skill weighting: 0-3 for unskilled, average, skilled, elite, or a rating to match
    pub weighting: u32,
    /// Generation (e.g. gen8), or an override URL
    pub generation_or_url: Option<String>,
    /// Override URL
    pub override_url: Option<String>,
    /// Generation to get stats from
    #[arg(short, long)]
    pub generation: Option<String>,
    /// Fetch stats from this URL instead of looking one up
    #[arg(short, long)]
    pub url: Option<String>,
}

impl LookupArgs {
    /// Sort out the positional shorthand. A fourth argument shorter than six
    /// characters is a generation, anything longer is a URL; a fifth argument
    /// is always a URL. Flags win over positionals.
    pub fn generation_and_url(&self) -> (String, Option<String>) {
        let mut generation = DEFAULT_GENERATION.to_string();
        let mut url = None;

        if let Some(extra) = &self.generation_or_url {
            if extra.len() < 6 {
                generation = extra.to_lowercase();
            } else {
                url = Some(extra.clone());
            }
        }
        if let Some(positional) = &self.override_url {
            url = Some(positional.clone());
        }
        if let Some(flag) = &self.generation {
            generation = flag.to_lowercase();
        }
        if let Some(flag) = &self.url {
            url = Some(flag.clone());
        }

        (generation, url)
    }

    pub fn to_request(&self) -> StatResult<RequestDescriptor> {
        let (generation, url) = self.generation_and_url();
        RequestDescriptor::new(&self.pokemon, self.tier, &generation, self.weighting, url)
    }
}
