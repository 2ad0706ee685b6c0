use std::fmt;
use std::str::FromStr;

use crate::errors::{StatError, StatResult};

/// Competitive tier, as abbreviated in stat file names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Ubers,
    Overused,
    Underused,
    RarelyUsed,
    NeverUsed,
    Pu,
    Zu,
}

impl Tier {
    pub fn code(&self) -> &'static str {
        match self {
            Tier::Ubers => "ubers",
            Tier::Overused => "ou",
            Tier::Underused => "uu",
            Tier::RarelyUsed => "ru",
            Tier::NeverUsed => "nu",
            // PU and ZU don't stand for anything
            Tier::Pu => "pu",
            Tier::Zu => "zu",
        }
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ubers" => Ok(Tier::Ubers),
            "ou" => Ok(Tier::Overused),
            "uu" => Ok(Tier::Underused),
            "ru" => Ok(Tier::RarelyUsed),
            "nu" => Ok(Tier::NeverUsed),
            "pu" => Ok(Tier::Pu),
            "zu" => Ok(Tier::Zu),
            other => Err(format!("Unknown tier: {}", other)),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// What kind of statistics to pull. Each mode lives in its own subfolder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Moves,
}

/// Predefined player skill levels that stats are weighted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillBracket {
    Unskilled, // no weighting at all
    Average,
    Skilled,
    Elite,
}

impl SkillBracket {
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(SkillBracket::Unskilled),
            1 => Some(SkillBracket::Average),
            2 => Some(SkillBracket::Skilled),
            3 => Some(SkillBracket::Elite),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SkillBracket::Unskilled => 0,
            SkillBracket::Average => 1,
            SkillBracket::Skilled => 2,
            SkillBracket::Elite => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillBracket::Unskilled => "unskilled",
            SkillBracket::Average => "average",
            SkillBracket::Skilled => "skilled",
            SkillBracket::Elite => "elite",
        }
    }
}

/// Either a predefined bracket (0-3) or a literal rating to match (4 and up)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    Bracket(SkillBracket),
    Target(u32),
}

impl From<u32> for Weighting {
    fn from(value: u32) -> Self {
        match SkillBracket::from_index(value) {
            Some(bracket) => Weighting::Bracket(bracket),
            None => Weighting::Target(value),
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weighting::Bracket(bracket) => {
                write!(f, "predefined value {}", bracket.as_str())
            }
            Weighting::Target(rating) => {
                write!(f, "closest available rating to {}", rating)
            }
        }
    }
}

/// Everything needed to find one stat file
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub pokemon: String,
    pub tier: Tier,
    pub generation: String,
    pub weighting: Weighting,
    pub override_url: Option<String>,
    pub mode: Mode,
}

impl RequestDescriptor {
    pub fn new(
        pokemon: &str,
        tier: Tier,
        generation: &str,
        weighting: u32,
        override_url: Option<String>,
    ) -> StatResult<Self> {
        let pokemon = pokemon.trim().to_lowercase();
        if pokemon.is_empty() {
            // An empty name is a substring of every line
            return Err(StatError::InvalidRequest(
                "pokemon must not be empty".to_string(),
            ));
        }

        let generation = generation.trim().to_lowercase();
        if generation.is_empty() {
            return Err(StatError::InvalidRequest(
                "generation must not be empty".to_string(),
            ));
        }

        Ok(Self {
            pokemon,
            tier,
            generation,
            weighting: Weighting::from(weighting),
            override_url: override_url.filter(|url| !url.trim().is_empty()),
            mode: Mode::Moves,
        })
    }

    /// Generation followed by tier, e.g. `gen8ou`
    pub fn format_key(&self) -> String {
        format!("{}{}", self.generation, self.tier.code())
    }
}
