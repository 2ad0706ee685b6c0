use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Weighting;
use crate::errors::{StatError, StatResult};

// Trailing rating in names like `gen8ou-1695.txt` or `gen8ou-1695`
static RATING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-(\d+)(?:\.[A-Za-z0-9]+)?/?$").expect("rating regex is valid")
});

/// Index of the rating closest to `target`. Equal distances keep the
/// earlier rating. `None` for an empty slice.
pub fn nearest_index(ratings: &[u32], target: u32) -> Option<usize> {
    let mut closest: Option<(usize, u32)> = None;

    for (index, rating) in ratings.iter().enumerate() {
        let distance = rating.abs_diff(target);
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((index, distance)),
        }
    }

    closest.map(|(index, _)| index)
}

/// Pick a rating from a bracket table: brackets index directly, targets take
/// the nearest entry.
pub fn select_rating(ratings: &[u32], weighting: Weighting) -> StatResult<u32> {
    let index = match weighting {
        Weighting::Bracket(bracket) => bracket.index(),
        Weighting::Target(target) => nearest_index(ratings, target).ok_or(StatError::Index {
            index: 0,
            available: 0,
        })?,
    };

    ratings.get(index).copied().ok_or(StatError::Index {
        index,
        available: ratings.len(),
    })
}

/// Rating embedded at the end of a stat file name
pub fn parse_rating(file_name: &str) -> StatResult<u32> {
    RATING_REGEX
        .captures(file_name)
        .and_then(|captures| captures.get(1))
        .and_then(|rating| rating.as_str().parse().ok())
        .ok_or_else(|| StatError::Parse(file_name.to_string()))
}

/// Pick one discovered file. Targets require every candidate to carry a
/// parseable rating; a single bad name fails the whole selection.
pub fn select_candidate(candidates: &[String], weighting: Weighting) -> StatResult<&str> {
    if candidates.is_empty() {
        return Err(StatError::Index {
            index: 0,
            available: 0,
        });
    }

    let index = match weighting {
        Weighting::Bracket(bracket) => bracket.index(),
        Weighting::Target(target) => {
            let ratings = candidates
                .iter()
                .map(|name| parse_rating(name))
                .collect::<StatResult<Vec<_>>>()?;
            nearest_index(&ratings, target).unwrap_or(0)
        }
    };

    candidates
        .get(index)
        .map(String::as_str)
        .ok_or(StatError::Index {
            index,
            available: candidates.len(),
        })
}
