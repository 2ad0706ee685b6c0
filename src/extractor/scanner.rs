use std::io::BufRead;

use log::debug;

use crate::errors::StatResult;

/// Where the scan is within a moveset stat file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for the entity's own header line
    Seeking,
    /// Entity found, skipping its other sections up to the moves header
    Skipping,
    /// Inside the moves block, collecting lines
    Emitting,
    /// Hit the block separator; nothing more to read
    Done,
}

/// Result of one transition: the next state and whether the line belongs to
/// the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next: ScanState,
    pub emit: bool,
}

impl Step {
    fn to(next: ScanState) -> Self {
        Self { next, emit: false }
    }

    fn emit() -> Self {
        Self {
            next: ScanState::Emitting,
            emit: true,
        }
    }
}

/// Pure transition function. `entity` must already be lower case.
///
/// Entity names also show up in other entities' teammate listings, but those
/// lines always carry a percentage, so only a line without `%` counts as the
/// entity's own record. This is a substring heuristic: a name contained in a
/// longer name can still match.
pub fn step(state: ScanState, line: &str, entity: &str) -> Step {
    match state {
        ScanState::Seeking => {
            if line.to_lowercase().contains(entity) && !line.contains('%') {
                Step::to(ScanState::Skipping)
            } else {
                Step::to(ScanState::Seeking)
            }
        }
        ScanState::Skipping => {
            if line.to_lowercase().contains("moves") {
                Step::to(ScanState::Emitting)
            } else {
                Step::to(ScanState::Skipping)
            }
        }
        ScanState::Emitting => {
            // A run of dashes closes the block
            if line.contains("--") {
                Step::to(ScanState::Done)
            } else {
                Step::emit()
            }
        }
        ScanState::Done => Step::to(ScanState::Done),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The entity's record was found; lines may be empty if the file ended
    /// before its moves block.
    Found(Vec<String>),
    /// The whole stream was read without meeting the entity.
    NotFound,
}

impl Extraction {
    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }

    pub fn into_lines(self) -> Vec<String> {
        match self {
            Extraction::Found(lines) => lines,
            Extraction::NotFound => Vec::new(),
        }
    }
}

/// Scan a stat file top to bottom and pull out the moves block for `entity`.
/// Stops reading as soon as the block ends.
pub fn extract<R: BufRead>(reader: R, entity: &str) -> StatResult<Extraction> {
    let entity = entity.trim().to_lowercase();
    if entity.is_empty() {
        return Ok(Extraction::NotFound);
    }

    let mut state = ScanState::Seeking;
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let Step { next, emit } = step(state, &line, &entity);

        if state == ScanState::Seeking && next != ScanState::Seeking {
            debug!("Found record for {}: {}", entity, line.trim());
        }
        if emit {
            lines.push(line);
        }

        state = next;
        if state == ScanState::Done {
            break;
        }
    }

    if state == ScanState::Seeking {
        return Ok(Extraction::NotFound);
    }
    Ok(Extraction::Found(lines))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn stream(lines: &[&str]) -> Cursor<String> {
        Cursor::new(lines.join("\n"))
    }

    #[test]
    fn test_percent_lines_never_match() {
        let step = step(ScanState::Seeking, " | Pikachu 12.345% |", "pikachu");
        assert_eq!(step, Step::to(ScanState::Seeking));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let step = step(ScanState::Seeking, " | Pikachu |", "pikachu");
        assert_eq!(step.next, ScanState::Skipping);
        assert!(!step.emit);
    }

    #[test]
    fn test_moves_header_opens_block_without_emitting() {
        let step = step(ScanState::Skipping, " | Moves |", "pikachu");
        assert_eq!(step, Step::to(ScanState::Emitting));
    }

    #[test]
    fn test_dashes_close_block() {
        assert_eq!(step(ScanState::Emitting, " +----+ ", "x"), Step::to(ScanState::Done));
        assert_eq!(step(ScanState::Emitting, "Surf 40%", "x"), Step::emit());
        assert_eq!(step(ScanState::Done, "Surf 40%", "x"), Step::to(ScanState::Done));
    }

    #[test]
    fn test_extracts_synthetic_block() {
        let input = stream(&["Alice 55%", "Bob", "Moves", "Thunderbolt 80%", "----"]);
        let result = extract(input, "bob").unwrap();
        assert_eq!(result, Extraction::Found(vec!["Thunderbolt 80%".to_string()]));
    }

    #[test]
    fn test_missing_entity_is_not_found() {
        let input = stream(&["Alice 55%", "Carol", "Moves", "Surf 80%", "----"]);
        let result = extract(input, "bob").unwrap();

        assert_eq!(result, Extraction::NotFound);
        assert!(result.into_lines().is_empty());
    }

    #[test]
    fn test_teammate_mentions_are_skipped() {
        let input = stream(&[
            " +----------------------------------------+ ",
            " | Heatran                                | ",
            " +----------------------------------------+ ",
            " | Moves                                  | ",
            " | Magma Storm 70.123%                    | ",
            " +----------------------------------------+ ",
            " | Teammates                              | ",
            " | Landorus-Therian 30.456%               | ",
            " +----------------------------------------+ ",
            " | Landorus-Therian                       | ",
            " +----------------------------------------+ ",
            " | Raw count: 1234                        | ",
            " +----------------------------------------+ ",
            " | Abilities                              | ",
            " | Intimidate 100.000%                    | ",
            " +----------------------------------------+ ",
            " | Moves                                  | ",
            " | Stealth Rock 85.001%                   | ",
            " | U-turn 70.502%                         | ",
            " +----------------------------------------+ ",
            " | Teammates                              | ",
        ]);

        let lines = extract(input, "Landorus-Therian").unwrap().into_lines();
        assert_eq!(
            lines,
            vec![
                " | Stealth Rock 85.001%                   | ",
                " | U-turn 70.502%                         | ",
            ]
        );
    }

    #[test]
    fn test_stops_reading_at_separator() {
        // Anything after the separator is not valid UTF-8, so reading it would fail
        let mut bytes = b"Bob\nMoves\nThunderbolt 80%\n----\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);

        let result = extract(Cursor::new(bytes), "bob").unwrap();
        assert_eq!(result, Extraction::Found(vec!["Thunderbolt 80%".to_string()]));
    }

    #[test]
    fn test_blank_entity_matches_nothing() {
        let input = stream(&["Alice 55%", " | Pikachu |", " | Moves |", " | Surf 1% |", " ----"]);
        assert_eq!(extract(input, "  ").unwrap(), Extraction::NotFound);
    }

    #[test]
    fn test_unreadable_stream_is_an_error() {
        let bytes = vec![0xff, 0xfe, b'\n'];
        let result = extract(Cursor::new(bytes), "bob");
        assert!(matches!(result, Err(crate::errors::StatError::Io(_))));
    }

    #[test]
    fn test_stream_ending_before_moves() {
        let input = stream(&["Bob", "Abilities", "Static 100%"]);
        let result = extract(input, "bob").unwrap();
        assert_eq!(result, Extraction::Found(Vec::new()));
    }

    #[test]
    fn test_substring_heuristic_is_kept() {
        let input = stream(&["Eeveelution", "Moves", "Tackle 10%", "--"]);
        let result = extract(input, "eevee").unwrap();
        assert!(result.is_found());
    }
}
