use std::io::Cursor;

use chrono::{Local, NaiveDate};
use colored::Colorize;
use log::{info, warn};
use serde::Serialize;

use crate::domain::{RequestDescriptor, Weighting};
use crate::errors::StatResult;
use crate::extractor::{self, Extraction};
use crate::http::Fetch;
use crate::locator::Locator;

/// A fetched stat file and where it came from
pub struct StatFile {
    pub url: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct MovesReport {
    pub url: String,
    pub pokemon: String,
    pub found: bool,
    pub lines: Vec<String>,
}

impl MovesReport {
    fn new(url: String, pokemon: &str, extraction: Extraction) -> Self {
        Self {
            url,
            pokemon: pokemon.to_string(),
            found: extraction.is_found(),
            lines: extraction.into_lines(),
        }
    }
}

/// Finds the right stat file for a request and pulls the moves block out of it.
///
/// Resolution order: override URL, then the guessed path, then live discovery
/// when the guessed path answers 404. Any other failure is returned as is.
pub struct MovesService<F: Fetch> {
    locator: Locator,
    fetcher: F,
    today: NaiveDate,
}

impl<F: Fetch> MovesService<F> {
    pub fn new(locator: Locator, fetcher: F) -> Self {
        Self {
            locator,
            fetcher,
            today: Local::now().date_naive(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub async fn run(&mut self, request: &RequestDescriptor) -> StatResult<MovesReport> {
        Self::log_request(request);

        let file = self.locate(request).await?;
        let extraction = extractor::extract(Cursor::new(file.body.as_bytes()), &request.pokemon)?;

        Ok(MovesReport::new(file.url, &request.pokemon, extraction))
    }

    /// Same resolution order as `locate`, but only confirms the guessed path
    /// exists instead of downloading it. An override URL is returned without
    /// any request.
    pub async fn resolve_url(&mut self, request: &RequestDescriptor) -> StatResult<String> {
        if let Some(url) = self.locator.override_url(request) {
            return Ok(url.to_string());
        }

        let guessed = self.locator.guess(request, self.today)?;
        match self.fetcher.check(&guessed).await {
            Ok(()) => Ok(guessed),
            Err(e) if e.is_not_found() => {
                warn!("No stats at {}, searching published folders", guessed);
                self.locator.discover(&mut self.fetcher, request).await
            }
            Err(e) => Err(e),
        }
    }

    pub async fn locate(&mut self, request: &RequestDescriptor) -> StatResult<StatFile> {
        if let Some(url) = self.locator.override_url(request) {
            info!("Using override URL: {}", url);
            return self.fetch_file(url.to_string()).await;
        }

        let guessed = self.locator.guess(request, self.today)?;
        match self.fetcher.fetch(&guessed).await {
            Ok(body) => Ok(StatFile { url: guessed, body }),
            Err(e) if e.is_not_found() => {
                warn!("No stats at {}, searching published folders", guessed);
                let url = self.locator.discover(&mut self.fetcher, request).await?;
                self.fetch_file(url).await
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch_file(&mut self, url: String) -> StatResult<StatFile> {
        let body = self.fetcher.fetch(&url).await?;
        Ok(StatFile { url, body })
    }

    fn log_request(request: &RequestDescriptor) {
        info!("Using generation and tier {}", request.format_key());
        info!("Getting stats for Pokemon: {}", request.pokemon);
        info!("Weighting stats using {}", request.weighting);
    }
}

/// Human-readable rendering of a report
pub fn render(report: &MovesReport, request: &RequestDescriptor) -> String {
    if !report.found {
        return format!(
            "Could not find stats for those parameters. Was {} used at least one time in that tier and skill bracket?",
            report.pokemon
        );
    }

    let header = match request.weighting {
        Weighting::Target(rating) => format!(
            "Common moves for {} in {} near specified weighting {}:",
            report.pokemon,
            request.format_key(),
            rating
        ),
        Weighting::Bracket(bracket) => format!(
            "Common moves for {} in {} at skill weighting {}:",
            report.pokemon,
            request.format_key(),
            bracket.as_str()
        ),
    };

    let mut out = header.bold().to_string();
    for line in &report.lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}
