use chrono::NaiveDate;
use log::debug;

use crate::config::StatSettings;
use crate::domain::RequestDescriptor;
use crate::errors::{StatError, StatResult};
use crate::fetchers::Listing;
use crate::http::Fetch;

use super::date::guess_date_folder;
use super::selection::{select_candidate, select_rating};

/// Resolves requests to stat file URLs under a date-versioned folder tree
pub struct Locator {
    settings: StatSettings,
}

impl Locator {
    pub fn new(settings: StatSettings) -> Self {
        Self { settings }
    }

    /// The override URL, untouched, when the request carries one
    pub fn override_url<'a>(&self, request: &'a RequestDescriptor) -> Option<&'a str> {
        request.override_url.as_deref()
    }

    /// Compose a path from the date heuristic and the static rating table.
    /// Never touches the network, so the result may not exist.
    pub fn guess(&self, request: &RequestDescriptor, today: NaiveDate) -> StatResult<String> {
        if let Some(url) = self.override_url(request) {
            return Ok(url.to_string());
        }

        let folder = guess_date_folder(today);
        let table = self.settings.ratings.for_tier(request.tier);
        let rating = select_rating(table, request.weighting)?;
        let file_name = format!(
            "{}-{}{}",
            request.format_key(),
            rating,
            self.settings.file_extension
        );

        let url = format!("{}{}", self.mode_folder_url(&folder, request), file_name);
        debug!("Guessed stat file URL: {}", url);
        Ok(url)
    }

    /// Walk the live listings: newest date folder, then the mode subfolder,
    /// then pick a file by weighting.
    pub async fn discover<F: Fetch>(
        &self,
        fetcher: &mut F,
        request: &RequestDescriptor,
    ) -> StatResult<String> {
        if let Some(url) = self.override_url(request) {
            return Ok(url.to_string());
        }

        let folder = self.latest_date_folder(fetcher).await?;
        let folder_url = self.mode_folder_url(&folder, request);
        let candidates = self.matching_files(fetcher, &folder_url, request).await?;

        let file_name = select_candidate(&candidates, request.weighting)?;
        let url = format!("{}{}", folder_url, file_name);
        debug!("Discovered stat file URL: {}", url);
        Ok(url)
    }

    async fn latest_date_folder<F: Fetch>(&self, fetcher: &mut F) -> StatResult<String> {
        let body = fetcher.fetch(&self.settings.base_url).await?;
        let listing = Listing::parse(&body);

        let folder = listing
            .latest_entry()
            .ok_or_else(|| StatError::Discovery(self.settings.base_url.clone()))?;
        debug!("Latest stats folder: {}", folder);
        Ok(folder)
    }

    async fn matching_files<F: Fetch>(
        &self,
        fetcher: &mut F,
        folder_url: &str,
        request: &RequestDescriptor,
    ) -> StatResult<Vec<String>> {
        let body = fetcher.fetch(folder_url).await?;
        let files = Listing::parse(&body).entries_containing(&request.format_key());
        debug!("{} candidate files for {}", files.len(), request.format_key());
        Ok(files)
    }

    fn mode_folder_url(&self, folder: &str, request: &RequestDescriptor) -> String {
        format!(
            "{}/{}/{}",
            self.settings.base_url,
            folder.trim_matches('/'),
            self.settings.mode_folder(request.mode)
        )
    }
}
