use std::collections::HashMap;

use crate::errors::{StatError, StatResult};

use super::Fetch;

/// In-memory pages keyed by URL. Records every GET in `calls` and every
/// existence check in `checks`; unknown URLs answer 404.
#[derive(Default)]
pub struct FakeFetcher {
    pub pages: HashMap<String, String>,
    pub calls: Vec<String>,
    pub checks: Vec<String>,
}

impl FakeFetcher {
    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    fn lookup(&self, url: &str) -> StatResult<&String> {
        self.pages
            .get(url)
            .ok_or_else(|| StatError::transport(url, Some(404), "HTTP error: 404 Not Found"))
    }
}

impl Fetch for FakeFetcher {
    async fn fetch(&mut self, url: &str) -> StatResult<String> {
        self.calls.push(url.to_string());
        self.lookup(url).cloned()
    }

    async fn check(&mut self, url: &str) -> StatResult<()> {
        self.checks.push(url.to_string());
        self.lookup(url).map(|_| ())
    }
}
