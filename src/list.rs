// list.rs
use std::collections::VecDeque;

use crate::error::FrontendError;
use crate::recipe::RecipeSummary;

/// Cards kept per screen when no other limit is configured
pub const MAX_RECIPES: usize = 100;

/// View state of the list/submit screen for one browser session.
#[derive(Debug)]
pub struct ListScreen {
    recipes: VecDeque<RecipeSummary>,
    busy: bool,
    limit: usize,
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::with_limit(MAX_RECIPES)
    }
}

impl ListScreen {
    /// Screen that keeps at most `limit` cards, dropping the oldest.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            recipes: VecDeque::new(),
            busy: false,
            limit: limit.max(1),
        }
    }

    pub fn recipes(&self) -> impl Iterator<Item = &RecipeSummary> {
        self.recipes.iter()
    }

    pub fn count(&self) -> usize {
        self.recipes.len()
    }

    /// True while a submission is outstanding; the submit control is disabled.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Accept a raw form value. Returns the URL to send, or None when nothing
    /// should be sent (blank input or a submission already in flight).
    pub fn begin_submit(&mut self, raw: &str) -> Option<String> {
        let url = raw.trim();
        if url.is_empty() {
            log::debug!("ignoring blank recipe url");
            return None;
        }
        if self.busy {
            log::info!("submission already in flight, ignoring {}", url);
            return None;
        }
        self.busy = true;
        Some(url.to_string())
    }

    /// Settle the outstanding submission.
    pub fn finish_submit(&mut self, result: Result<RecipeSummary, FrontendError>) {
        self.busy = false;
        match result {
            Ok(summary) => {
                log::info!("added recipe {} ({})", summary.id, summary.title);
                self.recipes.push_front(summary);
                self.recipes.truncate(self.limit);
            }
            // Not shown to the user
            Err(e) => log::error!("recipe submission failed: {}", e),
        }
    }
}
