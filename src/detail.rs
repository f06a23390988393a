// detail.rs
use crate::backend::RecipeBackend;
use crate::error::FrontendError;
use crate::recipe::Recipe;

/// What the detail screen shows. Exactly one at a time.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum DetailView {
    #[default]
    Loading,
    Failed,
    Loaded(Recipe),
}

/// View state of the detail screen for one screen instance.
#[derive(Debug, Default)]
pub struct DetailScreen {
    id: Option<String>,
    view: DetailView,
}

impl DetailScreen {
    pub fn view(&self) -> &DetailView {
        &self.view
    }

    /// Switch to a route identifier. Returns the id to fetch when it changed,
    /// None when the screen already shows that id.
    pub fn navigate(&mut self, id: &str) -> Option<String> {
        if self.id.as_deref() == Some(id) {
            return None;
        }
        self.id = Some(id.to_string());
        self.view = DetailView::Loading;
        Some(id.to_string())
    }

    /// Apply a fetch result. Results for an id that is no longer current are dropped.
    pub fn resolve(&mut self, id: &str, result: Result<Recipe, FrontendError>) {
        if self.id.as_deref() != Some(id) {
            log::debug!("dropping stale result for recipe {}", id);
            return;
        }
        self.view = match result {
            Ok(recipe) => DetailView::Loaded(recipe),
            Err(e) => {
                log::warn!("recipe fetch failed for {}: {}", id, e);
                DetailView::Failed
            }
        };
    }

    /// Navigate and, if needed, fetch and resolve in one go.
    pub async fn load(&mut self, backend: &dyn RecipeBackend, id: &str) {
        if let Some(id) = self.navigate(id) {
            let result = backend.recipe(&id).await;
            self.resolve(&id, result);
        }
    }
}
