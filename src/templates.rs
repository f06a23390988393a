// Bring in Askama templating
use askama::Template;

use crate::detail::{DetailScreen, DetailView};
use crate::list::ListScreen;
use crate::recipe::{Recipe, RecipeSummary};

const STYLESHEET: &str = "/recipe.css";

/// What the navigation bar needs to know. Comes from configuration.
#[derive(Debug, Clone, Default)]
pub struct NavContext {
    pub authenticated: bool,
}

/// List/submit screen
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub nav: &'a NavContext,
    pub recipes: Vec<&'a RecipeSummary>,
    pub count: usize,
    pub busy: bool,
    pub stylesheet: &'static str,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(screen: &'a ListScreen, nav: &'a NavContext) -> Self {
        Self {
            nav,
            recipes: screen.recipes().collect(),
            count: screen.count(),
            busy: screen.is_busy(),
            stylesheet: STYLESHEET,
        }
    }
}

/// Detail screen; shows loading, error or the recipe, never more than one.
#[derive(Template)]
#[template(path = "recipe.html")]
pub struct RecipeTemplate<'a> {
    pub nav: &'a NavContext,
    pub recipe: Option<&'a Recipe>,
    pub failed: bool,
    pub stylesheet: &'static str,
}

impl<'a> RecipeTemplate<'a> {
    pub fn new(screen: &'a DetailScreen, nav: &'a NavContext) -> Self {
        let (recipe, failed) = match screen.view() {
            DetailView::Loading => (None, false),
            DetailView::Failed => (None, true),
            DetailView::Loaded(recipe) => (Some(recipe), false),
        };
        Self {
            nav,
            recipe,
            failed,
            stylesheet: STYLESHEET,
        }
    }
}
