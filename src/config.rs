// config.rs
use std::path::PathBuf;

use clap::Parser;

use crate::templates::NavContext;

/// Web interface for collecting recipe cards from links
#[derive(Parser, Debug, Clone)]
#[command(name = "recipe-collector", version)]
pub struct Args {
    /// Address and port to bind to
    #[arg(long, env = "RECIPE_COLLECTOR_ADDRESS", default_value = "127.0.0.1:3000")]
    pub address: String,

    /// Base URL of the recipe backend service
    #[arg(long, env = "RECIPE_BACKEND_URL", default_value = "http://localhost:8000")]
    pub backend_url: reqwest::Url,

    /// Directory holding recipe.css
    #[arg(long, env = "RECIPE_COLLECTOR_ASSETS", default_value = "assets/static")]
    pub assets: PathBuf,

    /// Browser sessions kept in memory before the least recently used is dropped
    #[arg(long, env = "RECIPE_COLLECTOR_MAX_SESSIONS", default_value_t = 1024)]
    pub max_sessions: usize,

    /// Recipe cards kept per session; older cards are dropped
    #[arg(long, env = "RECIPE_COLLECTOR_MAX_RECIPES", default_value_t = crate::list::MAX_RECIPES)]
    pub max_recipes: usize,

    /// Render the navigation bar for a signed-in user
    #[arg(long, env = "RECIPE_COLLECTOR_AUTHENTICATED")]
    pub authenticated: bool,
}

impl Args {
    pub fn nav(&self) -> NavContext {
        NavContext {
            authenticated: self.authenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["recipe-collector"]).unwrap();
        assert_eq!(args.address, "127.0.0.1:3000");
        assert_eq!(args.backend_url.as_str(), "http://localhost:8000/");
        assert!(!args.nav().authenticated);
        assert_eq!(args.max_sessions, 1024);
        assert_eq!(args.max_recipes, 100);
    }

    #[test]
    fn flags_override() {
        let args = Args::try_parse_from([
            "recipe-collector",
            "--address",
            "0.0.0.0:8080",
            "--backend-url",
            "http://api.internal:9000",
            "--authenticated",
            "--max-recipes",
            "5",
        ])
        .unwrap();
        assert_eq!(args.address, "0.0.0.0:8080");
        assert_eq!(args.backend_url.host_str(), Some("api.internal"));
        assert!(args.nav().authenticated);
        assert_eq!(args.max_recipes, 5);
    }

    #[test]
    fn bad_backend_url_is_rejected() {
        let parsed = Args::try_parse_from(["recipe-collector", "--backend-url", "not a url"]);
        assert!(parsed.is_err());
    }
}
