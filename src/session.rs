// session.rs
use std::sync::Arc;

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use quick_cache::sync::Cache;
use tokio::sync::RwLock;

use crate::list::ListScreen;

pub const SESSION_COOKIE: &str = "recipe_session";

/// Hex digits in a session id
const SESSION_ID_LEN: usize = 32;

pub type ListHandle = Arc<RwLock<ListScreen>>;

/// One list screen per browser, keyed by the session cookie.
/// Bounded: the least recently used screens are evicted.
pub struct Sessions {
    screens: Cache<String, ListHandle>,
    max_recipes: usize,
}

impl Sessions {
    pub fn new(max_sessions: usize, max_recipes: usize) -> Self {
        Self {
            screens: Cache::new(max_sessions.max(1)),
            max_recipes,
        }
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Screen for the browser behind `jar`. Browsers without a usable cookie get
    /// a fresh session, and the returned jar carries the cookie to set.
    pub fn screen(&self, jar: CookieJar) -> (CookieJar, ListHandle) {
        let known = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|id| is_session_id(id));

        match known {
            Some(id) => {
                if let Some(screen) = self.screens.get(&id) {
                    return (jar, screen);
                }
                // Evicted, or issued before a restart
                log::debug!("starting over for session {}", id);
                (jar, self.open(id))
            }
            None => {
                let id = format!("{:032x}", rand::random::<u128>());
                let screen = self.open(id.clone());
                let cookie = Cookie::build((SESSION_COOKIE, id))
                    .http_only(true)
                    .path("/")
                    .same_site(SameSite::Lax);
                (jar.add(cookie), screen)
            }
        }
    }

    fn open(&self, id: String) -> ListHandle {
        let screen = Arc::new(RwLock::new(ListScreen::with_limit(self.max_recipes)));
        self.screens.insert(id, screen.clone());
        log::debug!("{} list screens open", self.len());
        screen
    }
}

fn is_session_id(id: &str) -> bool {
    id.len() == SESSION_ID_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
}
