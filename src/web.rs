use crate::*;
use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{self, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

pub struct AppState {
    pub backend: Arc<dyn RecipeBackend>,
    pub sessions: Sessions,
    pub nav: NavContext,
}

impl AppState {
    pub fn new(backend: Arc<dyn RecipeBackend>, sessions: Sessions, nav: NavContext) -> Self {
        Self {
            backend,
            sessions,
            nav,
        }
    }
}

#[derive(Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub url: String,
}

/// GET /: the list/submit screen of this browser's session
pub async fn index(
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<(CookieJar, response::Html<String>), FrontendError> {
    let (jar, screen) = app_state.sessions.screen(jar);
    let list = screen.read().await;
    let template = IndexTemplate::new(&list, &app_state.nav);
    let html = template.render()?;
    Ok((jar, response::Html(html)))
}

/// POST /: submit a recipe URL, then go back to the list
pub async fn submit_recipe(
    State(app_state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<SubmitForm>,
) -> (CookieJar, response::Redirect) {
    let (jar, screen) = app_state.sessions.screen(jar);
    let url = screen.write().await.begin_submit(&form.url);
    let Some(url) = url else {
        return (jar, response::Redirect::to("/"));
    };

    // The submission belongs to the list screen, not to this request, so it
    // settles even if the browser goes away.
    let backend = app_state.backend.clone();
    let submission = tokio::spawn(async move {
        let result = backend.parse(&url).await;
        screen.write().await.finish_submit(result);
    });
    if let Err(e) = submission.await {
        log::error!("recipe submission task failed: {}", e);
    }
    (jar, response::Redirect::to("/"))
}

/// GET /recipe/{id}: the detail screen
pub async fn get_recipe(
    State(app_state): State<Arc<AppState>>,
    Path(recipe_id): Path<String>,
) -> Result<Response, FrontendError> {
    let mut screen = DetailScreen::default();
    screen.load(&*app_state.backend, &recipe_id).await;

    let status = match screen.view() {
        DetailView::Failed => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };
    let template = RecipeTemplate::new(&screen, &app_state.nav);
    Ok((status, response::Html(template.render()?)).into_response())
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
