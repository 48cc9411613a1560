use std::fmt::Display;

use axum::Json;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use tracing::{instrument, warn};

use crate::error::AppError;
use crate::flash::{self, Flash};
use crate::models::shared::{HomePage, Page};

pub const HOME_TEMPLATE: &str = "pages/home.html";

/// Render the landing page with any pending notices plus `notice`.
pub fn render_home(jar: CookieJar, notice: Option<Flash>) -> (CookieJar, Json<Page<HomePage>>) {
    let (jar, mut flashes) = flash::take(jar);
    flashes.extend(notice);
    (
        jar,
        Json(Page::new(HOME_TEMPLATE, flashes, HomePage::default())),
    )
}

/// Landing page with an error notice, for reads that failed on the database.
pub fn render_load_failure(jar: CookieJar, err: impl Display, message: String) -> Response {
    warn!(error = %err, "Failed to load page data");
    render_home(jar, Some(Flash::error(message))).into_response()
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Pages",
    operation_id = "home",
    summary = "Landing page",
    description = "Renders the home page and consumes pending flash messages.",
    responses(
        (status = 200, description = "Home page", body = Page<HomePage>),
    ),
)]
#[instrument(skip(jar))]
pub async fn index(jar: CookieJar) -> (CookieJar, Json<Page<HomePage>>) {
    render_home(jar, None)
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".into())
}
