use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::error::{AppError, ErrorBody};
use crate::extractors::form::AppForm;
use crate::flash::{self, Flash};
use crate::handlers::pages::{render_home, render_load_failure};
use crate::models::shared::{HomePage, Page};
use crate::models::show::*;
use crate::queries::show as shows;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Shows",
    operation_id = "listShows",
    summary = "List shows",
    description = "Every show with its venue and artist, ordered by start time.",
    responses(
        (status = 200, description = "All shows, or the home page with an error notice", body = Page<ShowListPage>),
    ),
)]
#[instrument(skip(state, jar))]
pub async fn list_shows(State(state): State<AppState>, jar: CookieJar) -> Response {
    let shows = match shows::list_all(&state.db).await {
        Ok(shows) => shows,
        Err(e) => {
            return render_load_failure(
                jar,
                e,
                "An error occurred. Shows could not be loaded.".into(),
            );
        }
    };

    let (jar, flashes) = flash::take(jar);
    (
        jar,
        Json(Page::new("pages/shows.html", flashes, ShowListPage { shows })),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/create",
    tag = "Shows",
    operation_id = "newShowForm",
    summary = "Show form with the start time defaulting to now",
    responses(
        (status = 200, description = "Blank form", body = Page<ShowFormPage>),
    ),
)]
#[instrument(skip(jar))]
pub async fn create_show_form(jar: CookieJar) -> (CookieJar, Json<Page<ShowFormPage>>) {
    let (jar, flashes) = flash::take(jar);
    let page = ShowFormPage {
        form: ShowForm::blank(Utc::now()),
    };
    (jar, Json(Page::new("forms/new_show.html", flashes, page)))
}

#[utoipa::path(
    post,
    path = "/create",
    tag = "Shows",
    operation_id = "createShow",
    summary = "Book an artist at a venue",
    description = "Both the venue and the artist must exist. Renders the home page with a success or failure notice.",
    request_body(content = ShowForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Home page with notice", body = Page<HomePage>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, form), fields(venue_id = form.venue_id, artist_id = form.artist_id))]
pub async fn create_show_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    AppForm(form): AppForm<ShowForm>,
) -> Result<(CookieJar, Json<Page<HomePage>>), AppError> {
    let new_show = validate_show_form(&form)?;

    let notice = match shows::create(&state.db, new_show).await {
        Ok(model) => {
            info!(id = model.id, start_time = %model.start_time, "Show created");
            Flash::success("Show was successfully listed!")
        }
        Err(e) => {
            warn!(error = %e, "Failed to create show");
            Flash::error("An error occurred. Show could not be listed.")
        }
    };

    Ok(render_home(jar, Some(notice)))
}
