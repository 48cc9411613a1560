use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use tracing::{info, instrument, warn};

use crate::error::{AppError, ErrorBody};
use crate::extractors::form::AppForm;
use crate::extractors::path::AppPath;
use crate::flash::{self, Flash};
use crate::handlers::pages::{render_home, render_load_failure};
use crate::models::shared::{HomePage, Page, SearchForm, SearchResults};
use crate::models::venue::*;
use crate::queries::venue as venues;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Venues",
    operation_id = "listVenues",
    summary = "List venues grouped by area",
    description = "Returns every venue grouped by city and state, each with its number of upcoming shows.",
    responses(
        (status = 200, description = "Venues by area, or the home page with an error notice", body = Page<VenueListPage>),
    ),
)]
#[instrument(skip(state, jar))]
pub async fn list_venues(State(state): State<AppState>, jar: CookieJar) -> Response {
    let areas = match venues::areas(&state.db, chrono::Utc::now()).await {
        Ok(areas) => areas,
        Err(e) => {
            return render_load_failure(
                jar,
                e,
                "An error occurred. Venues could not be loaded.".into(),
            );
        }
    };

    let (jar, flashes) = flash::take(jar);
    (
        jar,
        Json(Page::new(
            "pages/venues.html",
            flashes,
            VenueListPage { areas },
        )),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "Venues",
    operation_id = "searchVenues",
    summary = "Search venues by name",
    description = "Case-insensitive partial match on the venue name: `hop` finds \"The Musical Hop\".",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matching venues, or the home page with an error notice", body = Page<SearchResults>),
        (status = 400, description = "Malformed form (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, form), fields(search_term = %form.search_term))]
pub async fn search_venues(
    State(state): State<AppState>,
    jar: CookieJar,
    AppForm(form): AppForm<SearchForm>,
) -> Response {
    let data = match venues::search_items(&state.db, &form.search_term, chrono::Utc::now()).await {
        Ok(data) => data,
        Err(e) => {
            return render_load_failure(
                jar,
                e,
                "An error occurred. The venue search could not be completed.".into(),
            );
        }
    };

    let (jar, flashes) = flash::take(jar);
    (
        jar,
        Json(Page::new(
            "pages/search_venues.html",
            flashes,
            SearchResults {
                search_term: form.search_term,
                count: data.len(),
                data,
            },
        )),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Venues",
    operation_id = "getVenue",
    summary = "Venue details with past and upcoming shows",
    description = "Shows starting before the current time are past; all others are upcoming.",
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Venue details, or the home page with an error notice", body = Page<VenueDetail>),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar))]
pub async fn show_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    AppPath(id): AppPath<i32>,
) -> Result<Response, AppError> {
    let detail = match venues::detail(&state.db, id, chrono::Utc::now()).await {
        Ok(detail) => detail,
        Err(AppError::Internal(e)) => {
            return Ok(render_load_failure(
                jar,
                e,
                format!("An error occurred. Venue {id} could not be loaded."),
            ));
        }
        Err(e) => return Err(e),
    };

    let (jar, flashes) = flash::take(jar);
    Ok((jar, Json(Page::new("pages/show_venue.html", flashes, detail))).into_response())
}

#[utoipa::path(
    get,
    path = "/create",
    tag = "Venues",
    operation_id = "newVenueForm",
    summary = "Empty venue form",
    responses(
        (status = 200, description = "Empty form", body = Page<VenueFormPage>),
    ),
)]
#[instrument(skip(jar))]
pub async fn create_venue_form(jar: CookieJar) -> (CookieJar, Json<Page<VenueFormPage>>) {
    let (jar, flashes) = flash::take(jar);
    (
        jar,
        Json(Page::new(
            "forms/new_venue.html",
            flashes,
            VenueFormPage {
                venue_id: None,
                form: VenueForm::default(),
            },
        )),
    )
}

#[utoipa::path(
    post,
    path = "/create",
    tag = "Venues",
    operation_id = "createVenue",
    summary = "Create a venue",
    description = "Inserts the venue and renders the home page with a success or failure notice. A duplicate name fails without touching the existing venue.",
    request_body(content = VenueForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Home page with notice", body = Page<HomePage>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, form), fields(name = %form.name))]
pub async fn create_venue_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    AppForm(form): AppForm<VenueForm>,
) -> Result<(CookieJar, Json<Page<HomePage>>), AppError> {
    validate_venue_form(&form)?;
    let name = form.name.trim().to_string();

    let notice = match venues::create(&state.db, form).await {
        Ok(model) => {
            info!(id = model.id, "Venue created");
            Flash::success(format!("Venue {} was successfully listed!", model.name))
        }
        Err(e) => {
            warn!(error = %e, "Failed to create venue");
            Flash::error(format!(
                "An error occurred. Venue {name} could not be listed."
            ))
        }
    };

    Ok(render_home(jar, Some(notice)))
}

#[utoipa::path(
    get,
    path = "/{id}/edit",
    tag = "Venues",
    operation_id = "editVenueForm",
    summary = "Venue form pre-populated from the stored venue",
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Pre-populated form, or the home page with an error notice", body = Page<VenueFormPage>),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar))]
pub async fn edit_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    AppPath(id): AppPath<i32>,
) -> Result<Response, AppError> {
    let model = match venues::get(&state.db, id).await {
        Ok(model) => model,
        Err(AppError::Internal(e)) => {
            return Ok(render_load_failure(
                jar,
                e,
                format!("An error occurred. Venue {id} could not be loaded."),
            ));
        }
        Err(e) => return Err(e),
    };

    let (jar, flashes) = flash::take(jar);
    Ok((
        jar,
        Json(Page::new(
            "forms/edit_venue.html",
            flashes,
            VenueFormPage {
                venue_id: Some(model.id),
                form: model.into(),
            },
        )),
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/{id}/edit",
    tag = "Venues",
    operation_id = "updateVenue",
    summary = "Overwrite a venue",
    description = "Replaces every editable field, queues a notice and redirects to the venue page.",
    params(("id" = i32, Path, description = "Venue ID")),
    request_body(content = VenueForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the venue page"),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Venue not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, form), fields(name = %form.name))]
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    AppPath(id): AppPath<i32>,
    AppForm(form): AppForm<VenueForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    validate_venue_form(&form)?;
    let name = form.name.trim().to_string();

    let notice = match venues::update(&state.db, id, form).await {
        Ok(Some(model)) => {
            info!(id = model.id, "Venue updated");
            Flash::success(format!("Venue {} was successfully updated!", model.name))
        }
        Ok(None) => return Err(AppError::NotFound("Venue not found".into())),
        Err(e) => {
            warn!(error = %e, "Failed to update venue");
            Flash::error(format!("Venue {name} could not be updated."))
        }
    };

    Ok((flash::push(jar, notice), Redirect::to(&format!("/venues/{id}"))))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Venues",
    operation_id = "deleteVenue",
    summary = "Delete a venue and its shows",
    description = "Deletes the venue if it exists and renders the home page. Unknown ids are a silent no-op.",
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Home page", body = Page<HomePage>),
    ),
)]
#[instrument(skip(state, jar))]
pub async fn delete_venue(
    State(state): State<AppState>,
    jar: CookieJar,
    AppPath(id): AppPath<i32>,
) -> (CookieJar, Json<Page<HomePage>>) {
    let notice = match venues::delete(&state.db, id).await {
        Ok(Some(model)) => {
            info!("Venue deleted");
            Some(Flash::success(format!(
                "Venue {} was successfully deleted.",
                model.name
            )))
        }
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "Failed to delete venue");
            let name = venues::find(&state.db, id)
                .await
                .ok()
                .flatten()
                .map_or_else(|| id.to_string(), |v| v.name);
            Some(Flash::error(format!(
                "An error occurred. Venue {name} could not be deleted."
            )))
        }
    };

    render_home(jar, notice)
}
