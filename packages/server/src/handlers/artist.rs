use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::error::{AppError, ErrorBody};
use crate::extractors::form::AppForm;
use crate::extractors::path::AppPath;
use crate::flash::{self, Flash};
use crate::handlers::pages::{render_home, render_load_failure};
use crate::models::artist::*;
use crate::models::shared::{HomePage, Page, SearchForm, SearchResults};
use crate::queries::artist as artists;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Artists",
    operation_id = "listArtists",
    summary = "List artists",
    responses(
        (status = 200, description = "All artists ordered by name, or the home page with an error notice", body = Page<ArtistListPage>),
    ),
)]
#[instrument(skip(state, jar))]
pub async fn list_artists(State(state): State<AppState>, jar: CookieJar) -> Response {
    let artists = match artists::list_all(&state.db).await {
        Ok(artists) => artists,
        Err(e) => {
            return render_load_failure(
                jar,
                e,
                "An error occurred. Artists could not be loaded.".into(),
            );
        }
    };

    let (jar, flashes) = flash::take(jar);
    (
        jar,
        Json(Page::new(
            "pages/artists.html",
            flashes,
            ArtistListPage { artists },
        )),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "Artists",
    operation_id = "searchArtists",
    summary = "Search artists by name",
    description = "Case-insensitive partial match on the artist name.",
    request_body(content = SearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Matching artists, or the home page with an error notice", body = Page<SearchResults>),
        (status = 400, description = "Malformed form (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, form), fields(search_term = %form.search_term))]
pub async fn search_artists(
    State(state): State<AppState>,
    jar: CookieJar,
    AppForm(form): AppForm<SearchForm>,
) -> Response {
    let data = match artists::search_items(&state.db, &form.search_term, Utc::now()).await {
        Ok(data) => data,
        Err(e) => {
            return render_load_failure(
                jar,
                e,
                "An error occurred. The artist search could not be completed.".into(),
            );
        }
    };

    let (jar, flashes) = flash::take(jar);
    let results = SearchResults {
        count: data.len(),
        search_term: form.search_term,
        data,
    };
    (
        jar,
        Json(Page::new("pages/search_artists.html", flashes, results)),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Artists",
    operation_id = "getArtist",
    summary = "Artist details with past and upcoming shows",
    params(("id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "Artist details, or the home page with an error notice", body = Page<ArtistDetail>),
        (status = 404, description = "Artist not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar))]
pub async fn show_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    AppPath(id): AppPath<i32>,
) -> Result<Response, AppError> {
    let detail = match artists::detail(&state.db, id, Utc::now()).await {
        Ok(detail) => detail,
        Err(AppError::Internal(e)) => {
            return Ok(render_load_failure(
                jar,
                e,
                format!("An error occurred. Artist {id} could not be loaded."),
            ));
        }
        Err(e) => return Err(e),
    };

    let (jar, flashes) = flash::take(jar);
    Ok((jar, Json(Page::new("pages/show_artist.html", flashes, detail))).into_response())
}

#[utoipa::path(
    get,
    path = "/create",
    tag = "Artists",
    operation_id = "newArtistForm",
    summary = "Empty artist form",
    responses(
        (status = 200, description = "Empty form", body = Page<ArtistFormPage>),
    ),
)]
#[instrument(skip(jar))]
pub async fn create_artist_form(jar: CookieJar) -> (CookieJar, Json<Page<ArtistFormPage>>) {
    let (jar, flashes) = flash::take(jar);
    let page = ArtistFormPage {
        artist_id: None,
        form: ArtistForm::default(),
    };
    (jar, Json(Page::new("forms/new_artist.html", flashes, page)))
}

#[utoipa::path(
    post,
    path = "/create",
    tag = "Artists",
    operation_id = "createArtist",
    summary = "Create an artist",
    description = "Inserts the artist and renders the home page with a success or failure notice.",
    request_body(content = ArtistForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Home page with notice", body = Page<HomePage>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, form), fields(name = %form.name))]
pub async fn create_artist_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    AppForm(form): AppForm<ArtistForm>,
) -> Result<(CookieJar, Json<Page<HomePage>>), AppError> {
    validate_artist_form(&form)?;
    let name = form.name.trim().to_string();

    let notice = match artists::create(&state.db, form).await {
        Ok(model) => {
            info!(id = model.id, "Artist created");
            Flash::success(format!("Artist {name} was successfully listed!"))
        }
        Err(e) => {
            warn!(error = %e, "Failed to create artist");
            Flash::error(format!(
                "An error occurred. Artist {name} could not be listed."
            ))
        }
    };

    Ok(render_home(jar, Some(notice)))
}

#[utoipa::path(
    get,
    path = "/{id}/edit",
    tag = "Artists",
    operation_id = "editArtistForm",
    summary = "Artist form pre-populated from the stored artist",
    params(("id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "Pre-populated form, or the home page with an error notice", body = Page<ArtistFormPage>),
        (status = 404, description = "Artist not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar))]
pub async fn edit_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    AppPath(id): AppPath<i32>,
) -> Result<Response, AppError> {
    let model = match artists::get(&state.db, id).await {
        Ok(model) => model,
        Err(AppError::Internal(e)) => {
            return Ok(render_load_failure(
                jar,
                e,
                format!("An error occurred. Artist {id} could not be loaded."),
            ));
        }
        Err(e) => return Err(e),
    };
    let page = ArtistFormPage {
        artist_id: Some(model.id),
        form: model.into(),
    };

    let (jar, flashes) = flash::take(jar);
    Ok((jar, Json(Page::new("forms/edit_artist.html", flashes, page))).into_response())
}

#[utoipa::path(
    post,
    path = "/{id}/edit",
    tag = "Artists",
    operation_id = "updateArtist",
    summary = "Overwrite an artist",
    description = "Replaces every editable field, queues a notice and redirects to the artist page.",
    params(("id" = i32, Path, description = "Artist ID")),
    request_body(content = ArtistForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the artist page"),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Artist not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, form), fields(name = %form.name))]
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    jar: CookieJar,
    AppPath(id): AppPath<i32>,
    AppForm(form): AppForm<ArtistForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    validate_artist_form(&form)?;
    let name = form.name.trim().to_string();

    let notice = match artists::update(&state.db, id, form).await {
        Ok(Some(_)) => {
            info!("Artist updated");
            Flash::success(format!("Artist {name} was successfully updated!"))
        }
        Ok(None) => return Err(AppError::NotFound("Artist not found".into())),
        Err(e) => {
            warn!(error = %e, "Failed to update artist");
            Flash::error(format!("Artist {name} could not be updated."))
        }
    };

    let jar = flash::push(jar, notice);
    Ok((jar, Redirect::to(&format!("/artists/{id}"))))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Artists",
    operation_id = "deleteArtist",
    summary = "Delete an artist and their shows",
    description = "Unknown ids are a silent no-op.",
    params(("id" = i32, Path, description = "Artist ID")),
    responses(
        (status = 200, description = "Home page", body = Page<HomePage>),
    ),
)]
#[instrument(skip(state, jar))]
pub async fn delete_artist(
    State(state): State<AppState>,
    jar: CookieJar,
    AppPath(id): AppPath<i32>,
) -> (CookieJar, Json<Page<HomePage>>) {
    let notice = match artists::delete(&state.db, id).await {
        Ok(Some(model)) => {
            info!("Artist deleted");
            Some(Flash::success(format!(
                "Artist {} was successfully deleted.",
                model.name
            )))
        }
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "Failed to delete artist");
            let name = artists::find(&state.db, id)
                .await
                .ok()
                .flatten()
                .map_or_else(|| id.to_string(), |a| a.name);
            Some(Flash::error(format!(
                "An error occurred. Artist {name} could not be deleted."
            )))
        }
    };

    render_home(jar, notice)
}
