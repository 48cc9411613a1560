use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::{artist, pages, show, venue};
use crate::state::AppState;

pub fn app_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(pages::index))
        .nest("/venues", venue_routes())
        .nest("/artists", artist_routes())
        .nest("/shows", show_routes())
}

fn venue_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(venue::list_venues))
        .routes(routes!(venue::search_venues))
        .routes(routes!(
            venue::create_venue_form,
            venue::create_venue_submission
        ))
        .routes(routes!(venue::show_venue, venue::delete_venue))
        .routes(routes!(venue::edit_venue, venue::edit_venue_submission))
}

fn artist_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(artist::list_artists))
        .routes(routes!(artist::search_artists))
        .routes(routes!(
            artist::create_artist_form,
            artist::create_artist_submission
        ))
        .routes(routes!(artist::show_artist, artist::delete_artist))
        .routes(routes!(artist::edit_artist, artist::edit_artist_submission))
}

fn show_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(show::list_shows))
        .routes(routes!(show::create_show_form, show::create_show_submission))
}
