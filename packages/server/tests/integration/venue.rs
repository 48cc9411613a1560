use crate::common::{TestApp, routes};

mod venue_search {
    use super::*;

    #[tokio::test]
    async fn partial_name_matches_ignore_case() {
        let app = TestApp::spawn().await;
        app.create_venue("The Musical Hop", "San Francisco", "CA").await;
        app.create_venue("Park Square Live Music & Coffee", "San Francisco", "CA")
            .await;
        app.create_venue("The Dueling Pianos Bar", "New York", "NY").await;

        let res = app
            .post_form(routes::VENUE_SEARCH, &[("search_term", "hop")])
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.template(), "pages/search_venues.html");
        assert_eq!(res.body["data"]["search_term"], "hop");
        assert_eq!(res.body["data"]["count"], 1);
        assert_eq!(res.body["data"]["data"][0]["name"], "The Musical Hop");

        let res = app
            .post_form(routes::VENUE_SEARCH, &[("search_term", "Music")])
            .await;
        assert_eq!(res.body["data"]["count"], 2);
    }

    #[tokio::test]
    async fn no_match_returns_empty_results() {
        let app = TestApp::spawn().await;
        app.create_venue("The Musical Hop", "San Francisco", "CA").await;

        let res = app
            .post_form(routes::VENUE_SEARCH, &[("search_term", "opera")])
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["data"]["count"], 0);
        assert_eq!(res.body["data"]["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn wildcards_in_the_term_are_literal() {
        let app = TestApp::spawn().await;
        app.create_venue("The Musical Hop", "San Francisco", "CA").await;
        app.create_venue("100% Live", "Austin", "TX").await;

        let res = app
            .post_form(routes::VENUE_SEARCH, &[("search_term", "%")])
            .await;
        assert_eq!(res.body["data"]["count"], 1);
        assert_eq!(res.body["data"]["data"][0]["name"], "100% Live");
    }

    #[tokio::test]
    async fn accented_names_match_in_any_case() {
        let app = TestApp::spawn().await;
        app.create_venue("Élan Hall", "Montréal", "QC").await;
        app.create_venue("The Musical Hop", "San Francisco", "CA").await;

        for term in ["Élan Hall", "élan", "É", "ÉLAN"] {
            let res = app
                .post_form(routes::VENUE_SEARCH, &[("search_term", term)])
                .await;
            assert_eq!(res.body["data"]["count"], 1, "term {term:?}");
            assert_eq!(res.body["data"]["data"][0]["name"], "Élan Hall");
        }
    }

    #[tokio::test]
    async fn results_count_upcoming_shows() {
        let app = TestApp::spawn().await;
        let venue_id = app
            .create_venue("The Musical Hop", "San Francisco", "CA")
            .await;
        let artist_id = app.create_artist("Guns N Petals").await;
        app.create_show(venue_id, artist_id, "2035-04-01 20:00:00").await;
        app.create_show(venue_id, artist_id, "2019-05-21 21:30:00").await;

        let res = app
            .post_form(routes::VENUE_SEARCH, &[("search_term", "hop")])
            .await;
        assert_eq!(res.body["data"]["data"][0]["num_upcoming_shows"], 1);
    }
}

mod venue_listing {
    use super::*;

    #[tokio::test]
    async fn venues_are_grouped_by_city_and_state() {
        let app = TestApp::spawn().await;
        app.create_venue("The Musical Hop", "San Francisco", "CA").await;
        app.create_venue("The Dueling Pianos Bar", "New York", "NY").await;
        app.create_venue("Park Square Live Music & Coffee", "San Francisco", "CA")
            .await;

        let res = app.get(routes::VENUES).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.template(), "pages/venues.html");

        let areas = res.body["data"]["areas"].as_array().unwrap();
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0]["city"], "San Francisco");
        assert_eq!(areas[0]["state"], "CA");
        assert_eq!(areas[0]["venues"].as_array().unwrap().len(), 2);
        assert_eq!(areas[1]["city"], "New York");
        assert_eq!(areas[1]["venues"][0]["num_upcoming_shows"], 0);
    }

    #[tokio::test]
    async fn empty_directory_lists_no_areas() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::VENUES).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["data"]["areas"], serde_json::json!([]));
    }
}

mod venue_detail {
    use super::*;

    #[tokio::test]
    async fn past_show_is_listed_as_past() {
        let app = TestApp::spawn().await;
        let venue_id = app
            .create_venue("The Musical Hop", "San Francisco", "CA")
            .await;
        let artist_id = app.create_artist("Guns N Petals").await;
        app.create_show(venue_id, artist_id, "2019-05-21 21:30:00").await;

        let res = app.get(&routes::venue(venue_id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.template(), "pages/show_venue.html");

        let venue = &res.body["data"];
        assert_eq!(venue["past_shows_count"], 1);
        assert_eq!(venue["upcoming_shows_count"], 0);
        assert_eq!(venue["past_shows"][0]["artist_id"], artist_id);
        assert_eq!(venue["past_shows"][0]["artist_name"], "Guns N Petals");
        assert_eq!(venue["upcoming_shows"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn future_show_is_listed_as_upcoming() {
        let app = TestApp::spawn().await;
        let venue_id = app
            .create_venue("The Musical Hop", "San Francisco", "CA")
            .await;
        let artist_id = app.create_artist("The Wild Sax Band").await;
        app.create_show(venue_id, artist_id, "2035-04-01 20:00:00").await;
        app.create_show(venue_id, artist_id, "2035-04-08 20:00:00").await;

        let res = app.get(&routes::venue(venue_id)).await;
        let venue = &res.body["data"];
        assert_eq!(venue["past_shows_count"], 0);
        assert_eq!(venue["upcoming_shows_count"], 2);
        assert_eq!(
            venue["upcoming_shows"][0]["start_time"],
            "2035-04-01T20:00:00Z"
        );
    }

    #[tokio::test]
    async fn detail_carries_every_field() {
        let app = TestApp::spawn().await;
        let venue_id = app
            .create_venue("The Musical Hop", "San Francisco", "CA")
            .await;

        let res = app.get(&routes::venue(venue_id)).await;
        let venue = &res.body["data"];
        assert_eq!(venue["id"], venue_id);
        assert_eq!(venue["name"], "The Musical Hop");
        assert_eq!(venue["address"], "1015 Folsom Street");
        assert_eq!(venue["phone"], "123-123-1234");
        assert_eq!(venue["genres"], serde_json::json!(["Jazz", "Reggae"]));
        assert_eq!(venue["seeking_talent"], true);
        assert!(venue["website"].is_null());
    }

    #[tokio::test]
    async fn unknown_venue_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::venue(999)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get("/venues/abc").await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod venue_creation {
    use super::*;

    #[tokio::test]
    async fn create_form_is_empty() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::VENUE_CREATE).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.template(), "forms/new_venue.html");
        assert!(res.body["data"]["venue_id"].is_null());
        assert_eq!(res.body["data"]["form"]["name"], "");
    }

    #[tokio::test]
    async fn successful_create_renders_home_with_notice() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::VENUE_CREATE,
                &[
                    ("name", "The Musical Hop"),
                    ("city", "San Francisco"),
                    ("state", "CA"),
                    ("address", "1015 Folsom Street"),
                    ("phone", "123-123-1234"),
                    ("genres", "Jazz"),
                ],
            )
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.template(), "pages/home.html");
        assert_eq!(
            res.flash_messages(),
            vec!["Venue The Musical Hop was successfully listed!"]
        );
    }

    #[tokio::test]
    async fn duplicate_name_fails_and_keeps_the_original() {
        let app = TestApp::spawn().await;
        let venue_id = app
            .create_venue("The Musical Hop", "San Francisco", "CA")
            .await;

        let res = app
            .post_form(
                routes::VENUE_CREATE,
                &[
                    ("name", "The Musical Hop"),
                    ("city", "Oakland"),
                    ("state", "CA"),
                    ("address", "1 Broadway"),
                    ("phone", "555-555-5555"),
                    ("genres", "Folk"),
                ],
            )
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.flash_categories(), vec!["error"]);
        assert_eq!(
            res.flash_messages(),
            vec!["An error occurred. Venue The Musical Hop could not be listed."]
        );

        let detail = app.get(&routes::venue(venue_id)).await;
        assert_eq!(detail.body["data"]["city"], "San Francisco");

        let search = app
            .post_form(routes::VENUE_SEARCH, &[("search_term", "hop")])
            .await;
        assert_eq!(search.body["data"]["count"], 1);
    }

    #[tokio::test]
    async fn missing_required_field_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_form(
                routes::VENUE_CREATE,
                &[("name", "No Address"), ("city", "Austin"), ("state", "TX")],
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        let listing = app.get(routes::VENUES).await;
        assert_eq!(listing.body["data"]["areas"], serde_json::json!([]));
    }
}

mod venue_editing {
    use super::*;

    #[tokio::test]
    async fn edit_form_is_prepopulated() {
        let app = TestApp::spawn().await;
        let venue_id = app
            .create_venue("The Musical Hop", "San Francisco", "CA")
            .await;

        let res = app.get(&routes::venue_edit(venue_id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.template(), "forms/edit_venue.html");
        assert_eq!(res.body["data"]["venue_id"], venue_id);
        assert_eq!(res.body["data"]["form"]["name"], "The Musical Hop");
        assert_eq!(
            res.body["data"]["form"]["genres"],
            serde_json::json!(["Jazz", "Reggae"])
        );
        assert_eq!(res.body["data"]["form"]["seeking_talent"], true);
    }

    #[tokio::test]
    async fn edit_redirects_to_detail_with_notice() {
        let app = TestApp::spawn().await;
        let venue_id = app
            .create_venue("The Musical Hop", "San Francisco", "CA")
            .await;

        let res = app
            .post_form(
                &routes::venue_edit(venue_id),
                &[
                    ("name", "The Musical Hop Annex"),
                    ("city", "Oakland"),
                    ("state", "CA"),
                    ("address", "1 Broadway"),
                    ("phone", "555-555-5555"),
                    ("genres", "Swing"),
                ],
            )
            .await;

        // The redirect is followed, so this is the detail page.
        assert_eq!(res.status, 200);
        assert_eq!(res.template(), "pages/show_venue.html");
        assert_eq!(
            res.flash_messages(),
            vec!["Venue The Musical Hop Annex was successfully updated!"]
        );
        let venue = &res.body["data"];
        assert_eq!(venue["id"], venue_id);
        assert_eq!(venue["city"], "Oakland");
        assert_eq!(venue["genres"], serde_json::json!(["Swing"]));
        assert_eq!(venue["seeking_talent"], false);

        let again = app.get(&routes::venue(venue_id)).await;
        assert!(again.flash_messages().is_empty());
    }

    #[tokio::test]
    async fn renaming_onto_another_venue_fails() {
        let app = TestApp::spawn().await;
        app.create_venue("The Musical Hop", "San Francisco", "CA").await;
        let venue_id = app
            .create_venue("Park Square Live Music & Coffee", "San Francisco", "CA")
            .await;

        let res = app
            .post_form(
                &routes::venue_edit(venue_id),
                &[
                    ("name", "The Musical Hop"),
                    ("city", "Oakland"),
                    ("state", "CA"),
                    ("address", "1 Broadway"),
                    ("phone", "555-555-5555"),
                    ("genres", "Swing"),
                ],
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.template(), "pages/show_venue.html");
        assert_eq!(res.flash_categories(), vec!["error"]);
        assert_eq!(
            res.flash_messages(),
            vec!["Venue The Musical Hop could not be updated."]
        );
        assert_eq!(res.body["data"]["name"], "Park Square Live Music & Coffee");
        assert_eq!(res.body["data"]["city"], "San Francisco");
    }

    #[tokio::test]
    async fn editing_unknown_venue_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::venue_edit(42)).await;
        assert_eq!(res.status, 404);

        let res = app
            .post_form(
                &routes::venue_edit(42),
                &[
                    ("name", "Ghost"),
                    ("city", "Nowhere"),
                    ("state", "NA"),
                    ("address", "0 Void"),
                    ("phone", "000"),
                    ("genres", "Jazz"),
                ],
            )
            .await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }
}

mod venue_deletion {
    use super::*;

    #[tokio::test]
    async fn delete_removes_the_venue() {
        let app = TestApp::spawn().await;
        let venue_id = app
            .create_venue("The Musical Hop", "San Francisco", "CA")
            .await;

        let res = app.delete(&routes::venue(venue_id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.template(), "pages/home.html");
        assert_eq!(
            res.flash_messages(),
            vec!["Venue The Musical Hop was successfully deleted."]
        );

        let detail = app.get(&routes::venue(venue_id)).await;
        assert_eq!(detail.status, 404);
    }

    #[tokio::test]
    async fn delete_also_removes_the_venue_shows() {
        let app = TestApp::spawn().await;
        let venue_id = app
            .create_venue("The Musical Hop", "San Francisco", "CA")
            .await;
        let artist_id = app.create_artist("Guns N Petals").await;
        app.create_show(venue_id, artist_id, "2019-05-21 21:30:00").await;
        app.create_show(venue_id, artist_id, "2035-04-01 20:00:00").await;

        app.delete(&routes::venue(venue_id)).await;

        let shows = app.get(routes::SHOWS).await;
        assert_eq!(shows.body["data"]["shows"], serde_json::json!([]));

        let artist = app.get(&routes::artist(artist_id)).await;
        assert_eq!(artist.status, 200);
        assert_eq!(artist.body["data"]["past_shows_count"], 0);
        assert_eq!(artist.body["data"]["upcoming_shows_count"], 0);
    }

    #[tokio::test]
    async fn deleting_unknown_venue_is_a_no_op() {
        let app = TestApp::spawn().await;
        let venue_id = app
            .create_venue("The Musical Hop", "San Francisco", "CA")
            .await;

        let res = app.delete(&routes::venue(999)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.template(), "pages/home.html");
        assert!(res.flash_messages().is_empty());

        let detail = app.get(&routes::venue(venue_id)).await;
        assert_eq!(detail.status, 200);
    }
}

mod venue_load_failures {
    use super::*;

    #[tokio::test]
    async fn reads_fall_back_to_home_when_shows_cannot_be_read() {
        let app = TestApp::spawn().await;
        let venue_id = app
            .create_venue("The Musical Hop", "San Francisco", "CA")
            .await;
        app.drop_table("show").await;

        app.get(routes::VENUES)
            .await
            .assert_load_failure("An error occurred. Venues could not be loaded.");
        app.post_form(routes::VENUE_SEARCH, &[("search_term", "hop")])
            .await
            .assert_load_failure("An error occurred. The venue search could not be completed.");
        app.get(&routes::venue(venue_id))
            .await
            .assert_load_failure(&format!(
                "An error occurred. Venue {venue_id} could not be loaded."
            ));

        let missing = app.get(&routes::venue(999)).await;
        assert_eq!(missing.status, 404);
    }

    #[tokio::test]
    async fn edit_form_falls_back_to_home_when_venues_cannot_be_read() {
        let app = TestApp::spawn().await;
        let venue_id = app
            .create_venue("The Musical Hop", "San Francisco", "CA")
            .await;
        app.drop_table("venue").await;

        app.get(&routes::venue_edit(venue_id))
            .await
            .assert_load_failure(&format!(
                "An error occurred. Venue {venue_id} could not be loaded."
            ));
    }
}
