use axum::http::{header, StatusCode};
use tower::ServiceExt;

mod helpers;

fn recommended_section(body: &str) -> &str {
    let start = body.find("<aside class=\"recommended\">").expect("recommended panel");
    let end = body[start..].find("</aside>").expect("panel end") + start;
    &body[start..end]
}

#[tokio::test]
async fn menu_page_lists_the_whole_catalog_by_default() {
    let app = helpers::create_test_app();

    let (status, body) = helpers::get(&app, "/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Zagros Mountain Kofta"));
    assert!(body.contains("Pistachio Baklava"));
    assert!(body.contains("Kurdish Chai"));
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let app = helpers::create_test_app();

    for query in ["kofta", "KOFTA"] {
        let (status, body) = helpers::get(&app, &format!("/menu?search={query}")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Zagros Mountain Kofta"), "query {query}");
        assert!(!body.contains("Hummus Trio"), "query {query}");
    }
}

#[tokio::test]
async fn category_filter_narrows_the_grid() {
    let app = helpers::create_test_app();

    let (_, body) = helpers::get(&app, "/menu?category=soup").await;
    assert!(body.contains("Red Lentil Shorba"));
    assert!(!body.contains("Hummus Trio"));
}

#[tokio::test]
async fn vegetarian_category_uses_the_flag_not_the_field() {
    let app = helpers::create_test_app();

    let (_, body) = helpers::get(&app, "/menu?category=vegetarian").await;
    // A vegetarian main and a vegetarian dessert both qualify.
    assert!(body.contains("Garden Dolma"));
    assert!(body.contains("Pistachio Baklava"));
    assert!(!body.contains("Lamb Tashreeb"));
}

#[tokio::test]
async fn unknown_category_shows_the_empty_state() {
    let app = helpers::create_test_app();

    let (status, body) = helpers::get(&app, "/menu?category=fusion").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No dishes match your filters."));
    assert!(body.contains("Reset filters"));
}

#[tokio::test]
async fn price_sort_puts_cheap_dishes_first() {
    let app = helpers::create_test_app();

    let (_, body) = helpers::get(&app, "/menu?sort=price").await;
    let grid = body.find("menu-grid").unwrap();
    let chai = body[grid..].find("Kurdish Chai").unwrap();
    let kebab = body[grid..].find("Charcoal Lamb Kebab").unwrap();
    assert!(chai < kebab, "2.50 chai should precede 17.50 kebab");
}

#[tokio::test]
async fn toggles_compose_with_category() {
    let app = helpers::create_test_app();

    // Seasonal + vegetarian leaves only the seasonal plant dishes.
    let (_, body) = helpers::get(&app, "/menu?seasonal=true&vegetarian=true").await;
    assert!(body.contains("Summer Salad"));
    assert!(body.contains("Saffron Rice Pudding"));
    assert!(!body.contains("Hummus Trio"));
    assert!(!body.contains("Lamb Tashreeb"));
}

#[tokio::test]
async fn filter_links_preserve_the_rest_of_the_state() {
    let app = helpers::create_test_app();

    let (_, body) = helpers::get(&app, "/menu?category=grill&sort=price").await;
    // The toggle links keep category and sort in their hrefs.
    assert!(body.contains("category=grill&amp;popular=true&amp;sort=price"));
}

#[tokio::test]
async fn item_detail_renders_and_tracks_the_view() {
    let app = helpers::create_test_app();

    let response = helpers::get_response(&app, "/menu/item/kofta-zagros").await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("preference cookie written")
        .to_str()
        .unwrap()
        .to_owned();
    assert!(cookie.starts_with("zagros_prefs="));

    let body = helpers::body_string(response).await;
    assert!(body.contains("Zagros Mountain Kofta"));
}

#[tokio::test]
async fn unknown_item_is_a_not_found_page() {
    let app = helpers::create_test_app();

    let (status, _) = helpers::get(&app, "/menu/item/ghost-dish").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn view_endpoint_answers_no_content_and_sets_the_cookie() {
    let app = helpers::create_test_app();

    let response = app
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/menu/view/shorba-nisk")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("preference cookie written")
        .to_str()
        .unwrap();
    assert!(cookie.contains("veg_preferred"));
}

#[tokio::test]
async fn view_endpoint_rejects_unknown_items() {
    let app = helpers::create_test_app();

    let response = app
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/menu/view/ghost-dish")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn recommendations_follow_the_preference_cookie() {
    let app = helpers::create_test_app();

    // A visitor who keeps opening honey dishes sees them recommended,
    // whatever the current time-of-day bucket is.
    let prefs = r#"{"liked_tags":{"honey":10}}"#;
    let cookie = format!("zagros_prefs={}", urlencoding::encode(prefs));

    let (_, body) = helpers::get_with_cookie(&app, "/menu", Some(&cookie)).await;
    assert!(recommended_section(&body).contains("Honey"));

    // Without the signal the low-popularity honey dish is not in the
    // panel.
    let (_, body) = helpers::get(&app, "/menu").await;
    assert!(!recommended_section(&body).contains("Honey"));
}

#[tokio::test]
async fn corrupt_preference_cookie_degrades_to_defaults() {
    let app = helpers::create_test_app();

    let (status, body) =
        helpers::get_with_cookie(&app, "/menu", Some("zagros_prefs=%7Bnot-json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Zagros Mountain Kofta"));
}
