use axum::http::StatusCode;
use tower::ServiceExt;

mod helpers;

#[tokio::test]
async fn valid_submission_is_acknowledged() {
    let app = helpers::create_test_app();

    let (status, body) = helpers::post_form(
        &app,
        "/contact",
        &[
            ("name", "Dilan"),
            ("email", "dilan@example.com"),
            ("subject", "Birthday dinner"),
            ("message", "Do you have room for twelve people next Friday evening?"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Thank you! We will get back to you soon."));
}

#[tokio::test]
async fn invalid_email_is_rejected_with_a_toast() {
    let app = helpers::create_test_app();

    let (status, body) = helpers::post_form(
        &app,
        "/contact",
        &[
            ("name", "Dilan"),
            ("email", "not-an-email"),
            ("subject", "Hello"),
            ("message", "A perfectly long enough message."),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Please check the form"));
}

#[tokio::test]
async fn short_message_is_rejected() {
    let app = helpers::create_test_app();

    let (_, body) = helpers::post_form(
        &app,
        "/contact",
        &[
            ("name", "Dilan"),
            ("email", "dilan@example.com"),
            ("subject", "Hi"),
            ("message", "Too short"),
        ],
    )
    .await;

    assert!(body.contains("Please check the form"));
}

#[tokio::test]
async fn localized_toast_follows_the_cookie() {
    let app = helpers::create_test_app();

    let body = serde_urlencoded::to_string([
        ("name", "Dilan"),
        ("email", "dilan@example.com"),
        ("subject", "Silav"),
        ("message", "Ji bo 12 kesan cih heye êvara înê?"),
    ])
    .unwrap();

    let response = app
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/contact")
                .header(
                    axum::http::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .header(axum::http::header::COOKIE, "preferred_language=ku")
                .body(axum::body::Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let body = helpers::body_string(response).await;
    assert!(body.contains("Spas!"));
}
