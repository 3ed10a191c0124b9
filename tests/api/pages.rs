use crate::helpers::spawn_app;

#[tokio::test]
async fn privacy_policy_is_served_as_html() {
    let app = spawn_app().await;

    let response = app.get("/privacy-policy").await;

    assert_eq!(200, response.status().as_u16());
    let content_type = response.headers()["content-type"]
        .to_str()
        .unwrap()
        .to_owned();
    assert!(content_type.starts_with("text/html"));
    let body = response.text().await.unwrap();
    assert!(body.contains("Privacy Policy"));
    assert!(body.contains("privacy@glumia.com"));
}

#[tokio::test]
async fn unknown_paths_return_a_404_page() {
    let app = spawn_app().await;

    let response = app.get("/definitely-not-a-page").await;

    assert_eq!(404, response.status().as_u16());
    assert!(response.text().await.unwrap().contains("Page Not Found"));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = spawn_app().await;

    let response = app.get("/health_check").await;

    assert!(response.headers().contains_key("x-request-id"));
}
