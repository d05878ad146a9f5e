//! Common test utilities and helpers.

use axum_test::TestServer;
use wishbox::{db, AppState, Config};

/// Admin password used by the test servers that have one.
pub const TEST_PASSWORD: &str = "choinka";

/// Build state over a fresh in-memory database.
pub async fn setup_state(password: Option<&str>) -> AppState {
    let config = Config::in_memory(password);
    let pool = db::init_pool(&config.database)
        .await
        .expect("Failed to create test database");
    db::initialize_schema(&pool)
        .await
        .expect("Failed to initialize schema");
    AppState::with_pool(pool, config)
}

/// Build a test server around the full application router.
pub async fn build_test_app(password: Option<&str>) -> (TestServer, AppState) {
    let state = setup_state(password).await;
    let server = TestServer::new(wishbox::app(state.clone())).expect("Failed to create test server");
    (server, state)
}

/// Form fields for a valid submission.
pub fn form_fields<'a>(name: &'a str, class: &'a str, age: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("name", name),
        ("class", class),
        ("age", age),
        ("giftWish", "lego"),
        ("giftLink", ""),
    ]
}
