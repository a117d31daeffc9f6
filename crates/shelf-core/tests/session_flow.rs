//! End-to-end session state machine tests against a mock API server.

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shelf_core::api::ApiClient;
use shelf_core::api::types::{Role, UserRecord};
use shelf_core::credentials::Credentials;
use shelf_core::session::{
    RegisterForm, RenderTarget, SessionStore, ValidationError, select,
};

fn sample_user_json() -> serde_json::Value {
    json!({
        "id": 1,
        "email": "a@b.com",
        "first_name": "Ada",
        "last_name": "Byron",
        "role": "MERCHANDISER"
    })
}

fn sample_user() -> UserRecord {
    UserRecord {
        id: 1,
        email: "a@b.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Byron".to_string(),
        role: Role::Merchandiser,
    }
}

fn store_for(server: &MockServer, dir: &TempDir) -> SessionStore {
    let api = ApiClient::new(&server.uri(), None).unwrap();
    SessionStore::with_credentials_path(api, dir.path().join("credentials.json"))
}

#[tokio::test]
async fn test_restore_without_credentials_settles_unauthenticated() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store = store_for(&server, &dir);

    assert_eq!(select(&store.snapshot()), RenderTarget::Loading);

    store.restore().await;

    let snapshot = store.snapshot();
    assert!(!snapshot.loading());
    assert!(snapshot.user().is_none());
    assert_eq!(select(&snapshot), RenderTarget::AuthStack);
}

#[tokio::test]
async fn test_restore_with_valid_credentials_authenticates() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/auth/profile/"))
        .and(header("authorization", "Token tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": sample_user_json()})))
        .expect(1)
        .mount(&server)
        .await;

    let credentials_path = dir.path().join("credentials.json");
    Credentials {
        token: "tok-123".to_string(),
        user: sample_user(),
    }
    .save_to(&credentials_path)
    .unwrap();

    let store = store_for(&server, &dir);
    store.restore().await;

    let snapshot = store.snapshot();
    assert_eq!(select(&snapshot), RenderTarget::MainTabs);
    assert_eq!(snapshot.token(), Some("tok-123"));
    assert_eq!(snapshot.user().unwrap().email, "a@b.com");

    // Runs at most once per process lifetime.
    store.restore().await;
}

#[tokio::test]
async fn test_restore_with_rejected_token_clears_credentials() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/auth/profile/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token."})),
        )
        .mount(&server)
        .await;

    let credentials_path = dir.path().join("credentials.json");
    Credentials {
        token: "tok-stale".to_string(),
        user: sample_user(),
    }
    .save_to(&credentials_path)
    .unwrap();

    let store = store_for(&server, &dir);
    store.restore().await;

    let snapshot = store.snapshot();
    assert!(!snapshot.loading());
    assert_eq!(select(&snapshot), RenderTarget::AuthStack);
    assert!(!credentials_path.exists());
}

#[tokio::test]
async fn test_restore_with_corrupt_credentials_clears_file() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let credentials_path = dir.path().join("credentials.json");
    std::fs::write(&credentials_path, "{not json").unwrap();

    let store = store_for(&server, &dir);
    store.restore().await;

    assert_eq!(select(&store.snapshot()), RenderTarget::AuthStack);
    assert!(!credentials_path.exists());
}

#[tokio::test]
async fn test_login_success_persists_and_selects_main_tabs() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .and(body_json(json!({"email": "a@b.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": sample_user_json(),
            "token": "tok-fresh"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server, &dir);
    let mut rx = store.subscribe();

    let user = store.login("a@b.com", "pw").await.unwrap();
    assert_eq!(user.first_name, "Ada");

    let snapshot = store.snapshot();
    assert_eq!(select(&snapshot), RenderTarget::MainTabs);
    assert_eq!(snapshot.token(), Some("tok-fresh"));

    // Subscribers observe the change.
    assert!(rx.has_changed().unwrap());

    // Credential persisted for the next process.
    let credentials_path = dir.path().join("credentials.json");
    let saved = Credentials::load_from(&credentials_path).unwrap().unwrap();
    assert_eq!(saved.token, "tok-fresh");
}

#[tokio::test]
async fn test_login_wrong_credentials_settles_unauthenticated() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Invalid email or password."})),
        )
        .mount(&server)
        .await;

    let store = store_for(&server, &dir);
    let err = store.login("a@b.com", "wrong").await.unwrap_err();

    assert!(err.is_auth());
    assert!(err.to_string().contains("Invalid email or password."));

    let snapshot = store.snapshot();
    assert!(!snapshot.loading());
    assert!(snapshot.user().is_none());
    assert_eq!(select(&snapshot), RenderTarget::AuthStack);
    assert!(!dir.path().join("credentials.json").exists());
}

#[tokio::test]
async fn test_login_network_failure_settles_unauthenticated() {
    let dir = TempDir::new().unwrap();
    // Nothing listens here: transport failure.
    let api = ApiClient::new("http://127.0.0.1:9", None).unwrap();
    let store = SessionStore::with_credentials_path(api, dir.path().join("credentials.json"));

    let err = store.login("a@b.com", "pw").await.unwrap_err();
    assert!(!err.is_auth());
    assert!(!err.is_validation());

    let snapshot = store.snapshot();
    assert!(!snapshot.loading());
    assert!(snapshot.user().is_none());
}

#[tokio::test]
async fn test_register_validation_short_circuits_before_network() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    // Any request reaching the server fails the test.
    Mock::given(method("POST"))
        .and(path("/auth/register/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = store_for(&server, &dir);
    let form = RegisterForm {
        email: "a@b.com".to_string(),
        password: "x".to_string(),
        password_confirm: "y".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Byron".to_string(),
        role: Role::Merchandiser,
    };

    let err = store.register(&form).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), ValidationError::PasswordMismatch.to_string());

    // State untouched: still the initial snapshot.
    assert!(store.snapshot().loading());
}

#[tokio::test]
async fn test_register_success_does_not_authenticate() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/register/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"user": sample_user_json()})))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server, &dir);
    store.restore().await; // settle into AuthStack first

    let form = RegisterForm {
        email: "a@b.com".to_string(),
        password: "pw".to_string(),
        password_confirm: "pw".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Byron".to_string(),
        role: Role::Supervisor,
    };

    let user = store.register(&form).await.unwrap();
    assert_eq!(user.email, "a@b.com");

    // Registration is not auto-login.
    let snapshot = store.snapshot();
    assert!(!snapshot.loading());
    assert!(snapshot.user().is_none());
    assert_eq!(select(&snapshot), RenderTarget::AuthStack);
}

#[tokio::test]
async fn test_logout_resets_to_initial_state() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": sample_user_json(),
            "token": "tok-1"
        })))
        .mount(&server)
        .await;

    let store = store_for(&server, &dir);
    store.login("a@b.com", "pw").await.unwrap();
    assert_eq!(select(&store.snapshot()), RenderTarget::MainTabs);

    store.logout();

    let snapshot = store.snapshot();
    assert!(!snapshot.loading());
    assert!(snapshot.user().is_none());
    assert_eq!(select(&snapshot), RenderTarget::AuthStack);
    assert!(!dir.path().join("credentials.json").exists());
    assert!(!store.api().has_token());
}
