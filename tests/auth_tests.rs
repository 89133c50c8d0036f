use lagos_property_map::auth::{Session, SessionUser};
use lagos_property_map::error::Error;
use lagos_property_map::PropertyMap;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn login_body(token: &str) -> serde_json::Value {
    json!({
        "success": true,
        "message": "Login successful",
        "data": {
            "token": token,
            "user": {
                "id": "user-1",
                "email": "admin@lagospropertymap.example",
                "role": "ADMIN",
                "firstName": "Ada",
                "lastName": "Obi",
                "phone": "+2348012345678",
                "createdAt": "2024-01-10T09:00:00Z",
                "updatedAt": "2024-03-01T12:00:00Z"
            }
        }
    })
}

#[tokio::test]
async fn test_sign_in_stores_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "admin@lagospropertymap.example",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body("issued_token")))
        .mount(&mock_server)
        .await;

    let portal = PropertyMap::new(&mock_server.uri());

    let session = portal
        .auth()
        .sign_in("admin@lagospropertymap.example", "secret123")
        .await
        .expect("sign-in should succeed");

    assert_eq!(session.token, "issued_token");
    assert_eq!(session.user.id, "user-1");
    assert_eq!(session.user.first_name.as_deref(), Some("Ada"));

    // The session is now the active one for downstream calls
    let current = portal.auth().current_session().expect("session should be set");
    assert_eq!(current.token, "issued_token");
}

#[tokio::test]
async fn test_sign_in_rejected_raises_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Invalid email or password",
            "data": null
        })))
        .mount(&mock_server)
        .await;

    let portal = PropertyMap::new(&mock_server.uri());

    let result = portal.auth().sign_in("user@x.com", "wrong").await;

    assert!(matches!(result, Err(Error::InvalidCredentials)));
    // A rejected sign-in must not set an active session
    assert!(matches!(
        portal.auth().current_session(),
        Err(Error::Unauthenticated)
    ));
}

#[tokio::test]
async fn test_sign_in_tokenless_payload_raises_invalid_credentials() {
    let mock_server = MockServer::start().await;

    // 200 but no usable token in the payload
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Login successful",
            "data": null
        })))
        .mount(&mock_server)
        .await;

    let portal = PropertyMap::new(&mock_server.uri());

    let result = portal.auth().sign_in("user@x.com", "secret123").await;

    assert!(matches!(result, Err(Error::InvalidCredentials)));
}

#[tokio::test]
async fn test_sign_out_clears_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_body("issued_token")))
        .mount(&mock_server)
        .await;

    let portal = PropertyMap::new(&mock_server.uri());
    portal
        .auth()
        .sign_in("admin@lagospropertymap.example", "secret123")
        .await
        .expect("sign-in should succeed");

    portal.auth().sign_out();

    assert!(matches!(
        portal.auth().current_session(),
        Err(Error::Unauthenticated)
    ));
}

#[tokio::test]
async fn test_set_session_rehydrates_a_captured_session() {
    let portal = PropertyMap::new("http://localhost:1");

    portal.auth().set_session(Session {
        token: "restored_token".to_string(),
        user: SessionUser {
            id: "user-9".to_string(),
            email: "agent@lagospropertymap.example".to_string(),
            role: "AGENT".to_string(),
            first_name: None,
            last_name: None,
            phone: None,
            created_at: None,
            updated_at: None,
        },
    });

    let current = portal.auth().current_session().expect("session should be set");
    assert_eq!(current.token, "restored_token");
    assert_eq!(current.user.role, "AGENT");
}
