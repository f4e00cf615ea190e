use filmorate_dal::user::User;
use filmorate_e2e_tests::{
    launch_env,
    rest::{create_user, error_message, send, user_payload},
};
use reqwest::{Method, StatusCode};
use serde_json::json;
use time::{Duration, OffsetDateTime};
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_users() {
    let (client, base_url, _server) = launch_env().await.unwrap();

    let user = create_user(&client, &base_url, "login").await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "login");
    assert_eq!(user.email, "login@mail.ru");

    let other = create_user(&client, &base_url, "other").await.unwrap();
    assert_eq!(other.id, 2);

    let update = json!({
        "id": user.id,
        "email": "new@mail.ru",
        "login": "newlogin",
        "name": "New name",
        "birthday": "1999-01-01"
    });
    let response = send(&client, &base_url, Method::PUT, "users", &update)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: User = response.json().await.unwrap();
    assert_eq!(updated.email, "new@mail.ru");
    assert_eq!(updated.login, "newlogin");
    assert_eq!(updated.name, "New name");

    let patch = json!({"id": user.id, "name": ""});
    let response = send(&client, &base_url, Method::PATCH, "users", &patch)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let patched: User = response.json().await.unwrap();
    assert_eq!(patched.name, "newlogin");
    assert_eq!(patched.email, "new@mail.ru");

    let response = client
        .get(base_url.join("users").unwrap())
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let users: Vec<User> = response.json().await.unwrap();
    assert_eq!(users, vec![patched, other]);
}

#[tokio::test]
#[traced_test]
async fn test_invalid_users() {
    let (client, base_url, _server) = launch_env().await.unwrap();

    let mut payload = user_payload("login");
    payload["email"] = json!("mail.ru");
    let response = send(&client, &base_url, Method::POST, "users", &payload)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let msg = error_message(response).await.unwrap();
    assert!(msg.contains("mail.ru"), "{msg}");

    let mut payload = user_payload("login");
    payload["login"] = json!("bad login");
    let response = send(&client, &base_url, Method::POST, "users", &payload)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut payload = user_payload("login");
    let future = OffsetDateTime::now_utc().date() + Duration::days(2);
    payload["birthday"] = json!(future.to_string());
    let response = send(&client, &base_url, Method::POST, "users", &payload)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let user = create_user(&client, &base_url, "login").await.unwrap();

    let response = send(&client, &base_url, Method::PATCH, "users", &json!({"email": "x@y"}))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&client, &base_url, Method::PATCH, "users", &json!({"id": 999}))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // rejected patch leaves the user untouched
    let patch = json!({"id": user.id, "email": "valid@mail.ru", "login": "bad login"});
    let response = send(&client, &base_url, Method::PATCH, "users", &patch)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .get(base_url.join("users").unwrap())
        .send()
        .await
        .unwrap();
    let users: Vec<User> = response.json().await.unwrap();
    assert_eq!(users, vec![user]);
}
