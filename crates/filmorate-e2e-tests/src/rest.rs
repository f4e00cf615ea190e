use anyhow::{Result, anyhow};
use filmorate_dal::{film::Film, user::User};
use reqwest::{Method, StatusCode, Url};
use serde_json::{Value, json};
use tracing::info;

pub async fn send(
    client: &reqwest::Client,
    base_url: &Url,
    method: Method,
    path: &str,
    payload: &Value,
) -> Result<reqwest::Response> {
    let api_url = base_url.join(path)?;
    let response = client.request(method, api_url).json(payload).send().await?;
    info!("Response: {:#?}", response);
    Ok(response)
}

pub async fn error_message(response: reqwest::Response) -> Result<String> {
    let body: Value = response.json().await?;
    body.get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Missing error message in {body}"))
}

pub fn film_payload(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Sci-fi",
        "releaseDate": "1999-03-31",
        "duration": 120
    })
}

pub fn user_payload(login: &str) -> Value {
    json!({
        "email": format!("{login}@mail.ru"),
        "login": login,
        "name": "",
        "birthday": "2000-01-01"
    })
}

pub async fn create_film(client: &reqwest::Client, base_url: &Url, name: &str) -> Result<Film> {
    let response = send(client, base_url, Method::POST, "films", &film_payload(name)).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let film: Film = response.json().await?;
    Ok(film)
}

pub async fn create_user(client: &reqwest::Client, base_url: &Url, login: &str) -> Result<User> {
    let response = send(client, base_url, Method::POST, "users", &user_payload(login)).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let user: User = response.json().await?;
    Ok(user)
}
