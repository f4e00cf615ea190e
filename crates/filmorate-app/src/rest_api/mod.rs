pub mod film;
pub mod macros;
pub mod user;

use crate::state::AppState;

/// Both resource collections, `/films` and `/users`
pub fn api_router() -> axum::Router<AppState> {
    axum::Router::new()
        .nest("/films", film::router())
        .nest("/users", user::router())
}
