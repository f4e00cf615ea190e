use std::sync::Arc;

use filmorate_dal::{film::Film, user::User, Table};

/// Shared state of all handlers, cloning is cheap.
#[derive(Clone, Default)]
pub struct AppState {
    state: Arc<AppStateInner>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn films(&self) -> &Table<Film> {
        &self.state.films
    }

    pub fn users(&self) -> &Table<User> {
        &self.state.users
    }
}

#[derive(Default)]
struct AppStateInner {
    films: Table<Film>,
    users: Table<User>,
}
