use garde::Validate;
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::debug;

use crate::{Error, Table, error::Result, required, validate};

const ENTITY: &str = "Film";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: Date,
    pub duration: i32,
}

/// Payload for creating a film or replacing it as whole (then `id` is required)
#[derive(Debug, Serialize, Deserialize, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilm {
    #[garde(skip)]
    pub id: Option<i64>,
    #[garde(required, inner(custom(validate::film_name)))]
    pub name: Option<String>,
    #[garde(required, inner(custom(validate::film_description)))]
    pub description: Option<String>,
    #[garde(required, inner(custom(validate::release_date)))]
    pub release_date: Option<Date>,
    #[garde(required, inner(custom(validate::duration)))]
    pub duration: Option<i32>,
}

impl CreateFilm {
    fn into_film(self, id: i64) -> Result<Film> {
        Ok(Film {
            id,
            name: required(self.name, "name")?,
            description: required(self.description, "description")?,
            release_date: required(self.release_date, "releaseDate")?,
            duration: required(self.duration, "duration")?,
        })
    }
}

/// Partial update, only fields which are present are changed
#[derive(Debug, Serialize, Deserialize, Clone, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchFilm {
    #[garde(skip)]
    pub id: Option<i64>,
    #[garde(inner(custom(validate::film_name)))]
    pub name: Option<String>,
    #[garde(inner(custom(validate::film_description)))]
    pub description: Option<String>,
    #[garde(inner(custom(validate::release_date)))]
    pub release_date: Option<Date>,
    #[garde(inner(custom(validate::duration)))]
    pub duration: Option<i32>,
}

impl PatchFilm {
    fn apply(self, film: &mut Film) {
        if let Some(name) = self.name {
            film.name = name;
        }
        if let Some(description) = self.description {
            film.description = description;
        }
        if let Some(release_date) = self.release_date {
            film.release_date = release_date;
        }
        if let Some(duration) = self.duration {
            film.duration = duration;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilmRepository {
    table: Table<Film>,
}

impl FilmRepository {
    pub fn new(table: Table<Film>) -> Self {
        Self { table }
    }

    pub fn create(&self, payload: CreateFilm) -> Result<Film> {
        payload
            .validate()
            .inspect_err(|e| debug!("Invalid film on create: {e}"))?;
        // id is known only inside the table lock
        let film = payload.into_film(0)?;
        let film = self.table.insert_with(|id| Film { id, ..film });
        debug!(id = film.id, "Film created");
        Ok(film)
    }

    pub fn replace(&self, payload: CreateFilm) -> Result<Film> {
        let id = self.existing_id(payload.id)?;
        payload
            .validate()
            .inspect_err(|e| debug!(id, "Invalid film on replace: {e}"))?;
        let new_film = payload.into_film(id)?;
        let film = self
            .table
            .update(id, |film| *film = new_film)
            .ok_or(Error::RecordNotFound { entity: ENTITY, id })?;
        debug!(id, "Film replaced");
        Ok(film)
    }

    pub fn patch(&self, payload: PatchFilm) -> Result<Film> {
        let id = self.existing_id(payload.id)?;
        payload
            .validate()
            .inspect_err(|e| debug!(id, "Invalid film on patch: {e}"))?;
        let film = self
            .table
            .update(id, |film| payload.apply(film))
            .ok_or(Error::RecordNotFound { entity: ENTITY, id })?;
        debug!(id, "Film patched");
        Ok(film)
    }

    pub fn list_all(&self) -> Vec<Film> {
        self.table.list()
    }

    fn existing_id(&self, id: Option<i64>) -> Result<i64> {
        let id = id.ok_or_else(|| {
            debug!("Film id not provided");
            Error::MissingId
        })?;
        if !self.table.contains(id) {
            debug!(id, "Film not found");
            return Err(Error::RecordNotFound { entity: ENTITY, id });
        }
        Ok(id)
    }
}
