use crate::{collection_router, crud_api};
use filmorate_dal::film::{CreateFilm, FilmRepository, PatchFilm};

crud_api!(Film, films);
collection_router!();
