use crate::{collection_router, crud_api};
use filmorate_dal::user::{CreateUser, PatchUser, UserRepository};

crud_api!(User, users);
collection_router!();
