/// Generates `crud_api` module with create, replace, patch and list handlers for an entity.
///
/// Expects `<Entity>Repository`, `Create<Entity>` and `Patch<Entity>` types in scope
/// and a method on `AppState` returning the entity table.
#[macro_export]
macro_rules! crud_api {
    ($entity:ident, $table:ident) => {
        type EntityRepository = paste::paste! {[<$entity Repository>]};
        $crate::repository_from_request!(EntityRepository, $table);
        pub mod crud_api {
            use super::*;
            use $crate::error::ApiResult;
            use axum::{extract::rejection::JsonRejection, response::IntoResponse, Json};
            use http::StatusCode;

            type CreateEntity = paste::paste! {[<Create $entity>]};
            type PatchEntity = paste::paste! {[<Patch $entity>]};

            pub async fn create(
                repository: EntityRepository,
                payload: Result<Json<CreateEntity>, JsonRejection>,
            ) -> ApiResult<impl IntoResponse> {
                let Json(payload) = payload?;
                let record = repository.create(payload)?;

                Ok((StatusCode::OK, Json(record)))
            }

            pub async fn replace(
                repository: EntityRepository,
                payload: Result<Json<CreateEntity>, JsonRejection>,
            ) -> ApiResult<impl IntoResponse> {
                let Json(payload) = payload?;
                let record = repository.replace(payload)?;

                Ok((StatusCode::OK, Json(record)))
            }

            pub async fn patch(
                repository: EntityRepository,
                payload: Result<Json<PatchEntity>, JsonRejection>,
            ) -> ApiResult<impl IntoResponse> {
                let Json(payload) = payload?;
                let record = repository.patch(payload)?;

                Ok((StatusCode::OK, Json(record)))
            }

            pub async fn list_all(repository: EntityRepository) -> ApiResult<impl IntoResponse> {
                let records = repository.list_all();
                Ok((StatusCode::OK, Json(records)))
            }
        }
    };
}

#[macro_export]
macro_rules! collection_router {
    () => {
        pub fn router() -> axum::Router<$crate::state::AppState> {
            use axum::routing::post;
            axum::Router::new().route(
                "/",
                post(crud_api::create)
                    .put(crud_api::replace)
                    .patch(crud_api::patch)
                    .get(crud_api::list_all),
            )
        }
    };
}
