use crate::errors::{ApiError, ApiResult};
use crate::state::DbConnection;
use actix_web::web::{self, Data, Json, Path, Query};
use actix_web::HttpResponse;
use log::info;
use petstore_core::{CreatePetDto, PetId, PetService, RepoResult, SqlitePetRepository};
use rusqlite::Connection;
use serde::Deserialize;

pub fn scope() -> actix_web::Scope {
    // `search` is registered ahead of `{id}`.
    web::scope("/pets")
        .service(create_pet)
        .service(find_all_pets)
        .service(search_pets)
        .service(find_pet)
}

fn service(conn: &Connection) -> RepoResult<PetService<SqlitePetRepository<'_>>> {
    Ok(PetService::new(SqlitePetRepository::try_new(conn)?))
}

#[derive(Deserialize)]
struct TypeQuery {
    #[serde(rename = "type")]
    kind: String,
}

#[actix_web::post("")]
async fn create_pet(body: Json<CreatePetDto>, db: Data<DbConnection>) -> ApiResult<HttpResponse> {
    let dto = body.into_inner();
    let pet = db.run(move |conn| service(conn)?.create_pet(&dto)).await?;
    info!("event=pet_create module=http status=ok id={:?}", pet.id);
    Ok(HttpResponse::Ok().json(pet))
}

#[actix_web::get("")]
async fn find_all_pets(db: Data<DbConnection>) -> ApiResult<HttpResponse> {
    let pets = db.run(|conn| service(conn)?.find_all_pets()).await?;
    Ok(HttpResponse::Ok().json(pets))
}

#[actix_web::get("/search")]
async fn search_pets(query: Query<TypeQuery>, db: Data<DbConnection>) -> ApiResult<HttpResponse> {
    let kind = query.into_inner().kind;
    db.run(move |conn| service(conn)?.find_pet_by_type(&kind))
        .await?
        .map(|pet| HttpResponse::Ok().json(pet))
        .ok_or(ApiError::NotFound { resource: "pet" })
}

#[actix_web::get("/{id}")]
async fn find_pet(id: Path<PetId>, db: Data<DbConnection>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    db.run(move |conn| service(conn)?.find_pet_by_id(id))
        .await?
        .map(|pet| HttpResponse::Ok().json(pet))
        .ok_or(ApiError::NotFound { resource: "pet" })
}
