use crate::errors::ApiResult;
use crate::state::DbConnection;
use actix_web::web::{self, Data, Json};
use actix_web::HttpResponse;
use log::info;
use petstore_core::{CreateUserPetDto, RepoResult, SqliteUserPetRepository, UserPetService};
use rusqlite::Connection;

pub fn scope() -> actix_web::Scope {
    web::scope("/user-pets")
        .service(create_user_pet)
        .service(find_all_user_pets)
}

fn service(conn: &Connection) -> RepoResult<UserPetService<SqliteUserPetRepository<'_>>> {
    Ok(UserPetService::new(SqliteUserPetRepository::try_new(conn)?))
}

#[actix_web::post("")]
async fn create_user_pet(
    body: Json<CreateUserPetDto>,
    db: Data<DbConnection>,
) -> ApiResult<HttpResponse> {
    let dto = body.into_inner();
    let link = db
        .run(move |conn| service(conn)?.create_user_pet(&dto))
        .await?;
    info!(
        "event=user_pet_create module=http status=ok id={:?} user_id={} pet_id={}",
        link.id, link.user_id, link.pet_id
    );
    Ok(HttpResponse::Ok().json(link))
}

#[actix_web::get("")]
async fn find_all_user_pets(db: Data<DbConnection>) -> ApiResult<HttpResponse> {
    let links = db.run(|conn| service(conn)?.find_all_user_pets()).await?;
    Ok(HttpResponse::Ok().json(links))
}
