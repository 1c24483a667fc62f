use crate::errors::{ApiError, ApiResult};
use crate::state::DbConnection;
use actix_web::web::{self, Data, Json, Path};
use actix_web::HttpResponse;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use log::info;
use petstore_core::{
    CreateUserDto, RepoResult, Role, SqliteUserPetRepository, SqliteUserRepository, UserId,
    UserPetService, UserService,
};
use rusqlite::Connection;
use serde::Deserialize;

pub fn scope() -> actix_web::Scope {
    web::scope("/users")
        .service(create_user)
        .service(find_all_users)
        .service(find_user)
        .service(find_user_pets)
}

fn service(conn: &Connection) -> RepoResult<UserService<SqliteUserRepository<'_>>> {
    Ok(UserService::new(SqliteUserRepository::try_new(conn)?))
}

/// Request body for user creation. Only the hash of `password` is stored.
#[derive(Deserialize)]
struct CreateUserRequest {
    username: String,
    password: String,
    #[serde(default)]
    role: Option<Role>,
}

fn hash_password(password: &str) -> ApiResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| ApiError::PasswordHash(err.to_string()))
}

#[actix_web::post("")]
async fn create_user(
    body: Json<CreateUserRequest>,
    db: Data<DbConnection>,
) -> ApiResult<HttpResponse> {
    let CreateUserRequest {
        username,
        password,
        role,
    } = body.into_inner();
    let password_hash = web::block(move || hash_password(&password)).await??;
    let dto = CreateUserDto {
        username,
        password_hash,
        role,
    };

    let user = db.run(move |conn| service(conn)?.create_user(&dto)).await?;
    info!(
        "event=user_create module=http status=ok id={:?} role={}",
        user.id,
        user.role.name()
    );
    Ok(HttpResponse::Ok().json(user))
}

#[actix_web::get("")]
async fn find_all_users(db: Data<DbConnection>) -> ApiResult<HttpResponse> {
    let users = db.run(|conn| service(conn)?.find_all_users()).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[actix_web::get("/{id}")]
async fn find_user(id: Path<UserId>, db: Data<DbConnection>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    db.run(move |conn| service(conn)?.find_user_by_id(id))
        .await?
        .map(|user| HttpResponse::Ok().json(user))
        .ok_or(ApiError::NotFound { resource: "user" })
}

#[actix_web::get("/{id}/pets")]
async fn find_user_pets(id: Path<UserId>, db: Data<DbConnection>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let pets = db
        .run(move |conn| {
            UserPetService::new(SqliteUserPetRepository::try_new(conn)?).find_pets_of_user(id)
        })
        .await?;
    Ok(HttpResponse::Ok().json(pets))
}
