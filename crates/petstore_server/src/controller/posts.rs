use crate::errors::{ApiError, ApiResult};
use crate::state::DbConnection;
use actix_web::web::{self, Data, Json, Path};
use actix_web::HttpResponse;
use log::info;
use petstore_core::{CreatePostDto, PostId, PostService, RepoResult, SqlitePostRepository};
use rusqlite::Connection;

pub fn scope() -> actix_web::Scope {
    web::scope("/posts")
        .service(create_post)
        .service(find_all_posts)
        .service(find_post)
}

fn service(conn: &Connection) -> RepoResult<PostService<SqlitePostRepository<'_>>> {
    Ok(PostService::new(SqlitePostRepository::try_new(conn)?))
}

#[actix_web::post("")]
async fn create_post(body: Json<CreatePostDto>, db: Data<DbConnection>) -> ApiResult<HttpResponse> {
    let dto = body.into_inner();
    let post = db.run(move |conn| service(conn)?.create_post(&dto)).await?;
    info!(
        "event=post_create module=http status=ok id={:?} user_id={}",
        post.id, post.user_id
    );
    Ok(HttpResponse::Ok().json(post))
}

#[actix_web::get("")]
async fn find_all_posts(db: Data<DbConnection>) -> ApiResult<HttpResponse> {
    let posts = db.run(|conn| service(conn)?.find_all_posts()).await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[actix_web::get("/{id}")]
async fn find_post(id: Path<PostId>, db: Data<DbConnection>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    db.run(move |conn| service(conn)?.find_post_by_id(id))
        .await?
        .map(|post| HttpResponse::Ok().json(post))
        .ok_or(ApiError::NotFound { resource: "post" })
}
