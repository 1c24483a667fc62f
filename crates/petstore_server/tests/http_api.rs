use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use petstore_core::db::open_db_in_memory;
use petstore_server::{configure_services, DbConnection};
use serde_json::{json, Value};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DbConnection::new(
                    open_db_in_memory().unwrap(),
                )))
                .configure(configure_services),
        )
        .await
    };
}

#[actix_web::test]
async fn create_pet_then_find_all_includes_it() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/pets")
        .set_json(json!({ "type": "dog" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["type"], "dog");
    assert!(created["id"].is_i64());

    let req = test::TestRequest::get().uri("/pets").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all, json!([created]));
}

#[actix_web::test]
async fn find_all_pets_on_empty_store_returns_empty_array() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/pets").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn pets_with_same_type_get_distinct_ids() {
    let app = init_app!();

    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/pets")
            .set_json(json!({ "type": "cat" }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(created["id"].as_i64().unwrap());
    }
    assert_ne!(ids[0], ids[1]);
}

#[actix_web::test]
async fn search_returns_first_match_or_not_found() {
    let app = init_app!();

    for kind in ["dog", "dog"] {
        let req = test::TestRequest::post()
            .uri("/pets")
            .set_json(json!({ "type": kind }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/pets/search?type=dog")
        .to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found, json!({ "id": 1, "type": "dog" }));

    let req = test::TestRequest::get()
        .uri("/pets/search?type=lizard")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/pets/search").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn find_pet_by_id_returns_not_found_for_missing_row() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/pets/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_pet_body_is_rejected() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/pets")
        .set_json(json!({ "kind": "dog" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn create_user_hashes_password_and_hides_it() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "nora", "password": "hunter2", "role": "ADMIN" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["username"], "nora");
    assert_eq!(created["role"], "ADMIN");
    assert!(created.get("passwordHash").is_none());
    assert!(created.get("password").is_none());

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "omar", "password": "pw" }))
        .to_request();
    let plain: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(plain["role"], "USER");
}

#[actix_web::test]
async fn create_user_rejects_unknown_role() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "pat", "password": "pw", "role": "ROOT" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn posts_and_user_pets_flow() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "quinn", "password": "pw" }))
        .to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;
    let user_id = user["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/pets")
        .set_json(json!({ "type": "turtle" }))
        .to_request();
    let pet: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "userId": user_id,
            "content": "first!",
            "postAt": "2024-02-29T12:00:00"
        }))
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(post["title"], Value::Null);
    assert_eq!(post["postDate"], "2024-02-29");
    assert_eq!(post["postTime"], "12:00:00");

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", post["id"]))
        .to_request();
    let loaded: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(loaded, post);

    let req = test::TestRequest::post()
        .uri("/user-pets")
        .set_json(json!({ "userId": user_id, "petId": pet["id"] }))
        .to_request();
    let link: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(link["userId"], user_id);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{user_id}/pets"))
        .to_request();
    let pets: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(pets, json!([pet]));

    let req = test::TestRequest::get().uri("/user-pets").to_request();
    let links: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(links, json!([link]));
}

#[actix_web::test]
async fn store_constraint_violation_is_internal_error() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({ "userId": 404, "content": "orphan" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "internal server error" }));
}

#[actix_web::test]
async fn missing_user_returns_not_found() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/users/5").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "user not found" }));
}
