use chrono::NaiveDateTime;
use petstore_core::db::open_db_in_memory;
use petstore_core::{
    CreatePetDto, CreatePostDto, CreateUserDto, CreateUserPetDto, PetService, PostService, Role,
    SqlitePetRepository, SqlitePostRepository, SqliteUserPetRepository, SqliteUserRepository,
    UserPetService, UserService,
};

#[test]
fn pet_service_creates_and_finds_pets() {
    let conn = open_db_in_memory().unwrap();
    let service = PetService::new(SqlitePetRepository::try_new(&conn).unwrap());

    assert!(service.find_all_pets().unwrap().is_empty());

    let dog = service
        .create_pet(&CreatePetDto {
            kind: "dog".to_string(),
        })
        .unwrap();
    assert!(dog.id.is_some());
    assert_eq!(dog.kind, "dog");

    assert_eq!(service.find_pet_by_type("dog").unwrap(), Some(dog.clone()));
    assert_eq!(service.find_pet_by_type("cat").unwrap(), None);
    assert_eq!(service.find_pet_by_id(dog.id.unwrap()).unwrap(), Some(dog.clone()));
    assert_eq!(service.find_all_pets().unwrap(), vec![dog]);
}

#[test]
fn user_service_defaults_role_to_user() {
    let conn = open_db_in_memory().unwrap();
    let service = UserService::new(SqliteUserRepository::try_new(&conn).unwrap());

    let plain = service
        .create_user(&CreateUserDto {
            username: "hank".to_string(),
            password_hash: "hash".to_string(),
            role: None,
        })
        .unwrap();
    assert_eq!(plain.role, Role::User);

    let admin = service
        .create_user(&CreateUserDto {
            username: "ivy".to_string(),
            password_hash: "hash".to_string(),
            role: Some(Role::Admin),
        })
        .unwrap();
    assert_eq!(admin.role, Role::Admin);

    assert_eq!(service.find_all_users().unwrap().len(), 2);
    assert_eq!(
        service.find_user_by_username("ivy").unwrap().map(|user| user.id),
        Some(admin.id)
    );
}

#[test]
fn post_service_splits_post_at_into_date_and_time() {
    let conn = open_db_in_memory().unwrap();
    let users = UserService::new(SqliteUserRepository::try_new(&conn).unwrap());
    let posts = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    let author = users
        .create_user(&CreateUserDto {
            username: "jill".to_string(),
            password_hash: "hash".to_string(),
            role: None,
        })
        .unwrap();

    let post_at = NaiveDateTime::parse_from_str("2023-12-31 23:59:58", "%Y-%m-%d %H:%M:%S").unwrap();
    let post = posts
        .create_post(&CreatePostDto {
            user_id: author.id.unwrap(),
            title: Some("Year end".to_string()),
            content: "bye".to_string(),
            post_at: Some(post_at),
        })
        .unwrap();

    assert_eq!(post.post_date, post_at.date());
    assert_eq!(post.post_time, post_at.time());
    assert_eq!(posts.find_post_by_id(post.id.unwrap()).unwrap(), Some(post.clone()));

    let stamped = posts
        .create_post(&CreatePostDto {
            user_id: author.id.unwrap(),
            title: None,
            content: "now".to_string(),
            post_at: None,
        })
        .unwrap();
    assert_eq!(stamped.post_date, stamped.post_at.date());
    assert_eq!(posts.find_all_posts().unwrap().len(), 2);
}

#[test]
fn user_pet_service_lists_pets_of_user() {
    let conn = open_db_in_memory().unwrap();
    let users = UserService::new(SqliteUserRepository::try_new(&conn).unwrap());
    let pets = PetService::new(SqlitePetRepository::try_new(&conn).unwrap());
    let links = UserPetService::new(SqliteUserPetRepository::try_new(&conn).unwrap());

    let owner = users
        .create_user(&CreateUserDto {
            username: "kim".to_string(),
            password_hash: "hash".to_string(),
            role: None,
        })
        .unwrap();
    let parrot = pets
        .create_pet(&CreatePetDto {
            kind: "parrot".to_string(),
        })
        .unwrap();

    let link = links
        .create_user_pet(&CreateUserPetDto {
            user_id: owner.id.unwrap(),
            pet_id: parrot.id.unwrap(),
        })
        .unwrap();
    assert!(link.id.is_some());

    assert_eq!(links.find_all_user_pets().unwrap(), vec![link]);
    assert_eq!(links.find_pets_of_user(owner.id.unwrap()).unwrap(), vec![parrot]);
}
