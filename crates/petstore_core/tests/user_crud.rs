use petstore_core::db::open_db_in_memory;
use petstore_core::{RepoError, Repository, Role, SqliteUserRepository, User, UserRepository};

#[test]
fn role_roundtrips_as_enumeration_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let admin = repo
        .save(&User::new("alice", "hash-a", Role::Admin))
        .unwrap();

    let stored: String = conn
        .query_row(
            "SELECT role FROM \"user\" WHERE id = ?1;",
            [admin.id.unwrap()],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, "ADMIN");

    let loaded = repo.find_by_id(admin.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded.role, Role::Admin);
    assert_eq!(loaded.password_hash, "hash-a");
}

#[test]
fn store_rejects_role_outside_enumeration() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO \"user\" (username, password_hash, role) VALUES ('mallory', 'x', 'ROOT');",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn unknown_persisted_role_is_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "PRAGMA ignore_check_constraints = ON;
         INSERT INTO \"user\" (username, password_hash, role) VALUES ('mallory', 'x', 'ROOT');
         PRAGMA ignore_check_constraints = OFF;",
    )
    .unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let err = repo.find_all().unwrap_err();
    assert!(
        matches!(&err, RepoError::InvalidData(message) if message.contains("ROOT")),
        "unexpected error: {err}"
    );
}

#[test]
fn find_by_username_matches_exactly() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let bob = repo.save(&User::new("bob", "hash-b", Role::User)).unwrap();

    assert_eq!(repo.find_by_username("bob").unwrap(), Some(bob));
    assert_eq!(repo.find_by_username("Bob").unwrap(), None);
}
