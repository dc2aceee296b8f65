//! Integration tests for the PostgreSQL anime repository.
//!
//! These need a live database (`DATABASE_URL`) and are ignored by default:
//! `cargo test -p atarashi-db -- --ignored`.

use atarashi_core::anime::Anime;
use atarashi_core::repository::AnimeRepository;
use atarashi_db::models::user::CreateUser;
use atarashi_db::repositories::{AnimeRepo, UserRepo};
use futures::TryStreamExt;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_assigns_identity(pool: PgPool) {
    let repo = AnimeRepo::new(pool);
    let created = repo.create(Anime::new("Mushishi")).await.unwrap();
    assert!(created.id.is_some());
    assert_eq!(created.name, "Mushishi");

    let found = repo.find_by_id(created.id.unwrap()).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn find_by_id_missing_is_none(pool: PgPool) {
    let repo = AnimeRepo::new(pool);
    assert_eq!(repo.find_by_id(999_999).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_all_preserves_input_order(pool: PgPool) {
    let repo = AnimeRepo::new(pool);
    let names = ["Monster", "Ping Pong", "Planetes"];

    let created: Vec<Anime> = repo
        .create_all(names.iter().map(|n| Anime::new(*n)).collect())
        .try_collect()
        .await
        .unwrap();

    let created_names: Vec<&str> = created.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(created_names, names);

    let listed: Vec<Anime> = repo.find_all().try_collect().await.unwrap();
    assert_eq!(listed, created);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn overwrite_and_remove(pool: PgPool) {
    let repo = AnimeRepo::new(pool);
    let created = repo.create(Anime::new("Original")).await.unwrap();
    let id = created.id.unwrap();

    let updated = repo
        .overwrite(Anime::with_id(id, "Updated"))
        .await
        .unwrap();
    assert_eq!(updated, Some(Anime::with_id(id, "Updated")));

    repo.remove(Anime::with_id(id, "Updated")).await.unwrap();
    assert_eq!(repo.find_by_id(id).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn overwrite_missing_row_is_none(pool: PgPool) {
    let repo = AnimeRepo::new(pool);
    let result = repo.overwrite(Anime::with_id(424_242, "Ghost")).await.unwrap();
    assert_eq!(result, None);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn user_lookup_by_username(pool: PgPool) {
    let input = CreateUser {
        name: "Gustavo".to_string(),
        username: "gustavo".to_string(),
        password_hash: "not-a-real-hash".to_string(),
        authorities: "admin,user".to_string(),
    };
    let created = UserRepo::create(&pool, &input).await.unwrap();

    let found = UserRepo::find_by_username(&pool, "gustavo")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.roles(), vec!["admin", "user"]);

    assert!(UserRepo::find_by_username(&pool, "nobody")
        .await
        .unwrap()
        .is_none());
}
