//! PostgreSQL repository tests. `#[sqlx::test]` creates a fresh database per test from
//! `DATABASE_URL`; run with `cargo test -- --ignored` against a live server.

use books_api::{ensure_books_table, AppError, Book, BookRepository, PgBookRepository};
use sqlx::PgPool;

fn power_up() -> Book {
    Book {
        isbn: "0691161518".to_string(),
        amazon_url: "http://a.co/eobPtX2".to_string(),
        author: "Matthew Lane".to_string(),
        language: "english".to_string(),
        pages: 264,
        publisher: "Princeton University Press".to_string(),
        title: "Power-Up: Unlocking the Hidden Mathematics in Video Games".to_string(),
        year: 2017,
    }
}

async fn repo(pool: PgPool) -> PgBookRepository {
    ensure_books_table(&pool).await.unwrap();
    PgBookRepository::new(pool)
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
async fn create_get_and_list(pool: PgPool) {
    let repo = repo(pool).await;
    let created = repo.create(&power_up()).await.unwrap();
    assert_eq!(created, power_up());
    assert_eq!(repo.get("0691161518").await.unwrap(), power_up());
    assert_eq!(repo.list().await.unwrap(), vec![power_up()]);
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
async fn duplicate_isbn_conflicts(pool: PgPool) {
    let repo = repo(pool).await;
    repo.create(&power_up()).await.unwrap();
    let err = repo.create(&power_up()).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref isbn) if isbn == "0691161518"));
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
async fn update_and_remove(pool: PgPool) {
    let repo = repo(pool).await;
    repo.create(&power_up()).await.unwrap();

    let mut changed = power_up();
    changed.author = "Test Update".to_string();
    let updated = repo.update("0691161518", &changed).await.unwrap();
    assert_eq!(updated.author, "Test Update");

    repo.remove("0691161518").await.unwrap();
    assert!(matches!(
        repo.get("0691161518").await.unwrap_err(),
        AppError::NotFound(_)
    ));
}

#[sqlx::test(migrations = false)]
#[ignore = "requires DATABASE_URL pointing at a PostgreSQL server"]
async fn missing_rows_are_not_found(pool: PgPool) {
    let repo = repo(pool).await;
    let err = repo.update("123", &power_up()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref isbn) if isbn == "123"));
    let err = repo.remove("123").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref isbn) if isbn == "123"));
}
