//! Behavioral tests for the User model and its cascade behavior.

use sqlx::PgPool;

use gazette_db::models::user::CreateUser;
use gazette_db::repositories::{ArticleRepo, UserRepo};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_user(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            name: Some("Alatar the Blue".into()),
        },
    )
    .await
    .unwrap();

    let found = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(found.name.as_deref(), Some("Alatar the Blue"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_name_is_optional(pool: PgPool) {
    let user = UserRepo::create(&pool, &CreateUser { name: None }).await.unwrap();
    assert!(user.name.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_truncate_cascades_to_articles(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            name: Some("Pallando".into()),
        },
    )
    .await
    .unwrap();
    let article = ArticleRepo::create(&pool, "Blue Wizards", "etc.", &[])
        .await
        .unwrap();
    ArticleRepo::set_author(&pool, article.id, user.id)
        .await
        .unwrap()
        .unwrap();

    UserRepo::truncate_all(&pool).await.unwrap();

    assert!(UserRepo::find_by_id(&pool, user.id).await.unwrap().is_none());
    // TRUNCATE ... CASCADE clears referencing tables as well.
    assert!(ArticleRepo::find_all(&pool).await.unwrap().is_empty());
}
