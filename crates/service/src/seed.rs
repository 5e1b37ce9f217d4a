use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use models::book;

use crate::errors::ServiceError;

/// Insert the two sample books when the `books` table is empty.
///
/// Returns the number of rows inserted; a non-empty table is left untouched.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<usize, ServiceError> {
    if book::Entity::find().count(db).await? > 0 {
        return Ok(0);
    }
    let now = Utc::now();
    let samples = [
        book::ActiveModel {
            title: Set("1st Book Title".into()),
            description: Set("1st Book Description".into()),
            is_read: Set(true),
            date_read: Set(Some((now - Duration::days(10)).into())),
            rate: Set(Some(4)),
            genre: Set("Biography".into()),
            cover_url: Set("https://...".into()),
            date_added: Set((now - Duration::days(50)).into()),
            publisher_id: Set(None),
            ..Default::default()
        },
        book::ActiveModel {
            title: Set("2nd Book Title".into()),
            description: Set("2nd Book Description".into()),
            is_read: Set(false),
            date_read: Set(None),
            rate: Set(None),
            genre: Set("Fiction".into()),
            cover_url: Set("https://...".into()),
            date_added: Set(now.into()),
            publisher_id: Set(None),
            ..Default::default()
        },
    ];
    let count = samples.len();
    for am in samples {
        am.insert(db).await?;
    }
    info!(books = count, "seeded sample data");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seeding_runs_once() -> anyhow::Result<()> {
        let db = get_db().await?;
        assert_eq!(seed_if_empty(&db).await?, 2);
        assert_eq!(seed_if_empty(&db).await?, 0);
        let titles: Vec<String> = book::Entity::find().all(&db).await?.into_iter().map(|b| b.title).collect();
        assert_eq!(titles, ["1st Book Title", "2nd Book Title"]);
        Ok(())
    }
}
