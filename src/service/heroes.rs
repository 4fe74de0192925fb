use crate::error::AppError;
use crate::models::{Hero, HeroCreate};
use sqlx::PgPool;

const COLUMNS: &str = "id, name, power, created_at, updated_at";

pub struct HeroService;

impl HeroService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Hero>, AppError> {
        let sql = format!("SELECT {} FROM hero ORDER BY id", COLUMNS);
        Ok(sqlx::query_as::<_, Hero>(&sql).fetch_all(pool).await?)
    }

    pub async fn create(pool: &PgPool, body: &HeroCreate) -> Result<Hero, AppError> {
        let sql = format!("INSERT INTO hero (name, power) VALUES ($1, $2) RETURNING {}", COLUMNS);
        Ok(sqlx::query_as::<_, Hero>(&sql)
            .bind(&body.name)
            .bind(&body.power)
            .fetch_one(pool)
            .await?)
    }

    /// Returns the number of rows removed; zero when nothing matched.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM hero WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
