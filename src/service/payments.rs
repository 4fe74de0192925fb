//! Payment persistence. No route reaches this yet; the table and relation exist so a
//! request's payment can be recorded alongside it.

use crate::error::AppError;
use crate::models::{Payment, PaymentCreate};
use sqlx::PgPool;

const COLUMNS: &str = "id, amount, request_id, created_at, updated_at";

pub struct PaymentService;

impl PaymentService {
    /// A request holds at most one payment; a second insert violates the unique key.
    pub async fn create(pool: &PgPool, body: &PaymentCreate) -> Result<Payment, AppError> {
        let sql = format!(
            "INSERT INTO payment (amount, request_id) VALUES ($1, $2) RETURNING {}",
            COLUMNS
        );
        Ok(sqlx::query_as::<_, Payment>(&sql)
            .bind(body.amount)
            .bind(body.request_id)
            .fetch_one(pool)
            .await?)
    }

    pub async fn for_request(pool: &PgPool, request_id: i32) -> Result<Option<Payment>, AppError> {
        let sql = format!("SELECT {} FROM payment WHERE request_id = $1", COLUMNS);
        Ok(sqlx::query_as::<_, Payment>(&sql)
            .bind(request_id)
            .fetch_optional(pool)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseCreate, RequestCreate};
    use crate::service::{CourseService, RequestService};
    use crate::test_utils::setup_schema;
    use chrono::NaiveDate;

    async fn seed_request(pool: &PgPool) -> i32 {
        let course = CourseService::create(
            pool,
            &CourseCreate {
                name: "Accounting".into(),
                start: NaiveDate::from_ymd_opt(2031, 2, 2).unwrap(),
                capacity: 1,
            },
        )
        .await
        .unwrap();
        let request = RequestService::create(
            pool,
            course.id,
            &RequestCreate {
                course_id: course.id,
                name: "Luca".into(),
                email: "luca@example.com".into(),
                phone: "555".into(),
            },
        )
        .await
        .unwrap();
        request.id
    }

    #[sqlx::test(migrations = false)]
    async fn one_payment_per_request(pool: PgPool) {
        setup_schema(&pool).await;
        let request_id = seed_request(&pool).await;
        assert!(PaymentService::for_request(&pool, request_id).await.unwrap().is_none());

        let paid = PaymentService::create(&pool, &PaymentCreate { request_id, amount: 250 })
            .await
            .unwrap();
        assert_eq!(paid.amount, 250);
        assert_eq!(PaymentService::for_request(&pool, request_id).await.unwrap(), Some(paid));

        let err = PaymentService::create(&pool, &PaymentCreate { request_id, amount: 1 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Db(_)));
    }

    #[sqlx::test(migrations = false)]
    async fn payment_requires_existing_request(pool: PgPool) {
        setup_schema(&pool).await;
        let err = PaymentService::create(&pool, &PaymentCreate { request_id: 77, amount: 5 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Db(_)));
    }
}
