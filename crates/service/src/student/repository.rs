use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use models::student;

use crate::errors::ServiceError;
use crate::student::domain::StudentInput;

/// Storage port behind `StudentDirectory`.
///
/// Lookups that miss return `Ok(None)`; mapping that to `NotFound` is the
/// directory's job. Every listing is ordered by ascending id.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn insert(&self, input: StudentInput) -> Result<student::Model, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<student::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<student::Model>, ServiceError>;
    /// Returns the requested page and the total number of records.
    async fn find_page(&self, index: u64, size: u64) -> Result<(Vec<student::Model>, u64), ServiceError>;
    async fn update(&self, id: i64, input: StudentInput) -> Result<Option<student::Model>, ServiceError>;
    async fn delete(&self, id: i64) -> Result<Option<student::Model>, ServiceError>;
    /// Case-insensitive substring match on `name`; `needle` is taken literally.
    async fn search_by_name(&self, needle: &str) -> Result<Vec<student::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn insert(&self, input: StudentInput) -> Result<student::Model, ServiceError> {
        let created = input.into_active_model().insert(&self.db).await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<student::Model>, ServiceError> {
        Ok(student::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> Result<Vec<student::Model>, ServiceError> {
        let rows = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_page(&self, index: u64, size: u64) -> Result<(Vec<student::Model>, u64), ServiceError> {
        // SeaORM's paginate uses 0-based page index via fetch_page
        let paginator = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .paginate(&self.db, size);
        let total = paginator.num_items().await?;
        // fetch_page multiplies without an overflow check
        match index.checked_mul(size) {
            Some(offset) if offset < total => Ok((paginator.fetch_page(index).await?, total)),
            _ => Ok((Vec::new(), total)),
        }
    }

    async fn update(&self, id: i64, input: StudentInput) -> Result<Option<student::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(found) = student::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };
        let mut am: student::ActiveModel = found.into();
        input.apply_to(&mut am);
        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<Option<student::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(found) = student::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };
        student::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(Some(found))
    }

    async fn search_by_name(&self, needle: &str) -> Result<Vec<student::Model>, ServiceError> {
        let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
        let rows = student::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(student::Column::Name))).like(pattern))
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}

/// Escape `LIKE` metacharacters with the PostgreSQL default escape (`\`).
pub(crate) fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
