use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use models::student;

use crate::errors::ServiceError;
use crate::student::domain::StudentInput;
use crate::student::repository::StudentRepository;

/// Process-local student store.
///
/// Keeps records in a `BTreeMap` keyed by id so iteration is id-ordered.
/// Ids start at 1 and are never reused.
pub struct InMemoryStudentRepository {
    inner: RwLock<State>,
}

struct State {
    rows: BTreeMap<i64, student::Model>,
    next_id: i64,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self { inner: RwLock::new(State { rows: BTreeMap::new(), next_id: 1 }) }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn insert(&self, input: StudentInput) -> Result<student::Model, ServiceError> {
        let mut state = self.inner.write().await;
        let id = state.next_id;
        state.next_id += 1;
        let now = Utc::now().into();
        let row = student::Model {
            id,
            name: input.name,
            email: input.email,
            course: input.course,
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<student::Model>, ServiceError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<student::Model>, ServiceError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_page(&self, index: u64, size: u64) -> Result<(Vec<student::Model>, u64), ServiceError> {
        let state = self.inner.read().await;
        let total = state.rows.len() as u64;
        let skip = usize::try_from(index.saturating_mul(size)).unwrap_or(usize::MAX);
        let take = usize::try_from(size).unwrap_or(usize::MAX);
        let rows = state.rows.values().skip(skip).take(take).cloned().collect();
        Ok((rows, total))
    }

    async fn update(&self, id: i64, input: StudentInput) -> Result<Option<student::Model>, ServiceError> {
        let mut state = self.inner.write().await;
        let Some(row) = state.rows.get_mut(&id) else { return Ok(None) };
        row.name = input.name;
        row.email = input.email;
        row.course = input.course;
        row.updated_at = Utc::now().into();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> Result<Option<student::Model>, ServiceError> {
        Ok(self.inner.write().await.rows.remove(&id))
    }

    async fn search_by_name(&self, needle: &str) -> Result<Vec<student::Model>, ServiceError> {
        let needle = needle.to_lowercase();
        let state = self.inner.read().await;
        Ok(state
            .rows
            .values()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_sequential_and_not_reused() -> Result<(), anyhow::Error> {
        let repo = InMemoryStudentRepository::new();
        let a = repo.insert(StudentInput::new("A")).await?;
        let b = repo.insert(StudentInput::new("B")).await?;
        assert_eq!((a.id, b.id), (1, 2));

        repo.delete(b.id).await?;
        let c = repo.insert(StudentInput::new("C")).await?;
        assert_eq!(c.id, 3);
        assert_eq!(repo.len().await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() -> Result<(), anyhow::Error> {
        let repo = InMemoryStudentRepository::new();
        for n in ["A", "B", "C"] {
            repo.insert(StudentInput::new(n)).await?;
        }
        let (rows, total) = repo.find_page(5, 2).await?;
        assert!(rows.is_empty());
        assert_eq!(total, 3);

        let (rows, total) = repo.find_page(u64::MAX, 100).await?;
        assert!(rows.is_empty());
        assert_eq!(total, 3);

        let (rows, _) = repo.find_page(1, 2).await?;
        assert_eq!(rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), vec!["C"]);
        Ok(())
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() -> Result<(), anyhow::Error> {
        let repo = InMemoryStudentRepository::new();
        repo.insert(StudentInput::new("Anna")).await?;
        repo.insert(StudentInput::new("100% Anna")).await?;
        let hits = repo.search_by_name("%").await?;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "100% Anna");
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_leaves_store_untouched() -> Result<(), anyhow::Error> {
        let repo = InMemoryStudentRepository::new();
        assert!(repo.is_empty().await);
        assert!(repo.update(1, StudentInput::new("X")).await?.is_none());
        assert!(repo.is_empty().await);
        Ok(())
    }
}
