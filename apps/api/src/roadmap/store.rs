use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::models::roadmap::Roadmap;

pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);
pub const DEFAULT_CAPACITY: usize = 10_000;

struct Entry {
    roadmap: Roadmap,
    touched_at: Instant,
}

/// Process-lifetime roadmap storage. Nothing survives a restart.
///
/// Entries untouched for `ttl` expire. Inserting past `capacity` evicts the
/// least recently touched entry.
#[derive(Clone)]
pub struct RoadmapStore {
    inner: Arc<RwLock<HashMap<Uuid, Entry>>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for RoadmapStore {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}

impl RoadmapStore {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            inner: Arc::default(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    pub async fn insert(&self, roadmap: Roadmap) -> Uuid {
        let id = Uuid::new_v4();
        let now = Instant::now();
        let mut guard = self.inner.write().await;

        let before = guard.len();
        guard.retain(|_, entry| now.duration_since(entry.touched_at) < self.ttl);
        while guard.len() >= self.capacity {
            let oldest = guard
                .iter()
                .min_by_key(|(_, entry)| entry.touched_at)
                .map(|(id, _)| *id);
            match oldest {
                Some(oldest) => guard.remove(&oldest),
                None => break,
            };
        }
        let evicted = before - guard.len();
        if evicted > 0 {
            debug!(evicted, "Evicted stale roadmaps");
        }

        guard.insert(id, Entry { roadmap, touched_at: now });
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<Roadmap> {
        self.update(id, |roadmap| roadmap.clone()).await
    }

    /// Runs `f` against the stored roadmap under the write lock.
    /// Returns `None` when `id` is unknown or expired.
    pub async fn update<T>(&self, id: Uuid, f: impl FnOnce(&mut Roadmap) -> T) -> Option<T> {
        let now = Instant::now();
        let mut guard = self.inner.write().await;
        let entry = guard.get_mut(&id)?;
        if now.duration_since(entry.touched_at) >= self.ttl {
            guard.remove(&id);
            return None;
        }
        entry.touched_at = now;
        Some(f(&mut entry.roadmap))
    }

    pub async fn remove(&self, id: Uuid) -> Option<Roadmap> {
        self.inner.write().await.remove(&id).map(|entry| entry.roadmap)
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::transformer::fallback_roadmap;

    #[tokio::test]
    async fn test_insert_update_remove() {
        let store = RoadmapStore::default();
        let id = store.insert(fallback_roadmap()).await;

        let progress = store
            .update(id, |r| {
                r.toggle_section_completed(1).map(|_| ())?;
                Ok::<_, crate::roadmap::state::RoadmapError>(r.progress())
            })
            .await;
        assert_eq!(progress, Some(Ok(100)));
        assert!(store.get(id).await.unwrap().sections[0].completed);

        assert!(store.remove(id).await.is_some());
        assert!(store.get(id).await.is_none());
        assert!(store.update(id, |r| r.progress()).await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let store = RoadmapStore::default();
        let other = store.clone();
        let id = store.insert(fallback_roadmap()).await;
        assert!(other.get(id).await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_capacity_evicts_least_recently_touched() {
        let store = RoadmapStore::new(DEFAULT_TTL, 3);
        let first = store.insert(fallback_roadmap()).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        let second = store.insert(fallback_roadmap()).await;
        tokio::time::advance(Duration::from_secs(1)).await;
        let third = store.insert(fallback_roadmap()).await;
        tokio::time::advance(Duration::from_secs(1)).await;

        // Reading the first entry makes the second the oldest.
        assert!(store.get(first).await.is_some());
        tokio::time::advance(Duration::from_secs(1)).await;
        let fourth = store.insert(fallback_roadmap()).await;

        assert_eq!(store.len().await, 3);
        assert!(store.get(second).await.is_none());
        for id in [first, third, fourth] {
            assert!(store.get(id).await.is_some());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_entries_expire() {
        let store = RoadmapStore::new(Duration::from_secs(60), DEFAULT_CAPACITY);
        let idle = store.insert(fallback_roadmap()).await;
        let active = store.insert(fallback_roadmap()).await;

        tokio::time::advance(Duration::from_secs(45)).await;
        assert!(store.get(active).await.is_some());
        tokio::time::advance(Duration::from_secs(30)).await;

        assert!(store.get(idle).await.is_none());
        assert!(store.update(idle, |r| r.progress()).await.is_none());
        assert!(store.get(active).await.is_some());

        for _ in 0..500 {
            store.insert(fallback_roadmap()).await;
        }
        tokio::time::advance(Duration::from_secs(61)).await;
        store.insert(fallback_roadmap()).await;
        assert_eq!(store.len().await, 1);
    }
}
