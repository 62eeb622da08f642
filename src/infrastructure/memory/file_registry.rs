//! In-Memory File Registry Implementation

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::application::ports::{FileMeta, FileRegistryPort, RegistryError, RegistryStats, StoredFile};

/// 索引和淘汰顺序放在同一把锁下，保证两者一致
#[derive(Default)]
struct RegistryInner {
    files: HashMap<String, StoredFile>,
    /// 创建顺序，队首最旧
    order: VecDeque<String>,
}

impl RegistryInner {
    fn detach(&mut self, id: &str) -> Option<StoredFile> {
        let removed = self.files.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }
}

/// 内存文件存储，超过容量时淘汰最早创建的文件
pub struct InMemoryFileRegistry {
    inner: Mutex<RegistryInner>,
    max_files: usize,
}

impl InMemoryFileRegistry {
    /// `max_files` 至少为 1
    pub fn new(max_files: usize) -> Self {
        Self {
            inner: Mutex::new(RegistryInner::default()),
            max_files: max_files.max(1),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        // 持锁期间不会 panic，中毒时直接沿用内部数据
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FileRegistryPort for InMemoryFileRegistry {
    fn put(&self, id: &str, bytes: Vec<u8>, name: &str) {
        let file = StoredFile::new(bytes, name);
        let size = file.size;

        let mut inner = self.lock();
        inner.detach(id);
        inner.files.insert(id.to_string(), file);
        inner.order.push_back(id.to_string());

        while inner.order.len() > self.max_files {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            inner.files.remove(&oldest);
            tracing::info!(file_id = %oldest, "File evicted from registry");
        }

        tracing::debug!(file_id = %id, name = %name, size = size, "File stored");
    }

    fn get(&self, id: &str) -> Result<StoredFile, RegistryError> {
        self.lock()
            .files
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    fn contains(&self, id: &str) -> bool {
        self.lock().files.contains_key(id)
    }

    fn remove(&self, id: &str) -> bool {
        let removed = self.lock().detach(id).is_some();
        if removed {
            tracing::debug!(file_id = %id, "File removed");
        }
        removed
    }

    fn list(&self) -> Vec<FileMeta> {
        let inner = self.lock();
        inner
            .order
            .iter()
            .rev()
            .filter_map(|id| {
                inner.files.get(id).map(|file| FileMeta {
                    id: id.clone(),
                    name: file.name.clone(),
                    size: file.size,
                    created_at: file.created_at,
                })
            })
            .collect()
    }

    fn clear(&self) {
        let mut inner = self.lock();
        let count = inner.files.len();
        inner.files.clear();
        inner.order.clear();
        tracing::info!(count = count, "File registry cleared");
    }

    fn stats(&self) -> RegistryStats {
        let inner = self.lock();
        let created = |id: Option<&String>| {
            id.and_then(|id| inner.files.get(id)).map(|file| file.created_at)
        };

        RegistryStats {
            count: inner.files.len(),
            total_bytes: inner.files.values().map(|file| file.size).sum(),
            oldest_at: created(inner.order.front()),
            newest_at: created(inner.order.back()),
            max_files: self.max_files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let registry = InMemoryFileRegistry::new(10);
        registry.put("a", vec![1, 2, 3], "a.idml");

        let file = registry.get("a").unwrap();
        assert_eq!(file.name, "a.idml");
        assert_eq!(file.size, 3);
        assert_eq!(*file.bytes, vec![1, 2, 3]);
        assert!(registry.contains("a"));

        assert!(registry.remove("a"));
        assert!(!registry.remove("a"));
        assert!(matches!(registry.get("a"), Err(RegistryError::NotFound(_))));
    }

    #[test]
    fn test_evicts_oldest_over_capacity() {
        let registry = InMemoryFileRegistry::new(2);
        registry.put("a", vec![1], "a.idml");
        registry.put("b", vec![2], "b.idml");
        registry.put("c", vec![3], "c.idml");

        assert!(!registry.contains("a"));
        assert!(registry.contains("b"));
        assert!(registry.contains("c"));
        assert_eq!(registry.stats().count, 2);
    }

    #[test]
    fn test_reput_makes_entry_newest() {
        let registry = InMemoryFileRegistry::new(2);
        registry.put("a", vec![1], "a.idml");
        registry.put("b", vec![2], "b.idml");
        registry.put("a", vec![9, 9], "a2.idml");
        registry.put("c", vec![3], "c.idml");

        assert!(registry.contains("a"));
        assert!(!registry.contains("b"));
        assert_eq!(registry.get("a").unwrap().name, "a2.idml");
    }

    #[test]
    fn test_list_newest_first_and_stats() {
        let registry = InMemoryFileRegistry::new(5);
        assert_eq!(registry.stats().oldest_at, None);

        registry.put("a", vec![0; 4], "a.idml");
        registry.put("b", vec![0; 6], "b.idml");

        let ids: Vec<String> = registry.list().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["b", "a"]);

        let stats = registry.stats();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_bytes, 10);
        assert_eq!(stats.max_files, 5);
        assert!(stats.oldest_at <= stats.newest_at);

        registry.clear();
        assert!(registry.list().is_empty());
        assert_eq!(registry.stats().total_bytes, 0);
    }

    #[test]
    fn test_capacity_floor() {
        let registry = InMemoryFileRegistry::new(0);
        registry.put("a", vec![1], "a.idml");
        assert!(registry.contains("a"));
        assert_eq!(registry.stats().max_files, 1);
    }

    #[test]
    fn test_concurrent_puts() {
        let registry = Arc::new(InMemoryFileRegistry::new(8));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        registry.put(&format!("{}-{}", t, i), vec![0; 2], "x.idml");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = registry.stats();
        assert_eq!(stats.count, 8);
        assert_eq!(registry.list().len(), 8);
        assert_eq!(stats.total_bytes, 16);
    }
}
