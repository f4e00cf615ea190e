use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// In-memory table of records keyed by an auto-incremented id.
///
/// Ids start at 1 and are never reused. Cloning produces another handle to the same table.
#[derive(Debug)]
pub struct Table<T> {
    inner: Arc<Mutex<TableInner<T>>>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct TableInner<T> {
    next_id: i64,
    records: BTreeMap<i64, T>,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(TableInner {
                next_id: 1,
                records: BTreeMap::new(),
            })),
        }
    }

    // Records are only mutated after validation, so a poisoned lock still holds consistent data
    fn lock(&self) -> MutexGuard<'_, TableInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Assigns the next id, builds the record from it and stores it
    pub fn insert_with(&self, make: impl FnOnce(i64) -> T) -> T {
        let mut table = self.lock();
        let id = table.next_id;
        table.next_id += 1;
        let record = make(id);
        table.records.insert(id, record.clone());
        record
    }

    /// Applies `change` to the record with given id, returns updated copy or None if there is no such record
    pub fn update(&self, id: i64, change: impl FnOnce(&mut T)) -> Option<T> {
        let mut table = self.lock();
        let record = table.records.get_mut(&id)?;
        change(record);
        Some(record.clone())
    }

    pub fn contains(&self, id: i64) -> bool {
        self.lock().records.contains_key(&id)
    }

    /// All records ordered by id
    pub fn list(&self) -> Vec<T> {
        self.lock().records.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let table = Table::<(i64, &str)>::new();
        let a = table.insert_with(|id| (id, "a"));
        let b = table.insert_with(|id| (id, "b"));
        assert_eq!(a.0, 1);
        assert_eq!(b.0, 2);
        assert_eq!(table.list(), vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_update() {
        let table = Table::<(i64, String)>::new();
        table.insert_with(|id| (id, "first".to_string()));

        let record = table.update(1, |r| r.1 = "second".to_string()).unwrap();
        assert_eq!(record.1, "second");
        assert_eq!(table.list(), vec![record]);
        assert!(table.update(2, |_| ()).is_none());
        assert!(table.contains(1));
        assert!(!table.contains(2));
    }

    #[test]
    fn test_concurrent_inserts() {
        let table = Table::<i64>::new();
        let handles = (0..8)
            .map(|_| {
                let table = table.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        table.insert_with(|id| id);
                    }
                })
            })
            .collect::<Vec<_>>();
        for h in handles {
            h.join().unwrap();
        }

        let ids = table.list();
        assert_eq!(ids.len(), 800);
        assert_eq!(ids, (1..=800).collect::<Vec<_>>());
    }
}
