//! In-memory [`UserStore`] for router and schema tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{DbError, UserStore};
use crate::models::{NewUser, PageRequest, User};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    fail: AtomicBool,
    fail_count: AtomicBool,
}

impl MemoryStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            fail: AtomicBool::new(false),
            fail_count: AtomicBool::new(false),
        }
    }

    /// Store whose every call errors like a dropped connection.
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail.store(true, Ordering::SeqCst);
        store
    }

    /// Store whose reads succeed but whose `count` errors.
    pub fn failing_count(users: Vec<User>) -> Self {
        let store = Self::with_users(users);
        store.fail_count.store(true, Ordering::SeqCst);
        store
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), DbError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(DbError::Sqlx(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }

    fn sorted(&self) -> Vec<User> {
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by_key(|u| u.id);
        users
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn ping(&self) -> Result<(), DbError> {
        self.check()
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<User>, DbError> {
        self.check()?;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok(self.sorted().into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self) -> Result<i64, DbError> {
        self.check()?;
        if self.fail_count.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::RowNotFound));
        }
        Ok(i64::try_from(self.len()).unwrap_or(i64::MAX))
    }

    async fn list_all(&self) -> Result<Vec<User>, DbError> {
        self.check()?;
        Ok(self.sorted())
    }

    async fn get(&self, id: i32) -> Result<User, DbError> {
        self.check()?;
        self.sorted()
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| DbError::NotFound {
                resource: "user",
                id: id.to_string(),
            })
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, DbError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
        };
        users.push(user.clone());
        Ok(user)
    }
}
