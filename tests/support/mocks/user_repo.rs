// tests/support/mocks/user_repo.rs
use async_trait::async_trait;
use attendance_audit::domain::errors::{DomainError, DomainResult};
use attendance_audit::domain::user::{NewUser, User, UserId, UserRepository, Username};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().expect("user repo poisoned").clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.lock().expect("user repo poisoned").len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().expect("user repo poisoned");
        push_user(&mut users, new_user)
    }

    async fn insert_if_empty(&self, new_user: NewUser) -> DomainResult<Option<User>> {
        let mut users = self.users.lock().expect("user repo poisoned");
        if !users.is_empty() {
            return Ok(None);
        }
        push_user(&mut users, new_user).map(Some)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .snapshot()
            .into_iter()
            .find(|u| &u.username == username))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.snapshot().into_iter().find(|u| u.id == id))
    }
}

fn push_user(users: &mut Vec<User>, new_user: NewUser) -> DomainResult<User> {
    if users.iter().any(|u| u.username == new_user.username) {
        return Err(DomainError::Conflict("username already exists".into()));
    }
    if users.iter().any(|u| u.email == new_user.email) {
        return Err(DomainError::Conflict("email already exists".into()));
    }

    let next_id = users.iter().map(|u| i64::from(u.id)).max().unwrap_or(0) + 1;
    let user = User {
        id: UserId::new(next_id)?,
        username: new_user.username,
        email: new_user.email,
        password_hash: new_user.password_hash,
        role: new_user.role,
        created_at: new_user.created_at,
    };
    users.push(user.clone());
    Ok(user)
}

/// Lookups fail; used to check that the recorder still writes without a
/// snapshot.
#[derive(Debug, Default)]
pub struct FailingUserRepo;

#[async_trait]
impl UserRepository for FailingUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Err(DomainError::persistence("connection refused"))
    }

    async fn insert(&self, _new_user: NewUser) -> DomainResult<User> {
        Err(DomainError::persistence("connection refused"))
    }

    async fn insert_if_empty(&self, _new_user: NewUser) -> DomainResult<Option<User>> {
        Err(DomainError::persistence("connection refused"))
    }

    async fn find_by_username(&self, _username: &Username) -> DomainResult<Option<User>> {
        Err(DomainError::persistence("connection refused"))
    }

    async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
        Err(DomainError::persistence("connection refused"))
    }
}

/// The first `find_by_id` stalls for `delay`; later calls answer at once.
#[derive(Debug)]
pub struct SlowFirstLookupUserRepo {
    pub delay: Duration,
    pub inner: InMemoryUserRepo,
    stalled: AtomicBool,
}

impl SlowFirstLookupUserRepo {
    pub fn new(delay: Duration, users: Vec<User>) -> Self {
        Self {
            delay,
            inner: InMemoryUserRepo::with_users(users),
            stalled: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl UserRepository for SlowFirstLookupUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        self.inner.count().await
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        self.inner.insert(new_user).await
    }

    async fn insert_if_empty(&self, new_user: NewUser) -> DomainResult<Option<User>> {
        self.inner.insert_if_empty(new_user).await
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        self.inner.find_by_username(username).await
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        if !self.stalled.swap(true, Ordering::SeqCst) {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.find_by_id(id).await
    }
}
