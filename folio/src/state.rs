use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared, observable state cell.
///
/// Components own their state, but some of it is interesting outside the
/// component (the host, tests). `State<T>` is a cheap-to-clone handle: the
/// component keeps one clone and hands another out before it is mounted.
/// Every write bumps a version number so observers can tell whether
/// anything changed since they last looked.
///
/// # Example
///
/// ```ignore
/// let status = State::new(Status::Idle);
/// let observer = status.clone();
///
/// runtime.mount(Form::new(status));
/// let seen = observer.version();
/// runtime.dispatch(Event::submit("form"));
/// assert!(observer.changed_since(seen));
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    version: Arc<AtomicU64>,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    // A panic while holding the lock leaves the value usable.
    fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.version.fetch_add(1, Ordering::SeqCst);
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.read().clone()
    }

    /// Read the value through a closure without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.read())
    }

    pub fn set(&self, value: T) {
        *self.write() = value;
    }

    /// Store `value`, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        std::mem::replace(&mut *self.write(), value)
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.write());
    }

    /// Number of writes so far.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    pub fn changed_since(&self, version: u64) -> bool {
        self.version() != version
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            version: Arc::clone(&self.version),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
