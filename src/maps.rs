//! Map SDK configuration and lazily-initialized SDK handles

use std::future::Future;

use tokio::sync::OnceCell;

/// Build the mapping SDK script URL for the configured API key.
///
/// The key never reaches the client in any other form.
#[must_use]
pub fn script_url(api_key: &str) -> String {
    format!("https://maps.googleapis.com/maps/api/js?key={api_key}&v=beta&libraries=maps,marker")
}

/// A value resolved asynchronously at most once and cached.
///
/// SDK constructor handles used to live in hidden module-level
/// singletons; here the handle is an explicit dependency that the owner
/// passes to whoever needs the constructor. Concurrent first-time
/// callers are safe: only one loader result is ever stored.
pub struct LazyHandle<T> {
    cell: OnceCell<T>,
}

impl<T> LazyHandle<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cached value, running `load` first if this is the
    /// first call.
    pub async fn get_or_load<E, F, Fut>(&self, load: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cell.get_or_try_init(load).await
    }

    /// The cached value, if initialization already happened.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }
}

impl<T> Default for LazyHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}
