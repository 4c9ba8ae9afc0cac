//! Typed single-shot fetch-and-decode client.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{ProviderError, StoreError};
use crate::traits::{DatabaseTarget, Store};

/// Reads one value per request and decodes it into `U`.
///
/// The provider is generic over the descriptor type `T`, the record type
/// `U`, and the injected store `S`, so one implementation serves every
/// record kind. It keeps no state between requests.
///
/// There is no timeout and no retry. If the store never answers, the request
/// never completes.
///
/// # Example
///
/// ```
/// use rtdb_core::{DatabaseProvider, MemoryStore, UserRecord, UserTarget};
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = MemoryStore::new(json!({ "users": { "1": { "first_name": "Ada" } } }));
/// let provider = DatabaseProvider::<UserTarget, UserRecord, _>::new(store);
///
/// let user = provider.fetch(&UserTarget::GetDocument { id: 1 }).await.unwrap();
/// assert_eq!(user.first_name.as_deref(), Some("Ada"));
/// # }
/// ```
pub struct DatabaseProvider<T, U, S: ?Sized> {
    store: Arc<S>,
    _marker: PhantomData<fn(T) -> U>,
}

impl<T, U, S> DatabaseProvider<T, U, S>
where
    T: DatabaseTarget,
    U: DeserializeOwned,
    S: Store + ?Sized,
{
    /// Create a provider that owns its store.
    pub fn new(store: S) -> Self
    where
        S: Sized,
    {
        Self::with_shared(Arc::new(store))
    }

    /// Create a provider over a store shared with other providers.
    pub fn with_shared(store: Arc<S>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read and decode the value for `target`.
    pub async fn fetch(&self, target: &T) -> Result<U, ProviderError> {
        read_and_decode(&*self.store, target.path()).await
    }

    /// Read and decode the value for `target`, then hand the outcome to
    /// `on_complete`.
    ///
    /// The read runs on a spawned task and this returns immediately.
    /// `on_complete` runs exactly once when the store answers.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn request<F>(&self, target: T, on_complete: F)
    where
        U: Send + 'static,
        S: 'static,
        F: FnOnce(Result<U, ProviderError>) + Send + 'static,
    {
        let path = target.path();
        let store = Arc::clone(&self.store);

        tokio::spawn(async move {
            let result = read_and_decode(&*store, path).await;
            on_complete(result);
        });
    }
}

impl<T, U, S: ?Sized> Clone for DatabaseProvider<T, U, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _marker: PhantomData,
        }
    }
}

impl<T, U, S: fmt::Debug + ?Sized> fmt::Debug for DatabaseProvider<T, U, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseProvider")
            .field("store", &self.store)
            .finish()
    }
}

#[instrument(skip(store))]
async fn read_and_decode<U, S>(store: &S, path: String) -> Result<U, ProviderError>
where
    U: DeserializeOwned,
    S: Store + ?Sized,
{
    debug!("Requesting value");
    let response = store.read_once(&path).await;
    decode_response(path, response)
}

/// Map a store response onto the provider outcome.
///
/// A missing value, a `null` value and a store fault all become
/// [`ProviderError::NoData`]; a value that does not fit `U` becomes
/// [`ProviderError::Decode`].
pub fn decode_response<U: DeserializeOwned>(
    path: String,
    response: Result<Option<Value>, StoreError>,
) -> Result<U, ProviderError> {
    let value = match response {
        Ok(Some(Value::Null)) | Ok(None) => {
            debug!(%path, "No value at path");
            return Err(ProviderError::NoData { path, source: None });
        }
        Ok(Some(value)) => value,
        Err(e) => {
            warn!(%path, error = %e, "Store read failed");
            return Err(ProviderError::NoData {
                path,
                source: Some(e),
            });
        }
    };

    serde_json::from_value(value).map_err(|source| ProviderError::Decode { path, source })
}
