//! Task spawning abstractions for the async runtime.
//! **Note**: at the moment, these are simple functions with baked-in tokio-based
//! implementation.

pub use impls::{JoinHandle, spawn, yield_now};

#[cfg(feature = "tokio")]
mod impls {
    use std::future::Future;

    pub type JoinHandle<T> = tokio::task::JoinHandle<T>;

    /// Spawns `future` on the current runtime.
    ///
    /// Panics when called outside of a tokio runtime context.
    pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        tokio::task::spawn(future)
    }

    /// Hands control back to the scheduler; the calling task is re-queued
    /// behind other ready tasks.
    pub async fn yield_now() {
        tokio::task::yield_now().await
    }
}
