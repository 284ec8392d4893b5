//! Component lifetimes for async work.
//!
//! A component owns a [`Lifetime`] and hands a [`LifetimeToken`] to every async
//! operation it starts. Results are applied only while the token is still
//! current: dropping or ending the lifetime, or starting a new generation,
//! invalidates every outstanding token.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    ended: AtomicBool,
    generation: AtomicU64,
}

/// Owner side; ends on drop.
#[derive(Debug, Default)]
pub struct Lifetime {
    inner: Arc<Inner>,
}

/// Handle carried by an in-flight operation.
#[derive(Debug, Clone)]
pub struct LifetimeToken {
    inner: Arc<Inner>,
    generation: u64,
}

impl Lifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for the current generation.
    pub fn token(&self) -> LifetimeToken {
        LifetimeToken {
            inner: self.inner.clone(),
            generation: self.inner.generation.load(Ordering::Acquire),
        }
    }

    /// Invalidate outstanding tokens while keeping the component alive.
    pub fn renew(&self) -> LifetimeToken {
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
        self.token()
    }

    /// Invalidate every token for good.
    pub fn end(&self) {
        self.inner.ended.store(true, Ordering::Release);
    }

    pub fn is_ended(&self) -> bool {
        self.inner.ended.load(Ordering::Acquire)
    }
}

impl Drop for Lifetime {
    fn drop(&mut self) {
        self.end();
    }
}

impl LifetimeToken {
    pub fn is_current(&self) -> bool {
        !self.inner.ended.load(Ordering::Acquire)
            && self.inner.generation.load(Ordering::Acquire) == self.generation
    }
}
