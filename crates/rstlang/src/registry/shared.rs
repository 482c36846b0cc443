//! Copy-on-write registry publication.
//!
//! Readers take an `Arc` snapshot and resolve against it without holding any
//! lock. Registration builds a new registry off to the side and swaps the
//! published pointer in one step.

use std::sync::{Arc, PoisonError, RwLock};

use crate::registry::error::RegisterError;
use crate::registry::mapping::LanguageMapping;
use crate::registry::store::LanguageRegistry;

/// A [`LanguageRegistry`] that can gain languages while other threads read it.
///
/// # Example
///
/// ```
/// use rstlang::{LanguageMapping, LanguageRegistry, NameKind, SharedRegistry};
///
/// let shared = SharedRegistry::new(LanguageRegistry::with_builtin_languages());
/// let before = shared.snapshot();
///
/// let mut german = LanguageMapping::new();
/// german.insert(NameKind::Directive, "hinweis", "note");
/// shared.register_language("de", german).unwrap();
///
/// // Snapshots taken earlier are unaffected.
/// assert!(!before.contains_language("de"));
/// assert_eq!(shared.snapshot().resolve_directive("de", "hinweis").unwrap(), "note");
/// ```
#[derive(Debug, Default)]
pub struct SharedRegistry {
    current: RwLock<Arc<LanguageRegistry>>,
}

impl SharedRegistry {
    /// Publish an initial registry.
    pub fn new(registry: LanguageRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    /// The registry as currently published.
    pub fn snapshot(&self) -> Arc<LanguageRegistry> {
        // The guarded value is only ever replaced whole, so a poisoned lock
        // still holds a consistent registry.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Register a language and publish the result.
    ///
    /// Concurrent registrations are serialized. On error the published
    /// registry is left untouched.
    pub fn register_language(
        &self,
        language: &str,
        mapping: LanguageMapping,
    ) -> Result<(), RegisterError> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut next = LanguageRegistry::clone(&guard);
        next.register_language(language, mapping)?;
        *guard = Arc::new(next);
        Ok(())
    }
}

impl From<LanguageRegistry> for SharedRegistry {
    fn from(registry: LanguageRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::NameKind;

    fn poison(shared: &SharedRegistry) {
        let result = thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = shared.current.write().unwrap();
                    panic!("writer died holding the lock");
                })
                .join()
        });
        assert!(result.is_err());
        assert!(shared.current.is_poisoned());
    }

    #[test]
    fn snapshot_survives_poisoned_lock() {
        let shared = SharedRegistry::new(LanguageRegistry::with_builtin_languages());
        poison(&shared);

        assert_eq!(shared.snapshot().resolve_directive("en", "note").unwrap(), "note");
    }

    #[test]
    fn registration_survives_poisoned_lock() {
        let shared = SharedRegistry::new(LanguageRegistry::with_builtin_languages());
        poison(&shared);

        let mut german = LanguageMapping::new();
        german.insert(NameKind::Directive, "hinweis", "note");
        shared.register_language("de", german).unwrap();

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.resolve_directive("de", "hinweis").unwrap(), "note");
        assert_eq!(snapshot.resolve_directive("en", "note").unwrap(), "note");
    }
}
