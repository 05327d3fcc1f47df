//! Interning for pattern literals.
//!
//! Compiled queries repeat the same literal sub-patterns constantly
//! (service prefixes, common suffixes), so matcher construction routes
//! every literal through a process-wide interner. Matchers over the same
//! literal then share one allocation, which also makes structural
//! deduplication by downstream planners cheap.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

static LITERALS: Lazy<LiteralInterner> = Lazy::new(LiteralInterner::new);

/// Thread-safe `Arc<str>` interner.
pub struct LiteralInterner {
    literals: RwLock<HashMap<String, Arc<str>>>,
}

impl LiteralInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self {
            literals: RwLock::new(HashMap::new()),
        }
    }

    /// Intern a literal, returning a shared handle.
    pub fn intern(&self, literal: &str) -> Arc<str> {
        if let Ok(literals) = self.literals.read() {
            if let Some(shared) = literals.get(literal) {
                return Arc::clone(shared);
            }
        }

        let mut literals = match self.literals.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("literal interner lock was poisoned, recovering");
                poisoned.into_inner()
            }
        };

        // Another thread may have inserted while we waited on the write lock.
        if let Some(shared) = literals.get(literal) {
            return Arc::clone(shared);
        }

        let shared: Arc<str> = Arc::from(literal);
        literals.insert(literal.to_string(), Arc::clone(&shared));
        shared
    }

    /// Number of distinct literals currently interned.
    pub fn len(&self) -> usize {
        let literals = match self.literals.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("literal interner lock was poisoned, recovering");
                poisoned.into_inner()
            }
        };
        literals.len()
    }

    /// True when no literal has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LiteralInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Intern a pattern literal in the process-wide interner.
pub fn intern_literal(literal: &str) -> Arc<str> {
    LITERALS.intern(literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interned_literals_share_storage() {
        let interner = LiteralInterner::new();
        let a = interner.intern("nodejs.cpuUsage");
        let b = interner.intern("nodejs.cpuUsage");
        let c = interner.intern("jvm.gc.pause");

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(&*a, "nodejs.cpuUsage");
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_global_interner_dedup() {
        let a = intern_literal("global.dedup.check");
        let b = intern_literal("global.dedup.check");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_poison_recovery() {
        use std::thread;

        let interner = Arc::new(LiteralInterner::new());
        let poisoner = Arc::clone(&interner);
        let handle = thread::spawn(move || {
            let _guard = poisoner.literals.write().unwrap();
            panic!("poison the lock");
        });
        let _ = handle.join();

        let shared = interner.intern("survives.poison");
        assert_eq!(&*shared, "survives.poison");
        assert_eq!(interner.len(), 1);
    }
}
