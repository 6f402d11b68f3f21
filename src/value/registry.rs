//! Struct encode registry.

use crate::ser::Encode;
use crate::sink::Sink;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

/// Erased encode function for one registered struct type.
pub(crate) type EncodeFn = fn(&(dyn Any + Send + Sync), &mut Sink);

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Type-id-keyed table mapping a struct type to its encode function.
///
/// The table is append-only and idempotent: registering a type that is
/// already present leaves its entry unchanged. The process-wide instance
/// behind [`Registry::global`] starts empty and is populated lazily the
/// first time each struct type is wrapped in a [`Value`](crate::Value);
/// it is the only global mutable state in the crate.
pub struct Registry {
    entries: RwLock<HashMap<TypeId, EncodeFn>>,
}

impl Registry {
    #[inline]
    pub fn new() -> Registry {
        Registry {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry.
    #[inline]
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Registers `T`'s encode function. Idempotent; concurrent first-use
    /// registration of the same type is safe and a losing racer's entry is
    /// discarded.
    pub fn register<T: Encode + Send + Sync + 'static>(&self) {
        let type_id = TypeId::of::<T>();
        {
            let entries = self.entries.read().expect("registry lock poisoned");
            if entries.contains_key(&type_id) {
                return;
            }
        }
        let mut entries = self.entries.write().expect("registry lock poisoned");
        entries.entry(type_id).or_insert(encode_erased::<T>);
    }

    #[inline]
    pub fn contains<T: 'static>(&self) -> bool {
        let entries = self.entries.read().expect("registry lock poisoned");
        entries.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        let entries = self.entries.read().expect("registry lock poisoned");
        entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encodes an erased struct payload through its registered function.
    ///
    /// # Panics
    ///
    /// Panics if `type_id` was never registered. Every construction path
    /// registers before use, so a miss is an internal-consistency violation,
    /// not a user-facing error.
    pub(crate) fn encode_by_id(
        &self,
        type_id: TypeId,
        data: &(dyn Any + Send + Sync),
        sink: &mut Sink,
    ) {
        let f = {
            let entries = self.entries.read().expect("registry lock poisoned");
            entries.get(&type_id).copied()
        };
        match f {
            Some(f) => f(data, sink),
            None => panic!("no encode function registered for struct value"),
        }
    }
}

impl Default for Registry {
    #[inline]
    fn default() -> Registry {
        Registry::new()
    }
}

fn encode_erased<T: Encode + 'static>(data: &(dyn Any + Send + Sync), sink: &mut Sink) {
    let value = data
        .downcast_ref::<T>()
        .expect("registry entry invoked with a mismatched payload type");
    value.encode(sink);
}
