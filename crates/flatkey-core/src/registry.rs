use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard};

use flatkey_value::{Record, Value};

/// Conversion function installed for one record type.
///
/// The returned fragments are already-formatted terminal text: the
/// traverser emits one entry per fragment and never recurses into them.
pub type Transformer = Arc<dyn Fn(&Record) -> Vec<String> + Send + Sync>;

/// Mapping from record type name to transformer.
///
/// This is the explicit, caller-owned form: construct one, register
/// handlers, and pass it to `flatten_with`. The process-wide default
/// behind [`register_transformer`] is retained for drop-in ergonomics
/// and is guarded by a read-mostly lock.
#[derive(Clone, Default)]
pub struct TransformerRegistry {
    handlers: HashMap<String, Transformer>,
}

impl TransformerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `convert` for records whose type name is `type_name`,
    /// overwriting any prior handler. Last registration wins.
    pub fn register<F>(&mut self, type_name: impl Into<String>, convert: F)
    where
        F: Fn(&Record) -> Vec<String> + Send + Sync + 'static,
    {
        self.handlers.insert(type_name.into(), Arc::new(convert));
    }

    /// Looks up and invokes the handler for `value`, dereferencing one
    /// reference level first. Returns `None` when the value is not a
    /// record or no handler is installed for its type name.
    pub fn resolve(&self, value: &Value) -> Option<Vec<String>> {
        match value.deref_once() {
            Value::Record(record) => self.handlers.get(record.name()).map(|h| h(record)),
            _ => None,
        }
    }

    /// True when no transformer is installed.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for TransformerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("TransformerRegistry")
            .field("types", &names)
            .finish()
    }
}

static DEFAULT_REGISTRY: OnceLock<RwLock<TransformerRegistry>> = OnceLock::new();

fn default_registry() -> &'static RwLock<TransformerRegistry> {
    DEFAULT_REGISTRY.get_or_init(|| RwLock::new(TransformerRegistry::new()))
}

/// Installs `convert` in the process-wide default registry.
///
/// The default registry lives for the remainder of the process; there is
/// no unregister operation. Registration and in-flight flattens are
/// serialized through the lock, so concurrent use is safe, but a
/// registration only affects flattens that start after it.
pub fn register_transformer<F>(type_name: impl Into<String>, convert: F)
where
    F: Fn(&Record) -> Vec<String> + Send + Sync + 'static,
{
    let mut guard = match default_registry().write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    guard.register(type_name, convert);
}

/// Read guard over the default registry, held for the duration of one
/// flatten call. A poisoned lock is usable: registration never leaves
/// the map half-written.
pub(crate) fn default_registry_snapshot() -> RwLockReadGuard<'static, TransformerRegistry> {
    match default_registry().read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
