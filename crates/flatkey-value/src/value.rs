use std::collections::{BTreeMap, HashMap};

/// A structural value: the input domain of the flattening engine.
///
/// The model is a closed sum over the kinds the traverser dispatches on.
/// Mapping keys are stringified at construction time, which removes any
/// hidden dependence on key iteration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value. Also models a nil sequence or nil mapping.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer, widened to 64 bits.
    Int(i64),
    /// Unsigned integer, widened to 64 bits.
    Uint(u64),
    /// Floating point, widened to double precision.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Single character, encoded best-effort.
    Char(char),
    /// Raw bytes, encoded best-effort.
    Bytes(Vec<u8>),
    /// A value with no concrete content at all (the unit type).
    Unit,
    /// Single-level reference. `None` is a nil reference.
    Ref(Option<Box<Value>>),
    /// Ordered sequence of values.
    Seq(Vec<Value>),
    /// Unordered key/value mapping with pre-stringified keys.
    Map(BTreeMap<String, Value>),
    /// Named-field aggregate.
    Record(Record),
}

impl Value {
    /// Returns true for the terminal nil states: `Null` and a nil reference.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Null | Value::Ref(None))
    }

    /// Dereferences exactly one reference level.
    ///
    /// Non-reference values and nil references are returned unchanged.
    pub fn deref_once(&self) -> &Value {
        match self {
            Value::Ref(Some(inner)) => inner,
            other => other,
        }
    }

    /// Wraps a value in a single-level reference.
    pub fn reference(value: impl Into<Value>) -> Value {
        Value::Ref(Some(Box::new(value.into())))
    }

    /// Constructs a nil reference.
    pub fn null_reference() -> Value {
        Value::Ref(None)
    }
}

/// Named-field aggregate with declaration-ordered, visibility-tagged fields.
///
/// The record name doubles as the concrete-type witness for transformer
/// lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub(crate) name: String,
    pub(crate) fields: Vec<Field>,
}

impl Record {
    /// Creates an empty record with the given type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a visible field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
            visible: true,
        });
        self
    }

    /// Appends a hidden field. Hidden fields are skipped by traversal and
    /// cannot be selected even by an include filter.
    pub fn hidden(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
            visible: false,
        });
        self
    }

    /// The record's type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All fields, hidden ones included, in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// One record field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name as it appears in paths.
    pub name: String,
    /// Field value.
    pub value: Value,
    /// Whether traversal may see this field.
    pub visible: bool,
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Uint(u64::from(v))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::Uint(u64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Uint(u64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String> + Ord, T: Into<Value>> From<BTreeMap<K, T>> for Value {
    fn from(entries: BTreeMap<K, T>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, T: Into<Value>> From<HashMap<K, T>> for Value {
    fn from(entries: HashMap<K, T>) -> Self {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
