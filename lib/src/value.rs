use std::{
    collections::HashMap,
    fmt::{self, Debug, Display},
    sync::{Arc, Mutex, PoisonError},
    time::{SystemTime, UNIX_EPOCH},
};

/// A dynamically typed value, the input every kind check classifies.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Symbol(Arc<str>),

    Array(Vec<Self>),
    Object(HashMap<String, Self>),
    Arguments(Vec<Self>),

    Function(Arc<dyn Call>),
    GeneratorFunction(Arc<dyn Call>),
    Generator(Arc<dyn Call>),

    Buffer(Vec<u8>),
    Date(SystemTime),
    Error(String),
    RegExp(String),
    Promise(Arc<Mutex<Option<Self>>>),

    Map(Vec<(Self, Self)>),
    Set(Vec<Self>),
    WeakMap(Vec<(Self, Self)>),
    WeakSet(Vec<Self>),
    TypedArray(TypedArray),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedArray {
    Int8(Vec<i8>),
    Uint8(Vec<u8>),
    Uint8Clamped(Vec<u8>),
    Int16(Vec<i16>),
    Uint16(Vec<u16>),
    Int32(Vec<i32>),
    Uint32(Vec<u32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl TypedArray {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int8(_) => "int8array",
            Self::Uint8(_) => "uint8array",
            Self::Uint8Clamped(_) => "uint8clampedarray",
            Self::Int16(_) => "int16array",
            Self::Uint16(_) => "uint16array",
            Self::Int32(_) => "int32array",
            Self::Uint32(_) => "uint32array",
            Self::Float32(_) => "float32array",
            Self::Float64(_) => "float64array",
        }
    }

    fn items(&self) -> Vec<String> {
        fn strings<T: Copy + Into<f64>>(items: &[T]) -> Vec<String> {
            items.iter().map(|n| format_number((*n).into())).collect()
        }
        match self {
            Self::Int8(items) => strings(items),
            Self::Uint8(items) | Self::Uint8Clamped(items) => strings(items),
            Self::Int16(items) => strings(items),
            Self::Uint16(items) => strings(items),
            Self::Int32(items) => strings(items),
            Self::Uint32(items) => strings(items),
            Self::Float32(items) => strings(items),
            Self::Float64(items) => strings(items),
        }
    }
}

/// Anything that can be invoked from a [`Value`].
///
/// Generators use the same protocol: each call resumes them and yields the
/// next item, or [`Value::Undefined`] once exhausted.
pub trait Call: Send + Sync {
    fn call(&self, args: Vec<Value>) -> Value;
}

impl<F> Call for F
where
    F: Fn(Vec<Value>) -> Value + Send + Sync,
{
    fn call(&self, args: Vec<Value>) -> Value {
        self(args)
    }
}

struct Resume<I>(Mutex<I>);

impl<I> Call for Resume<I>
where
    I: Iterator<Item = Value> + Send,
{
    fn call(&self, _: Vec<Value>) -> Value {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next()
            .unwrap_or_default()
    }
}

impl Value {
    pub fn function(function: impl Fn(Vec<Value>) -> Value + Send + Sync + 'static) -> Self {
        Self::Function(Arc::new(function))
    }
    pub fn generator_function(
        function: impl Fn(Vec<Value>) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self::GeneratorFunction(Arc::new(function))
    }
    pub fn generator<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'static,
    {
        Self::Generator(Arc::new(Resume(Mutex::new(items.into_iter()))))
    }
    pub fn symbol(description: impl Into<Arc<str>>) -> Self {
        Self::Symbol(description.into())
    }
    pub fn object<K: Into<String>, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Buffer(bytes.into())
    }
    pub fn promise() -> Self {
        Self::Promise(Arc::new(Mutex::new(None)))
    }
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
    pub fn regexp(source: impl Into<String>) -> Self {
        Self::RegExp(source.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Arguments(_) => "arguments",
            Value::Function(_) => "function",
            Value::GeneratorFunction(_) => "generatorfunction",
            Value::Generator(_) => "generator",
            Value::Buffer(_) => "buffer",
            Value::Date(_) => "date",
            Value::Error(_) => "error",
            Value::RegExp(_) => "regexp",
            Value::Promise(_) => "promise",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
            Value::WeakMap(_) => "weakmap",
            Value::WeakSet(_) => "weakset",
            Value::TypedArray(array) => array.kind(),
        }
    }

    /// Invokes a function, generator function or generator.
    ///
    /// Non-callable values yield `None`.
    pub fn call(&self, args: Vec<Value>) -> Option<Value> {
        match self {
            Value::Function(callable)
            | Value::GeneratorFunction(callable)
            | Value::Generator(callable) => Some(callable.call(args)),
            _ => None,
        }
    }
}

fn format_number(number: f64) -> String {
    if number.is_nan() {
        String::from("NaN")
    } else if number.is_infinite() {
        String::from(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number == 0.0 {
        String::from("0")
    } else if number.abs() >= 1e21 || number.abs() < 1e-6 {
        let exponential = format!("{number:e}");
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponential,
        }
    } else {
        format!("{number}")
    }
}

fn join(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Undefined | Value::Null => String::new(),
            item => item.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::String(s) => write!(f, "{s}"),
            Value::Symbol(description) => write!(f, "Symbol({description})"),
            Value::Array(items) => write!(f, "{}", join(items)),
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Arguments(_) => write!(f, "[object Arguments]"),
            Value::Function(_) => write!(f, "[Function]"),
            Value::GeneratorFunction(_) => write!(f, "[GeneratorFunction]"),
            Value::Generator(_) => write!(f, "[object Generator]"),
            Value::Buffer(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
            Value::Date(time) => {
                let millis = match time.duration_since(UNIX_EPOCH) {
                    Ok(since) => since.as_millis() as i128,
                    Err(before) => -(before.duration().as_millis() as i128),
                };
                write!(f, "Date({millis})")
            }
            Value::Error(message) if message.is_empty() => write!(f, "Error"),
            Value::Error(message) => write!(f, "Error: {message}"),
            Value::RegExp(source) => write!(f, "/{source}/"),
            Value::Promise(_) => write!(f, "[object Promise]"),
            Value::Map(_) => write!(f, "[object Map]"),
            Value::Set(_) => write!(f, "[object Set]"),
            Value::WeakMap(_) => write!(f, "[object WeakMap]"),
            Value::WeakSet(_) => write!(f, "[object WeakSet]"),
            Value::TypedArray(array) => write!(f, "{}", array.items().join(",")),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "Undefined"),
            Self::Null => write!(f, "Null"),
            Self::Boolean(arg0) => f.debug_tuple("Boolean").field(arg0).finish(),
            Self::Number(arg0) => f.debug_tuple("Number").field(arg0).finish(),
            Self::String(arg0) => f.debug_tuple("String").field(arg0).finish(),
            Self::Symbol(arg0) => f.debug_tuple("Symbol").field(arg0).finish(),
            Self::Array(arg0) => f.debug_tuple("Array").field(arg0).finish(),
            Self::Object(arg0) => f.debug_tuple("Object").field(arg0).finish(),
            Self::Arguments(arg0) => f.debug_tuple("Arguments").field(arg0).finish(),
            Self::Function(_) => f.debug_tuple("Function").finish(),
            Self::GeneratorFunction(_) => f.debug_tuple("GeneratorFunction").finish(),
            Self::Generator(_) => f.debug_tuple("Generator").finish(),
            Self::Buffer(arg0) => f.debug_tuple("Buffer").field(arg0).finish(),
            Self::Date(arg0) => f.debug_tuple("Date").field(arg0).finish(),
            Self::Error(arg0) => f.debug_tuple("Error").field(arg0).finish(),
            Self::RegExp(arg0) => f.debug_tuple("RegExp").field(arg0).finish(),
            Self::Promise(_) => f.debug_tuple("Promise").finish(),
            Self::Map(arg0) => f.debug_tuple("Map").field(arg0).finish(),
            Self::Set(arg0) => f.debug_tuple("Set").field(arg0).finish(),
            Self::WeakMap(arg0) => f.debug_tuple("WeakMap").field(arg0).finish(),
            Self::WeakSet(arg0) => f.debug_tuple("WeakSet").field(arg0).finish(),
            Self::TypedArray(arg0) => f.debug_tuple("TypedArray").field(arg0).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => Arc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) | (Value::Arguments(a), Value::Arguments(b)) => {
                a == b
            }
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Function(a), Value::Function(b))
            | (Value::GeneratorFunction(a), Value::GeneratorFunction(b))
            | (Value::Generator(a), Value::Generator(b)) => Arc::ptr_eq(a, b),
            (Value::Buffer(a), Value::Buffer(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Error(a), Value::Error(b)) | (Value::RegExp(a), Value::RegExp(b)) => a == b,
            (Value::Promise(a), Value::Promise(b)) => Arc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) | (Value::WeakMap(a), Value::WeakMap(b)) => a == b,
            (Value::Set(a), Value::Set(b)) | (Value::WeakSet(a), Value::WeakSet(b)) => a == b,
            (Value::TypedArray(a), Value::TypedArray(b)) => a == b,
            _ => false,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}
impl From<SystemTime> for Value {
    fn from(value: SystemTime) -> Self {
        Self::Date(value)
    }
}
impl From<TypedArray> for Value {
    fn from(value: TypedArray) -> Self {
        Self::TypedArray(value)
    }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(vec: Vec<T>) -> Self {
        Self::Array(vec.into_iter().map(Into::into).collect())
    }
}
impl From<HashMap<String, Value>> for Value {
    fn from(map: HashMap<String, Value>) -> Self {
        Self::Object(map)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => items.into(),
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
