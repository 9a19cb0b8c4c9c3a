// src/models.rs

use std::collections::BTreeMap;
use std::fmt;

// --- BOUND PARAMETER VALUES ---

/// A value bound by a parameter's parse callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Free text, possibly empty.
    Text(String),
    /// A parsed integer.
    Int(i64),
    /// Present on the command line without a value.
    Flag,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Int(n) => write!(f, "{}", n),
            Self::Flag => write!(f, "true"),
        }
    }
}

/// Everything the parameter callbacks bound during one dispatch.
///
/// A fresh record is created for every call to `dispatch`, handed to the
/// handler by reference and returned to the caller afterwards. Two dispatches
/// never share one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: BTreeMap<String, Value>,
    /// Parameter name to the literal token it was matched from.
    raw: BTreeMap<String, String>,
}

impl Bindings {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` under `name`, replacing any earlier value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// The value bound under `name`, of any kind.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// True once a parse callback has bound anything under `name`, including an empty text.
    pub fn is_bound(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The text bound under `name`. `None` when unbound or not text.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(Value::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The integer bound under `name`. `None` when unbound or not an integer.
    pub fn int(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(Value::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// True when a flag is bound under `name`.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(Value::Flag))
    }

    /// The literal command-line token the parameter was matched from.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.raw.get(name).map(String::as_str)
    }

    pub(crate) fn record_raw(&mut self, name: &str, token: &str) {
        self.raw.insert(name.to_string(), token.to_string());
    }

    /// Number of bound values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// --- EXAMPLES ---

/// An illustrative invocation shown by `--examples`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Tokens after the command path.
    pub args: Vec<String>,
    /// What the invocation does.
    pub desc: String,
    /// Marks a combination that is rejected, rendered in red.
    pub negative: bool,
    /// Shown after the invocation as `# comment`.
    pub comment: Option<String>,
}

impl Example {
    /// A passing example with no comment.
    pub fn new(args: &[&str], desc: impl Into<String>) -> Self {
        Self {
            args: args.iter().map(|s| s.to_string()).collect(),
            desc: desc.into(),
            negative: false,
            comment: None,
        }
    }

    /// Marks the example as one that fails.
    pub fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    /// Adds a trailing comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
