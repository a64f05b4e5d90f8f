//! tlpin data types.
//!
//! Values live on the evaluation stack. An array owns its elements, so a
//! stack can hold further stacks; dropping a value drops everything inside it.

/// A value on the stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Character(u8),
    Array(Vec<Value>),
}

impl Value {
    /// Name of the value's kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Character(_) => "character",
            Value::Array(_) => "array",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Character(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl Value {
    /// Append the value as a stack dump entry: each value is followed by a
    /// space, and arrays are wrapped in braces. Characters are written as
    /// their raw byte.
    pub fn dump_into(&self, out: &mut Vec<u8>) {
        match self {
            Value::Number(v) => out.extend_from_slice(fixed(*v).as_bytes()),
            Value::Character(c) => out.push(*c),
            Value::Array(values) => {
                out.extend_from_slice(b"{ ");
                for v in values {
                    v.dump_into(out);
                }
                out.push(b'}');
            }
        }
        out.push(b' ');
    }
}

/// Render a float the way C's `%f` does: six decimals, `nan`, `inf`.
pub fn fixed(v: f64) -> String {
    match (v.is_nan(), v.is_sign_negative()) {
        (true, false) => "nan".to_owned(),
        (true, true) => "-nan".to_owned(),
        _ => format!("{v:.6}"),
    }
}

/// Render a whole stack, bottom first.
pub fn dump_stack(stack: &[Value]) -> Vec<u8> {
    let mut out = Vec::new();
    for v in stack {
        v.dump_into(&mut out);
    }
    out
}
