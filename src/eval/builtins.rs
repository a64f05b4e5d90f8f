use crate::data::Value;
use crate::eval::{Error, EvalResult};

/// Native operations, by the name a tlpin program would use for them.
pub const NATIVES: &[(&str, Native)] = &[("pona", Native::Add), ("ike", Native::Subtract)];

/// A built-in stack transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Native {
    /// `a b pona` leaves `a + b`.
    Add,
    /// `a b ike` leaves `a - b`.
    Subtract,
}

impl Native {
    /// Resolve a native by name.
    pub fn lookup(name: &str) -> Option<Native> {
        NATIVES
            .iter()
            .find(|(native_name, _)| *native_name == name)
            .map(|(_, native)| *native)
    }

    pub fn name(self) -> &'static str {
        match self {
            Native::Add => "pona",
            Native::Subtract => "ike",
        }
    }

    /// Number of values the native consumes from the stack.
    pub fn arity(self) -> usize {
        match self {
            Native::Add | Native::Subtract => 2,
        }
    }

    pub fn apply(self, stack: &mut Vec<Value>) -> EvalResult<()> {
        tracing::debug!(native = self.name(), depth = stack.len(), "native");
        match self {
            Native::Add => binary_number(self, stack, |a, b| a + b),
            Native::Subtract => binary_number(self, stack, |a, b| a - b),
        }
    }
}

/// Replace the top two numbers `a b` with `op(a, b)`.
/// On error, the stack is untouched.
fn binary_number(
    native: Native,
    stack: &mut Vec<Value>,
    op: impl FnOnce(f64, f64) -> f64,
) -> EvalResult<()> {
    let [.., a, b] = stack.as_slice() else {
        return Err(Error::StackUnderflow {
            native: native.name(),
            needed: native.arity(),
            found: stack.len(),
        });
    };
    let (a, b) = match (a, b) {
        (Value::Number(a), Value::Number(b)) => (*a, *b),
        (Value::Number(_), other) | (other, _) => {
            return Err(Error::TypeMismatch {
                native: native.name(),
                found: other.kind_name(),
            })
        }
    };
    stack.pop();
    if let Some(top) = stack.last_mut() {
        *top = Value::Number(op(a, b));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        for (name, native) in NATIVES {
            assert_eq!(Native::lookup(name), Some(*native));
            assert_eq!(native.name(), *name);
            assert_eq!(native.arity(), 2);
        }
        assert_eq!(Native::lookup("toki"), None);
    }

    #[test]
    fn subtract_order() -> EvalResult<()> {
        let mut stack = vec![Value::Number(1.0), Value::Number(10.0), Value::Number(4.0)];
        Native::Subtract.apply(&mut stack)?;
        assert_eq!(stack, vec![Value::Number(1.0), Value::Number(6.0)]);
        Ok(())
    }
}
