//! tlpin evaluator.
//!
//! A program is a tree of [`Function`]s, run depth-first and left to right
//! against a single value stack:
//!
//! -   A _literal_ pushes a copy of its value.
//! -   A _native_ reads and rewrites the top of the stack.
//! -   A _defined_ function runs its children against the same stack.
//!     There is no call frame; a subroutine sees everything its caller pushed.

use crate::data::Value;

pub use builtins::{Native, NATIVES};

mod builtins;

/// Node of a program tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    Native(Native),
    Defined(Vec<Function>),
    Literal(Value),
}

impl From<Native> for Function {
    fn from(value: Native) -> Self {
        Function::Native(value)
    }
}

impl From<Value> for Function {
    fn from(value: Value) -> Self {
        Function::Literal(value)
    }
}

/// Runtime fault of a native operation.
///
/// When a native fails, the stack is left as it was before the native ran.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The native needed more values than the stack holds.
    StackUnderflow {
        native: &'static str,
        needed: usize,
        found: usize,
    },
    /// An operand had the wrong kind; `found` is its kind name.
    TypeMismatch {
        native: &'static str,
        found: &'static str,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self {
            Error::StackUnderflow {
                native,
                needed,
                found,
            } => write!(
                f,
                "stack underflow in {native}: needs {needed} values, stack has {found}"
            ),
            Error::TypeMismatch { native, found } => {
                write!(f, "type mismatch in {native}: expected number, got {found}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type EvalResult<T> = Result<T, Error>;

/// Run the program against the stack, stopping at the first error.
pub fn execute(program: &[Function], stack: &mut Vec<Value>) -> EvalResult<()> {
    for function in program {
        match function {
            Function::Defined(body) => execute(body, stack)?,
            Function::Native(native) => native.apply(stack)?,
            Function::Literal(value) => stack.push(value.clone()),
        }
    }
    Ok(())
}

/// The program `30 10 pona 20 ike`, which leaves 20 on the stack.
pub fn demo_program() -> Vec<Function> {
    vec![
        Value::Number(30.0).into(),
        Value::Number(10.0).into(),
        Native::Add.into(),
        Value::Number(20.0).into(),
        Native::Subtract.into(),
    ]
}
