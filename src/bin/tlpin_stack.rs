//! Run the built-in demonstration program and print the resulting stack.
//!
//! ```ignore
//! tlpin_stack
//! ```

use std::io::Write;
use std::process::ExitCode;

use tlpin::{dump_stack, eval::demo_program, execute};

fn main() -> std::io::Result<ExitCode> {
    tlpin::logging::init();

    let mut stack = Vec::new();
    if let Err(e) = execute(&demo_program(), &mut stack) {
        eprintln!("Error: {e}");
        return Ok(ExitCode::FAILURE);
    }
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(b"Stack dump: ")?;
    stdout.write_all(&dump_stack(&stack))?;
    stdout.write_all(b"\n")?;
    Ok(ExitCode::SUCCESS)
}
