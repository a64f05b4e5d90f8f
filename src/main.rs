//! Tokenize a tlpin source file and list its tokens.
//!
//! Each token is printed on stdout as `name(line:column): KIND[: payload]`.
//! Errors go to stderr as `name(line:column): Error: message`, and the exit
//! status is 1.
//!
//! ```ignore
//! tlpin program.tlpin
//! <program.tlpin tlpin
//! ```

use std::io::Write;
use std::process::ExitCode;

use tlpin::reader::dump_tokens;
use tlpin::{read_source, tokenize_collect, LexerConfig};

fn main() -> std::io::Result<ExitCode> {
    tlpin::logging::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "-".to_owned());
    let source_name = if path == "-" { "<stdin>" } else { path.as_str() };
    let source = read_source(&path)?;

    let lexed = tokenize_collect(&source, &LexerConfig::default());
    if lexed.failed() {
        let mut stderr = std::io::stderr().lock();
        for err in &lexed.errors {
            writeln!(stderr, "{}", err.annotate(source_name))?;
        }
        return Ok(ExitCode::FAILURE);
    }

    let mut stdout = std::io::stdout().lock();
    dump_tokens(&mut stdout, &lexed.tokens, source_name)?;
    Ok(ExitCode::SUCCESS)
}
