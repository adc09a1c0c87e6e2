pub mod ast;
pub mod token;
pub mod symbols;
pub mod compile;
pub mod emit;
pub mod error;

pub mod driver;

use std::fmt;

use anyhow::{Context, Result};

pub use compile::{Compiler, Program};
pub use error::CompileError;
pub use symbols::{Limits, Slot};

pub fn compile(input: &str) -> Result<Program> {
    compile_with_limits(input, Limits::default())
}

/// Compile a whole source file. Blank lines and lines starting with `#`
/// are skipped; the first bad line aborts compilation.
pub fn compile_with_limits(input: &str, limits: Limits) -> Result<Program> {
    let mut compiler = Compiler::with_limits(limits);

    for (index, line) in input.lines().enumerate() {
        let line = line.trim_start();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        compiler.compile_line(line)
        .with_context(|| SourceLine { number: index + 1, text: line.into() })?;
    }

    Ok(compiler.finish())
}

#[derive(Clone, Debug)]
struct SourceLine {
    number: usize,
    text: String,
}

impl fmt::Display for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SourceLine { number, text } = self;
        write!(f, "Line {number}: {text:?}")
    }
}

#[test]
fn compile_example() {
    let input = "# sum two numbers\nx = 5\ny = 10\n\n  result = x + y\nprint result\n";

    let program = compile(input).unwrap();

    assert_eq!(program.slot_count(), 3);
    assert_eq!(program.symbols.names().collect::<Vec<_>>(), ["x", "y", "result"]);
    assert_eq!(program.body.len(), 4);
}

#[test]
fn compile_is_repeatable() {
    let input = "input a\nb = a * 2 - c\nprint (b + a) / 3\n";

    let first = compile(input).unwrap().to_c();
    let second = compile(input).unwrap().to_c();

    assert_eq!(first, second);
}

#[test]
fn errors_carry_line() {
    let err = compile("x = 1\n\n5 = x\n").unwrap_err();

    assert_eq!(err.to_string(), "Line 3: \"5 = x\"");
    assert_eq!(
        err.downcast_ref::<CompileError>(),
        Some(&CompileError::NotAnIdentifier { token: "5".into() }),
    );

    let err = compile("print\n").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CompileError>(),
        Some(CompileError::MissingArgument { keyword: "print", .. }),
    ));

    let err = compile("hello world\n").unwrap_err();
    assert!(format!("{err:#}").contains("Invalid statement"));
}
