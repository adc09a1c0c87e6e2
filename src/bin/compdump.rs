//! Debugging tool. Reads a program on stdin and prints the generated C.

use std::io::stdin;

use anyhow::Result;

fn main() -> Result<()> {
    stderrlog::new()
    .verbosity(5)
    .init()?;

    let mut input = String::new();

    for line in stdin().lines() {
        let line = line?;
        input.push_str(&line);
        input.push('\n');
    }

    let program = kalipso::compile(&input)?;

    print!("{program}");

    Ok(())
}
