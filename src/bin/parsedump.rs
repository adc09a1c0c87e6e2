//! Debugging tool. Reads stdin, compiles, and dumps the slot table and
//! statements to stdout.

use std::io::stdin;

use anyhow::Result;

fn main() -> Result<()> {
    let mut input = String::new();

    for line in stdin().lines() {
        let line = line?;
        input.push_str(&line);
        input.push('\n');
    }

    let program = kalipso::compile(&input)?;

    for (slot, name) in program.symbols.iter() {
        println!("{slot}\t{name}");
    }

    println!("{:#?}", program.body);

    Ok(())
}
