use std::path::PathBuf;

use anyhow::Result;

use clap::{ArgAction, Parser};

use log::info;

use kalipso::driver::{self, Artifacts, NativeCompiler};
use kalipso::symbols::{DEFAULT_MAX_VARIABLES, Limits};

#[derive(Parser)]
#[command(name = "kalipso", version, about = "Compile Kalipso (.kpso) programs to C and native code")]
struct Cli {
    /// Source file to compile
    input: PathBuf,

    /// Where to write the generated C (default: input name with .c)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only generate C, don't build an executable
    #[arg(long)]
    emit_only: bool,

    /// C compiler used to build the executable
    #[arg(long, default_value = driver::DEFAULT_CC)]
    cc: String,

    /// Maximum number of distinct variables
    #[arg(long, default_value_t = DEFAULT_MAX_VARIABLES)]
    max_variables: usize,

    /// More logging; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// No logging at all
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    stderrlog::new()
    .quiet(cli.quiet)
    .verbosity(1 + cli.verbose as usize)
    .init()?;

    let limits = Limits { max_variables: cli.max_variables };
    let program = driver::compile_file(&cli.input, limits)?;

    let mut artifacts = Artifacts::for_source(&cli.input);
    if let Some(output) = cli.output {
        artifacts.c_source = output;
    }

    artifacts.ensure_distinct_from(&cli.input, !cli.emit_only)?;

    driver::write_c(&program, &artifacts.c_source)?;
    println!("Generated C code: {}", artifacts.c_source.display());

    if cli.emit_only {
        return Ok(());
    }

    println!("Compiling...");

    let cc = NativeCompiler::new(cli.cc);
    cc.build(&artifacts.c_source, &artifacts.executable)?;

    info!("Built {}", artifacts.executable.display());

    println!("Success! Created executable: {}", artifacts.executable.display());
    println!("Run with: {}", artifacts.run_hint());

    Ok(())
}
