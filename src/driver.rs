//! File handling around the compiler: naming the generated files,
//! writing C source, and handing it to a native C compiler.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};

use log::{debug, info};

use crate::compile::Program;
use crate::symbols::Limits;

pub const SOURCE_EXTENSION: &str = "kpso";

pub const DEFAULT_CC: &str = "gcc";

/// Output locations derived from one source file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artifacts {
    pub c_source: PathBuf,
    pub executable: PathBuf,
}

impl Artifacts {
    /// `prog.kpso` becomes `prog.c` and `prog` (plus the platform's
    /// executable suffix). Other extensions are kept in the base name.
    pub fn for_source(path: &Path) -> Self {
        let base = match path.extension() {
            Some(ext) if ext == SOURCE_EXTENSION => path.with_extension(""),
            _ => path.to_path_buf(),
        };

        Self {
            c_source: append(&base, ".c"),
            executable: append(&base, std::env::consts::EXE_SUFFIX),
        }
    }

    /// Refuse outputs that would overwrite `source`. Without a `.kpso`
    /// extension (and no executable suffix) the executable name is the
    /// source name itself; that only matters when `build` is set.
    pub fn ensure_distinct_from(&self, source: &Path, build: bool) -> Result<()> {
        if same_file(&self.c_source, source) {
            bail!("Output file {} would overwrite the source", self.c_source.display());
        }

        if build && same_file(&self.executable, source) {
            bail!(
                "Executable {} would overwrite the source; rename it to end in .{SOURCE_EXTENSION}",
                self.executable.display(),
            );
        }

        Ok(())
    }

    /// How to start the executable from the current directory.
    pub fn run_hint(&self) -> String {
        let exe = &self.executable;

        let bare = exe.is_relative()
        && exe.parent().map_or(true, |parent| parent.as_os_str().is_empty());

        if bare {
            format!("./{}", exe.display())
        } else {
            exe.display().to_string()
        }
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }

    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn append(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

pub fn compile_file(path: &Path, limits: Limits) -> Result<Program> {
    let source = fs::read_to_string(path)
    .with_context(|| format!("Failed to open input file {}", path.display()))?;

    let program = crate::compile_with_limits(&source, limits)
    .with_context(|| format!("In {}", path.display()))?;

    debug!("{} variables, {} statements", program.slot_count(), program.body.len());

    Ok(program)
}

pub fn write_c(program: &Program, path: &Path) -> Result<()> {
    fs::write(path, program.to_c())
    .with_context(|| format!("Failed to create output file {}", path.display()))?;

    info!("Wrote {}", path.display());
    Ok(())
}

/// External C compiler, invoked as `<cc> <source> -o <executable>`.
#[derive(Clone, Debug)]
pub struct NativeCompiler {
    pub program: OsString,
}

impl NativeCompiler {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }

    pub fn build(&self, c_source: &Path, executable: &Path) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        cmd.arg(c_source).arg("-o").arg(executable);

        info!("Running {cmd:?}");

        let output = cmd.output()
        .with_context(|| format!("Could not run C compiler {:?}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("Compilation failed! ({})\n{stderr}", output.status);
        }

        Ok(())
    }
}

impl Default for NativeCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_CC)
    }
}
