use std::fmt;

use crate::compile::Program;

const INDENT: &str = "    ";

/// Renders the whole program as a C translation unit.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "#include <stdio.h>")?;
        writeln!(f)?;
        writeln!(f, "int main() {{")?;

        if !self.symbols.is_empty() {
            write!(f, "{INDENT}long long ")?;

            for (index, (slot, _)) in self.symbols.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }

                write!(f, "{slot} = 0")?;
            }

            writeln!(f, ";")?;
        }

        for stmt in self.body.iter() {
            writeln!(f, "{INDENT}{stmt}")?;
        }

        writeln!(f, "{INDENT}return 0;")?;
        writeln!(f, "}}")
    }
}

impl Program {
    pub fn to_c(&self) -> String {
        self.to_string()
    }
}

#[test]
fn sum_program() {
    let src = r#"
        x = 5
        y = 10
        result = x + y
        print result
        "#;

    let program = crate::compile(src).unwrap();

    assert_eq!(program.to_c(), concat!(
        "#include <stdio.h>\n",
        "\n",
        "int main() {\n",
        "    long long v0 = 0, v1 = 0, v2 = 0;\n",
        "    v0 = 5;\n",
        "    v1 = 10;\n",
        "    v2 = v0 + v1;\n",
        "    printf(\"%lld\\n\", v2);\n",
        "    return 0;\n",
        "}\n",
    ));
}

#[test]
fn empty_program() {
    let program = crate::compile("# comment\n\n").unwrap();

    assert_eq!(program.to_c(), concat!(
        "#include <stdio.h>\n",
        "\n",
        "int main() {\n",
        "    return 0;\n",
        "}\n",
    ));
}

#[test]
fn input_and_auto_declared() {
    let src = "input n\nprint n * m\n";

    let program = crate::compile(src).unwrap();
    let c = program.to_c();

    println!("{c}");

    assert!(c.contains("    long long v0 = 0, v1 = 0;\n"));
    assert!(c.contains("    scanf(\"%lld\", &v0);\n"));
    assert!(c.contains("    printf(\"%lld\\n\", v0 * v1);\n"));
}
