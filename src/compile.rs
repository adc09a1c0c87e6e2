use log::debug;

use crate::ast::{Expr, Operand, Stmt};
use crate::error::{CompileError, CompileResult};
use crate::symbols::{Limits, Slot, SymbolTable};
use crate::token::{Token, tokenize};

/// Everything code generation needs: the variables to declare and the
/// statements to emit, in source order.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub symbols: SymbolTable,
    pub body: Vec<Stmt>,
}

/// Compilation session. Holds the symbol table and the statements
/// compiled so far; call [`Compiler::finish`] after the last line.
#[derive(Debug, Default)]
pub struct Compiler {
    symbols: SymbolTable,

    /// Stores all compiled statements, one per non-blank line.
    body: Vec<Stmt>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            symbols: SymbolTable::with_limits(limits),
            body: Vec::new(),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Tokenize and compile one line. Lines without tokens are skipped
    /// and yield `None`.
    pub fn compile_line(&mut self, line: &str) -> CompileResult<Option<&Stmt>> {
        let tokens = tokenize(line);

        if tokens.is_empty() {
            return Ok(None);
        }

        self.compile(&tokens).map(Some)
    }

    /// Recognize a print, input or assignment statement, resolve its
    /// identifiers, and append it to the program.
    pub fn compile(&mut self, tokens: &[Token]) -> CompileResult<&Stmt> {
        let stmt = match tokens {
            [] => return Err(CompileError::InvalidStatement { text: String::new() }),

            [kwd, args @ ..] if kwd.content == "print" => {
                if args.is_empty() {
                    return Err(CompileError::MissingArgument {
                        keyword: "print",
                        expected: "an argument",
                    });
                }

                Stmt::Print { args: self.tr_expr(args)? }
            },

            [kwd, args @ ..] if kwd.content == "input" => {
                let [target] = args else {
                    return Err(CompileError::MissingArgument {
                        keyword: "input",
                        expected: "exactly one variable",
                    });
                };

                Stmt::Input { target: self.tr_target(target)? }
            },

            [lhs, eq, rhs @ ..] if eq.content == "=" && !rhs.is_empty() => {
                let target = self.tr_target(lhs)?;
                let rhs = self.tr_expr(rhs)?;
                Stmt::Assign { target, rhs }
            },

            _ => return Err(CompileError::InvalidStatement { text: join(tokens) }),
        };

        debug!("Compiled {} statement: {stmt}", stmt.keyword());

        let index = self.body.len();
        self.body.push(stmt);
        Ok(&self.body[index])
    }

    pub fn finish(self) -> Program {
        let Compiler { symbols, body } = self;
        Program { symbols, body }
    }

    fn tr_target(&mut self, token: &Token) -> CompileResult<Slot> {
        if !token.is_identifier() {
            return Err(CompileError::NotAnIdentifier { token: token.content.into() });
        }

        self.symbols.resolve(token.content)
    }

    fn tr_expr(&mut self, tokens: &[Token]) -> CompileResult<Expr> {
        tokens.iter().map(|token| {
            if token.is_identifier() {
                self.symbols.resolve(token.content).map(Operand::Slot)
            } else {
                Ok(Operand::from(token.content))
            }
        }).collect()
    }
}

impl Program {
    pub fn slot_count(&self) -> usize {
        self.symbols.len()
    }
}

fn join(tokens: &[Token]) -> String {
    tokens.iter()
    .map(|t| t.content)
    .collect::<Vec<_>>()
    .join(" ")
}
