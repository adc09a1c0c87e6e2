use std::fmt;

use crate::symbols::Slot;

/// One compiled source line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Stmt {
    Print {
        args: Expr,
    },

    Input {
        target: Slot,
    },

    Assign {
        target: Slot,
        rhs: Expr,
    },
}

/// Token stream handed through to the C compiler. Only identifiers are
/// rewritten; everything else is kept as written.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Expr {
    pub operands: Vec<Operand>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operand {
    Slot(Slot),

    Verbatim(String),
}

impl Stmt {
    pub fn keyword(&self) -> &'static str {
        match self {
            Stmt::Print { .. } => "print",
            Stmt::Input { .. } => "input",
            Stmt::Assign { .. } => "assignment",
        }
    }
}

impl FromIterator<Operand> for Expr {
    fn from_iter<I: IntoIterator<Item=Operand>>(iter: I) -> Self {
        Self {
            operands: iter.into_iter().collect(),
        }
    }
}

impl From<Slot> for Operand {
    fn from(slot: Slot) -> Self {
        Self::Slot(slot)
    }
}

impl<'a> From<&'a str> for Operand {
    fn from(value: &'a str) -> Self {
        Self::Verbatim(value.into())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Print { args } => write!(f, "printf(\"%lld\\n\", {args});"),
            Stmt::Input { target } => write!(f, "scanf(\"%lld\", &{target});"),
            Stmt::Assign { target, rhs } => write!(f, "{target} = {rhs};"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, operand) in self.operands.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }

            write!(f, "{operand}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Slot(slot) => write!(f, "{slot}"),
            Operand::Verbatim(text) => write!(f, "{text}"),
        }
    }
}
