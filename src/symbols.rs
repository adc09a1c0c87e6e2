use std::fmt;

use log::debug;

use string_interner::{DefaultStringInterner, DefaultSymbol, Symbol};

use crate::error::{CompileError, CompileResult};

pub const DEFAULT_MAX_VARIABLES: usize = 256;

/// Storage location of one variable in the generated program.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Slot(pub usize);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Limits {
    /// Number of distinct variable names a program may use.
    pub max_variables: usize,
}

/// Flat namespace of every variable in a program. Slots are handed out
/// in first-use order starting at zero.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    interner: DefaultStringInterner,
    limit: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            interner: DefaultStringInterner::default(),
            limit: limits.max_variables,
        }
    }

    /// Slot for `name`, allocating the next one if the name is new.
    pub fn resolve(&mut self, name: &str) -> CompileResult<Slot> {
        if let Some(slot) = self.get(name) {
            return Ok(slot);
        }

        if self.interner.len() >= self.limit {
            return Err(CompileError::TooManyVariables { limit: self.limit });
        }

        let slot = Slot(self.interner.get_or_intern(name).to_usize());
        debug!("Allocated {slot} for {name:?}");
        Ok(slot)
    }

    pub fn get(&self, name: &str) -> Option<Slot> {
        self.interner.get(name).map(|sym| Slot(sym.to_usize()))
    }

    pub fn name(&self, slot: Slot) -> Option<&str> {
        let sym = DefaultSymbol::try_from_usize(slot.0)?;
        self.interner.resolve(sym)
    }

    pub fn len(&self) -> usize {
        self.interner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    /// All slots with their names, in slot order.
    pub fn iter(&self) -> impl Iterator<Item=(Slot, &str)> + '_ {
        (0 .. self.len()).filter_map(move |index| {
            let slot = Slot(index);
            self.name(slot).map(|name| (slot, name))
        })
    }

    pub fn names(&self) -> impl Iterator<Item=&str> + '_ {
        self.iter().map(|(_, name)| name)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_use_order() {
        let mut table = SymbolTable::new();

        let x = table.resolve("x").unwrap();
        let y = table.resolve("y").unwrap();
        let result = table.resolve("result").unwrap();

        assert_eq!([x, y, result], [Slot(0), Slot(1), Slot(2)]);
        assert!(x < y && y < result);

        assert_eq!(table.resolve("y").unwrap(), y);
        assert_eq!(table.resolve("x").unwrap(), x);
        assert_eq!(table.len(), 3);

        assert_eq!(table.names().collect::<Vec<_>>(), ["x", "y", "result"]);
    }

    #[test]
    fn lookup_does_not_allocate() {
        let mut table = SymbolTable::new();
        assert_eq!(table.get("a"), None);
        assert!(table.is_empty());

        table.resolve("a").unwrap();
        assert_eq!(table.get("a"), Some(Slot(0)));
        assert_eq!(table.name(Slot(0)), Some("a"));
        assert_eq!(table.name(Slot(1)), None);
    }

    #[test]
    fn capacity() {
        let mut table = SymbolTable::new();

        for index in 0 .. DEFAULT_MAX_VARIABLES {
            let slot = table.resolve(&format!("var{index}")).unwrap();
            assert_eq!(slot, Slot(index));
        }

        // Known names still resolve once the table is full
        assert_eq!(table.resolve("var7").unwrap(), Slot(7));

        assert_eq!(table.resolve("overflow"), Err(CompileError::TooManyVariables {
            limit: DEFAULT_MAX_VARIABLES,
        }));
        assert_eq!(table.len(), DEFAULT_MAX_VARIABLES);
    }

    #[test]
    fn custom_limit() {
        let mut table = SymbolTable::with_limits(Limits { max_variables: 1 });
        table.resolve("only").unwrap();
        assert!(table.resolve("another").is_err());
    }

    #[test]
    fn slot_names() {
        assert_eq!(Slot(0).to_string(), "v0");
        assert_eq!(Slot(42).to_string(), "v42");
    }
}
