use std::collections::HashMap;

use crate::{ast::definitions::Prototype, lexer::tokens::TokenKind};

/// Lowest precedence a `binary` declaration may request.
pub const MIN_PRECEDENCE: u32 = 1;
/// Highest precedence a `binary` declaration may request.
pub const MAX_PRECEDENCE: u32 = 100;
/// Precedence of a `binary` declaration that does not give one.
pub const DEFAULT_BINARY_PRECEDENCE: u32 = 30;

/// Precedence reported for anything that is not a binary operator.
pub const NOT_AN_OPERATOR: i32 = -1;

pub const BUILTIN_OPERATORS: [(char, i32); 5] = [('=', 2), ('<', 10), ('+', 20), ('-', 30), ('*', 40)];

// Lookup table inside parser struct, so it's easier
pub type BPLookup = HashMap<char, i32>;

/// Binding powers of the binary operators known to one parser session.
///
/// Higher binds tighter. Entries are added or overwritten when a backend
/// accepts a binary operator definition and are never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorTable {
    binding_power_lookup: BPLookup,
}

impl OperatorTable {
    /// An empty table, with not even the built-in operators.
    pub fn new() -> Self {
        OperatorTable {
            binding_power_lookup: HashMap::new(),
        }
    }

    pub fn with_builtins() -> Self {
        let mut table = OperatorTable::new();
        for (symbol, precedence) in BUILTIN_OPERATORS {
            table.define(symbol, precedence);
        }
        table
    }

    /// Precedence of a token, or `NOT_AN_OPERATOR` unless it is a known
    /// operator character.
    pub fn precedence_of(&self, kind: &TokenKind) -> i32 {
        match kind {
            TokenKind::Char(symbol) => self.precedence(*symbol),
            _ => NOT_AN_OPERATOR,
        }
    }

    pub fn precedence(&self, symbol: char) -> i32 {
        match self.binding_power_lookup.get(&symbol) {
            Some(precedence) if *precedence > 0 => *precedence,
            _ => NOT_AN_OPERATOR,
        }
    }

    pub fn define(&mut self, symbol: char, precedence: i32) {
        self.binding_power_lookup.insert(symbol, precedence);
    }

    /// Makes a binary operator prototype's symbol usable as an infix
    /// operator. Returns false, leaving the table alone, for any other
    /// prototype.
    pub fn register(&mut self, proto: &Prototype) -> bool {
        match (proto.operator_symbol(), proto.binary_precedence()) {
            (Some(symbol), Some(precedence)) => {
                self.define(symbol, precedence as i32);
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.binding_power_lookup.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.binding_power_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binding_power_lookup.is_empty()
    }

    /// Entries ordered loosest first, ties broken by symbol.
    pub fn entries(&self) -> Vec<(char, i32)> {
        let mut entries: Vec<(char, i32)> = self
            .binding_power_lookup
            .iter()
            .map(|(symbol, precedence)| (*symbol, *precedence))
            .collect();
        entries.sort_by_key(|(symbol, precedence)| (*precedence, *symbol));
        entries
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        OperatorTable::with_builtins()
    }
}
