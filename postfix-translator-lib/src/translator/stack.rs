use crate::translator::operator::Operator;
use anyhow::{bail, Result};

/// Maximum depth of the operator stack, counting the bottom sentinel.
pub const MAX_DEPTH: usize = 64;

/// A single stack cell: either a stacked operator or the sentinel that
/// marks a bracket-scope boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Cell {
    Operator(Operator),
    Sentinel,
}

/// A bounded LIFO of operators and scope sentinels.
///
/// The stack is created holding a single sentinel at the bottom, which
/// makes popping total: pops stop at the nearest sentinel and keep
/// yielding nothing without moving the top. Within one bracket scope the
/// stack discipline allows at most two operators, an additive one with an
/// optional multiplicative one above it.
#[derive(Debug)]
pub struct OperatorStack {
    cells: Vec<Cell>,
}

impl OperatorStack {
    pub fn new() -> Self {
        let mut cells = Vec::with_capacity(MAX_DEPTH);
        cells.push(Cell::Sentinel);
        Self { cells }
    }

    /// Places the given operator on top of the stack.
    pub fn push(&mut self, operator: Operator) -> Result<()> {
        self.push_cell(Cell::Operator(operator))
    }

    /// Opens a new bracket scope by placing a sentinel on top of the
    /// stack. Pops inside the new scope stop at this boundary.
    pub fn open_scope(&mut self) -> Result<()> {
        self.push_cell(Cell::Sentinel)
    }

    fn push_cell(&mut self, cell: Cell) -> Result<()> {
        if self.cells.len() >= MAX_DEPTH {
            bail!("Operator stack exceeded the maximum depth of {}", MAX_DEPTH);
        }
        self.cells.push(cell);
        Ok(())
    }

    /// Pops the topmost operator. At a scope boundary (a sentinel on top,
    /// or a fully drained stack) returns `None` and leaves the top
    /// unchanged, so repeated calls keep returning `None`.
    pub fn pop_any(&mut self) -> Option<Operator> {
        match self.cells.last() {
            Some(&Cell::Operator(operator)) => {
                self.cells.pop();
                Some(operator)
            }
            _ => None,
        }
    }

    /// Pops the topmost operator only if it is multiplicative, preserving
    /// a lower-precedence operator beneath it.
    pub fn pop_mul_div(&mut self) -> Option<Operator> {
        match self.cells.last() {
            Some(&Cell::Operator(operator)) if operator.is_multiplicative() => {
                self.cells.pop();
                Some(operator)
            }
            _ => None,
        }
    }

    /// Removes a sentinel from the top of the stack, if present. Used
    /// when consuming a closing bracket to discard the scope marker left
    /// by the matching opening bracket.
    pub fn drop_sentinel(&mut self) {
        if let Some(Cell::Sentinel) = self.cells.last() {
            self.cells.pop();
        }
    }

    /// Current depth, counting the bottom sentinel.
    pub fn depth(&self) -> usize {
        self.cells.len()
    }

    /// True when only the bottom sentinel remains, as after a complete
    /// translation of a well-formed expression.
    pub fn is_drained(&self) -> bool {
        self.cells == [Cell::Sentinel]
    }
}

impl Default for OperatorStack {
    fn default() -> Self {
        Self::new()
    }
}
