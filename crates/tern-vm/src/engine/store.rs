//! Append-only store of reference cells.
//!
//! Addresses are handed out sequentially from zero and never freed or
//! reused, so every pointer stays valid for the life of the store. Cell
//! contents are values and may be overwritten in place.

use std::rc::Rc;

use tern_lang::Expr;

use super::invariants;

#[derive(Clone, Debug, Default)]
pub struct Store {
    cells: Vec<Rc<Expr>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell holding `value` and return its address.
    pub fn alloc(&mut self, value: Rc<Expr>) -> usize {
        debug_assert!(value.is_value(), "storing non-value `{value}`");
        let addr = self.cells.len();
        self.cells.push(value);
        tracing::trace!(addr, "allocated cell");
        addr
    }

    /// Current contents of cell `addr`.
    #[track_caller]
    pub fn read(&self, addr: usize) -> Rc<Expr> {
        match self.cells.get(addr) {
            Some(value) => value.clone(),
            None => invariants::dangling(addr, self.cells.len()),
        }
    }

    /// Overwrite cell `addr`.
    #[track_caller]
    pub fn write(&mut self, addr: usize, value: Rc<Expr>) {
        debug_assert!(value.is_value(), "storing non-value `{value}`");
        let len = self.cells.len();
        match self.cells.get_mut(addr) {
            Some(cell) => *cell = value,
            None => invariants::dangling(addr, len),
        }
        tracing::trace!(addr, "overwrote cell");
    }

    pub fn get(&self, addr: usize) -> Option<&Rc<Expr>> {
        self.cells.get(addr)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in address order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Rc<Expr>)> {
        self.cells.iter().enumerate()
    }
}
