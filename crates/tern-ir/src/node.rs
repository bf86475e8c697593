//! Node and type definitions.
//!
//! Every node owns its children. The set mirrors the source expression
//! language one-to-one, using backend-oriented names (`Alloc`/`Load`/`Store`
//! for reference cells, `Func` for scoped definitions, `Record` for structs).

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumKind {
    Int,
    Float,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl BinOp {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Rem => "rem",
        }
    }
}

impl CmpOp {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Eq => "eq",
            Self::Ne => "ne",
        }
    }
}

/// IR type annotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ty {
    Int,
    Float,
    Bool,
    Unit,
    Func(Box<Ty>, Box<Ty>),
    Pair(Box<Ty>, Box<Ty>),
    List(Box<Ty>),
    Ref(Box<Ty>),
    /// Fields in declaration order.
    Record(Vec<(String, Ty)>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: Ty,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordField {
    pub name: String,
    pub ty: Ty,
    pub value: Node,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Int(i64),
    Float(f64),
    /// Undefined numeric result of the given kind.
    NaN(NumKind),
    Bool(bool),
    Unit,
    Var(String),
    If {
        cond: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Box<Node>,
    },
    Let {
        name: String,
        ty: Ty,
        value: Box<Node>,
        body: Box<Node>,
    },
    Call {
        func: String,
        args: Vec<Node>,
    },
    Binary {
        op: BinOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Compare {
        op: CmpOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Pair {
        first: Box<Node>,
        second: Box<Node>,
    },
    First(Box<Node>),
    Second(Box<Node>),
    List {
        elem: Ty,
        items: Vec<Node>,
    },
    Cons {
        head: Box<Node>,
        tail: Box<Node>,
    },
    Head(Box<Node>),
    Tail(Box<Node>),
    IsEmpty(Box<Node>),
    Alloc(Box<Node>),
    /// Address of an already allocated cell.
    Addr {
        addr: u64,
        pointee: Ty,
    },
    Load(Box<Node>),
    Store {
        target: Box<Node>,
        value: Box<Node>,
    },
    Seq {
        first: Box<Node>,
        second: Box<Node>,
    },
    While {
        cond: Box<Node>,
        body: Box<Node>,
    },
    /// Named function visible in its own body and in `scope`.
    Func {
        name: String,
        params: Vec<Param>,
        ret: Ty,
        body: Box<Node>,
        scope: Box<Node>,
    },
    Record {
        fields: Vec<RecordField>,
    },
    GetField {
        record: Box<Node>,
        field: String,
    },
}
