//! Operator and numeric-kind tags carried by expression nodes.

use std::fmt;

use tern_core::TokenKind;

/// Numeric kind of a NaN marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumKind {
    Int,
    Float,
}

impl NumKind {
    /// Float wins: any float-kinded side makes the result float-kinded.
    pub fn join(self, other: NumKind) -> NumKind {
        if self == NumKind::Float || other == NumKind::Float {
            NumKind::Float
        } else {
            NumKind::Int
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl ArithOp {
    pub fn token(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Star,
            Self::Div => TokenKind::Slash,
            Self::Rem => TokenKind::Percent,
        }
    }

    /// Division and remainder yield NaN on a zero divisor.
    pub fn is_division(self) -> bool {
        matches!(self, Self::Div | Self::Rem)
    }
}

impl CmpOp {
    pub fn token(self) -> TokenKind {
        match self {
            Self::Lt => TokenKind::Lt,
            Self::Le => TokenKind::LtEq,
            Self::Gt => TokenKind::Gt,
            Self::Ge => TokenKind::GtEq,
            Self::Eq => TokenKind::EqEq,
            Self::Ne => TokenKind::BangEq,
        }
    }
}

/// The token does not name an operator of the requested family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not an operator of this kind")]
pub struct WrongOperator(pub TokenKind);

impl TryFrom<TokenKind> for ArithOp {
    type Error = WrongOperator;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        Ok(match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,
            TokenKind::Percent => Self::Rem,
            other => return Err(WrongOperator(other)),
        })
    }
}

impl TryFrom<TokenKind> for CmpOp {
    type Error = WrongOperator;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        Ok(match kind {
            TokenKind::Lt => Self::Lt,
            TokenKind::LtEq => Self::Le,
            TokenKind::Gt => Self::Gt,
            TokenKind::GtEq => Self::Ge,
            TokenKind::EqEq => Self::Eq,
            TokenKind::BangEq => Self::Ne,
            other => return Err(WrongOperator(other)),
        })
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token(), f)
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token(), f)
    }
}
