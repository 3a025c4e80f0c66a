use std::fmt;
use std::fmt::Formatter;

/// An arithmetic operator recognized by the translator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// The two precedence classes of the grammar. Multiplicative operators
/// bind tighter than additive ones; brackets override both.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    AddSub,
    MulDiv,
}

impl Operator {
    /// The character this operator is written as in an expression.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            Operator::Add | Operator::Subtract => Precedence::AddSub,
            Operator::Multiply | Operator::Divide => Precedence::MulDiv,
        }
    }

    pub fn is_multiplicative(&self) -> bool {
        self.precedence() == Precedence::MulDiv
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplicative_precedence_is_higher_than_additive() {
        assert!(Precedence::MulDiv > Precedence::AddSub);
    }

    #[test]
    fn only_multiplicative_operators_report_as_multiplicative() {
        assert!(Operator::Multiply.is_multiplicative());
        assert!(Operator::Divide.is_multiplicative());
        assert!(!Operator::Add.is_multiplicative());
        assert!(!Operator::Subtract.is_multiplicative());
    }

    #[test]
    fn operators_display_as_their_symbols() {
        assert_eq!(Operator::Add.to_string(), "+");
        assert_eq!(Operator::Divide.to_string(), "/");
    }
}
