use crate::translator::operator::Operator;

/// The character class driving the translator's dispatch.
///
/// Exactly one class applies to every possible input position: `End`
/// stands for the end marker and `Error` for any character outside the
/// recognized alphabet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenClass {
    End,
    Letter(char),
    AddSub(Operator),
    MulDiv(Operator),
    Open,
    Close,
    Error(char),
}

/// Classifies a single input position, with `None` as the end marker.
/// Total and side-effect-free.
pub fn classify(input: Option<char>) -> TokenClass {
    match input {
        None => TokenClass::End,
        Some(letter @ 'a'..='z') => TokenClass::Letter(letter),
        Some('+') => TokenClass::AddSub(Operator::Add),
        Some('-') => TokenClass::AddSub(Operator::Subtract),
        Some('*') => TokenClass::MulDiv(Operator::Multiply),
        Some('/') => TokenClass::MulDiv(Operator::Divide),
        Some('(') => TokenClass::Open,
        Some(')') => TokenClass::Close,
        Some(other) => TokenClass::Error(other),
    }
}
