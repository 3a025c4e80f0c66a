//! Translates infix arithmetic expressions over single-letter operands
//! into postfix (Reverse Polish) form using the shunting-yard algorithm.

pub mod translator;
