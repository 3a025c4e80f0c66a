use crate::translator::classifier::{classify, TokenClass};
use crate::translator::operator::Operator;
use crate::translator::sink::Sink;
use crate::translator::stack::OperatorStack;
use anyhow::{bail, Result};

/// Translates the given infix expression into postfix form, emitting
/// letters and operators to the sink in postfix order followed by a line
/// terminator.
///
/// # Arguments
///
/// * `expression`: The infix expression, one character per token.
/// * `sink`: Receives the translation; after an error it holds the output
///   produced up to the fault.
///
/// returns: Nothing on success, the first fault otherwise. Translation
/// stops at the first fault and does not recover.
pub fn convert(expression: &str, sink: &mut impl Sink) -> Result<()> {
    let mut stack = OperatorStack::new();
    let mut characters = expression.chars();

    loop {
        match classify(characters.next()) {
            TokenClass::End => {
                handle_end(&mut stack, sink);
                return Ok(());
            }
            TokenClass::Letter(letter) => sink.write_char(letter),
            TokenClass::AddSub(operator) => handle_add_sub(&mut stack, sink, operator)?,
            TokenClass::MulDiv(operator) => handle_mul_div(&mut stack, sink, operator)?,
            TokenClass::Open => stack.open_scope()?,
            TokenClass::Close => handle_close_bracket(&mut stack, sink),
            TokenClass::Error(character) => {
                bail!("Unrecognized character '{}' in the expression", character)
            }
        }
    }
}

/// Drains the outermost scope and terminates the output line. A scope
/// holds at most two operators, so two pops always suffice.
fn handle_end(stack: &mut OperatorStack, sink: &mut impl Sink) {
    emit(sink, stack.pop_any());
    emit(sink, stack.pop_any());
    sink.write_line();
}

/// An additive operator flushes everything stacked in the current scope,
/// at most a multiplicative operator above an additive one, before being
/// pushed. Flushing first keeps equal-precedence operators
/// left-associative.
fn handle_add_sub(
    stack: &mut OperatorStack,
    sink: &mut impl Sink,
    operator: Operator,
) -> Result<()> {
    emit(sink, stack.pop_any());
    emit(sink, stack.pop_any());
    stack.push(operator)
}

/// A multiplicative operator flushes only a same-precedence operator,
/// leaving a stacked additive operator beneath it.
fn handle_mul_div(
    stack: &mut OperatorStack,
    sink: &mut impl Sink,
    operator: Operator,
) -> Result<()> {
    emit(sink, stack.pop_mul_div());
    stack.push(operator)
}

/// A closing bracket drains the operators of its scope, then discards the
/// scope marker left by the matching opening bracket.
fn handle_close_bracket(stack: &mut OperatorStack, sink: &mut impl Sink) {
    emit(sink, stack.pop_any());
    emit(sink, stack.pop_any());
    stack.drop_sentinel();
}

/// A pop that stopped at a scope boundary yields nothing and writes
/// nothing; only letters and operators reach the output.
fn emit(sink: &mut impl Sink, operator: Option<Operator>) {
    if let Some(operator) = operator {
        sink.write_char(operator.symbol());
    }
}
