pub mod classifier;
pub mod converter;
pub mod operator;
pub mod sink;
pub mod stack;

use anyhow::Result;

pub use converter::convert;
pub use sink::{Sink, StringSink};

/// Translates the given infix expression into its postfix form.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, composed of the
///   letters `a`-`z`, the operators `+ - * /` and round brackets.
///
/// returns: The postfix translation, terminated by a newline.
///
/// # Examples
///
/// ```
/// use postfix_translator::translator::translate;
///
/// let postfix = translate("a+b*c").unwrap();
/// assert_eq!(postfix, "abc*+\n");
/// ```
pub fn translate(expression: &str) -> Result<String> {
    let mut sink = StringSink::new();
    converter::convert(expression, &mut sink)?;
    sink.into_string()
}

#[cfg(test)]
mod translator_tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    #[parameterized(
        expression = {
            "a+b",
            "a+b*c",
            "a*b+c",
            "(a+b)*c",
            "a+(b+c*d)*e+f/g+h",
        },
        expected_postfix = {
            "ab+",
            "abc*+",
            "ab*c+",
            "ab+c*",
            "abcd*+e*+fg/+h+",
        }
    )]
    fn translate_returns_expected_postfix(expression: &str, expected_postfix: &str) {
        use pretty_assertions::assert_eq;

        let actual = translate(expression).unwrap();
        assert_eq!(actual, format!("{}\n", expected_postfix));
    }

    #[test]
    fn single_letter_translates_to_itself() {
        assert_eq!(translate("x").unwrap(), "x\n");
    }

    #[test]
    fn empty_input_yields_an_empty_output_line() {
        assert_eq!(translate("").unwrap(), "\n");
    }

    #[test]
    fn unrecognized_character_stops_translation() {
        translate("a?b").expect_err("Should reject the unrecognized character");
    }

    #[test]
    fn translation_is_deterministic() {
        let first = translate("a+(b+c*d)*e+f/g+h").unwrap();
        let second = translate("a+(b+c*d)*e+f/g+h").unwrap();
        assert_eq!(first, second);
    }
}
