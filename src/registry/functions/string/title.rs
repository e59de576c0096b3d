//! titleCase() operator - capitalizes the first letter of each word

use crate::evaluator::{EvaluationContext, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::OperatorDescriptor;

/// titleCase() operator - capitalizes the first letter of each word
pub struct TitleCaseFunction;

impl OperatorFunction for TitleCaseFunction {
    fn name(&self) -> &'static str {
        "titleCase"
    }
    fn human_friendly_name(&self) -> &str {
        "Title Case"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "titleCase",
                    vec![super::text_arg()],
                    TypeInfo::String,
                    "Transform a string to title case",
                )
            });
        &DESCRIPTOR
    }

    fn documentation(&self) -> &str {
        "Uppercases the first character of every whitespace-delimited word. The remaining characters are left as they are."
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let text = ArgReader::new(self.name(), args).string("text")?;
        Ok(Value::String(title_case(&text)))
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("  two  spaces\tand tab"), "  Two  Spaces\tAnd Tab");
        assert_eq!(title_case("mIxEd cASE"), "MIxEd CASE");
        assert_eq!(title_case("élan vital"), "Élan Vital");
        assert_eq!(title_case(""), "");
    }
}
