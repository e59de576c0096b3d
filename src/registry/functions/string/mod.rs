//! String operators: formatting, concatenation and case transforms

mod concat;
mod format;
mod lower;
mod sprintf;
mod title;
mod upper;

pub use concat::ConcatFunction;
pub use format::{FormatError, format_printf};
pub use lower::LowerCaseFunction;
pub use sprintf::SprintfFunction;
pub use title::TitleCaseFunction;
pub use upper::UpperCaseFunction;

use crate::model::TypeInfo;
use crate::registry::signature::ArgSpec;

/// The single `text` argument shared by the case operators
fn text_arg() -> ArgSpec {
    ArgSpec::required("text", TypeInfo::String, "The string to be transformed")
}
