//! divide() operator - divides a number by another number

use crate::evaluator::{EvaluationContext, EvaluationError, EvaluationResult};
use crate::model::{TypeInfo, Value};
use crate::registry::args::{ArgReader, FieldArgs};
use crate::registry::config::RegistryConfig;
use crate::registry::operator::OperatorFunction;
use crate::registry::signature::{ArgSpec, OperatorDescriptor};

/// divide() operator - divides a number by another number
pub struct DivideFunction;

impl OperatorFunction for DivideFunction {
    fn name(&self) -> &'static str {
        "divide"
    }
    fn human_friendly_name(&self) -> &str {
        "Divide"
    }
    fn descriptor(&self) -> &OperatorDescriptor {
        static DESCRIPTOR: std::sync::LazyLock<OperatorDescriptor> =
            std::sync::LazyLock::new(|| {
                OperatorDescriptor::new(
                    "divide",
                    vec![
                        ArgSpec::required("number", TypeInfo::Float, "Number to divide"),
                        ArgSpec::required("by", TypeInfo::Float, "The division operandum"),
                    ],
                    TypeInfo::Float,
                    "Divide a number by another number",
                )
            });
        &DESCRIPTOR
    }

    fn validate(&self, args: &FieldArgs, _config: &RegistryConfig) -> Option<String> {
        match args.literal("by").and_then(Value::as_f64) {
            Some(by) if by == 0.0 => Some("Cannot divide by 0".to_string()),
            _ => None,
        }
    }

    fn evaluate(&self, args: &FieldArgs, _context: &EvaluationContext<'_>) -> EvaluationResult<Value> {
        let reader = ArgReader::new(self.name(), args);
        let number = reader.float("number")?;
        let by = reader.float("by")?;
        if by == 0.0 {
            return Err(EvaluationError::DivisionByZero {
                operator: self.name().to_string(),
            });
        }
        Ok(Value::Float(number / by))
    }
}
