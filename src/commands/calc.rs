use crate::calc::evaluate;
use crate::commands::Out;
use crate::error::{ErrorType, IntoResult};
use crate::Result;
use anyhow::Context;

/// Evaluates an arithmetic expression.
///
/// # Errors
/// - `ErrorType::Expression` if the expression is empty, malformed, or divides by zero.
pub fn calculate(expression: &str) -> Result<Out<f64>> {
    let value = evaluate(expression)
        .with_context(|| format!("Unable to evaluate '{}'", expression.trim()))
        .pub_result(ErrorType::Expression)?;
    Ok(Out::new(format!("Result: {value}"), value))
}
