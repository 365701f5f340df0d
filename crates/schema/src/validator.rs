//! Contract checking.
//!
//! [`check`] walks a contract field by field and collects **every** violation
//! instead of stopping at the first one, so a caller can fix all problems in a
//! single round trip. Violations come out in contract declaration order, then
//! rule order, then element index.
//!
//! Per field:
//! - absent or `null`: one `required` violation if the field is required,
//!   otherwise the field is skipped entirely;
//! - a failed `required` or any type mismatch ends that field's checks;
//! - other failures are recorded and the remaining rules still run.

use serde_json::{Map, Value};

use talentpitch_core::{Violation, Violations};

use crate::contract::Contract;
use crate::rule::{Failure, Rule};

/// Check `fields` against `contract`.
///
/// Fields the contract does not mention are ignored.
pub fn check(fields: &Map<String, Value>, contract: &Contract) -> Result<(), Violations> {
    let mut violations = Violations::new();
    for field in contract.fields() {
        check_value(
            field.name(),
            None,
            fields.get(field.name()),
            field.rules(),
            &mut violations,
        );
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_value(
    field: &str,
    element: Option<usize>,
    value: Option<&Value>,
    rules: &[Rule],
    out: &mut Violations,
) {
    // List elements are always checked, even when null; only whole fields are optional.
    let value = match value {
        None => None,
        Some(Value::Null) if element.is_none() => None,
        Some(v) => Some(v),
    };
    let Some(value) = value else {
        if rules.contains(&Rule::Required) {
            out.push(violation(field, element, &Rule::Required, "value is required"));
        }
        return;
    };

    for rule in rules {
        match rule.check(value) {
            Ok(()) => {
                if let (Rule::Dive(inner), Value::Array(items)) = (rule, value) {
                    for (idx, item) in items.iter().enumerate() {
                        check_value(field, Some(idx), Some(item), inner, out);
                    }
                }
            }
            Err(failure) => {
                let stop = matches!(failure, Failure::Mismatch(_)) || *rule == Rule::Required;
                out.push(violation(field, element, rule, failure.reason()));
                if stop {
                    return;
                }
            }
        }
    }
}

fn violation(field: &str, element: Option<usize>, rule: &Rule, reason: &str) -> Violation {
    let v = Violation::new(field, rule.name(), reason);
    match element {
        Some(idx) => v.at_element(idx),
        None => v,
    }
}
