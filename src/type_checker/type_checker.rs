use super::types::ValueType;

/// Type-compatibility rules. Stateless; every check is an associated function.
///
/// Only narrowing a FLOAT into an
/// INTEGER variable is refused on assignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeChecker;

impl TypeChecker {
    pub fn check_assignment(target_type: ValueType, value_type: ValueType) -> bool {
        !(target_type == ValueType::Integer && value_type == ValueType::Float)
    }

    /// Type produced by `left op right`, or `None` if the operands don't mix.
    pub fn result_type_of_op(
        left_type: ValueType,
        op: char,
        right_type: ValueType,
    ) -> Option<ValueType> {
        match (left_type, right_type) {
            (ValueType::Integer, ValueType::Integer) => Some(ValueType::Integer),
            (ValueType::Float, _) | (_, ValueType::Float) => Some(ValueType::Float),
            (ValueType::Char, ValueType::Char) if op == '+' || op == '*' => Some(ValueType::Char),
            _ => None,
        }
    }

    /// Whether `left op right` is allowed.
    ///
    /// CHAR `+` CHAR has a result type but is still refused.
    pub fn check_op(left_type: ValueType, op: char, right_type: ValueType) -> bool {
        if left_type == ValueType::Char && right_type == ValueType::Char && op == '+' {
            return false;
        }

        TypeChecker::result_type_of_op(left_type, op, right_type).is_some()
    }
}
