//! Policy gate — the single allow/deny decision point services consult.

use mealhub_core::error::AppError;

use super::catalog::{AccessRule, Operation, ProtectedTable, rule_for};

/// Answers "may anyone at all attempt this operation, and under which
/// predicate?" for every guarded table.
///
/// The gate rejects `Deny` rules up front; for allowed rules it returns the
/// predicate so the caller can see which row condition the repository SQL
/// must (and does) carry. The row condition itself is evaluated by the
/// store inside the guarded statement, so the decision and the effect are
/// atomic.
#[derive(Debug, Clone, Default)]
pub struct PolicyGate;

impl PolicyGate {
    /// Creates a gate over the built-in catalog.
    pub fn new() -> Self {
        Self
    }

    /// Look up the rule for an operation, rejecting denied pairs.
    ///
    /// Returns `Ok(rule)` when some caller could satisfy the rule, or
    /// `Err(AppError::Forbidden)` when the catalog denies the pair outright.
    pub fn authorize(&self, table: ProtectedTable, op: Operation) -> Result<AccessRule, AppError> {
        let rule = rule_for(table, op);
        if rule.is_deny() {
            tracing::debug!(table = %table, operation = %op, "Operation denied by policy catalog");
            return Err(AppError::forbidden(format!(
                "{op} on {table} is not permitted"
            )));
        }
        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_pairs_rejected() {
        let gate = PolicyGate::new();
        let err = gate
            .authorize(ProtectedTable::Tags, Operation::Insert)
            .unwrap_err();
        assert!(err.is_forbidden());

        let err = gate
            .authorize(ProtectedTable::Profiles, Operation::Delete)
            .unwrap_err();
        assert!(err.is_forbidden());
    }

    #[test]
    fn test_allowed_pairs_return_predicate() {
        let gate = PolicyGate::new();
        assert_eq!(
            gate.authorize(ProtectedTable::Recipes, Operation::Select)
                .unwrap(),
            AccessRule::OwnerOrPublic
        );
        assert_eq!(
            gate.authorize(ProtectedTable::ShoppingLists, Operation::Delete)
                .unwrap(),
            AccessRule::OwnerOnly
        );
    }
}
