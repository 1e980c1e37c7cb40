//! Parameter counting and threshold checks.

use tracing::debug;

use crate::analysis::{Declaration, ParamGroup};
use crate::config::Limits;

use super::{Issue, VisibilityRule};

/// Total number of names bound across all clauses.
///
/// A variadic tail counts like any other clause: `f(a int, b ...int)` has 2.
pub fn effective_count(groups: &[ParamGroup]) -> usize {
    groups.iter().map(ParamGroup::arity).sum()
}

/// Check every declaration against the threshold for its visibility.
///
/// Issues follow declaration order; a declaration yields at most one issue.
pub fn check_params(
    file: &str,
    declarations: &[Declaration],
    limits: &Limits,
    rule: &dyn VisibilityRule,
) -> Vec<Issue> {
    declarations
        .iter()
        .filter_map(|decl| check_declaration(file, decl, limits, rule))
        .collect()
}

fn check_declaration(
    file: &str,
    decl: &Declaration,
    limits: &Limits,
    rule: &dyn VisibilityRule,
) -> Option<Issue> {
    let visibility = rule.classify(&decl.name);
    let limit = limits.threshold(visibility)?;
    let count = effective_count(&decl.params);

    if count <= limit {
        return None;
    }

    debug!(
        file,
        name = %decl.qualified_name(),
        count,
        limit,
        "parameter limit exceeded"
    );

    Some(Issue {
        file: file.to_string(),
        name: decl.name.clone(),
        kind: decl.kind,
        visibility,
        count,
        limit,
        line: decl.span.start_line,
        column: decl.span.start_col,
    })
}
