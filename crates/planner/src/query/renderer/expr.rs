use crate::{
    error::CompileError,
    query::renderer::{ConvertContext, Render},
};
use filter_syntax::ast::operator::Operator;
use model::{
    core::value::Value,
    filter::typed::{ResolvedField, ValidatedExpr, ValidatedExprKind},
};

impl Render for ValidatedExpr {
    fn render(&self, ctx: &mut ConvertContext) -> Result<(), CompileError> {
        match &self.kind {
            ValidatedExprKind::Comparison { field, op, value } => {
                render_comparison(field, *op, value, ctx)
            }
            ValidatedExprKind::Membership { field, op, values } => {
                render_membership(field, *op, values, ctx)
            }
            ValidatedExprKind::And { .. } | ValidatedExprKind::Or { .. } => render_chain(self, ctx),
            ValidatedExprKind::Not { inner } => {
                ctx.enter()?;
                ctx.sql.push_str("NOT (");
                inner.render(ctx)?;
                ctx.sql.push(')');
                ctx.leave();
                Ok(())
            }
        }
    }
}

/// Renders a run of one connective down its left spine without recursing.
/// `a AND b AND c` comes out as `(a AND b) AND c`.
fn render_chain(expr: &ValidatedExpr, ctx: &mut ConvertContext) -> Result<(), CompileError> {
    let mut rights = Vec::new();
    let mut node = expr;
    let mut is_or = false;
    while let Some((or, left, right)) = split(node) {
        if !rights.is_empty() && or != is_or {
            break;
        }
        is_or = or;
        rights.push(right);
        node = left;
    }

    let joiner = if is_or { " OR " } else { " AND " };
    for _ in 1..rights.len() {
        ctx.sql.push('(');
    }
    render_operand(node, is_or, ctx)?;
    for (i, right) in rights.iter().enumerate().rev() {
        ctx.sql.push_str(joiner);
        render_operand(right, is_or, ctx)?;
        if i > 0 {
            ctx.sql.push(')');
        }
    }
    Ok(())
}

/// Logical operands are always parenthesised. They count toward the depth
/// limit unless the source could have written them without parentheses.
fn render_operand(
    expr: &ValidatedExpr,
    parent_is_or: bool,
    ctx: &mut ConvertContext,
) -> Result<(), CompileError> {
    let Some((is_or, ..)) = split(expr) else {
        return expr.render(ctx);
    };

    let nests = is_or || !parent_is_or;
    if nests {
        ctx.enter()?;
    }
    ctx.sql.push('(');
    expr.render(ctx)?;
    ctx.sql.push(')');
    if nests {
        ctx.leave();
    }
    Ok(())
}

fn split(expr: &ValidatedExpr) -> Option<(bool, &ValidatedExpr, &ValidatedExpr)> {
    match &expr.kind {
        ValidatedExprKind::And { left, right } => Some((false, &**left, &**right)),
        ValidatedExprKind::Or { left, right } => Some((true, &**left, &**right)),
        _ => None,
    }
}

fn render_comparison(
    field: &ResolvedField,
    op: Operator,
    value: &Value,
    ctx: &mut ConvertContext,
) -> Result<(), CompileError> {
    check_value(field, value)?;
    if !field.value_type.supports(op) {
        return Err(invariant(format!(
            "operator '{op}' reached the renderer for {} field '{}'",
            field.value_type, field.name
        )));
    }

    if op == Operator::Contains {
        let Value::String(needle) = value else {
            return Err(invariant(format!(
                "'contains' on field '{}' carries a non-string value",
                field.name
            )));
        };
        ctx.push_identifier(&field.column);
        ctx.sql.push_str(" LIKE ");
        ctx.add_param(Value::String(format!("%{}%", escape_like(needle))));
        ctx.sql.push_str(ctx.dialect.like_escape_clause());
        return Ok(());
    }

    let op_str = match op {
        Operator::Eq => " = ",
        Operator::Ne => " <> ",
        Operator::Lt => " < ",
        Operator::Le => " <= ",
        Operator::Gt => " > ",
        Operator::Ge => " >= ",
        Operator::In | Operator::NotIn | Operator::Contains => {
            return Err(invariant(format!(
                "comparison on field '{}' carries list operator '{op}'",
                field.name
            )));
        }
    };

    ctx.push_identifier(&field.column);
    ctx.sql.push_str(op_str);
    ctx.push_value(value);
    Ok(())
}

fn render_membership(
    field: &ResolvedField,
    op: Operator,
    values: &[Value],
    ctx: &mut ConvertContext,
) -> Result<(), CompileError> {
    let keyword = match op {
        Operator::In => " IN (",
        Operator::NotIn => " NOT IN (",
        other => {
            return Err(invariant(format!(
                "membership on field '{}' carries operator '{other}'",
                field.name
            )));
        }
    };
    if values.is_empty() {
        return Err(invariant(format!(
            "empty '{op}' list on field '{}'",
            field.name
        )));
    }

    ctx.push_identifier(&field.column);
    ctx.sql.push_str(keyword);
    for (i, value) in values.iter().enumerate() {
        check_value(field, value)?;
        if i > 0 {
            ctx.sql.push_str(", ");
        }
        ctx.push_value(value);
    }
    ctx.sql.push(')');
    Ok(())
}

fn check_value(field: &ResolvedField, value: &Value) -> Result<(), CompileError> {
    if value.value_type() == field.value_type {
        return Ok(());
    }
    Err(invariant(format!(
        "{} value {value} on {} field '{}'",
        value.value_type(),
        field.value_type,
        field.name
    )))
}

fn invariant(message: String) -> CompileError {
    CompileError::InvariantViolation(message)
}

/// Escapes LIKE wildcards so the needle matches literally, with `\` as the
/// escape character.
pub fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
