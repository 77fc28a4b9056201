use crate::{
    error::{CompileError, FilterError},
    query::{
        dialect::{Dialect, SqlDriver},
        renderer::{ConvertContext, Render},
    },
};
use filter_syntax::parse;
use model::{
    core::value::Value,
    filter::{typed::ValidatedExpr, validator::validate},
    resource::registry::AttributeRegistry,
};
use serde::Serialize;
use tracing::{debug, error};

/// A WHERE fragment (without the `WHERE` keyword) and the arguments to bind
/// to its placeholders, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledFilter {
    pub sql: String,
    pub args: Vec<Value>,
}

/// Parse, validate and render a filter string for one dialect.
///
/// ```ignore
/// let registry = AttributeRegistry::builtin()?;
/// let compiler = FilterCompiler::for_driver(&registry, "postgres")?;
/// let filter = compiler.compile("user", r#"username == "alice""#)?;
/// assert_eq!(filter.sql, r#""username" = $1"#);
/// ```
pub struct FilterCompiler<'r> {
    registry: &'r AttributeRegistry,
    dialect: &'r dyn Dialect,
}

impl<'r> FilterCompiler<'r> {
    pub fn new(registry: &'r AttributeRegistry, dialect: &'r dyn Dialect) -> Self {
        FilterCompiler { registry, dialect }
    }

    pub fn for_driver(registry: &'r AttributeRegistry, driver: &str) -> Result<Self, FilterError> {
        let driver: SqlDriver = driver.parse()?;
        Ok(Self::new(registry, driver.dialect()))
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect
    }

    /// Parses and validates without generating SQL.
    pub fn check(&self, resource: &str, filter: &str) -> Result<ValidatedExpr, FilterError> {
        let expr = parse(filter)?;
        Ok(validate(self.registry, resource, &expr)?)
    }

    pub fn compile(&self, resource: &str, filter: &str) -> Result<CompiledFilter, FilterError> {
        let validated = self.check(resource, filter)?;
        let compiled = compile_expr(&validated, self.dialect)?;

        debug!(
            resource,
            dialect = %self.dialect.name(),
            args = compiled.args.len(),
            "compiled filter"
        );
        Ok(compiled)
    }
}

/// Renders an already validated tree.
pub fn compile_expr(
    expr: &ValidatedExpr,
    dialect: &dyn Dialect,
) -> Result<CompiledFilter, CompileError> {
    let mut ctx = ConvertContext::new(dialect);
    if let Err(err) = expr.render(&mut ctx) {
        error!(dialect = %dialect.name(), error = %err, "failed to render validated filter");
        return Err(err);
    }

    let (sql, args) = ctx.finish();
    Ok(CompiledFilter { sql, args })
}
