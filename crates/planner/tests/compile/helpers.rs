use model::{core::value::Value, resource::registry::AttributeRegistry};
use planner::{CompiledFilter, FilterCompiler, FilterError, SqlDriver};

pub const DRIVERS: [SqlDriver; 3] = [SqlDriver::Sqlite, SqlDriver::MySql, SqlDriver::Postgres];

pub fn registry() -> AttributeRegistry {
    AttributeRegistry::builtin().expect("builtin registry")
}

pub fn compile_with(
    driver: SqlDriver,
    resource: &str,
    filter: &str,
) -> Result<CompiledFilter, FilterError> {
    let registry = registry();
    FilterCompiler::new(&registry, driver.dialect()).compile(resource, filter)
}

pub fn compile_ok(driver: SqlDriver, resource: &str, filter: &str) -> CompiledFilter {
    compile_with(driver, resource, filter)
        .unwrap_or_else(|e| panic!("{filter:?} failed on {driver}: {e}"))
}

pub fn pg(resource: &str, filter: &str) -> CompiledFilter {
    compile_ok(SqlDriver::Postgres, resource, filter)
}

pub fn string(s: &str) -> Value {
    Value::String(s.to_string())
}

pub fn enumv(s: &str) -> Value {
    Value::Enum(s.to_string())
}

/// Positional placeholders in a PostgreSQL fragment, in textual order.
pub fn pg_placeholders(sql: &str) -> Vec<usize> {
    let bytes = sql.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' {
            let digits: String = sql[i + 1..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            if let Ok(n) = digits.parse() {
                found.push(n);
            }
            i += digits.len();
        }
        i += 1;
    }
    found
}
