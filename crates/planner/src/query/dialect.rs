//! Defines the `Dialect` trait for database-specific SQL syntax.

use crate::error::FilterError;
use serde::Serialize;
use std::{fmt, str::FromStr};

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a column name) in the correct quotation
    /// marks for the dialect. Embedded quote characters are doubled.
    ///
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL and SQLite use backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for the `ordinal`-th bound argument (1-based).
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL and SQLite use `?`
    fn get_placeholder(&self, ordinal: usize) -> String;

    /// SQL text for a boolean written inline.
    fn encode_bool(&self, value: bool) -> String;

    /// SQL text for a unix-seconds timestamp written inline.
    fn encode_timestamp(&self, secs: i64) -> String;

    /// Appended after `LIKE ?` when the dialect needs the backslash escape
    /// character spelled out.
    fn like_escape_clause(&self) -> &'static str {
        ""
    }

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, ordinal: usize) -> String {
        format!("${ordinal}")
    }

    fn encode_bool(&self, value: bool) -> String {
        let text = if value { "TRUE" } else { "FALSE" };
        text.into()
    }

    fn encode_timestamp(&self, secs: i64) -> String {
        format!("TO_TIMESTAMP({secs})")
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn get_placeholder(&self, _ordinal: usize) -> String {
        "?".into()
    }

    fn encode_bool(&self, value: bool) -> String {
        let text = if value { "TRUE" } else { "FALSE" };
        text.into()
    }

    fn encode_timestamp(&self, secs: i64) -> String {
        format!("FROM_UNIXTIME({secs})")
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}

/// Timestamps live in SQLite as plain integer seconds and booleans as 0/1.
#[derive(Debug, Clone)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn get_placeholder(&self, _ordinal: usize) -> String {
        "?".into()
    }

    fn encode_bool(&self, value: bool) -> String {
        let text = if value { "1" } else { "0" };
        text.into()
    }

    fn encode_timestamp(&self, secs: i64) -> String {
        secs.to_string()
    }

    fn like_escape_clause(&self) -> &'static str {
        r" ESCAPE '\'"
    }

    fn name(&self) -> String {
        "SQLite".into()
    }
}

static SQLITE: Sqlite = Sqlite;
static MYSQL: MySql = MySql;
static POSTGRES: Postgres = Postgres;

/// Database driver a filter is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDriver {
    Sqlite,
    MySql,
    Postgres,
}

impl SqlDriver {
    /// Shared dialect for this driver.
    pub fn dialect(&self) -> &'static dyn Dialect {
        match self {
            SqlDriver::Sqlite => &SQLITE,
            SqlDriver::MySql => &MYSQL,
            SqlDriver::Postgres => &POSTGRES,
        }
    }
}

impl FromStr for SqlDriver {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(SqlDriver::Sqlite),
            "mysql" => Ok(SqlDriver::MySql),
            "postgres" | "postgresql" => Ok(SqlDriver::Postgres),
            _ => Err(FilterError::UnsupportedDriver(s.to_string())),
        }
    }
}

impl fmt::Display for SqlDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlDriver::Sqlite => write!(f, "sqlite"),
            SqlDriver::MySql => write!(f, "mysql"),
            SqlDriver::Postgres => write!(f, "postgres"),
        }
    }
}
