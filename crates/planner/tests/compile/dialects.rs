use planner::SqlDriver;

use super::helpers::*;

#[test]
fn test_bool_comparison_differs_only_in_syntax() {
    let sqlite = compile_ok(SqlDriver::Sqlite, "memo", "pinned == true");
    let mysql = compile_ok(SqlDriver::MySql, "memo", "pinned == true");
    let postgres = compile_ok(SqlDriver::Postgres, "memo", "pinned == true");

    assert_eq!(sqlite.sql, "`pinned` = 1");
    assert_eq!(mysql.sql, "`pinned` = TRUE");
    assert_eq!(postgres.sql, r#""pinned" = TRUE"#);
    assert!(sqlite.args.is_empty() && mysql.args.is_empty() && postgres.args.is_empty());
}

#[test]
fn test_timestamp_encodings() {
    let filter = "updated_ts <= 1700000000";

    assert_eq!(
        compile_ok(SqlDriver::Sqlite, "user", filter).sql,
        "`updated_ts` <= 1700000000"
    );
    assert_eq!(
        compile_ok(SqlDriver::MySql, "user", filter).sql,
        "`updated_ts` <= FROM_UNIXTIME(1700000000)"
    );
    assert_eq!(
        compile_ok(SqlDriver::Postgres, "user", filter).sql,
        r#""updated_ts" <= TO_TIMESTAMP(1700000000)"#
    );
}

#[test]
fn test_placeholders_per_dialect() {
    let filter = r#"email == "a@b.c" || nickname == "bob""#;

    assert_eq!(
        compile_ok(SqlDriver::Sqlite, "user", filter).sql,
        "`email` = ? OR `nickname` = ?"
    );
    assert_eq!(
        compile_ok(SqlDriver::Postgres, "user", filter).sql,
        r#""email" = $1 OR "nickname" = $2"#
    );
}

#[test]
fn test_like_escape_clause() {
    let filter = r#"filename contains "report""#;

    assert_eq!(
        compile_ok(SqlDriver::Sqlite, "attachment", filter).sql,
        r"`filename` LIKE ? ESCAPE '\'"
    );
    assert_eq!(
        compile_ok(SqlDriver::MySql, "attachment", filter).sql,
        "`filename` LIKE ?"
    );
}

#[test]
fn test_args_identical_across_dialects() {
    let filter = r#"uid == "abc" && type in ("image/png", "image/jpeg") && size > 1024"#;
    let args: Vec<_> = DRIVERS
        .iter()
        .map(|d| compile_ok(*d, "attachment", filter).args)
        .collect();

    assert_eq!(args[0], args[1]);
    assert_eq!(args[1], args[2]);
    assert_eq!(args[0].len(), 4);
}

#[test]
fn test_driver_lookup() {
    let registry = registry();

    for name in ["sqlite", "MYSQL", "postgres", "PostgreSQL"] {
        assert!(planner::FilterCompiler::for_driver(&registry, name).is_ok(), "{name}");
    }
    assert!(planner::FilterCompiler::for_driver(&registry, "sqlserver").is_err());
}
