//! Builds parameterized SELECT, INSERT, UPDATE, DELETE from a static table definition.

/// Column map for one table. Identifiers come from code only; values are always parameters.
#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub pk: &'static str,
    /// Non-key columns, in the order their values are bound.
    pub columns: &'static [&'static str],
}

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(table: &TableDef) -> String {
    std::iter::once(table.pk)
        .chain(table.columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row. No ORDER BY: callers must not rely on row order.
pub fn select_all(table: &TableDef) -> String {
    format!("SELECT {} FROM {}", column_list(table), quoted(table.name))
}

/// SELECT by primary key. Caller binds the id as `$1`.
pub fn select_by_id(table: &TableDef) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(table),
        quoted(table.name),
        quoted(table.pk)
    )
}

/// INSERT of all non-key columns, returning the generated key.
pub fn insert(table: &TableDef) -> String {
    let cols: Vec<String> = table.columns.iter().map(|c| quoted(c)).collect();
    let placeholders: Vec<String> = (1..=table.columns.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        cols.join(", "),
        placeholders.join(", "),
        quoted(table.pk)
    )
}

/// Full-row UPDATE by key: every non-key column is overwritten. The id is the last parameter.
pub fn update(table: &TableDef) -> String {
    let sets: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quoted(c), i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        quoted(table.name),
        sets.join(", "),
        quoted(table.pk),
        table.columns.len() + 1
    )
}

/// DELETE by key. Caller binds the id as `$1`.
pub fn delete(table: &TableDef) -> String {
    format!("DELETE FROM {} WHERE {} = $1", quoted(table.name), quoted(table.pk))
}
