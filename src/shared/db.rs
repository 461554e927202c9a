use sea_orm::DbErr;

/// True when Postgres rejected a write on a unique index (SQLSTATE 23505).
pub fn is_unique_violation(err: &DbErr) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

/// Same check, restricted to errors that name `marker` (an index or column).
pub fn is_unique_violation_on(err: &DbErr, marker: &str) -> bool {
    is_unique_violation(err) && err.to_string().to_lowercase().contains(marker)
}

/// `%keyword%` pattern for ILIKE with the LIKE wildcards in `keyword`
/// escaped, so user input only ever matches literally.
pub fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
