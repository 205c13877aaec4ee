//! V001: emission_factors, activity_data, human_population.

pub const MIGRATION_SQL: &str = r#"
-- One conversion factor per source type; admin writes upsert.
CREATE TABLE IF NOT EXISTS emission_factors (
    source_type TEXT PRIMARY KEY,
    factor REAL NOT NULL CHECK (factor >= 0),
    factor_unit TEXT NOT NULL
) STRICT;

-- Raw readings. Not unique per (date, source_type); every row contributes.
-- source_type is not a foreign key: rows without a factor are kept and
-- dropped by the reporting join.
CREATE TABLE IF NOT EXISTS activity_data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    source_type TEXT NOT NULL,
    raw_value REAL NOT NULL CHECK (raw_value >= 0),
    unit TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_activity_date ON activity_data(date);
CREATE INDEX IF NOT EXISTS idx_activity_source ON activity_data(source_type);

-- One row per campus day. total_count is derived, never written.
CREATE TABLE IF NOT EXISTS human_population (
    date TEXT PRIMARY KEY,
    student_count INTEGER NOT NULL CHECK (student_count >= 0),
    staff_count INTEGER NOT NULL CHECK (staff_count >= 0),
    total_count INTEGER GENERATED ALWAYS AS (student_count + staff_count) STORED
) STRICT;
"#;
