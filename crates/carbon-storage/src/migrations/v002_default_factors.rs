//! V002: seed the default factor table. Existing rows are left alone.

pub const MIGRATION_SQL: &str = r#"
INSERT OR IGNORE INTO emission_factors (source_type, factor, factor_unit) VALUES
    ('electricity', 0.708, 'kg_co2e_per_kwh'),
    ('bus_diesel', 2.68, 'kg_co2e_per_liter'),
    ('canteen_lpg', 2.93, 'kg_co2e_per_kg'),
    ('waste_landfill', 1.25, 'kg_co2e_per_kg'),
    ('human_daily', 1.0, 'kg_co2e_per_person_per_day');
"#;
