//! v001: cause and effect nodes plus the cause→effect relationship table.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS causes (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS effects (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS cause_effects (
    cause_id  INTEGER NOT NULL REFERENCES causes(id) ON DELETE CASCADE,
    effect_id INTEGER NOT NULL REFERENCES effects(id) ON DELETE CASCADE,
    PRIMARY KEY (cause_id, effect_id)
);

CREATE INDEX IF NOT EXISTS idx_cause_effects_effect ON cause_effects(effect_id);
";
