//! Repository layout checks keeping `src/` and `tests/unit/` in step
