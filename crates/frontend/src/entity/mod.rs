//! Generic CRUD screens, driven by an `EntitySchema`

pub mod ui;
