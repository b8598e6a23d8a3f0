//! Built-in kinds

use crate::definition::KindDefinition;
use crate::error::Result;
use crate::kind::Kind;

const CUBE: &str = include_str!("../kinds/cube.ron");

/// Names accepted by [`builtin`]
pub const BUILTIN_NAMES: &[&str] = &["cube"];

/// The "Cube": three phases of 5, 20 and 50 days
pub fn cube() -> Result<Kind> {
    Kind::from_definition(&KindDefinition::from_ron_str(CUBE)?)
}

/// Look up a built-in kind by name (case insensitive)
pub fn builtin(name: &str) -> Option<Result<Kind>> {
    match name.to_lowercase().as_str() {
        "cube" => Some(cube()),
        _ => None,
    }
}
