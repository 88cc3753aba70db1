//! Interchange walking speed for route planning.

use std::fmt;

use super::error::InputError;

/// How quickly the traveller changes between legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

const SPEEDS: [(&str, ChangeSpeed); 3] = [
    ("slow", ChangeSpeed::Slow),
    ("normal", ChangeSpeed::Normal),
    ("fast", ChangeSpeed::Fast),
];

impl ChangeSpeed {
    /// Returns the API's name for this speed.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeSpeed::Slow => "SLOW",
            ChangeSpeed::Normal => "NORMAL",
            ChangeSpeed::Fast => "FAST",
        }
    }
}

impl fmt::Display for ChangeSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve `--speed`, case-insensitively. Absent means [`ChangeSpeed::Normal`].
pub fn resolve_speed(speed: Option<&str>) -> Result<ChangeSpeed, InputError> {
    let Some(speed) = speed else {
        return Ok(ChangeSpeed::default());
    };

    let wanted = speed.to_lowercase();
    SPEEDS
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, s)| *s)
        .ok_or_else(|| InputError::UnknownSpeed {
            value: speed.to_string(),
            valid: SPEEDS.map(|(name, _)| name).join(", "),
        })
}
