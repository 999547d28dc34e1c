use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which controller consumes hand gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionMode {
    #[default]
    Drag,
    Rotate,
    Zoom,
}

impl InteractionMode {
    pub const ALL: [InteractionMode; 3] = [Self::Drag, Self::Rotate, Self::Zoom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drag => "drag",
            Self::Rotate => "rotate",
            Self::Zoom => "zoom",
        }
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown interaction mode `{0}`")]
pub struct ParseModeError(pub String);

impl FromStr for InteractionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseModeError(name.to_string()))
    }
}

/// Holder of the single current mode. Only the engine's transition function
/// commits a new value, after it has reset per-hand and controller state.
#[derive(Clone, Debug, Default)]
pub struct ModeMachine {
    current: InteractionMode,
}

impl ModeMachine {
    pub fn current(&self) -> InteractionMode {
        self.current
    }

    /// Whether moving to `target` is a real transition.
    pub fn changes_to(&self, target: InteractionMode) -> bool {
        self.current != target
    }

    pub(crate) fn commit(&mut self, target: InteractionMode) -> InteractionMode {
        std::mem::replace(&mut self.current, target)
    }
}
