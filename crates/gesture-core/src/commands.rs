//! Discrete requests from menu clicks and recognized speech.

use crate::mode::InteractionMode;

/// Request from an asynchronous collaborator. Queued and applied at the start
/// of the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineRequest {
    SetMode(InteractionMode),
    ToggleAutoRotate,
}

const AUTO_ROTATE_PHRASES: &[&str] = &["auto rotate", "auto-rotate", "autorotate", "spin around"];
const DRAG_WORDS: &[&str] = &["drag", "move", "grab"];
const ROTATE_WORDS: &[&str] = &["rotate", "spin", "turn", "orbit"];
const ZOOM_WORDS: &[&str] = &["zoom", "scale", "resize"];

/// Map a speech transcript to a request. Auto-rotate phrases win over the
/// single mode keywords they contain; otherwise the first keyword in the
/// transcript decides.
pub fn parse_voice_command(transcript: &str) -> Option<EngineRequest> {
    let text = transcript.to_lowercase();
    if AUTO_ROTATE_PHRASES.iter().any(|p| text.contains(p)) {
        return Some(EngineRequest::ToggleAutoRotate);
    }
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .find_map(|word| {
            if DRAG_WORDS.contains(&word) {
                Some(InteractionMode::Drag)
            } else if ROTATE_WORDS.contains(&word) {
                Some(InteractionMode::Rotate)
            } else if ZOOM_WORDS.contains(&word) {
                Some(InteractionMode::Zoom)
            } else {
                None
            }
        })
        .map(EngineRequest::SetMode)
}
