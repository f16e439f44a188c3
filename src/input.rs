// Pure input decoding: DOM tags and key names to board commands.
// Kept free of web-sys so host tests can include it directly.

use tactics_core::PointerTarget;

/// Board command bound to a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Undo,
    ToggleHighlight,
    ToggleDrawZone,
    Cancel,
}

/// Row action in the saved-layout list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListAction {
    Load(usize),
    Delete(usize),
}

#[inline]
pub fn command_for_key(key: &str, ctrl_or_meta: bool) -> Option<KeyCommand> {
    match key {
        "z" | "Z" if ctrl_or_meta => Some(KeyCommand::Undo),
        _ if ctrl_or_meta => None,
        "u" | "U" => Some(KeyCommand::Undo),
        "h" | "H" => Some(KeyCommand::ToggleHighlight),
        "d" | "D" => Some(KeyCommand::ToggleDrawZone),
        "Escape" => Some(KeyCommand::Cancel),
        _ => None,
    }
}

/// Shortcuts stay out of the way while the user is typing a layout name.
#[inline]
pub fn is_text_entry(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}

/// Decodes the `data-kind` / `data-id` pair of the element under the
/// pointer. Anything untagged, or tagged without the id it needs, is pitch.
pub fn pointer_target(kind: Option<&str>, id: Option<&str>) -> PointerTarget {
    match (kind, id) {
        (Some("marker"), Some(id)) => PointerTarget::Marker(id.to_string()),
        (Some("zone"), Some(id)) => PointerTarget::Zone(id.to_string()),
        (Some("ball"), _) => PointerTarget::Ball,
        _ => PointerTarget::Pitch,
    }
}

pub fn list_action(action: Option<&str>, index: Option<&str>) -> Option<ListAction> {
    let index = index?.parse::<usize>().ok()?;
    match action? {
        "load" => Some(ListAction::Load(index)),
        "delete" => Some(ListAction::Delete(index)),
        _ => None,
    }
}
