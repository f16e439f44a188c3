/// DOM hooks and front-end settings.
///
/// Element ids the page must provide. Everything inside `#pitch-items`,
/// `#zone-preview` and `#saved-list` is regenerated from the board on each change.
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Pitch container (pointer events, bounding rect) and its generated layers
pub const PITCH_ID: &str = "pitch";
pub const PITCH_ITEMS_ID: &str = "pitch-items";
pub const ZONE_PREVIEW_ID: &str = "zone-preview";

// Mode and history controls
pub const BTN_HIGHLIGHT: &str = "btn-highlight";
pub const BTN_DRAW_ZONE: &str = "btn-draw-zone";
pub const BTN_SAVE: &str = "btn-save";
pub const BTN_LOAD: &str = "btn-load";
pub const BTN_UNDO: &str = "btn-undo";
pub const BTN_RESET: &str = "btn-reset";

// Save dialog
pub const SAVE_DIALOG_ID: &str = "save-dialog";
pub const SAVE_NAME_ID: &str = "save-name";
pub const SAVE_SUBMIT_ID: &str = "save-submit";
pub const SAVE_CLOSE_ID: &str = "save-close";

// Load dialog
pub const LOAD_DIALOG_ID: &str = "load-dialog";
pub const LOAD_CLOSE_ID: &str = "load-close";
pub const SAVED_LIST_ID: &str = "saved-list";

// Class toggled on mode buttons while their mode is active
pub const ACTIVE_CLASS: &str = "active";
