use crate::constants::*;
use crate::dom;
use crate::markup;
use crate::overlay;
use tactics_core::{Board, Dialog, KeyValueStore};
use web_sys as web;

/// Writes the board into the page.
///
/// Each generated layer is only written when its markup differs from the
/// last write. Replacing the pitch layer between pointerdown and click would
/// retarget the click to the pitch, so the zone preview gets a layer of its
/// own and pointer moves during a draw leave the zones alone.
pub struct View {
    document: web::Document,
    pitch_items: web::Element,
    zone_preview: web::Element,
    saved_list: web::Element,
    last_items: String,
    last_preview: String,
    last_saved: String,
    last_dialog: Option<Dialog>,
}

fn write_if_changed(el: &web::Element, last: &mut String, html: String) {
    if html != *last {
        el.set_inner_html(&html);
        *last = html;
    }
}

impl View {
    pub fn new(
        document: web::Document,
        pitch_items: web::Element,
        zone_preview: web::Element,
        saved_list: web::Element,
    ) -> Self {
        Self {
            document,
            pitch_items,
            zone_preview,
            saved_list,
            last_items: String::new(),
            last_preview: String::new(),
            last_saved: String::new(),
            last_dialog: None,
        }
    }

    pub fn render<S: KeyValueStore>(&mut self, board: &Board<S>) {
        let mode = board.mode();
        write_if_changed(
            &self.pitch_items,
            &mut self.last_items,
            markup::pitch_items(board.scene(), mode.drag_target()),
        );
        write_if_changed(
            &self.zone_preview,
            &mut self.last_preview,
            markup::zone_preview(mode.zone_draft()),
        );
        write_if_changed(
            &self.saved_list,
            &mut self.last_saved,
            markup::saved_list(board.saved()),
        );

        self.sync_controls(board);
        self.sync_dialogs(board.dialog());
    }

    fn sync_controls<S: KeyValueStore>(&self, board: &Board<S>) {
        let doc = &self.document;
        let mode = board.mode();
        dom::set_text(doc, BTN_HIGHLIGHT, markup::highlight_label(mode));
        dom::set_class(doc, BTN_HIGHLIGHT, ACTIVE_CLASS, mode.is_highlighting());
        dom::set_text(doc, BTN_DRAW_ZONE, markup::draw_zone_label(mode));
        dom::set_class(doc, BTN_DRAW_ZONE, ACTIVE_CLASS, mode.is_drawing_zone());
        dom::set_disabled(doc, BTN_UNDO, !board.can_undo());
    }

    fn sync_dialogs(&mut self, dialog: &Dialog) {
        let doc = &self.document;
        let surface_changed = self
            .last_dialog
            .as_ref()
            .map_or(true, |last| !last.same_surface(dialog));

        if surface_changed {
            overlay::set_visible(doc, SAVE_DIALOG_ID, matches!(dialog, Dialog::Save { .. }));
            overlay::set_visible(doc, LOAD_DIALOG_ID, matches!(dialog, Dialog::Load));
        }

        if let Dialog::Save { draft } = dialog {
            if let Some(input) = dom::input_by_id(doc, SAVE_NAME_ID) {
                if input.value() != *draft {
                    input.set_value(draft);
                }
                if surface_changed {
                    _ = input.focus();
                }
            }
        }
        if self.last_dialog.as_ref() != Some(dialog) {
            self.last_dialog = Some(dialog.clone());
        }
    }
}
