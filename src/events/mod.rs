pub mod controls;
pub mod keyboard;
pub mod pointer;

use crate::render::View;
use crate::storage::LocalStorage;
use std::cell::RefCell;
use std::rc::Rc;
use tactics_core::Board;
use web_sys as web;

pub type SharedBoard = Rc<RefCell<Board<LocalStorage>>>;

/// Handles shared by every DOM listener.
#[derive(Clone)]
pub struct Wiring {
    pub document: web::Document,
    pub pitch: web::HtmlElement,
    pub board: SharedBoard,
    pub view: Rc<RefCell<View>>,
}

impl Wiring {
    /// Applies `f` to the board, then redraws. The board borrow is released
    /// before rendering.
    pub fn update(&self, f: impl FnOnce(&mut Board<LocalStorage>)) {
        f(&mut self.board.borrow_mut());
        self.refresh();
    }

    pub fn refresh(&self) {
        self.view.borrow_mut().render(&self.board.borrow());
    }
}
