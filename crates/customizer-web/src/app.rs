use crate::widgets::ActiveDrag;
use customizer_core::{DragRegistry, FileIntake, Readout, StateStore, Widget};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Readout state of the two sliders.
#[derive(Default)]
pub struct Readouts {
    pub scale: Readout,
    pub rotation: Readout,
}

impl Readouts {
    pub fn get_mut(&mut self, widget: Widget) -> Option<&mut Readout> {
        match widget {
            Widget::ScaleSlider => Some(&mut self.scale),
            Widget::RotationSlider => Some(&mut self.rotation),
            Widget::PositionBox => None,
        }
    }
}

/// Handles shared by every event closure of the page.
#[derive(Clone)]
pub struct AppContext {
    pub document: web::Document,
    pub store: Rc<RefCell<StateStore>>,
    pub drags: Rc<RefCell<DragRegistry<ActiveDrag>>>,
    pub readouts: Rc<RefCell<Readouts>>,
    pub intake: Rc<RefCell<FileIntake>>,
}

impl AppContext {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            store: Rc::new(RefCell::new(StateStore::default())),
            drags: Rc::new(RefCell::new(DragRegistry::default())),
            readouts: Rc::new(RefCell::new(Readouts::default())),
            intake: Rc::new(RefCell::new(FileIntake::default())),
        }
    }
}
