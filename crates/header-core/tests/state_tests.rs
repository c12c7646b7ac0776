use header_core::{sync_marker, ClassList, HeaderState, StylerError};
use std::cell::RefCell;

#[test]
fn state_for_offset_boundaries() {
    assert_eq!(HeaderState::for_offset(0.0, 80.0), HeaderState::Unscrolled);
    assert_eq!(HeaderState::for_offset(80.0, 80.0), HeaderState::Unscrolled);
    assert_eq!(HeaderState::for_offset(81.0, 80.0), HeaderState::Scrolled);
    assert_eq!(HeaderState::for_offset(-20.0, 80.0), HeaderState::Unscrolled); // overscroll bounce
}

#[test]
fn nan_offset_is_unscrolled() {
    assert_eq!(HeaderState::for_offset(f64::NAN, 80.0), HeaderState::Unscrolled);
}

#[test]
fn marker_presence_and_names() {
    assert!(HeaderState::Scrolled.marker_present());
    assert!(!HeaderState::Unscrolled.marker_present());
    assert_eq!(HeaderState::Scrolled.name(), "scrolled");
    assert_eq!(HeaderState::Unscrolled.name(), "unscrolled");
    assert_eq!(HeaderState::default(), HeaderState::Unscrolled);
}

// Minimal list that only records calls
#[derive(Default)]
struct Recorder {
    present: RefCell<bool>,
    calls: RefCell<Vec<&'static str>>,
}

impl ClassList for Recorder {
    fn contains(&self, _class: &str) -> bool {
        *self.present.borrow()
    }
    fn add(&self, _class: &str) -> Result<(), StylerError> {
        self.calls.borrow_mut().push("add");
        *self.present.borrow_mut() = true;
        Ok(())
    }
    fn remove(&self, _class: &str) -> Result<(), StylerError> {
        self.calls.borrow_mut().push("remove");
        *self.present.borrow_mut() = false;
        Ok(())
    }
}

#[test]
fn sync_marker_only_mutates_on_mismatch() {
    let list = Recorder::default();

    assert!(!sync_marker(&list, "scrolled", HeaderState::Unscrolled).unwrap());
    assert!(sync_marker(&list, "scrolled", HeaderState::Scrolled).unwrap());
    assert!(!sync_marker(&list, "scrolled", HeaderState::Scrolled).unwrap());
    assert!(sync_marker(&list, "scrolled", HeaderState::Unscrolled).unwrap());

    assert_eq!(*list.calls.borrow(), vec!["add", "remove"]);
}
