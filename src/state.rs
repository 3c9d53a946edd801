use std::rc::Rc;

use yew::functional::Reducible;

use crate::content::Section;
use crate::scroll_spy::Pointer;

pub enum PageAction {
    Select(Section),
    Spy(Section),
    TrackPointer(Pointer),
    ToggleMenu,
}

/// Mutable UI state of one landing page session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageState {
    pub active: Section,
    pub pointer: Pointer,
    pub menu_open: bool,
}

impl PageState {
    pub fn starting_at(section: Section) -> Self {
        Self {
            active: section,
            ..Self::default()
        }
    }

    /// A navigation entry was chosen.
    pub fn select(self, section: Section) -> Self {
        Self {
            active: section,
            menu_open: false,
            ..self
        }
    }

    /// The scroll spy found a different section under the midpoint. The
    /// mobile menu stays as the user left it.
    pub fn spy(self, section: Section) -> Self {
        Self {
            active: section,
            ..self
        }
    }

    pub fn track_pointer(self, pointer: Pointer) -> Self {
        Self { pointer, ..self }
    }

    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let current = *self;
        let next = match action {
            PageAction::Select(section) => current.select(section),
            PageAction::Spy(section) => current.spy(section),
            PageAction::TrackPointer(pointer) => current.track_pointer(pointer),
            PageAction::ToggleMenu => current.toggle_menu(),
        };
        if next == current {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAVIGATION;

    #[test]
    fn selecting_each_entry_marks_it_active_and_closes_menu() {
        for item in NAVIGATION {
            let state = PageState::default().toggle_menu();
            assert!(state.menu_open);

            let state = state.select(item.section);
            assert_eq!(state.active, item.section);
            assert!(!state.menu_open);
        }
    }

    #[test]
    fn select_keeps_pointer() {
        let pointer = Pointer { x: 10.0, y: 20.0 };
        let state = PageState::default()
            .track_pointer(pointer)
            .select(Section::Pricing);
        assert_eq!(state.pointer, pointer);
    }

    #[test]
    fn spy_does_not_close_the_menu() {
        let state = PageState::default().toggle_menu().spy(Section::Features);
        assert_eq!(state.active, Section::Features);
        assert!(state.menu_open);
    }

    #[test]
    fn starts_on_home_by_default() {
        assert_eq!(PageState::default().active, Section::Home);
        assert_eq!(PageState::starting_at(Section::About).active, Section::About);
        assert!(!PageState::default().menu_open);
    }

    #[test]
    fn reduce_keeps_the_same_rc_when_nothing_changes() {
        let state = Rc::new(PageState::starting_at(Section::About));
        let same = state.clone().reduce(PageAction::Spy(Section::About));
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.clone().reduce(PageAction::Select(Section::Pricing));
        assert!(!Rc::ptr_eq(&state, &moved));
        assert_eq!(moved.active, Section::Pricing);
    }

    #[test]
    fn reduce_tracks_latest_pointer() {
        let state = Rc::new(PageState::default())
            .reduce(PageAction::TrackPointer(Pointer { x: 1.0, y: 2.0 }))
            .reduce(PageAction::TrackPointer(Pointer { x: 30.0, y: 40.0 }));
        assert_eq!(state.pointer, Pointer { x: 30.0, y: 40.0 });
    }

    #[test]
    fn toggle_menu_flips() {
        let state = PageState::default();
        assert!(state.toggle_menu().menu_open);
        assert!(!state.toggle_menu().toggle_menu().menu_open);
    }
}
