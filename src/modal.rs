use std::rc::Rc;

use log::debug;
use yew::prelude::*;

/// Open/closed flags for the two overlays. Independent of each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalVisibility {
    pub lead_form_open: bool,
    pub warning_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    OpenLeadForm,
    CloseLeadForm,
    OpenWarning,
    CloseWarning,
}

impl ModalVisibility {
    pub fn apply(self, action: ModalAction) -> Self {
        match action {
            ModalAction::OpenLeadForm => Self { lead_form_open: true, ..self },
            ModalAction::CloseLeadForm => Self { lead_form_open: false, ..self },
            ModalAction::OpenWarning => Self { warning_open: true, ..self },
            ModalAction::CloseWarning => Self { warning_open: false, ..self },
        }
    }
}

impl Reducible for ModalVisibility {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            // Same Rc back means no re-render.
            return self;
        }
        debug!("Modal {:?}: {:?} -> {:?}", action, *self, next);
        Rc::new(next)
    }
}

/// Handle to the overlay flags, created once at the app root and handed to
/// the tree through a `ContextProvider`.
#[derive(Clone, PartialEq)]
pub struct ModalController {
    state: UseReducerHandle<ModalVisibility>,
}

impl ModalController {
    pub fn lead_form_open(&self) -> bool {
        self.state.lead_form_open
    }

    pub fn warning_open(&self) -> bool {
        self.state.warning_open
    }

    pub fn open_lead_form(&self) {
        self.state.dispatch(ModalAction::OpenLeadForm);
    }

    pub fn close_lead_form(&self) {
        self.state.dispatch(ModalAction::CloseLeadForm);
    }

    pub fn open_warning(&self) {
        self.state.dispatch(ModalAction::OpenWarning);
    }

    pub fn close_warning(&self) {
        self.state.dispatch(ModalAction::CloseWarning);
    }

    /// Click handler for call-to-action buttons.
    pub fn open_lead_form_callback(&self) -> Callback<MouseEvent> {
        let controller = self.clone();
        Callback::from(move |_: MouseEvent| controller.open_lead_form())
    }

    pub fn close_lead_form_callback(&self) -> Callback<()> {
        let controller = self.clone();
        Callback::from(move |_| controller.close_lead_form())
    }

    pub fn close_warning_callback(&self) -> Callback<()> {
        let controller = self.clone();
        Callback::from(move |_| controller.close_warning())
    }
}

/// Creates the controller state. Call once, at the root.
#[hook]
pub fn use_modal_state() -> ModalController {
    let state = use_reducer_eq(ModalVisibility::default);
    ModalController { state }
}

#[hook]
pub fn use_modal_controller() -> ModalController {
    use_context::<ModalController>().expect("ModalController must be provided by the app root")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: &[ModalAction]) -> ModalVisibility {
        actions
            .iter()
            .fold(ModalVisibility::default(), |state, action| state.apply(*action))
    }

    #[test]
    fn both_flags_start_closed() {
        let state = ModalVisibility::default();
        assert!(!state.lead_form_open);
        assert!(!state.warning_open);
    }

    #[test]
    fn opening_lead_form_twice_equals_once() {
        assert_eq!(
            run(&[ModalAction::OpenLeadForm, ModalAction::OpenLeadForm]),
            run(&[ModalAction::OpenLeadForm])
        );
        assert!(run(&[ModalAction::OpenLeadForm, ModalAction::OpenLeadForm]).lead_form_open);
    }

    #[test]
    fn flags_are_independent() {
        let lead_open = run(&[ModalAction::OpenLeadForm]);
        assert!(lead_open.apply(ModalAction::OpenWarning).lead_form_open);
        assert!(!lead_open.apply(ModalAction::CloseWarning).warning_open);

        let warning_open = run(&[ModalAction::OpenWarning]);
        assert!(warning_open.apply(ModalAction::OpenLeadForm).warning_open);
        assert!(warning_open.apply(ModalAction::CloseLeadForm).warning_open);
        assert!(!warning_open.apply(ModalAction::CloseLeadForm).lead_form_open);
    }

    #[test]
    fn open_then_close_restores_initial_state() {
        assert_eq!(
            run(&[ModalAction::OpenLeadForm, ModalAction::CloseLeadForm]),
            ModalVisibility::default()
        );
        assert_eq!(
            run(&[ModalAction::OpenWarning, ModalAction::CloseWarning]),
            ModalVisibility::default()
        );
    }

    #[test]
    fn flags_toggle_repeatedly() {
        let state = run(&[
            ModalAction::OpenLeadForm,
            ModalAction::CloseLeadForm,
            ModalAction::OpenLeadForm,
        ]);
        assert!(state.lead_form_open);
    }

    #[test]
    fn open_then_close_lead_form_leaves_warning_closed() {
        let opened = run(&[ModalAction::OpenLeadForm]);
        assert_eq!(
            opened,
            ModalVisibility {
                lead_form_open: true,
                warning_open: false,
            }
        );
        assert!(!opened.apply(ModalAction::CloseLeadForm).lead_form_open);
        assert!(!opened.apply(ModalAction::CloseLeadForm).warning_open);
    }

    #[test]
    fn noop_transition_keeps_same_rc() {
        let closed = Rc::new(ModalVisibility::default());
        let reduced = closed.clone().reduce(ModalAction::CloseLeadForm);
        assert!(Rc::ptr_eq(&closed, &reduced));

        let opened = closed.clone().reduce(ModalAction::OpenLeadForm);
        assert!(!Rc::ptr_eq(&closed, &opened));
        let again = opened.clone().reduce(ModalAction::OpenLeadForm);
        assert!(Rc::ptr_eq(&opened, &again));
    }
}
