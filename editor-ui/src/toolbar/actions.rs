use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

/// A single user gesture on the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    RunOnDevice,
    Export,
    Embed,
    Publish,
    RequestLogin,
    /// The auth modal was dismissed or completed.
    EndLogin,
}

/// Everything a toolbar gesture can touch: the local login intent and the parent's callbacks.
pub trait ToolbarHandlers {
    fn set_logging_in(&mut self, value: bool);
    fn show_qr_code(&mut self);
    fn download_code(&mut self);
    fn show_embed_code(&mut self);
    fn publish(&mut self);
    fn show_auth_modal(&mut self);
    fn dismiss_auth_modal(&mut self);
}

/// Local state is updated before the parent is told.
pub fn dispatch<H: ToolbarHandlers>(action: ToolbarAction, handlers: &mut H) {
    debug!("toolbar action: {:?}", action);
    match action {
        ToolbarAction::RunOnDevice => handlers.show_qr_code(),
        ToolbarAction::Export => handlers.download_code(),
        ToolbarAction::Embed => handlers.show_embed_code(),
        ToolbarAction::Publish => handlers.publish(),
        ToolbarAction::RequestLogin => {
            handlers.set_logging_in(true);
            handlers.show_auth_modal();
        }
        ToolbarAction::EndLogin => {
            handlers.set_logging_in(false);
            handlers.dismiss_auth_modal();
        }
    }
}

/// Handlers backed by the toolbar's signal and its props.
#[derive(Clone, Copy)]
pub struct ToolbarEvents {
    pub is_logging_in: Signal<bool>,
    pub on_show_qr_code: EventHandler<()>,
    pub on_download_code: EventHandler<()>,
    pub on_show_embed_code: EventHandler<()>,
    pub on_publish: EventHandler<()>,
    pub on_show_auth_modal: EventHandler<()>,
    pub on_dismiss_auth_modal: EventHandler<()>,
}

impl ToolbarEvents {
    pub fn run(mut self, action: ToolbarAction) {
        dispatch(action, &mut self);
    }
}

impl ToolbarHandlers for ToolbarEvents {
    fn set_logging_in(&mut self, value: bool) {
        self.is_logging_in.set(value);
    }

    fn show_qr_code(&mut self) {
        self.on_show_qr_code.call(());
    }

    fn download_code(&mut self) {
        self.on_download_code.call(());
    }

    fn show_embed_code(&mut self) {
        self.on_show_embed_code.call(());
    }

    fn publish(&mut self) {
        self.on_publish.call(());
    }

    fn show_auth_modal(&mut self) {
        self.on_show_auth_modal.call(());
    }

    fn dismiss_auth_modal(&mut self) {
        self.on_dismiss_auth_modal.call(());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::toolbar::state::ACTION_BUTTONS;

    #[derive(Default)]
    struct Recorder {
        is_logging_in: bool,
        calls: Vec<String>,
    }

    impl ToolbarHandlers for Recorder {
        fn set_logging_in(&mut self, value: bool) {
            self.is_logging_in = value;
            self.calls.push(format!("set_logging_in({value})"));
        }

        fn show_qr_code(&mut self) {
            self.calls.push("show_qr_code".into());
        }

        fn download_code(&mut self) {
            self.calls.push("download_code".into());
        }

        fn show_embed_code(&mut self) {
            self.calls.push("show_embed_code".into());
        }

        fn publish(&mut self) {
            self.calls.push("publish".into());
        }

        fn show_auth_modal(&mut self) {
            self.calls.push("show_auth_modal".into());
        }

        fn dismiss_auth_modal(&mut self) {
            self.calls.push("dismiss_auth_modal".into());
        }
    }

    #[test]
    fn run_on_device_calls_only_qr_code() {
        let mut recorder = Recorder::default();
        dispatch(ToolbarAction::RunOnDevice, &mut recorder);
        assert_eq!(recorder.calls, vec!["show_qr_code"]);
        assert!(!recorder.is_logging_in);
    }

    #[test]
    fn each_button_fires_exactly_one_callback() {
        let cases = [
            (ToolbarAction::Export, "download_code"),
            (ToolbarAction::Embed, "show_embed_code"),
            (ToolbarAction::Publish, "publish"),
        ];
        for (action, expected) in cases {
            let mut recorder = Recorder::default();
            dispatch(action, &mut recorder);
            assert_eq!(recorder.calls, vec![expected]);
        }
    }

    #[test]
    fn request_login_sets_intent_before_showing_modal() {
        let mut recorder = Recorder::default();
        dispatch(ToolbarAction::RequestLogin, &mut recorder);
        assert!(recorder.is_logging_in);
        assert_eq!(
            recorder.calls,
            vec!["set_logging_in(true)", "show_auth_modal"]
        );
    }

    #[test]
    fn end_login_clears_intent_before_dismissing() {
        let mut recorder = Recorder::default();
        dispatch(ToolbarAction::RequestLogin, &mut recorder);
        dispatch(ToolbarAction::EndLogin, &mut recorder);
        assert!(!recorder.is_logging_in);
        assert_eq!(
            recorder.calls[2..],
            ["set_logging_in(false)", "dismiss_auth_modal"]
        );
    }

    type Calls = Rc<RefCell<Vec<&'static str>>>;

    /// Builds `ToolbarEvents` from recording callbacks and runs the action from root context.
    fn events_host() -> Element {
        let calls = use_context::<Calls>();
        let action = use_context::<ToolbarAction>();
        let is_logging_in = use_signal(|| false);

        let record = |name: &'static str| {
            let calls = calls.clone();
            EventHandler::new(move |_: ()| calls.borrow_mut().push(name))
        };
        let events = ToolbarEvents {
            is_logging_in,
            on_show_qr_code: record("show_qr_code"),
            on_download_code: record("download_code"),
            on_show_embed_code: record("show_embed_code"),
            on_publish: record("publish"),
            on_show_auth_modal: record("show_auth_modal"),
            on_dismiss_auth_modal: record("dismiss_auth_modal"),
        };

        use_hook(move || events.run(action));
        rsx! {}
    }

    fn calls_for(action: ToolbarAction) -> Vec<&'static str> {
        let calls = Calls::default();
        let mut dom = VirtualDom::new(events_host)
            .with_root_context(calls.clone())
            .with_root_context(action);
        dom.rebuild_in_place();
        let recorded = calls.borrow().clone();
        recorded
    }

    #[test]
    fn toolbar_buttons_reach_the_matching_parent_callback() {
        let expected = |action| match action {
            ToolbarAction::RunOnDevice => "show_qr_code",
            ToolbarAction::Export => "download_code",
            _ => "show_embed_code",
        };
        for button in ACTION_BUTTONS {
            assert_eq!(
                calls_for(button.action),
                vec![expected(button.action)],
                "{}",
                button.title
            );
        }
        assert_eq!(calls_for(ToolbarAction::Publish), vec!["publish"]);
    }

    #[test]
    fn run_button_fires_only_qr_code() {
        assert_eq!(ACTION_BUTTONS[0].title, "Run on device");
        assert_eq!(calls_for(ACTION_BUTTONS[0].action), vec!["show_qr_code"]);
    }
}
