//! Update function for the settings panel component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, moves
//! the panel state machine, and returns whether the view should re-render.
//!
//! After every message the document listener is brought in line with the
//! panel visibility: attached while open, dropped otherwise.

use gloo_console::log;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use reader_common::panel::PanelVisibility;

use super::messages::Msg;
use super::state::SettingsPanelComponent;

/// Central update function for the component.
///
/// `Apply` and `Reset` hand a fresh `StyleMap` to `on_change`; nothing else
/// reaches the parent.
pub fn update(
    component: &mut SettingsPanelComponent,
    ctx: &Context<SettingsPanelComponent>,
    msg: Msg,
) -> bool {
    let rerender = match msg {
        Msg::Toggle => {
            match component.panel.toggle() {
                PanelVisibility::Open => log!("settings panel opened"),
                PanelVisibility::Closed => log!("settings panel closed"),
            }
            true
        }
        Msg::PointerDown { inside } => {
            let closed = component.panel.pointer_down(inside);
            if closed {
                log!("settings panel closed by outside click");
            }
            closed
        }
        Msg::Select(dimension, option) => {
            component.panel.select(dimension, option);
            true
        }
        Msg::Apply => {
            let styles = component.panel.apply();
            log!("applying article styles:", styles.to_inline_style());
            ctx.props().on_change.emit(styles);
            false
        }
        Msg::Reset => {
            let styles = component.panel.reset();
            log!("article styles reset to defaults");
            ctx.props().on_change.emit(styles);
            true
        }
    };

    sync_outside_listener(component, ctx);
    rerender
}

/// What to do with the document listener given whether the panel wants one
/// and whether one is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListenerAction {
    Acquire,
    Release,
    Keep,
}

fn listener_action(wants: bool, has: bool) -> ListenerAction {
    match (wants, has) {
        (true, false) => ListenerAction::Acquire,
        (false, true) => ListenerAction::Release,
        _ => ListenerAction::Keep,
    }
}

fn sync_outside_listener(
    component: &mut SettingsPanelComponent,
    ctx: &Context<SettingsPanelComponent>,
) {
    let action = listener_action(
        component.panel.wants_outside_listener(),
        component.outside_listener.is_some(),
    );
    match action {
        ListenerAction::Acquire => component.outside_listener = outside_listener(component, ctx),
        ListenerAction::Release => component.outside_listener = None,
        ListenerAction::Keep => {}
    }
}

/// Subscribes to `mousedown` on the document and reports whether each press
/// landed under `container_ref`.
fn outside_listener(
    component: &SettingsPanelComponent,
    ctx: &Context<SettingsPanelComponent>,
) -> Option<EventListener> {
    let document = web_sys::window()?.document()?;
    let container_ref = component.container_ref.clone();
    let link = ctx.link().clone();

    Some(EventListener::new(&document, "mousedown", move |event| {
        let inside = match (container_ref.cast::<Node>(), event.target()) {
            (Some(container), Some(target)) => target
                .dyn_ref::<Node>()
                .is_some_and(|node| container.contains(Some(node))),
            _ => false,
        };
        link.send_message(Msg::PointerDown { inside });
    }))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use reader_common::model::catalog::ArticleCatalog;
    use reader_common::panel::SettingsPanel;

    use super::*;

    /// Replays the panel through a message sequence, tracking whether a
    /// listener would be held after each step.
    fn held_after(steps: &[Msg]) -> Vec<bool> {
        let mut panel = SettingsPanel::new(Rc::new(ArticleCatalog::default()));
        let mut held = false;
        steps
            .iter()
            .map(|msg| {
                match msg {
                    Msg::Toggle => {
                        panel.toggle();
                    }
                    Msg::PointerDown { inside } => {
                        panel.pointer_down(*inside);
                    }
                    _ => {}
                }
                match listener_action(panel.wants_outside_listener(), held) {
                    ListenerAction::Acquire => held = true,
                    ListenerAction::Release => held = false,
                    ListenerAction::Keep => {}
                }
                held
            })
            .collect()
    }

    #[test]
    fn decision_table() {
        assert_eq!(listener_action(true, false), ListenerAction::Acquire);
        assert_eq!(listener_action(true, true), ListenerAction::Keep);
        assert_eq!(listener_action(false, true), ListenerAction::Release);
        assert_eq!(listener_action(false, false), ListenerAction::Keep);
    }

    #[test]
    fn listener_follows_open_state() {
        let held = held_after(&[
            Msg::Toggle,
            Msg::PointerDown { inside: true },
            Msg::PointerDown { inside: false },
            Msg::PointerDown { inside: false },
            Msg::Toggle,
            Msg::Toggle,
        ]);
        assert_eq!(held, vec![true, true, false, false, true, false]);
    }

    #[test]
    fn reopening_never_stacks_a_second_listener() {
        let mut panel = SettingsPanel::new(Rc::new(ArticleCatalog::default()));
        panel.toggle();
        assert_eq!(listener_action(panel.wants_outside_listener(), true), ListenerAction::Keep);
    }
}
