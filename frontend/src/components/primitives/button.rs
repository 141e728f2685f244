use yew::prelude::*;

/// Form role of a [`button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Submit,
    Reset,
}

impl ButtonKind {
    fn as_type(self) -> &'static str {
        match self {
            ButtonKind::Submit => "submit",
            ButtonKind::Reset => "reset",
        }
    }
}

/// Renders a form button. Clicks are handled by the enclosing form's
/// `onsubmit` / `onreset`.
pub fn button(title: &str, kind: ButtonKind) -> Html {
    html! {
        <button class={classes!("button", format!("button_{}", kind.as_type()))} type={kind.as_type()}>
            <span class="button__title">{ title.to_string() }</span>
        </button>
    }
}
