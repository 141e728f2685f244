use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ArrowButtonProps {
    pub is_open: bool,
    pub on_click: Callback<MouseEvent>,
}

/// Toggle for the sidebar. Rotates while the sidebar is open.
pub struct ArrowButton;

impl Component for ArrowButton {
    type Message = ();
    type Properties = ArrowButtonProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ArrowButton
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let label = if props.is_open {
            "Закрыть форму параметров статьи"
        } else {
            "Открыть форму параметров статьи"
        };

        html! {
            <button
                type="button"
                aria-label={label}
                class={classes!("arrow-button", props.is_open.then_some("arrow-button_open"))}
                onclick={props.on_click.clone()}
            >
                <span class={classes!("arrow-button__icon", props.is_open.then_some("arrow-button__icon_open"))}>
                    { "➜" }
                </span>
            </button>
        }
    }
}
