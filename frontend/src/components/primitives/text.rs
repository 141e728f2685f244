use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextProps {
    #[prop_or_default]
    pub children: Html,
    /// Element to render, e.g. `"h2"`.
    #[prop_or(AttrValue::Static("div"))]
    pub as_tag: AttrValue,
    #[prop_or(400)]
    pub weight: u16,
    #[prop_or(18)]
    pub size: u16,
    #[prop_or_default]
    pub uppercase: bool,
}

/// Typographic wrapper with explicit weight and size.
pub struct Text;

impl Component for Text {
    type Message = ();
    type Properties = TextProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Text
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "font-weight: {}; font-size: {}px;{}",
            props.weight,
            props.size,
            if props.uppercase { " text-transform: uppercase;" } else { "" }
        );

        html! {
            <@{props.as_tag.to_string()} class="text" {style}>
                { props.children.clone() }
            </@>
        }
    }
}
