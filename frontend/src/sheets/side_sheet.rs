use uuid::Uuid;
use yew::{classes, html, Component, Context, Html, Properties};

/// Sliding sidebar container. Hidden off-canvas until `open` is set.
pub struct SideSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
}

impl Component for SideSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let open = ctx.props().open;
        html! {
            <aside
                class={classes!("side-sheet", open.then_some("side-sheet_open"))}
                id={self.id.clone()}
                aria-hidden={(!open).to_string()}
            >
                { ctx.props().children.clone() }
            </aside>
        }
    }
}
