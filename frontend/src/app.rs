//! Page container: owns the applied `StyleMap` and writes it as CSS custom
//! properties on the page root.

use std::rc::Rc;

use reader_common::model::catalog::ArticleCatalog;
use reader_common::model::style_map::StyleMap;
use yew::{html, Component, Context, Html, Properties};

use crate::components::article::Article;
use crate::components::settings_panel::SettingsPanelComponent;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub catalog: Rc<ArticleCatalog>,
}

pub enum Msg {
    /// Replaces the whole style map. Wired to the panel's `on_change`.
    SetStyles(StyleMap),
}

pub struct App {
    styles: StyleMap,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            styles: StyleMap::defaults(&ctx.props().catalog),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetStyles(styles) => {
                let changed = self.styles != styles;
                self.styles = styles;
                changed
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.styles = StyleMap::defaults(&ctx.props().catalog);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="main" style={self.styles.to_inline_style()}>
                <SettingsPanelComponent
                    catalog={ctx.props().catalog.clone()}
                    on_change={ctx.link().callback(Msg::SetStyles)}
                />
                <Article />
            </div>
        }
    }
}
