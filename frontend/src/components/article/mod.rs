//! Article body. Static markdown rendered once to HTML; its typography comes
//! from the page's style variables through CSS.

use pulldown_cmark::{html, Options, Parser};
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

const ARTICLE_MARKDOWN: &str = include_str!("article.md");

pub struct Article {
    body: AttrValue,
}

impl Component for Article {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            body: AttrValue::from(render_markdown(ARTICLE_MARKDOWN)),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <article class="article">
                { Html::from_html_unchecked(self.body.clone()) }
            </article>
        }
    }
}

/// Parses markdown into an HTML string with pulldown_cmark.
pub fn render_markdown(input: &str) -> String {
    let parser = Parser::new_ext(input, Options::ENABLE_STRIKETHROUGH);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
