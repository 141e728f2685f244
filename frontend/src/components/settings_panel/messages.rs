use reader_common::model::article_option::ArticleOption;
use reader_common::model::dimension::Dimension;

#[derive(Clone)]
pub enum Msg {
    Toggle,
    PointerDown { inside: bool },
    Select(Dimension, ArticleOption),
    Apply,
    Reset,
}
