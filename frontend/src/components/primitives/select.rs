use reader_common::model::article_option::ArticleOption;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    pub options: Vec<ArticleOption>,
    pub selected: ArticleOption,
    pub on_change: Callback<ArticleOption>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

/// Drop-down bound to one option list. Emits the picked option, never a raw
/// string.
///
/// The `selected` attribute stops steering an `<option>` once the user has
/// picked something, so the element's `selectedIndex` is written after every
/// render instead.
pub struct Select {
    select_ref: NodeRef,
}

impl Component for Select {
    type Message = ();
    type Properties = SelectProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            select_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let onchange = {
            let options = props.options.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                if let Some(option) = options.iter().find(|o| o.value == value) {
                    on_change.emit(option.clone());
                }
            })
        };

        html! {
            <div class="select">
                {
                    if let Some(title) = &props.title {
                        html! { <h3 class="select__title">{ title.clone() }</h3> }
                    } else {
                        html! {}
                    }
                }
                <select
                    ref={self.select_ref.clone()}
                    class={classes!("select__control", props.selected.class_name.clone())}
                    {onchange}
                >
                    { for props.options.iter().map(|option| html! {
                        <option
                            value={option.value.clone()}
                            class={classes!("select__option", option.class_name.clone(), option.option_class_name.clone())}
                            selected={option == &props.selected}
                        >
                            { option.title.clone() }
                        </option>
                    }) }
                </select>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let props = ctx.props();
        if let (Some(select), Some(index)) = (
            self.select_ref.cast::<HtmlSelectElement>(),
            selected_index(&props.options, &props.selected),
        ) {
            if select.selected_index() != index {
                select.set_selected_index(index);
            }
        }
    }
}

/// Position of `selected` in `options`, as the DOM `selectedIndex` expects.
fn selected_index(options: &[ArticleOption], selected: &ArticleOption) -> Option<i32> {
    options
        .iter()
        .position(|o| o.value == selected.value)
        .and_then(|i| i32::try_from(i).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reader_common::model::catalog::ArticleCatalog;
    use reader_common::model::dimension::Dimension;

    #[test]
    fn reset_selection_maps_back_to_first_index() {
        let catalog = ArticleCatalog::default();
        let options = catalog.options(Dimension::FontFamily);

        let merriweather = catalog.find(Dimension::FontFamily, "Merriweather").unwrap();
        assert_eq!(selected_index(options, merriweather), Some(4));

        let default = catalog.default_option(Dimension::FontFamily);
        assert_eq!(selected_index(options, default), Some(0));
    }

    #[test]
    fn foreign_option_has_no_index() {
        let catalog = ArticleCatalog::default();
        let stray = ArticleOption::new("Arial", "Arial", "arial");
        assert_eq!(selected_index(catalog.options(Dimension::FontFamily), &stray), None);
    }
}
