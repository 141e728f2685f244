use reader_common::model::article_option::ArticleOption;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RadioGroupProps {
    pub name: AttrValue,
    pub options: Vec<ArticleOption>,
    pub selected: ArticleOption,
    pub on_change: Callback<ArticleOption>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

/// Row of radio inputs sharing `name`. Each input gets a unique id so its
/// label is clickable even with several groups on the page.
pub struct RadioGroup {
    id_prefix: String,
}

impl Component for RadioGroup {
    type Message = ();
    type Properties = RadioGroupProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id_prefix: format!("radio-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="radio-group">
                {
                    if let Some(title) = &props.title {
                        html! { <h3 class="radio-group__title">{ title.clone() }</h3> }
                    } else {
                        html! {}
                    }
                }
                <div class="radio-group__items">
                    { for props.options.iter().enumerate().map(|(index, option)| {
                        let id = format!("{}-{}", self.id_prefix, index);
                        let onchange = {
                            let on_change = props.on_change.clone();
                            let option = option.clone();
                            Callback::from(move |_: Event| on_change.emit(option.clone()))
                        };
                        html! {
                            <div class={classes!("radio-group__item", option.class_name.clone())}>
                                <input
                                    type="radio"
                                    id={id.clone()}
                                    name={props.name.clone()}
                                    value={option.value.clone()}
                                    checked={option == &props.selected}
                                    {onchange}
                                />
                                <label for={id}>{ option.title.clone() }</label>
                            </div>
                        }
                    }) }
                </div>
            </div>
        }
    }
}
