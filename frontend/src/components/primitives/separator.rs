use yew::prelude::*;

pub fn separator() -> Html {
    html! { <div class="separator" role="separator" /> }
}
