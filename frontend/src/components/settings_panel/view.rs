//! View rendering for the settings panel.
//!
//! Layout: the arrow control and the sliding sidebar share one wrapper so a
//! press on either counts as inside the panel. The sidebar holds a form with
//! one control per dimension, a separator before the background colour, and
//! the reset/apply buttons. User-facing labels are in Russian.

use reader_common::model::dimension::{ControlKind, Dimension};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::SettingsPanelComponent;
use crate::components::primitives::arrow_button::ArrowButton;
use crate::components::primitives::button::{button, ButtonKind};
use crate::components::primitives::radio_group::RadioGroup;
use crate::components::primitives::select::Select;
use crate::components::primitives::separator::separator;
use crate::components::primitives::text::Text;
use crate::sheets::side_sheet::SideSheet;

pub fn view(component: &SettingsPanelComponent, ctx: &Context<SettingsPanelComponent>) -> Html {
    let link = ctx.link();
    let is_open = component.panel.is_open();

    html! {
        <div class="article-params" ref={component.container_ref.clone()}>
            <ArrowButton is_open={is_open} on_click={link.callback(|_| Msg::Toggle)} />
            <SideSheet open={is_open}>
                { build_form(component, link) }
            </SideSheet>
        </div>
    }
}

fn build_form(component: &SettingsPanelComponent, link: &Scope<SettingsPanelComponent>) -> Html {
    // Both handlers stop the browser from submitting or resetting the form
    // itself; the panel state drives every control.
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Apply
    });
    let onreset = link.callback(|e: Event| {
        e.prevent_default();
        Msg::Reset
    });

    html! {
        <form class="article-params__form" {onsubmit} {onreset}>
            <Text as_tag="h2" weight={800} size={31} uppercase={true}>
                { "Задайте параметры" }
            </Text>
            { for Dimension::all().map(|dimension| build_control(component, link, dimension)) }
            <div class="article-params__bottom">
                { button("Сбросить", ButtonKind::Reset) }
                { button("Применить", ButtonKind::Submit) }
            </div>
        </form>
    }
}

fn build_control(
    component: &SettingsPanelComponent,
    link: &Scope<SettingsPanelComponent>,
    dimension: Dimension,
) -> Html {
    let options = component.panel.catalog().options(dimension).to_vec();
    let selected = component.panel.selected(dimension).clone();
    let on_change = link.callback(move |option| Msg::Select(dimension, option));
    let title = AttrValue::from(dimension.title());

    let control = match dimension.control_kind() {
        ControlKind::Select => html! {
            <Select {options} {selected} {on_change} {title} />
        },
        ControlKind::RadioGroup => html! {
            <RadioGroup name={dimension.to_string()} {options} {selected} {on_change} {title} />
        },
    };

    if dimension == Dimension::BackgroundColor {
        html! { <>{ separator() }{ control }</> }
    } else {
        control
    }
}
