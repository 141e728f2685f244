//! Settings sidebar: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SettingsPanelProps`, `SettingsPanelComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Release the outside-click listener when the component is torn down.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SettingsPanelProps;
pub use state::SettingsPanelComponent;

impl Component for SettingsPanelComponent {
    type Message = Msg;
    type Properties = SettingsPanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        SettingsPanelComponent::new(ctx.props().catalog.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().catalog != old_props.catalog {
            self.panel = reader_common::panel::SettingsPanel::new(ctx.props().catalog.clone());
            self.outside_listener = None;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.outside_listener = None;
    }
}
