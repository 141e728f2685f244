use std::rc::Rc;

use crate::app::{App, AppProps};

mod app;
mod components;
mod config;
mod sheets;

fn main() {
    let props = AppProps {
        catalog: Rc::new(config::load_catalog()),
    };

    match config::mount_point() {
        Some(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        None => yew::Renderer::<App>::with_props(props).render(),
    };
}
