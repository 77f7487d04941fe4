use {
    js_sys::Date,
    yew::{html, Component, Context, Html},
};

mod component;
mod property;
mod scene;
mod service;
mod utils;

pub use {
    component::{PropertySelector, RevenueSummary},
    property::{Property, PropertyError, RawProperty},
    scene::{Dashboard, DashboardProps},
    service::{
        ApiHandle, ConsoleReporter, ErrorReporter, FetchError, HttpPropertyApi, PropertyApi,
        ReporterHandle, PROPERTIES_ENDPOINT,
    },
    utils::FetchState,
};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div id="global">
            <div id="content">
                <scene::Dashboard />
            </div>
            <footer>
                { format!("Rendered: {}", String::from(Date::new_0().to_string())) }
            </footer>
            </div>
        }
    }
}
