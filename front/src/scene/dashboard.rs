use {
    crate::{
        component::{PropertySelector, RevenueSummary},
        service::{ApiHandle, ReporterHandle},
    },
    yew::{html, AttrValue, Component, Context, Html},
};

pub enum Msg {
    Select(String),
}

#[derive(PartialEq, yew::Properties)]
pub struct Props {
    #[prop_or_default]
    pub api: ApiHandle,
    #[prop_or_default]
    pub reporter: ReporterHandle,
}

/// Root page: pick a property, see its revenue.
///
/// Owns the only piece of application state, the currently selected property
/// id. The selector below proposes changes to it, the revenue view renders
/// once it exists.
pub struct Dashboard {
    selected: Option<String>,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { selected: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(id) => {
                self.selected = Some(id);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {<div class="dashboard">
            <h1 class="dashboard_title">{ "Property Management Dashboard" }</h1>

            <section class="dashboard_panel">
                <div class="dashboard_overview">
                    <h2 class="dashboard_overview_title">{ "Revenue Overview" }</h2>
                    <p class="dashboard_overview_text">{
                        "Monthly performance insights for your properties"
                    }</p>
                </div>
                <PropertySelector
                    selected={self.selected.clone()}
                    on_select={ctx.link().callback(Msg::Select)}
                    api={ctx.props().api.clone()}
                    reporter={ctx.props().reporter.clone()}
                />
            </section>

            {
                match &self.selected {
                    Some(id) => html! {
                        <RevenueSummary property_id={AttrValue::from(id.clone())} />
                    },
                    None => html! {},
                }
            }
        </div>}
    }
}
