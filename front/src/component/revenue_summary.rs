use yew::{html, AttrValue, Component, Context, Html};

#[derive(PartialEq, yew::Properties)]
pub struct Props {
    pub property_id: AttrValue,
}

/// Placeholder for the revenue view, which lives elsewhere.
pub struct RevenueSummary;

impl Component for RevenueSummary {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {<div class="revenue_summary">
            { format!("Revenue summary for property {}", ctx.props().property_id) }
        </div>}
    }
}
