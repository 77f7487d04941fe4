use {
    crate::{
        property::Property,
        service::{ApiHandle, FetchError, ReporterHandle},
        utils::FetchState,
    },
    yew::{html, Callback, Component, Context, Html},
};

/// Message shown in place of the dropdown when the fetch fails. Every failure
/// kind collapses to this one string, the detail goes to the reporter.
const FETCH_FAILED_MESSAGE: &str = "Failed to load properties";

pub enum Msg {
    Settled {
        generation: u32,
        result: Result<Vec<Property>, FetchError>,
    },
    Picked(String),
}

#[derive(PartialEq, yew::Properties)]
pub struct Props {
    /// Current selection, dictated by the parent. The selector never holds
    /// its own idea of what is selected, it only proposes changes.
    pub selected: Option<String>,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub api: ApiHandle,
    #[prop_or_default]
    pub reporter: ReporterHandle,
}

/// Dropdown over the properties of the current session.
///
/// Fetches the full list once on mount (and again if the service handle is
/// swapped). Results are tagged with a generation so a response landing after
/// a newer fetch was started is discarded instead of applied.
pub struct PropertySelector {
    generation: u32,
    fetch: FetchState<Vec<Property>>,
}

impl Component for PropertySelector {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let mut this = Self {
            generation: 0,
            fetch: FetchState::Fetching,
        };
        this.spawn_fetch(ctx);
        this
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().api != old_props.api {
            self.spawn_fetch(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Settled { generation, result } => {
                if let Err(error) = &result {
                    ctx.props().reporter.report(error);
                }
                self.settle(generation, result)
            }
            Msg::Picked(id) => {
                ctx.props().on_select.emit(id);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use yew::TargetCast as _;

        html! {<div class="property_selector">
            <label class="property_selector_label">{ "Select Property" }</label>
            {
                match &self.fetch {
                    FetchState::Fetching => html! {
                        <div class="property_selector_loading">{ "Loading properties..." }</div>
                    },
                    FetchState::Failed(message) => html! {
                        <div class="property_selector_error">{ message }</div>
                    },
                    FetchState::Success(properties) if properties.is_empty() => html! {},
                    FetchState::Success(properties) => html! {
                        <select
                            class="property_selector_input"
                            onchange={ctx.link().callback(|e: yew::Event| {
                                let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                Msg::Picked(select.value())
                            })}
                        >{
                            for properties.iter().map(|property| {
                                let selected =
                                    ctx.props().selected.as_deref() == Some(property.id());
                                html! {
                                    <option value={property.id().to_string()} {selected}>
                                        { property.name() }
                                    </option>
                                }
                            })
                        }</select>
                    },
                }
            }
        </div>}
    }
}

impl PropertySelector {
    fn spawn_fetch(&mut self, ctx: &Context<Self>) {
        self.generation += 1;
        self.fetch = FetchState::Fetching;

        let generation = self.generation;
        let api = ctx.props().api.clone();
        ctx.link().send_future(async move {
            let result = api.fetch_all().await;
            Msg::Settled { generation, result }
        });
    }

    fn settle(&mut self, generation: u32, result: Result<Vec<Property>, FetchError>) -> bool {
        if generation != self.generation {
            // A newer fetch is in flight, this result is stale.
            return false;
        }
        self.fetch = match result {
            Ok(properties) => FetchState::Success(properties),
            Err(_) => FetchState::Failed(String::from(FETCH_FAILED_MESSAGE)),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> PropertySelector {
        PropertySelector {
            generation: 1,
            fetch: FetchState::Fetching,
        }
    }

    fn lakeview() -> Property {
        Property::new("p1", "Lakeview").unwrap()
    }

    #[test]
    fn a_successful_fetch_replaces_the_list() {
        let mut selector = selector();

        assert!(selector.settle(1, Ok(vec![lakeview()])));
        assert_eq!(selector.fetch, FetchState::Success(vec![lakeview()]));
    }

    #[test]
    fn a_failed_fetch_collapses_to_the_fixed_message() {
        let mut selector = selector();

        assert!(selector.settle(1, Err(FetchError::Status { status: 500 })));
        assert_eq!(
            selector.fetch,
            FetchState::Failed(String::from(FETCH_FAILED_MESSAGE))
        );
    }

    #[test]
    fn an_empty_list_still_counts_as_success() {
        let mut selector = selector();

        assert!(selector.settle(1, Ok(Vec::new())));
        assert_eq!(selector.fetch, FetchState::Success(Vec::new()));
    }

    #[test]
    fn a_stale_result_is_discarded() {
        let mut selector = selector();
        selector.generation = 2; // A second fetch was started meanwhile.

        assert!(!selector.settle(1, Ok(vec![lakeview()])));
        assert!(selector.fetch.is_fetching());

        // The current fetch still lands normally.
        assert!(selector.settle(2, Ok(Vec::new())));
        assert_eq!(selector.fetch, FetchState::Success(Vec::new()));
    }
}
