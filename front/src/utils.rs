/// State of a fetch bound to a component's lifetime.
#[derive(Debug, PartialEq)]
pub enum FetchState<T> {
    Fetching,
    Success(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_fetching(&self) -> bool {
        matches!(self, FetchState::Fetching)
    }
}
