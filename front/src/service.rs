use {
    crate::property::{validate_all, Property, PropertyError, RawProperty},
    futures::{future::LocalBoxFuture, FutureExt as _},
    std::rc::Rc,
};

/// Endpoint serving the property list for the current session.
pub const PROPERTIES_ENDPOINT: &str = "/api/v1/properties";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Could not build the property list request due to: {why}")]
    Request { why: String },

    #[error("The property list request failed due to: {why}")]
    Network { why: String },

    #[error("The property list service responded with status {status}")]
    Status { status: u16 },

    #[error("Could not read the property list response due to: {why}")]
    Body { why: String },

    #[error("Could not parse the property list due to: {why}")]
    Parse { why: serde_json::Error },

    #[error("Property entry {index} is invalid: {why}")]
    InvalidEntry { index: usize, why: PropertyError },
}

/// The property listing service, as seen from the UI: one operation, no
/// arguments. Implemented over HTTP in production and mocked in tests.
pub trait PropertyApi {
    fn fetch_all(&self) -> LocalBoxFuture<'static, Result<Vec<Property>, FetchError>>;
}

/// Cloneable [`PropertyApi`] handle that can travel through component
/// properties. Equality is handle identity, which keeps prop diffing cheap.
#[derive(Clone)]
pub struct ApiHandle(Rc<dyn PropertyApi>);

impl ApiHandle {
    pub fn new(api: Rc<dyn PropertyApi>) -> Self {
        Self(api)
    }

    pub fn fetch_all(&self) -> LocalBoxFuture<'static, Result<Vec<Property>, FetchError>> {
        self.0.fetch_all()
    }
}

impl Default for ApiHandle {
    fn default() -> Self {
        Self(Rc::new(HttpPropertyApi))
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Fetches the property list from [`PROPERTIES_ENDPOINT`].
pub struct HttpPropertyApi;

impl PropertyApi for HttpPropertyApi {
    fn fetch_all(&self) -> LocalBoxFuture<'static, Result<Vec<Property>, FetchError>> {
        async {
            use {gloo::utils::format::JsValueSerdeExt as _, wasm_bindgen::JsCast as _};

            let mut reqinit = web_sys::RequestInit::new();
            reqinit.method("GET");
            reqinit.mode(web_sys::RequestMode::Cors);

            let request =
                web_sys::Request::new_with_str_and_init(PROPERTIES_ENDPOINT, &reqinit)
                    .map_err(|e| FetchError::Request { why: js_error(e) })?;

            request
                .headers()
                .set("Accept", "application/json")
                .map_err(|e| FetchError::Request { why: js_error(e) })?;

            let window = gloo::utils::window();
            let resp_value =
                wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
                    .await
                    .map_err(|e| FetchError::Network { why: js_error(e) })?;
            let resp: web_sys::Response = resp_value
                .dyn_into()
                .map_err(|e| FetchError::Network { why: js_error(e) })?;

            if !resp.ok() {
                return Err(FetchError::Status {
                    status: resp.status(),
                });
            }

            let resp_json = resp
                .json()
                .map_err(|e| FetchError::Body { why: js_error(e) })?;
            let json_data = wasm_bindgen_futures::JsFuture::from(resp_json)
                .await
                .map_err(|e| FetchError::Body { why: js_error(e) })?;

            let raw = json_data
                .into_serde::<Vec<RawProperty>>()
                .map_err(|why| FetchError::Parse { why })?;

            validate_all(raw).map_err(|(index, why)| FetchError::InvalidEntry { index, why })
        }
        .boxed_local()
    }
}

fn js_error(e: wasm_bindgen::JsValue) -> String {
    e.as_string()
        .unwrap_or(format!("Unable to retrieve the error: {e:?}"))
}

/// Where fetch failures get reported. Injected into the components rather
/// than written to an ambient side channel, so tests can observe it.
pub trait ErrorReporter {
    fn report(&self, error: &FetchError);
}

/// Cloneable [`ErrorReporter`] handle, same contract as [`ApiHandle`].
#[derive(Clone)]
pub struct ReporterHandle(Rc<dyn ErrorReporter>);

impl ReporterHandle {
    pub fn new(reporter: Rc<dyn ErrorReporter>) -> Self {
        Self(reporter)
    }

    pub fn report(&self, error: &FetchError) {
        self.0.report(error)
    }
}

impl Default for ReporterHandle {
    fn default() -> Self {
        Self(Rc::new(ConsoleReporter))
    }
}

impl PartialEq for ReporterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Writes to the browser console.
pub struct ConsoleReporter;

impl ErrorReporter for ConsoleReporter {
    fn report(&self, error: &FetchError) {
        gloo::console::error!(format!("Property list fetch failed: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_messages_name_the_failing_step() {
        let error = FetchError::Status { status: 503 };
        assert_eq!(
            error.to_string(),
            "The property list service responded with status 503"
        );

        let error = FetchError::InvalidEntry {
            index: 3,
            why: PropertyError::BlankId,
        };
        assert_eq!(
            error.to_string(),
            "Property entry 3 is invalid: Property entry has a blank id"
        );
    }
}
