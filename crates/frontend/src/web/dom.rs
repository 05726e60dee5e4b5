//! `web-sys` implementations of the browser seams

use crate::browser::{DocumentBody, FormSubmission, Navigator, PageLocation};
use crate::error::FrontendError;
use pageauth_http::LoginForm;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, FormData, HtmlElement, HtmlFormElement, Window};

pub(crate) fn js_error(value: &JsValue) -> FrontendError {
    FrontendError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

pub(crate) fn window() -> Result<Window, FrontendError> {
    web_sys::window().ok_or_else(|| FrontendError::missing("window"))
}

/// A `submit` event dispatched on a form
pub struct SubmitEventSubmission<'a> {
    event: &'a Event,
}

impl<'a> SubmitEventSubmission<'a> {
    pub const fn new(event: &'a Event) -> Self {
        Self { event }
    }

    fn form(&self) -> Result<HtmlFormElement, FrontendError> {
        self.event
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
            .ok_or_else(|| FrontendError::missing("submit event target is not a form"))
    }
}

impl FormSubmission for SubmitEventSubmission<'_> {
    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn form_fields(&self) -> Result<LoginForm, FrontendError> {
        let data = FormData::new_with_form(&self.form()?).map_err(|e| js_error(&e))?;
        let entries = js_sys::try_iter(&data)
            .map_err(|e| js_error(&e))?
            .ok_or_else(|| FrontendError::Js("FormData is not iterable".into()))?;

        let mut form = LoginForm::new();
        for entry in entries {
            let pair: js_sys::Array = entry.map_err(|e| js_error(&e))?.unchecked_into();
            // File inputs yield Blob values; only text fields are forwarded
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                form.push(name, value);
            }
        }
        Ok(form)
    }
}

/// Navigates by assigning `window.location.href`
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, path: &str) -> Result<(), FrontendError> {
        window()?
            .location()
            .set_href(path)
            .map_err(|e| js_error(&e))
    }
}

/// Reads `window.location.href`
pub struct WindowLocation;

impl PageLocation for WindowLocation {
    fn href(&self) -> Result<String, FrontendError> {
        window()?.location().href().map_err(|e| js_error(&e))
    }
}

/// The page's `<body>` element
pub struct BodyElement {
    body: HtmlElement,
}

impl BodyElement {
    pub fn current() -> Result<Self, FrontendError> {
        let body = window()?
            .document()
            .and_then(|doc| doc.body())
            .ok_or_else(|| FrontendError::missing("document body"))?;
        Ok(Self { body })
    }
}

impl DocumentBody for BodyElement {
    fn replace_inner_html(&self, html: &str) {
        self.body.set_inner_html(html);
    }
}
