//! Seams between the handlers and the browser.
//!
//! The `web` module implements these over `web-sys`; tests use recording fakes.

use crate::error::FrontendError;
use pageauth_http::LoginForm;

/// A form submission in flight
pub trait FormSubmission {
    /// Stop the browser from performing its own form navigation
    fn prevent_default(&self);

    /// Text fields of the submitted form
    fn form_fields(&self) -> Result<LoginForm, FrontendError>;
}

/// Full-page navigation
pub trait Navigator {
    fn navigate(&self, path: &str) -> Result<(), FrontendError>;
}

/// Address of the page currently displayed
pub trait PageLocation {
    fn href(&self) -> Result<String, FrontendError>;
}

/// The rendered document body
pub trait DocumentBody {
    fn replace_inner_html(&self, html: &str);
}

impl<T: FormSubmission + ?Sized> FormSubmission for &T {
    fn prevent_default(&self) {
        (**self).prevent_default();
    }

    fn form_fields(&self) -> Result<LoginForm, FrontendError> {
        (**self).form_fields()
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate(&self, path: &str) -> Result<(), FrontendError> {
        (**self).navigate(path)
    }
}

impl<T: PageLocation + ?Sized> PageLocation for &T {
    fn href(&self) -> Result<String, FrontendError> {
        (**self).href()
    }
}

impl<T: DocumentBody + ?Sized> DocumentBody for &T {
    fn replace_inner_html(&self, html: &str) {
        (**self).replace_inner_html(html);
    }
}
