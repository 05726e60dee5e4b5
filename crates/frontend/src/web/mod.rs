//! Wiring the handlers to a real page

mod dom;
mod storage;

pub use dom::{BodyElement, SubmitEventSubmission, WindowLocation, WindowNavigator};
pub use storage::LocalStorageBackend;

use crate::error::FrontendError;
use crate::handlers::{LoginSubmitHandler, TokenReplayHandler};
use crate::{client_for, logging};
use dom::{js_error, window};
use gloo::events::{EventListener, EventListenerOptions};
use pageauth_core::{FrontendConfig, TokenStorage};
use pageauth_http::AuthClient;
use std::rc::Rc;
use std::sync::Once;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, Window};

static INIT: Once = Once::new();

fn init_runtime(config: &FrontendConfig) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        logging::init(&config.log_level);
    });
}

fn page_client(config: &FrontendConfig) -> Result<AuthClient, FrontendError> {
    let origin = window()?.location().origin().map_err(|e| js_error(&e))?;
    Ok(client_for(config, &origin)?)
}

fn token_storage(config: &FrontendConfig) -> TokenStorage<LocalStorageBackend> {
    TokenStorage::new(LocalStorageBackend::new(), config.token_key.clone())
}

/// Attach the login handler to the form with id `config.login_form_id`
pub fn install_login_handler(config: &FrontendConfig) -> Result<(), FrontendError> {
    config.validate()?;
    let form = window()?
        .document()
        .and_then(|doc| doc.get_element_by_id(&config.login_form_id))
        .ok_or_else(|| FrontendError::missing(format!("#{}", config.login_form_id)))?;

    let handler = Rc::new(
        LoginSubmitHandler::new(page_client(config)?, token_storage(config), WindowNavigator)
            .with_home_path(config.home_path.clone()),
    );

    // Passive listeners cannot cancel the submit
    let listener = EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(fields) = handler.intercept(&SubmitEventSubmission::new(event)) else {
                return;
            };
            let handler = handler.clone();
            wasm_bindgen_futures::spawn_local(async move {
                handler.complete(fields).await;
            });
        },
    );
    listener.forget();

    tracing::debug!(form = %config.login_form_id, "Login handler installed");
    Ok(())
}

fn document_loaded(window: &Window) -> bool {
    window
        .document()
        .is_some_and(|doc| doc.ready_state() == "complete")
}

/// Run `run` now if the page has loaded, otherwise on the target's `load` event.
/// Returns whether it ran immediately.
fn run_once_loaded<F>(target: &EventTarget, loaded: bool, run: F) -> bool
where
    F: FnOnce() + 'static,
{
    if loaded {
        run();
    } else {
        EventListener::once(target, "load", move |_| run()).forget();
    }
    loaded
}

/// Replay the stored token against the current page once it has loaded
pub fn install_replay_handler(config: &FrontendConfig) -> Result<(), FrontendError> {
    config.validate()?;
    let window = window()?;
    let handler = TokenReplayHandler::new(
        page_client(config)?,
        token_storage(config),
        WindowLocation,
        BodyElement::current()?,
    );

    let run = move || {
        wasm_bindgen_futures::spawn_local(async move {
            handler.replay().await;
        });
    };

    if run_once_loaded(&window, document_loaded(&window), run) {
        tracing::debug!("Page already loaded, replaying now");
    }
    Ok(())
}

fn config_from_js(config: JsValue) -> Result<FrontendConfig, JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        FrontendConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<FrontendConfig>(config)?
    };
    Ok(config)
}

/// Entry point for the login page.
///
/// `config` is an optional object overriding [`FrontendConfig`] fields.
#[wasm_bindgen(js_name = startLogin)]
pub fn start_login(config: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(config)?;
    init_runtime(&config);
    install_login_handler(&config).map_err(|e| {
        tracing::error!(error = %e, "Failed to install login handler");
        JsValue::from_str(&e.to_string())
    })
}

/// Entry point for protected pages.
#[wasm_bindgen(js_name = startReplay)]
pub fn start_replay(config: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(config)?;
    init_runtime(&config);
    install_replay_handler(&config).map_err(|e| {
        tracing::error!(error = %e, "Failed to install replay handler");
        JsValue::from_str(&e.to_string())
    })
}
