//! Platform shims for the browser and desktop builds.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_write(s: &str);
}

/// Browser console on wasm, the `log` facade on desktop.
pub fn console_log(s: &str) {
    #[cfg(target_arch = "wasm32")]
    console_write(s);
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("{}", s);
}

/// Routes wasm panics to the browser console.
pub fn set_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Runs a request future on the page's microtask queue.
#[cfg(target_arch = "wasm32")]
pub fn spawn_async<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// Runs a request future on the ambient tokio runtime; panics outside one.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_async<F>(future: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}
