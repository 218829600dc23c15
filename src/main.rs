#![allow(warnings)]
//! Todo Web Frontend Entry Point

mod app;
mod components;
mod context;
mod notice;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let directive = option_env!("TODO_WEB_LOG").unwrap_or("info");
    if let Err(e) = console_logger::init_logger("TodoWeb", directive) {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&e.to_string()));
    }
    mount_to_body(App);
}
