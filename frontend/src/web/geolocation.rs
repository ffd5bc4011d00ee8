//! 浏览器定位
//!
//! 把 `navigator.geolocation.getCurrentPosition` 的两个回调桥接为一个 future，
//! 结果统一为 [`GeolocationOutcome`]。只请求一次，不重试。

use civicsync::geo::GeolocationOutcome;
use civicsync_shared::Coordinates;
use futures::channel::oneshot;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::PositionOptions;

const LOCATE_TIMEOUT_MS: u32 = 10_000;

fn number_at(value: &JsValue, path: &[&str]) -> Option<f64> {
    let mut current = value.clone();
    for key in path {
        current = js_sys::Reflect::get(&current, &JsValue::from_str(key)).ok()?;
    }
    current.as_f64()
}

fn coordinates_of(position: &JsValue) -> Option<Coordinates> {
    Some(Coordinates::new(
        number_at(position, &["coords", "latitude"])?,
        number_at(position, &["coords", "longitude"])?,
    ))
}

pub async fn current_position() -> GeolocationOutcome {
    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok())
    else {
        return GeolocationOutcome::Unavailable;
    };

    let (tx, rx) = oneshot::channel::<GeolocationOutcome>();
    // 两个回调只会触发其一，共用同一个发送端
    let sender = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let sender = sender.clone();
        Closure::once_into_js(move |position: JsValue| {
            let outcome = coordinates_of(&position)
                .map(GeolocationOutcome::Located)
                .unwrap_or(GeolocationOutcome::Unavailable);
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(outcome);
            }
        })
    };
    let on_error = {
        let sender = sender.clone();
        Closure::once_into_js(move |error: JsValue| {
            let code = number_at(&error, &["code"]).unwrap_or_default() as u16;
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(GeolocationOutcome::from_error_code(code));
            }
        })
    };

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(LOCATE_TIMEOUT_MS);
    options.set_maximum_age(0);

    if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
        on_success.unchecked_ref(),
        Some(on_error.unchecked_ref()),
        &options,
    ) {
        tracing::warn!(error = ?e, "geolocation request could not be started");
        return GeolocationOutcome::Unavailable;
    }

    rx.await.unwrap_or(GeolocationOutcome::Unavailable)
}
