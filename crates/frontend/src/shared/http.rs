//! Тонкая обёртка над `window.fetch`.
//!
//! Любой HTTP-статус считается полученным ответом и возвращается как
//! `HttpReply`; `Err` означает только сбой транспорта (сеть, CORS, DNS).

use contracts::shared::http_reply::HttpReply;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

pub async fn get(url: &str) -> Result<HttpReply, String> {
    send("GET", url, None, None).await
}

pub async fn post_json<T: Serialize>(url: &str, payload: &T) -> Result<HttpReply, String> {
    let body = serde_json::to_string(payload).map_err(|e| format!("{e}"))?;
    send(
        "POST",
        url,
        Some(&JsValue::from_str(&body)),
        Some("application/json"),
    )
    .await
}

/// Content-Type с boundary браузер выставит сам
pub async fn post_form(url: &str, form: &FormData) -> Result<HttpReply, String> {
    send("POST", url, Some(form.as_ref()), None).await
}

async fn send(
    method: &str,
    url: &str,
    body: Option<&JsValue>,
    content_type: Option<&str>,
) -> Result<HttpReply, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(body);
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| js_error_text(&e))?;
    let headers = request.headers();
    headers
        .set("Accept", "application/json")
        .map_err(|e| js_error_text(&e))?;
    if let Some(content_type) = content_type {
        headers
            .set("Content-Type", content_type)
            .map_err(|e| js_error_text(&e))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error_text(&e))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| js_error_text(&e))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| js_error_text(&e))?)
        .await
        .map_err(|e| js_error_text(&e))?;

    Ok(HttpReply::new(resp.status(), text.as_string().unwrap_or_default()))
}

/// Текст JS-исключения в том виде, в каком его показал бы `String(err)`
pub fn js_error_text(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(err.name()), String::from(err.message()));
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
