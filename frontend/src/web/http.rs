//! HTTP 客户端适配
//!
//! 用 `gloo-net` 实现核心层的 [`HttpClient`] trait。
//! multipart 表单转换为浏览器原生的 `FormData`，边界由浏览器生成。

use civicsync::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse, MultipartForm, RequestBody};
use civicsync::ApiError;
use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

#[derive(Clone, Copy, Default)]
pub struct GlooHttpClient;

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

fn js_error(context: &str, err: JsValue) -> ApiError {
    ApiError::Encode(format!("{context}: {err:?}"))
}

fn to_form_data(form: &MultipartForm) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(|e| js_error("FormData", e))?;
    for (name, value) in form.fields() {
        data.append_with_str(name, value)
            .map_err(|e| js_error("append field", e))?;
    }

    if let Some(file) = form.file_part() {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(&file.mime_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| js_error("Blob", e))?;
        data.append_with_blob_and_filename(&file.field, &blob, &file.file_name)
            .map_err(|e| js_error("append file", e))?;
    }
    Ok(data)
}

#[async_trait::async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut request = builder(req.method, &req.url);
        for (k, v) in &req.headers {
            request = request.header(k, v);
        }

        let request = match &req.body {
            Some(RequestBody::Json(body)) => request.body(body.as_str()),
            Some(RequestBody::Multipart(form)) => request.body(to_form_data(form)?),
            None => request.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
