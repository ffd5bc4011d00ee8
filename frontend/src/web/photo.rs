//! canvas 图片缩放
//!
//! 流程：对象 URL -> `<img>` 解码 -> 按比例绘制到 canvas -> `toBlob` 编码 JPEG。

use civicsync::PhotoError;
use civicsync::photo::{
    JPEG_MIME, MAX_PHOTO_DIMENSION, PHOTO_JPEG_QUALITY, PhotoAttachment, PhotoProcessor,
    fit_within, jpeg_file_name,
};
use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, CanvasRenderingContext2d, File, HtmlCanvasElement, HtmlImageElement, Url};

#[derive(Clone, Copy, Default)]
pub struct CanvasPhotoProcessor;

async fn blob_bytes(blob: &Blob) -> Result<Vec<u8>, PhotoError> {
    let buffer = JsFuture::from(blob.array_buffer())
        .await
        .map_err(|e| PhotoError::Unavailable(format!("{e:?}")))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// 释放对象 URL
struct ObjectUrl(String);

impl ObjectUrl {
    fn new(file: &File) -> Result<Self, PhotoError> {
        Url::create_object_url_with_blob(file)
            .map(ObjectUrl)
            .map_err(|e| PhotoError::Unavailable(format!("{e:?}")))
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

async fn decode_image(file: &File) -> Result<HtmlImageElement, PhotoError> {
    let url = ObjectUrl::new(file)?;
    let image = HtmlImageElement::new().map_err(|e| PhotoError::Unavailable(format!("{e:?}")))?;
    image.set_src(&url.0);
    JsFuture::from(image.decode())
        .await
        .map_err(|e| PhotoError::Decode(format!("{e:?}")))?;
    Ok(image)
}

fn draw_scaled(image: &HtmlImageElement, width: u32, height: u32) -> Result<HtmlCanvasElement, PhotoError> {
    let unavailable = |e: JsValue| PhotoError::Unavailable(format!("{e:?}"));
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PhotoError::Unavailable("no document".to_string()))?;
    let canvas = document
        .create_element("canvas")
        .map_err(unavailable)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| PhotoError::Unavailable("not a canvas".to_string()))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context = canvas
        .get_context("2d")
        .map_err(unavailable)?
        .ok_or_else(|| PhotoError::Unavailable("2d context missing".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| PhotoError::Unavailable("unexpected context type".to_string()))?;
    context
        .draw_image_with_html_image_element_and_dw_and_dh(
            image,
            0.0,
            0.0,
            width as f64,
            height as f64,
        )
        .map_err(|e| PhotoError::Encode(format!("{e:?}")))?;
    Ok(canvas)
}

async fn encode_jpeg(canvas: &HtmlCanvasElement) -> Result<Blob, PhotoError> {
    let (tx, rx) = oneshot::channel::<Option<Blob>>();
    let callback = Closure::once(move |blob: Option<Blob>| {
        let _ = tx.send(blob);
    });
    canvas
        .to_blob_with_type_and_encoder_options(
            callback.as_ref().unchecked_ref(),
            JPEG_MIME,
            &JsValue::from_f64(PHOTO_JPEG_QUALITY),
        )
        .map_err(|e| PhotoError::Encode(format!("{e:?}")))?;

    // callback 在 await 期间保持存活
    let blob = rx
        .await
        .map_err(|_| PhotoError::Encode("encoder callback dropped".to_string()))?;
    drop(callback);
    blob.ok_or_else(|| PhotoError::Encode("canvas produced no blob".to_string()))
}

#[async_trait::async_trait(?Send)]
impl PhotoProcessor for CanvasPhotoProcessor {
    type Source = File;

    async fn downscale(&self, source: &File) -> Result<PhotoAttachment, PhotoError> {
        let image = decode_image(source).await?;
        let (width, height) = fit_within(
            image.natural_width(),
            image.natural_height(),
            MAX_PHOTO_DIMENSION,
        );
        if width == 0 || height == 0 {
            return Err(PhotoError::Decode("image has no pixels".to_string()));
        }

        let canvas = draw_scaled(&image, width, height)?;
        let blob = encode_jpeg(&canvas).await?;
        Ok(PhotoAttachment {
            file_name: jpeg_file_name(&source.name()),
            mime_type: JPEG_MIME.to_string(),
            bytes: blob_bytes(&blob).await?,
            dimensions: Some((width, height)),
            downscaled: true,
        })
    }

    async fn original(&self, source: &File) -> Result<PhotoAttachment, PhotoError> {
        let mime_type = match source.type_() {
            t if t.is_empty() => "application/octet-stream".to_string(),
            t => t,
        };
        Ok(PhotoAttachment {
            file_name: source.name(),
            mime_type,
            bytes: blob_bytes(source).await?,
            dimensions: None,
            downscaled: false,
        })
    }
}
