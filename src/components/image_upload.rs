use leptos::prelude::*;

use crate::storage::images::ImageNamespace;

/// Endpoint the browser posts image files to.
pub fn upload_endpoint(namespace: ImageNamespace) -> String {
    format!("/api/v1/admin/upload/{namespace}")
}

/// Post a file picked in the browser to the upload endpoint.
#[cfg(feature = "hydrate")]
async fn upload_file(
    namespace: ImageNamespace,
    file: web_sys::File,
) -> Result<crate::storage::images::UploadedImage, String> {
    let form = web_sys::FormData::new().map_err(|_| "Could not prepare the upload".to_string())?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|_| "Could not attach the file".to_string())?;

    let response = gloo_net::http::Request::post(&upload_endpoint(namespace))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body["error"].as_str().map(str::to_string))
            .unwrap_or_else(|| format!("Upload failed ({})", response.status()));
        return Err(message);
    }

    response.json().await.map_err(|e| e.to_string())
}

/// Image picker bound to a draft's image reference.
///
/// Removing the image only clears the reference; the stored blob is kept.
#[component]
pub fn ImageUpload(
    namespace: ImageNamespace,
    #[prop(into)] image_url: Signal<Option<String>>,
    on_uploaded: Callback<String>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let (uploading, set_uploading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");

            set_uploading.set(true);
            set_error.set(None);
            leptos::task::spawn_local(async move {
                match upload_file(namespace, file).await {
                    Ok(uploaded) => on_uploaded.run(uploaded.url),
                    Err(message) => set_error.set(Some(message)),
                }
                set_uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, namespace, on_uploaded, set_uploading, set_error);
        }
    };

    view! {
        <div class="image-upload">
            {move || match image_url.get() {
                Some(url) => view! {
                    <div class="image-preview">
                        <img src=url alt="Selected image"/>
                        <button
                            type="button"
                            class="btn btn-sm btn-ghost"
                            on:click=move |_| on_clear.run(())
                        >
                            "Remove image"
                        </button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <label class="file-input">
                        <span>{move || if uploading.get() { "Uploading..." } else { "Choose an image" }}</span>
                        <input
                            type="file"
                            accept="image/*"
                            prop:disabled=move || uploading.get()
                            on:change=on_change
                        />
                    </label>
                }
                .into_any(),
            }}
            {move || error.get().map(|message| view! { <p class="text-error">{message}</p> })}
        </div>
    }
}
