use gallery::{Gallery, GallerySettings};
use wasm_bindgen_futures::spawn_local;

mod dom;
mod fetch;
mod logging;
mod page_settings;
mod timers;

use dom::DomHost;
use fetch::HttpPhotoSource;
use timers::WindowTimers;

/// Load the gallery once. The fetch runs in the background; a failure is logged to
/// the console and the page stays as it is.
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();

    let settings: GallerySettings = page_settings::load_page_settings();
    let host = match DomHost::from_document(&settings) {
        Ok(host) => host,
        Err(e) => {
            tracing::error!(error = %e, "gallery not mounted");
            return;
        }
    };

    let source = HttpPhotoSource::new(&settings.endpoint);
    let gallery = Gallery::new(host, WindowTimers, settings);

    spawn_local(async move {
        match gallery.load(&source).await {
            Ok(cards) => tracing::info!(cards, "gallery loaded"),
            Err(e) => tracing::error!(error = %e, "gallery failed to load"),
        }
    });
}
