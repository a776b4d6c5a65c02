use gallery::{CardHost, CardSpec, ClickHandler, GalleryError, GallerySettings};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// The page's gallery container and count display.
#[derive(Clone)]
pub(super) struct DomHost {
    document: web_sys::Document,
    gallery: web_sys::Element,
    count: web_sys::Element,
}

impl DomHost {
    pub(super) fn from_document(settings: &GallerySettings) -> Result<Self, GalleryError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GalleryError::MissingMount("document".to_string()))?;
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| GalleryError::MissingMount(id.to_string()))
        };
        let gallery = find(&settings.gallery_id)?;
        let count = find(&settings.count_id)?;
        Ok(Self {
            document,
            gallery,
            count,
        })
    }

    fn element(&self, tag: &str, class: &str) -> web_sys::Element {
        let el = self
            .document
            .create_element(tag)
            .expect("create_element only throws for invalid tag names");
        let _ = el.set_attribute("class", class);
        el
    }
}

impl CardHost for DomHost {
    type Card = web_sys::Element;

    fn build_card(&self, spec: &CardSpec, on_click: ClickHandler<web_sys::Element>) -> web_sys::Element {
        let card = self.element("div", &spec.card_class);

        let img = self.element("img", &spec.image_class);
        let _ = img.set_attribute("src", &spec.image_src);

        // Text content, so titles containing markup show up literally.
        let title = self.element("p", &spec.label_class);
        title.set_text_content(Some(&spec.label));

        let _ = card.append_child(&img);
        let _ = card.append_child(&title);

        let listener = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            let Some(target) = ev.current_target() else {
                return;
            };
            let Ok(clicked) = target.dyn_into::<web_sys::Element>() else {
                return;
            };
            on_click(&clicked);
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = card.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        // Lives as long as the card's listener does.
        listener.forget();

        card
    }

    fn append_cards(&self, cards: &[web_sys::Element]) {
        for card in cards {
            let _ = self.gallery.append_child(card);
        }
    }

    fn start_fade(&self, card: &web_sys::Element, animation: &str) {
        if let Some(el) = card.dyn_ref::<web_sys::HtmlElement>() {
            let _ = el.style().set_property("animation", animation);
        }
    }

    fn remove_card(&self, card: &web_sys::Element) {
        card.remove();
    }

    fn card_count(&self) -> usize {
        self.gallery.child_element_count() as usize
    }

    fn set_count_text(&self, text: &str) {
        self.count.set_text_content(Some(text));
    }
}
