//! Browser binding: page elements as a carousel surface plus event wiring.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement};

use vitrine_core::{Arrow, Carousel, CarouselConfig, CarouselSurface};

use crate::error::MountError;
use crate::logic::{CONFIG_ATTRIBUTE, px, resolve_root_config, translate_x};

/// Carousel markup resolved under one root element.
#[derive(Debug)]
pub(crate) struct DomSurface {
    track: HtmlElement,
    slides: Vec<HtmlElement>,
    dots: Vec<Element>,
    prev: Element,
    next: Element,
    current_class: String,
    hidden_class: String,
}

impl DomSurface {
    fn dot_index(&self, element: &Element) -> Option<usize> {
        self.dots.iter().position(|dot| dot == element)
    }
}

impl CarouselSurface for DomSurface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn dot_count(&self) -> usize {
        self.dots.len()
    }

    fn slides_marked_current(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter_map(|(index, slide)| {
                slide
                    .class_list()
                    .contains(&self.current_class)
                    .then_some(index)
            })
            .collect()
    }

    fn measure_slide_width(&self) -> f64 {
        self.slides
            .first()
            .map_or(0.0, |slide| slide.get_bounding_client_rect().width())
    }

    fn set_slide_left(&mut self, index: usize, left: f64) {
        if let Some(slide) = self.slides.get(index) {
            report("slide left", slide.style().set_property("left", &px(left)));
        }
    }

    fn set_track_offset(&mut self, offset: f64) {
        report(
            "track transform",
            self.track
                .style()
                .set_property("transform", &translate_x(offset)),
        );
    }

    fn set_slide_current(&mut self, index: usize, current: bool) {
        if let Some(slide) = self.slides.get(index) {
            toggle(slide, &self.current_class, current);
        }
    }

    fn set_dot_current(&mut self, index: usize, current: bool) {
        if let Some(dot) = self.dots.get(index) {
            toggle(dot, &self.current_class, current);
        }
    }

    fn set_arrow_hidden(&mut self, arrow: Arrow, hidden: bool) {
        let control = match arrow {
            Arrow::Previous => &self.prev,
            Arrow::Next => &self.next,
        };
        toggle(control, &self.hidden_class, hidden);
    }
}

fn toggle(element: &Element, class: &str, on: bool) {
    report(
        "class toggle",
        element
            .class_list()
            .toggle_with_force(class, on)
            .map(|_| ()),
    );
}

fn report(operation: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        console::error!("carousel update failed", operation.to_string(), err);
    }
}

/// Live carousel bound to page markup.
///
/// Dropping the handle detaches its event listeners.
#[derive(Debug)]
#[must_use = "dropping the handle detaches the carousel's listeners"]
pub struct CarouselHandle {
    carousel: Rc<RefCell<Carousel<DomSurface>>>,
    listeners: Vec<EventListener>,
}

impl CarouselHandle {
    /// Index of the current slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.carousel.borrow().current_index()
    }

    /// Keep the listeners attached for the lifetime of the page.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

/// Bind the carousel under `root` and attach its listeners.
///
/// # Errors
/// Returns [`MountError`] when required elements are missing, a slide is not
/// an HTML element, or the markup violates carousel preconditions.
pub fn mount(root: &Element, config: &CarouselConfig) -> Result<CarouselHandle, MountError> {
    let window = web_sys::window().ok_or(MountError::MissingWindow)?;
    let track = find(root, &config.track_selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement {
            selector: config.track_selector.clone(),
        })?;
    let next = find(root, &config.next_selector)?;
    let prev = find(root, &config.prev_selector)?;
    let nav = find(root, &config.nav_selector)?;

    let slides = children(&track)
        .into_iter()
        .map(|slide| {
            slide
                .dyn_into::<HtmlElement>()
                .map_err(|_| MountError::NotHtmlElement {
                    selector: format!("{} > *", config.track_selector),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let surface = DomSurface {
        track,
        slides,
        dots: children(&nav),
        prev: prev.clone(),
        next: next.clone(),
        current_class: config.current_class.clone(),
        hidden_class: config.hidden_class.clone(),
    };
    let carousel = Rc::new(RefCell::new(Carousel::new(surface)?));

    let on_prev = EventListener::new(&prev, "click", {
        let carousel = Rc::clone(&carousel);
        move |_event| carousel.borrow_mut().on_previous_click()
    });
    let on_next = EventListener::new(&next, "click", {
        let carousel = Rc::clone(&carousel);
        move |_event| carousel.borrow_mut().on_next_click()
    });
    let on_dot = EventListener::new(&nav, "click", {
        let carousel = Rc::clone(&carousel);
        let dot_selector = config.dot_selector.clone();
        move |event| {
            let index = closest_control(event, &dot_selector)
                .and_then(|dot| carousel.borrow().surface().dot_index(&dot));
            carousel.borrow_mut().on_dot_click(index);
        }
    });
    let on_resize = EventListener::new(&window, "resize", {
        let carousel = Rc::clone(&carousel);
        move |_event| carousel.borrow_mut().on_resize()
    });

    Ok(CarouselHandle {
        carousel,
        listeners: vec![on_prev, on_next, on_dot, on_resize],
    })
}

/// Mount every carousel root in `document`.
///
/// Roots match `fallback.root_selector` and may override fields through the
/// `data-carousel-config` attribute. Without any matching root the document
/// element is treated as the single root. Roots that fail to mount are
/// reported to the console and skipped.
#[must_use]
pub fn mount_all(document: &Document, fallback: &CarouselConfig) -> Vec<CarouselHandle> {
    let mut roots = match document.query_selector_all(&fallback.root_selector) {
        Ok(list) => (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(err) => {
            console::error!("carousel root query failed", err);
            Vec::new()
        }
    };
    if roots.is_empty() {
        roots.extend(document.document_element());
    }

    roots
        .iter()
        .filter_map(|root| {
            let attribute = root.get_attribute(CONFIG_ATTRIBUTE);
            let mounted = resolve_root_config(attribute.as_deref(), fallback)
                .map_err(MountError::Config)
                .and_then(|config| mount(root, &config));
            match mounted {
                Ok(handle) => Some(handle),
                Err(err) => {
                    console::error!("carousel mount failed", err.to_string());
                    None
                }
            }
        })
        .collect()
}

fn find(root: &Element, selector: &str) -> Result<Element, MountError> {
    root.query_selector(selector)
        .map_err(|err| MountError::Query {
            selector: selector.to_string(),
            detail: format!("{err:?}"),
        })?
        .ok_or_else(|| MountError::MissingElement {
            selector: selector.to_string(),
        })
}

fn children(parent: &Element) -> Vec<Element> {
    let collection = parent.children();
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .collect()
}

fn closest_control(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}
