// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A cursor mounted on a live document.
//!
//! [`Mounted`] owns every global listener and the mutation observer. Per-element
//! listeners live in the shared [`HoverRegistry`] and hold only weak references back to
//! the shared state, as does the render loop, so dropping [`Mounted`] tears everything
//! down.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{AnimationFrame, request_animation_frame};
use js_sys::Array;
use kurbo::Point;
use understory_cursor::{
    CursorClasses, CursorConfig, CursorTracker, GeometryWrite, HoverOutcome, HoverRegistry,
    Transition,
};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, MouseEvent, MutationObserver, MutationObserverInit,
    Window,
};

use crate::dom::{self, DomHost, ElementIds, ElementRef};

/// Listener pair attached to one interactive element.
///
/// Dropping it detaches both listeners and gives the element back the inline cursor it
/// had before registration.
struct Registration {
    element: HtmlElement,
    previous_cursor: String,
    _enter: EventListener,
    _leave: EventListener,
}

impl Registration {
    fn attach(shared: &Rc<Shared>, target: &ElementRef) -> Self {
        let element = target.element().clone();
        let previous_cursor = dom::hide_native_cursor(&element);

        let weak = Rc::downgrade(shared);
        let entered = target.clone();
        let enter = EventListener::new(&element, "mouseenter", move |_event: &Event| {
            if let Some(shared) = weak.upgrade() {
                shared.on_enter(entered.clone());
            }
        });

        let weak = Rc::downgrade(shared);
        let left = target.clone();
        let leave = EventListener::new(&element, "mouseleave", move |event: &Event| {
            if let Some(shared) = weak.upgrade() {
                shared.on_leave(left.clone(), event);
            }
        });

        Self {
            element,
            previous_cursor,
            _enter: enter,
            _leave: leave,
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        dom::restore_native_cursor(&self.element, &self.previous_cursor);
    }
}

/// State shared between the mounted handle and its callbacks.
struct Shared {
    document: Document,
    body: HtmlElement,
    host: DomHost,
    ids: ElementIds,
    proxy_id: String,
    proxy: RefCell<Option<HtmlElement>>,
    tracker: RefCell<CursorTracker<ElementRef>>,
    registry: RefCell<HoverRegistry<ElementRef, Registration>>,
    classes: Cell<Option<CursorClasses>>,
    frame: RefCell<Option<AnimationFrame>>,
    restore_transition: RefCell<Option<AnimationFrame>>,
}

impl Shared {
    fn config(&self) -> CursorConfig {
        self.tracker.borrow().config().clone()
    }

    /// The proxy element, looked up by id until it exists.
    fn proxy(&self) -> Option<HtmlElement> {
        if let Some(proxy) = self.proxy.borrow().as_ref() {
            if proxy.is_connected() {
                return Some(proxy.clone());
            }
        }
        let found = self
            .document
            .get_element_by_id(&self.proxy_id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        if found.is_some() {
            // A new proxy has none of our classes yet.
            self.classes.set(None);
        }
        self.proxy.replace(found.clone());
        found
    }

    fn schedule_frame(shared: &Rc<Self>) {
        let weak = Rc::downgrade(shared);
        let handle = request_animation_frame(move |_| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            shared.render();
            Self::schedule_frame(&shared);
        });
        *shared.frame.borrow_mut() = Some(handle);
    }

    fn render(&self) {
        let Some(proxy) = self.proxy() else {
            return;
        };
        self.sync_classes(&proxy);
        if let Some(geometry) = self.tracker.borrow().frame(&self.host) {
            dom::apply_geometry(&proxy, &geometry);
        }
    }

    fn sync_classes(&self, proxy: &HtmlElement) {
        let tracker = self.tracker.borrow();
        let classes = tracker.classes();
        if self.classes.get() == Some(classes) {
            return;
        }
        proxy.set_class_name(&classes.to_class_string(&tracker.config().class_names));
        self.classes.set(Some(classes));
    }

    fn apply(&self, write: Option<GeometryWrite>) {
        let Some(proxy) = self.proxy() else {
            return;
        };
        if let Some(write) = write {
            match write.transition {
                Transition::Animated => dom::apply_geometry(&proxy, &write.geometry),
                Transition::Suppressed => {
                    let restore = dom::apply_geometry_instantly(&proxy, &write.geometry);
                    *self.restore_transition.borrow_mut() = Some(restore);
                }
            }
        }
        self.sync_classes(&proxy);
    }

    fn refresh_registrations(self: &Rc<Self>) {
        let selector = self.config().interactive_selector;
        let matched: Vec<ElementRef> = dom::select_all(&self.document, &selector)
            .into_iter()
            .map(|element| self.ids.identify(element))
            .collect();
        let report = self
            .registry
            .borrow_mut()
            .sync(matched, |target| Registration::attach(self, target));
        if report.is_unchanged() {
            return;
        }
        log::debug!(
            "cursor registry: {} attached, {} released",
            report.attached,
            report.released.len()
        );
        let write = {
            let mut tracker = self.tracker.borrow_mut();
            report
                .released
                .iter()
                .find_map(|element| tracker.release(element))
        };
        if write.is_some() {
            self.apply(write);
        }
    }

    fn on_enter(&self, target: ElementRef) {
        let outcome = self.tracker.borrow_mut().on_enter(&self.host, target);
        if let HoverOutcome::Entered { target } = outcome {
            let config = self.config();
            dom::shake(
                target.element(),
                &config.text_selector,
                &config.enter_shake,
                false,
            );
        }
        self.apply(None);
    }

    fn on_leave(&self, left: ElementRef, event: &Event) {
        let config = self.config();
        let related = event
            .dyn_ref::<MouseEvent>()
            .and_then(MouseEvent::related_target)
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| dom::closest(&element, &config.interactive_selector))
            .map(|element| self.ids.identify(element));
        let outcome = self
            .tracker
            .borrow_mut()
            .on_leave(&self.host, left, related);
        match outcome {
            HoverOutcome::Detached { from, write } => {
                self.apply(Some(write));
                dom::shake(
                    from.element(),
                    &config.text_selector,
                    &config.leave_shake,
                    true,
                );
            }
            HoverOutcome::HandedOff { .. } | HoverOutcome::Entered { .. } => self.apply(None),
        }
    }
}

/// A cursor installed on the page. Dropping it unmounts.
pub(crate) struct Mounted {
    shared: Rc<Shared>,
    created_proxy: Option<HtmlElement>,
    listeners: Vec<EventListener>,
    observer: MutationObserver,
    _on_mutation: Closure<dyn FnMut(Array, MutationObserver)>,
}

impl core::fmt::Debug for Mounted {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mounted")
            .field("proxy_id", &self.shared.proxy_id)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Mounted {
    /// Install the cursor on `window`'s document.
    ///
    /// The proxy is the element with id `proxy_id`; one is created on `body` if none
    /// exists yet.
    pub(crate) fn install(
        window: Window,
        proxy_id: &str,
        config: CursorConfig,
    ) -> Result<Self, JsValue> {
        let document = window.document().ok_or("No document")?;
        let body = document.body().ok_or("No body")?;

        let created_proxy = if document.get_element_by_id(proxy_id).is_none() {
            let proxy = document.create_element("div")?;
            proxy.set_id(proxy_id);
            body.append_child(&proxy)?;
            Some(proxy.dyn_into::<HtmlElement>()?)
        } else {
            None
        };

        let shared = Rc::new(Shared {
            document: document.clone(),
            body: body.clone(),
            host: DomHost::new(window.clone()),
            ids: ElementIds::new(),
            proxy_id: proxy_id.to_owned(),
            proxy: RefCell::new(None),
            tracker: RefCell::new(CursorTracker::with_config(config)),
            registry: RefCell::new(HoverRegistry::new()),
            classes: Cell::new(None),
            frame: RefCell::new(None),
            restore_transition: RefCell::new(None),
        });

        dom::hide_native_cursor(&body);
        shared.refresh_registrations();

        let weak: Weak<Shared> = Rc::downgrade(&shared);
        let on_mutation = Closure::<dyn FnMut(Array, MutationObserver)>::new(
            move |_records: Array, _observer: MutationObserver| {
                if let Some(shared) = weak.upgrade() {
                    shared.refresh_registrations();
                }
            },
        );
        let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref())?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer.observe_with_options(&body, &init)?;

        let listeners = install_listeners(&shared, &window, &document);
        Shared::schedule_frame(&shared);
        log::debug!(
            "cursor mounted on #{proxy_id} with {} interactive elements",
            shared.registry.borrow().len()
        );

        Ok(Self {
            shared,
            created_proxy,
            listeners,
            observer,
            _on_mutation: on_mutation,
        })
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.listeners.clear();
        self.observer.disconnect();
        self.shared.frame.borrow_mut().take();
        self.shared.restore_transition.borrow_mut().take();
        self.shared.registry.borrow_mut().clear();
        self.shared.tracker.borrow_mut().reset();
        let _ = self.shared.body.style().set_property("cursor", "auto");
        if let Some(proxy) = self.created_proxy.take() {
            proxy.remove();
        } else if let Some(proxy) = self.shared.proxy() {
            dom::clear_proxy(&proxy);
        }
        log::debug!("cursor unmounted from #{}", self.shared.proxy_id);
    }
}

fn pointer_of(event: &Event) -> Option<Point> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    ))
}

fn install_listeners(
    shared: &Rc<Shared>,
    window: &Window,
    document: &Document,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    let view = Rc::clone(shared);
    listeners.push(EventListener::new(window, "mousemove", move |event: &Event| {
        let Some(point) = pointer_of(event) else {
            return;
        };
        let write = view.tracker.borrow_mut().on_pointer_move(point);
        view.apply(write);
    }));

    let view = Rc::clone(shared);
    listeners.push(EventListener::new_with_options(
        window,
        "scroll",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |_event: &Event| {
            let write = view.tracker.borrow_mut().on_scroll();
            if write.is_some() {
                view.apply(write);
            }
        },
    ));

    let view = Rc::clone(shared);
    listeners.push(EventListener::new(document, "mouseleave", move |_event: &Event| {
        view.tracker.borrow_mut().on_document_leave();
        view.apply(None);
    }));

    let view = Rc::clone(shared);
    listeners.push(EventListener::new(document, "mouseenter", move |_event: &Event| {
        view.tracker.borrow_mut().on_document_enter();
        view.apply(None);
    }));

    let view = Rc::clone(shared);
    listeners.push(EventListener::new(document, "mousedown", move |_event: &Event| {
        let write = view.tracker.borrow_mut().on_pointer_down();
        view.apply(write);
    }));

    let view = Rc::clone(shared);
    listeners.push(EventListener::new(document, "mouseup", move |_event: &Event| {
        let write = view.tracker.borrow_mut().on_pointer_up();
        view.apply(write);
    }));

    listeners
}
