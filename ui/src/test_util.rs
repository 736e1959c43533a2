use dioxus::dioxus_core::ElementId;
use dioxus::dioxus_core::Mutation;
use dioxus::dioxus_core::Mutations;
use dioxus::html::set_event_converter;
use dioxus::html::PlatformEventData;
use dioxus::html::SerializedFormData;
use dioxus::html::SerializedHtmlEventConverter;
use dioxus::html::SerializedMouseData;
use dioxus::prelude::*;
use std::any::Any;
use std::rc::Rc;

/// Builds `app` once and returns its server-rendered HTML.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// A live `VirtualDom` that can be fed synthetic events.
///
/// Listener ids are collected from the mutations of the initial build and of
/// every re-render, so elements are addressed by the order in which their
/// listeners were attached.
pub struct EventDom {
    dom: VirtualDom,
    listeners: Vec<(String, ElementId)>,
}

impl EventDom {
    pub fn new<P: Clone + 'static>(app: fn(P) -> Element, props: P) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mut dom = VirtualDom::new_with_props(app, props);
        let mutations = dom.rebuild_to_vec();
        let mut event_dom = Self {
            dom,
            listeners: Vec::new(),
        };
        event_dom.collect_listeners(mutations);
        event_dom
    }

    /// Elements listening for `event`, in attach order.
    pub fn listeners(&self, event: &str) -> Vec<ElementId> {
        self.listeners
            .iter()
            .filter(|(name, _)| name == event)
            .map(|(_, id)| *id)
            .collect()
    }

    pub fn click(&mut self, target: ElementId) {
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        self.dispatch("click", data, target);
    }

    /// Fires an `input` event carrying `value`, as a keystroke would.
    pub fn input(&mut self, target: ElementId, value: &str) {
        let data = PlatformEventData::new(Box::new(SerializedFormData::new(
            value.to_string(),
            Vec::new(),
        )));
        self.dispatch("input", data, target);
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn dispatch(&mut self, name: &str, data: PlatformEventData, target: ElementId) {
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event(name, event, target);

        let mutations = self.dom.render_immediate_to_vec();
        self.collect_listeners(mutations);
    }

    fn collect_listeners(&mut self, mutations: Mutations) {
        for edit in mutations.edits {
            if let Mutation::NewEventListener { name, id } = edit {
                self.listeners.push((name, id));
            }
        }
    }
}
