//! The canvas view - element model operations and view ownership.
//!
//! A [`Canvas`] owns everything one canvas view needs: the view transform,
//! the input state machine, the selection and the media overlay flag. The
//! element list itself lives in the [`ElementStore`] handed in at
//! construction; every mutation goes through one read-modify-write round
//! trip of that store.
//!
//! Pointer, wheel and key handlers are implemented in [`crate::input`].

use crate::config::CanvasConfig;
use crate::error::ConfigResult;
use crate::geometry::{Bounds, Point, Rect, constrain_to_bounds};
use crate::host::{CanvasHost, ElementStore, IdAllocator};
use crate::input::InputState;
use crate::input::throttle::FrameThrottle;
use crate::types::{Element, ElementId, ElementKind, MediaDescriptor};
use crate::view::ViewTransform;
use tracing::{debug, warn};

pub struct Canvas<S, H> {
    pub(crate) store: S,
    pub(crate) host: H,
    pub(crate) config: CanvasConfig,
    pub(crate) view: ViewTransform,
    pub(crate) input_state: InputState,
    pub(crate) selected: Option<ElementId>,
    pub(crate) media_overlay_open: bool,
    pub(crate) resize_throttle: FrameThrottle,
    pub(crate) capture_held: bool,
}

impl<S, H> Canvas<S, H>
where
    S: ElementStore + IdAllocator,
    H: CanvasHost,
{
    pub fn new(store: S, host: H) -> Self {
        Self::with_config(store, host, CanvasConfig::default())
    }

    /// Build a canvas from `config`, repairing values that would leave the
    /// canvas unusable. Use [`Canvas::try_with_config`] to reject them.
    pub fn with_config(store: S, host: H, config: CanvasConfig) -> Self {
        if let Err(err) = config.validate() {
            warn!(%err, "Repairing canvas config");
        }
        Self::from_valid_config(store, host, config.sanitized())
    }

    /// Build a canvas, failing on a config `validate` rejects.
    pub fn try_with_config(store: S, host: H, config: CanvasConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(store, host, config))
    }

    fn from_valid_config(store: S, host: H, config: CanvasConfig) -> Self {
        Self {
            store,
            host,
            view: ViewTransform::new(config.min_zoom, config.max_zoom),
            resize_throttle: FrameThrottle::new(config.resize_throttle()),
            config,
            input_state: InputState::Idle,
            selected: None,
            media_overlay_open: false,
            capture_held: false,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access for collaborators that switch pages or edit the
    /// store directly. Any in-flight gesture whose target disappears ends on
    /// the next pointer move.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn elements(&self) -> &[Element] {
        self.store.elements()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.store.elements().iter().find(|e| e.id == id)
    }

    pub fn is_media_overlay_open(&self) -> bool {
        self.media_overlay_open
    }

    pub fn open_media_overlay(&mut self) {
        self.media_overlay_open = true;
    }

    pub fn close_media_overlay(&mut self) {
        self.media_overlay_open = false;
    }

    /// Current viewport rectangle, re-queried from the host on every call.
    pub fn container_bounds(&self) -> Option<Bounds> {
        self.host.container_bounds()
    }

    /// Convert a client position to canvas space.
    pub fn screen_to_canvas(&self, client: Point) -> Point {
        self.view.screen_to_canvas(client, self.container_bounds())
    }

    /// Convert a canvas position to a container-relative screen position.
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        self.view.canvas_to_screen(canvas)
    }

    // ------------------------------------------------------------------
    // Element model
    // ------------------------------------------------------------------

    /// Read the element list, let `f` edit a copy, write it back once.
    pub(crate) fn update_elements<R>(&mut self, f: impl FnOnce(&mut Vec<Element>) -> R) -> R {
        let mut elements = self.store.elements().to_vec();
        let result = f(&mut elements);
        self.store.set_elements(elements);
        result
    }

    /// Apply `f` to one element. Returns `None` without touching the store if
    /// the element does not exist.
    pub(crate) fn update_element<R>(
        &mut self,
        id: ElementId,
        f: impl FnOnce(&mut Element) -> R,
    ) -> Option<R> {
        let index = self.store.elements().iter().position(|e| e.id == id)?;
        Some(self.update_elements(|elements| f(&mut elements[index])))
    }

    /// Create a default text box with its top-left at `canvas_pos` and
    /// select it.
    pub fn add_text_at(&mut self, canvas_pos: Point) -> ElementId {
        let id = self.store.next_element_id();
        let rect = constrain_to_bounds(
            Rect::new(
                canvas_pos.x,
                canvas_pos.y,
                self.config.text_default_width,
                self.config.text_default_height,
            ),
            &self.config.limits(),
        );
        let element = Element::text(id, self.config.text_default_content.clone(), rect);
        self.update_elements(|elements| elements.push(element));
        self.selected = Some(id);
        debug!(%id, x = rect.x, y = rect.y, "Created text element");
        id
    }

    /// Insert a media item centered in the visible viewport.
    pub fn add_media(&mut self, media: &MediaDescriptor) -> ElementId {
        let id = self.store.next_element_id();
        let center = match self.container_bounds() {
            Some(bounds) => self.view.screen_to_canvas(bounds.center(), Some(bounds)),
            None => Point::ORIGIN,
        };
        let rect = constrain_to_bounds(
            Rect::new(
                center.x - media.width / 2.0,
                center.y - media.height / 2.0,
                media.width,
                media.height,
            ),
            &self.config.limits(),
        );
        let mut element = Element::media(id, media, rect.origin());
        element.set_rect(rect);
        self.update_elements(|elements| elements.push(element));
        debug!(%id, media = media.media_type.label(), "Added media element");
        id
    }

    /// Remove an element. Returns `false` if it did not exist.
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        if self.element(id).is_none() {
            return false;
        }
        self.update_elements(|elements| elements.retain(|e| e.id != id));
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!(%id, "Deleted element");
        true
    }

    /// Replace the content of a text element.
    pub fn set_text_content(&mut self, id: ElementId, new_content: impl Into<String>) -> bool {
        let new_content = new_content.into();
        if !self.element(id).is_some_and(Element::is_text) {
            return false;
        }
        self.update_element(id, |element| {
            if let ElementKind::Text { content } = &mut element.kind {
                *content = new_content;
            }
        })
        .is_some()
    }

    /// Put a text element into edit mode, taking edit mode away from every
    /// other element on the page.
    pub fn begin_editing(&mut self, id: ElementId) -> bool {
        if !self.element(id).is_some_and(Element::is_text) {
            return false;
        }
        self.update_elements(|elements| {
            for element in elements.iter_mut() {
                element.is_editing = element.id == id;
            }
        });
        debug!(%id, "Editing text element");
        true
    }

    /// Leave edit mode on every element of the page.
    pub fn end_editing(&mut self) {
        if !self.store.elements().iter().any(|e| e.is_editing) {
            return;
        }
        self.update_elements(|elements| {
            for element in elements.iter_mut() {
                element.is_editing = false;
            }
        });
    }

    /// Element currently in edit mode, if any.
    pub fn editing_id(&self) -> Option<ElementId> {
        self.store.elements().iter().find(|e| e.is_editing).map(|e| e.id)
    }

    pub fn select(&mut self, id: Option<ElementId>) {
        self.selected = id.filter(|id| self.element(*id).is_some());
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    /// Zoom and pan so every element is visible, with padding.
    ///
    /// Does nothing on an empty page or before the viewport is measured.
    pub fn zoom_to_fit(&mut self) {
        let Some(content) = self
            .store
            .elements()
            .iter()
            .map(Element::rect)
            .reduce(|acc, rect| acc.union(&rect))
        else {
            return;
        };
        let Some(bounds) = self.container_bounds() else {
            return;
        };
        self.view
            .fit_rect(content, self.config.fit_padding, bounds.width, bounds.height);
        debug!(zoom = self.view.zoom(), "Zoomed to fit");
    }

    /// Back to 100% zoom with no pan.
    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    // ------------------------------------------------------------------
    // Gesture scope
    // ------------------------------------------------------------------

    pub(crate) fn acquire_capture(&mut self) {
        if !self.capture_held {
            self.host.acquire();
            self.capture_held = true;
        }
    }

    /// Return to Idle, releasing the capture if one is held.
    pub(crate) fn end_gesture(&mut self) {
        if self.capture_held {
            self.host.release();
            self.capture_held = false;
        }
        if self.input_state.is_active() {
            debug!(state = ?self.input_state, "Gesture ended");
        }
        self.input_state.reset();
        self.resize_throttle.reset();
    }
}
