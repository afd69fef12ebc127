/// PC3D Web - WASM mount for the product configurator
///
/// `mount(container)` renders the viewer canvas and the tabbed option card
/// into a host-provided DOM element and owns everything inside it until the
/// returned handle is unmounted or dropped.
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use pc3d_core::{Camera, Event, Lighting, Mesh, Outcome, RotationState, Session};
use tracing::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, EventTarget, HtmlCanvasElement, PointerEvent,
    WheelEvent,
};

pub mod lifecycle;
pub mod orbit;
pub mod painter;
pub mod view;

use lifecycle::{owns_container, MountError, Registry, MOUNT_ATTR};
use orbit::OrbitDrag;

pub(crate) fn to_js(err: impl fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

thread_local! {
    /// Listeners of every live mount, keyed by mount id
    static MOUNTS: RefCell<Registry<Listeners>> = RefCell::new(Registry::new());
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

/// DOM listeners installed by one mount
#[derive(Default)]
struct Listeners(Vec<Listener>);

impl Listeners {
    fn listen<F>(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        callback: F,
    ) -> Result<(), JsValue>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        self.0.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }

    fn detach(self) {
        for listener in self.0 {
            let removed = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.callback.as_ref().unchecked_ref(),
            );
            if let Err(err) = removed {
                warn!(kind = listener.kind, error = ?err, "failed to remove listener");
            }
        }
    }
}

/// Everything a mounted configurator owns
struct Mounted {
    session: Session,
    document: Document,
    container: Element,
    parts: view::Parts,
    context: CanvasRenderingContext2d,
    mesh: Mesh,
    rotation: RotationState,
    orbit: OrbitDrag,
    camera: Camera,
    lighting: Lighting,
}

impl Mounted {
    /// Dispatch `event` and refresh whatever it changed. Tab events
    /// re-render the tab bar and the option panel; a selection change
    /// re-renders the panel and repaints the product.
    fn handle(&mut self, event: Event) -> Result<(), JsValue> {
        let is_tab = matches!(event, Event::ActivateTab(_));
        let outcome = self.session.dispatch(event).map_err(to_js)?;
        debug!(?outcome, "configurator event");

        // re-activating the visible tab still repaints its panel
        if is_tab {
            view::render_tabs(&self.document, &self.parts.tab_list, &self.session)?;
            view::render_options(&self.document, &self.parts.options_grid, &self.session)?;
        } else if outcome == Outcome::SelectionChanged {
            view::render_options(&self.document, &self.parts.options_grid, &self.session)?;
            self.paint();
        }
        Ok(())
    }

    fn paint(&self) {
        let (width, height) = (self.parts.canvas.width(), self.parts.canvas.height());
        let lines = painter::helper_lines(&self.camera, width, height);
        let triangles = painter::paint_list(
            &self.mesh,
            &self.session.render_params(),
            &self.rotation,
            &self.camera,
            &self.lighting,
            width,
            height,
        );
        painter::paint(&self.context, width, height, &lines, &triangles);
    }
}

fn pointer_position(event: &web_sys::Event) -> Option<(f32, f32)> {
    let pointer = event.dyn_ref::<PointerEvent>()?;
    Some((pointer.offset_x() as f32, pointer.offset_y() as f32))
}

/// Option clicks on the container, drag orbiting and wheel zoom on the
/// canvas
fn attach(
    container: &Element,
    canvas: &HtmlCanvasElement,
    mounted: &Rc<RefCell<Mounted>>,
) -> Result<Listeners, JsValue> {
    let mut listeners = Listeners::default();

    let state = Rc::clone(mounted);
    listeners.listen(container, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let result = view::event_for_click(&target).and_then(|event| match event {
            Some(event) => state.borrow_mut().handle(event),
            None => Ok(()),
        });
        if let Err(err) = result {
            // buttons are built from the catalog, so a rejected click is a bug
            error!(error = ?err, "configurator click rejected");
            debug_assert!(false, "configurator click rejected: {err:?}");
        }
    })?;

    let state = Rc::clone(mounted);
    listeners.listen(canvas, "pointerdown", move |event| {
        if let Some((x, y)) = pointer_position(&event) {
            state.borrow_mut().orbit.begin(x, y);
        }
    })?;

    let state = Rc::clone(mounted);
    listeners.listen(canvas, "pointermove", move |event| {
        let Some((x, y)) = pointer_position(&event) else {
            return;
        };
        let mut mounted = state.borrow_mut();
        let height = mounted.parts.canvas.client_height().max(1) as u32;
        if let Some((about_x, about_y)) = mounted.orbit.drag_to(x, y, height) {
            mounted.rotation.rotate(about_x, about_y, 0.0);
            mounted.paint();
        }
    })?;

    for kind in ["pointerup", "pointerleave", "pointercancel"] {
        let state = Rc::clone(mounted);
        listeners.listen(canvas, kind, move |_| state.borrow_mut().orbit.end())?;
    }

    let state = Rc::clone(mounted);
    listeners.listen(canvas, "wheel", move |event| {
        let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
            return;
        };
        wheel.prevent_default();
        let mut mounted = state.borrow_mut();
        mounted.camera.dolly(orbit::zoom_factor(wheel.delta_y()));
        mounted.paint();
    })?;

    Ok(listeners)
}

/// Handle to a mounted configurator. Dropping it (or calling `free` from
/// JS) unmounts the configurator.
#[wasm_bindgen]
pub struct Configurator {
    id: u32,
    mounted: Rc<RefCell<Mounted>>,
}

/// Render the configurator into `container`, replacing its contents. A
/// configurator already mounted there is detached first; its handle then
/// rejects further calls.
#[wasm_bindgen]
pub fn mount(container: Element) -> Result<Configurator, JsValue> {
    let document = container
        .owner_document()
        .ok_or_else(|| to_js(MountError::NoDocument))?;
    let marker = container.get_attribute(MOUNT_ATTR);
    let id = MOUNTS.with(|mounts| mounts.borrow_mut().next_id());

    let parts = view::build(&document, &container)?;
    let context: CanvasRenderingContext2d = parts
        .canvas
        .get_context("2d")?
        .ok_or_else(|| to_js(MountError::NoCanvasContext))?
        .dyn_into()?;

    let camera = Camera::new(parts.canvas.width(), parts.canvas.height());
    let canvas = parts.canvas.clone();
    let mounted = Mounted {
        session: Session::new(),
        document,
        container: container.clone(),
        parts,
        context,
        mesh: Mesh::product_proxy(),
        rotation: RotationState::zero(),
        orbit: OrbitDrag::default(),
        camera,
        lighting: Lighting::default(),
    };

    view::render_tabs(&mounted.document, &mounted.parts.tab_list, &mounted.session)?;
    view::render_options(&mounted.document, &mounted.parts.options_grid, &mounted.session)?;
    mounted.paint();

    let mounted = Rc::new(RefCell::new(mounted));
    let listeners = attach(&container, &canvas, &mounted)?;

    let evicted =
        MOUNTS.with(|mounts| mounts.borrow_mut().claim(marker.as_deref(), id, listeners));
    if let Some(previous) = evicted {
        info!(id, previous = ?marker, "replacing configurator mounted in the same container");
        previous.detach();
    }
    container.set_attribute(MOUNT_ATTR, &id.to_string())?;
    debug!(id, "configurator mounted");

    Ok(Configurator { id, mounted })
}

impl Configurator {
    fn ensure_live(&self) -> Result<(), JsValue> {
        if MOUNTS.with(|mounts| mounts.borrow().is_live(self.id)) {
            Ok(())
        } else {
            Err(to_js(MountError::Detached))
        }
    }

    /// Detach listeners and, while this mount still owns it, empty the
    /// container. Repeated calls are no-ops.
    fn release(&self) -> Result<(), JsValue> {
        let Some(listeners) = MOUNTS.with(|mounts| mounts.borrow_mut().release(self.id)) else {
            return Ok(());
        };
        listeners.detach();

        let mounted = self.mounted.borrow();
        let marker = mounted.container.get_attribute(MOUNT_ATTR);
        if owns_container(marker.as_deref(), self.id) {
            mounted.container.set_inner_html("");
            mounted.container.remove_attribute(MOUNT_ATTR)?;
        }
        debug!(id = self.id, "configurator unmounted");
        Ok(())
    }
}

#[wasm_bindgen]
impl Configurator {
    /// Select `value` for `category`, as if its option button was clicked
    pub fn select(&self, category: &str, value: &str) -> Result<(), JsValue> {
        self.ensure_live()?;
        let category = category.parse().map_err(to_js)?;
        self.mounted.borrow_mut().handle(Event::select(category, value))
    }

    /// Show the option panel of `category`
    pub fn activate(&self, category: &str) -> Result<(), JsValue> {
        self.ensure_live()?;
        let category = category.parse().map_err(to_js)?;
        self.mounted.borrow_mut().handle(Event::ActivateTab(category))
    }

    #[wasm_bindgen(js_name = activeTab)]
    pub fn active_tab(&self) -> String {
        self.mounted.borrow().session.tabs().active().id().to_string()
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.mounted.borrow().session.state()).map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = renderParams)]
    pub fn render_params(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.mounted.borrow().session.render_params())
            .map_err(JsValue::from)
    }

    /// Orbit the product by the given angles (radians)
    pub fn rotate(&self, dx: f32, dy: f32) -> Result<(), JsValue> {
        self.ensure_live()?;
        let mut mounted = self.mounted.borrow_mut();
        mounted.rotation.rotate(dx, dy, 0.0);
        mounted.paint();
        Ok(())
    }

    /// Move the camera toward (`factor < 1`) or away from the product
    pub fn zoom(&self, factor: f32) -> Result<(), JsValue> {
        self.ensure_live()?;
        let mut mounted = self.mounted.borrow_mut();
        mounted.camera.dolly(factor);
        mounted.paint();
        Ok(())
    }

    /// Detach from the page and empty the container
    pub fn unmount(&self) -> Result<(), JsValue> {
        self.release()
    }
}

impl Drop for Configurator {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            warn!(id = self.id, error = ?err, "configurator did not unmount cleanly");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}
