use std::cell::Cell;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

thread_local! {
    static ACTIVE_LISTENERS: Cell<usize> = Cell::new(0);
}

#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("no global window")]
    NoWindow,
    #[error("failed to register {event} listener: {reason}")]
    Register { event: &'static str, reason: String },
}

/// A callback attached to `window` for as long as the guard lives.
/// Dropping it detaches the callback.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Result<Self, ListenerError>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window().ok_or(ListenerError::NoWindow)?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| ListenerError::Register {
                event,
                reason: format!("{:?}", err),
            })?;

        let live = ACTIVE_LISTENERS.with(|count| {
            count.set(count.get() + 1);
            count.get()
        });
        debug!("Registered {} listener ({} live)", event, live);

        Ok(Self {
            window,
            event,
            callback,
        })
    }

    /// Registers and logs instead of failing; the page works without the
    /// effect a listener drives.
    pub fn attach<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        match Self::new(event, handler) {
            Ok(listener) => Some(listener),
            Err(err) => {
                warn!("{}", err);
                None
            }
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", self.event, err);
        }
        let live = ACTIVE_LISTENERS.with(|count| {
            count.set(count.get().saturating_sub(1));
            count.get()
        });
        debug!("Removed {} listener ({} live)", self.event, live);
    }
}

/// Number of window listeners currently registered through this module.
pub fn active_listener_count() -> usize {
    ACTIVE_LISTENERS.with(Cell::get)
}
