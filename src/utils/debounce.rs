use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

/// Window-resize listener that waits for `delay_ms` of inactivity before
/// invoking `callback`, so chart re-renders don't fire on every resize event.
///
/// The returned `EventListener` must be kept alive for the lifetime of the
/// component; dropping it detaches the listener.
pub fn debounced_resize_listener<F>(callback: F, delay_ms: u32) -> EventListener
where
    F: Fn() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    EventListener::new(&window().unwrap(), "resize", move |_| {
        let cb = callback.clone();
        // Replacing the handle cancels any timeout still pending
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    })
}
