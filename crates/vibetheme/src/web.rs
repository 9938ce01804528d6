//! Browser adapters (wasm32 only).
//!
//! - [`LocalStorage`]: `window.localStorage`
//! - [`MediaQueryScheme`]: `(prefers-color-scheme: dark)`
//! - [`DomSink`]: `document.documentElement` and `document.head`
//! - [`watch_media_query`]: forwards media-query change events to a shared
//!   manager until the returned guard is dropped
//!
//! ```rust,ignore
//! use std::{cell::RefCell, rc::Rc};
//! use vibetheme::{web, ThemeManagerConfig};
//!
//! let manager = Rc::new(RefCell::new(web::browser_manager(
//!     ThemeManagerConfig::new().builtin_themes(true),
//! )?));
//! let _watch = web::watch_media_query(&manager)?;
//! ```

use std::cell::RefCell;
use std::io;
use std::rc::{Rc, Weak};

use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MediaQueryList, MediaQueryListEvent, Storage};

use crate::env::{ColorSchemeSource, ThemeStorage};
use crate::error::ThemeError;
use crate::manager::{ThemeManager, ThemeManagerConfig};
use crate::sink::StyleSink;

/// Media query whose `matches` is the prefers-dark signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn js_error(err: JsValue) -> io::Error {
    io::Error::other(format!("{:?}", err))
}

fn unavailable(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{} is not available", what))
}

/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn new() -> io::Result<Self> {
        let window = web_sys::window().ok_or_else(|| unavailable("window"))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| unavailable("localStorage"))?;
        Ok(Self { storage })
    }
}

impl ThemeStorage for LocalStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

fn prefers_dark_query() -> io::Result<MediaQueryList> {
    let window = web_sys::window().ok_or_else(|| unavailable("window"))?;
    window
        .match_media(PREFERS_DARK_QUERY)
        .map_err(js_error)?
        .ok_or_else(|| unavailable("matchMedia"))
}

/// The `(prefers-color-scheme: dark)` media query.
#[derive(Debug, Clone)]
pub struct MediaQueryScheme {
    query: MediaQueryList,
}

impl MediaQueryScheme {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            query: prefers_dark_query()?,
        })
    }
}

impl ColorSchemeSource for MediaQueryScheme {
    fn prefers_dark(&self) -> bool {
        self.query.matches()
    }
}

/// Writes themes to the live document.
#[derive(Debug, Clone)]
pub struct DomSink {
    document: Document,
    root: HtmlElement,
}

impl DomSink {
    pub fn new() -> io::Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| unavailable("document"))?;
        let root = document
            .document_element()
            .ok_or_else(|| unavailable("documentElement"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| unavailable("HTML documentElement"))?;
        Ok(Self { document, root })
    }
}

impl StyleSink for DomSink {
    fn remove_class(&mut self, class: &str) {
        if let Err(err) = self.root.class_list().remove_1(class) {
            warn!(class, ?err, "failed to remove root class");
        }
    }

    fn add_class(&mut self, class: &str) {
        if let Err(err) = self.root.class_list().add_1(class) {
            warn!(class, ?err, "failed to add root class");
        }
    }

    fn set_property(&mut self, name: &str, value: &str) {
        if let Err(err) = self.root.style().set_property(name, value) {
            warn!(name, ?err, "failed to set custom property");
        }
    }

    fn ensure_meta_tag(&mut self, name: &str) {
        let selector = format!("meta[name=\"{}\"]", name);
        if let Ok(Some(_)) = self.document.query_selector(&selector) {
            return;
        }
        let Some(head) = self.document.head() else {
            warn!("document has no head, skipping meta tag");
            return;
        };
        let created = self.document.create_element("meta").and_then(|meta| {
            meta.set_attribute("name", name)?;
            head.append_child(&meta)
        });
        if let Err(err) = created {
            warn!(name, ?err, "failed to create meta tag");
        }
    }
}

/// Manager wired to `localStorage`, the prefers-dark media query and the document.
///
/// The manager only reads the preference here. To follow later changes, share
/// it as `Rc<RefCell<_>>` and keep the guard from [`watch_media_query`] alive.
pub fn browser_manager(
    config: ThemeManagerConfig,
) -> Result<ThemeManager<DomSink, LocalStorage, MediaQueryScheme>, ThemeError> {
    ThemeManager::new(
        config,
        DomSink::new()?,
        LocalStorage::new()?,
        MediaQueryScheme::new()?,
    )
}

/// Active media-query listener. Dropping it removes the listener.
pub struct MediaQueryWatch {
    query: MediaQueryList,
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl MediaQueryWatch {
    /// The media query list the listener is attached to.
    pub fn query(&self) -> &MediaQueryList {
        &self.query
    }
}

impl Drop for MediaQueryWatch {
    fn drop(&mut self) {
        // Same function object that was registered.
        let function = self.callback.as_ref().unchecked_ref::<js_sys::Function>();
        if let Err(err) = self
            .query
            .remove_event_listener_with_callback("change", function)
        {
            warn!(?err, "failed to remove media query listener");
        }
    }
}

/// Forwards prefers-dark changes to `manager` until the guard is dropped.
///
/// The listener holds a weak reference; once the manager is dropped events
/// are ignored. Events arriving while the manager is borrowed are skipped.
pub fn watch_media_query<K, S, C>(
    manager: &Rc<RefCell<ThemeManager<K, S, C>>>,
) -> io::Result<MediaQueryWatch>
where
    K: StyleSink + 'static,
    S: ThemeStorage + 'static,
    C: ColorSchemeSource + 'static,
{
    let query = prefers_dark_query()?;
    let weak: Weak<RefCell<ThemeManager<K, S, C>>> = Rc::downgrade(manager);

    let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
        move |event: MediaQueryListEvent| {
            let Some(manager) = weak.upgrade() else {
                return;
            };
            let Ok(mut manager) = manager.try_borrow_mut() else {
                warn!("theme manager busy, dropping preference change");
                return;
            };
            if let Err(err) = manager.handle_system_preference_change(event.matches()) {
                warn!(%err, "failed to follow system preference");
            }
        },
    );

    query
        .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        .map_err(js_error)?;

    Ok(MediaQueryWatch { query, callback })
}
