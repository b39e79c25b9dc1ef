use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

pub const DEFAULT_TITLE: &str = "Goose";

/// Invoked once per host-observed maximize/restore transition.
pub type MaximizedHandler = Box<dyn Fn(bool) + Send + Sync + 'static>;

/// Receives a fresh view snapshot after every state change.
pub type RenderSink = Box<dyn Fn(TitleBarView) + Send + Sync + 'static>;

/// Handle for a maximize-change subscription; dropping it unsubscribes.
pub struct MaximizedWatch {
    release: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl MaximizedWatch {
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for MaximizedWatch {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Window-control capability of the host runtime for the current window.
///
/// The title bar never decides maximize vs. restore itself; `toggle_maximize`
/// carries no state and the host picks the resulting state. Command results
/// are not reported back here; state changes arrive through `watch_maximized`.
pub trait WindowControl: Send + Sync + 'static {
    fn query_maximized(&self) -> Pin<Box<dyn Future<Output = bool> + Send>>;
    fn watch_maximized(&self, handler: MaximizedHandler) -> MaximizedWatch;
    fn minimize(&self);
    fn toggle_maximize(&self);
    fn close(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Glyph {
    Minus,
    Square,
    Restore,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlAction {
    Minimize,
    ToggleMaximize,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    pub action: ControlAction,
    pub label: &'static str,
    pub glyph: Glyph,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragRegion {
    pub title: String,
}

/// Serializable rendering of the title bar surface: the drag region with the
/// title text, followed by the minimize / maximize-restore / close controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleBarView {
    pub drag: DragRegion,
    pub controls: [Control; 3],
}

fn render(title: &str, maximized: bool) -> TitleBarView {
    let toggle = if maximized {
        Control {
            action: ControlAction::ToggleMaximize,
            label: "Restore",
            glyph: Glyph::Restore,
        }
    } else {
        Control {
            action: ControlAction::ToggleMaximize,
            label: "Maximize",
            glyph: Glyph::Square,
        }
    };

    TitleBarView {
        drag: DragRegion {
            title: title.to_string(),
        },
        controls: [
            Control {
                action: ControlAction::Minimize,
                label: "Minimize",
                glyph: Glyph::Minus,
            },
            toggle,
            Control {
                action: ControlAction::Close,
                label: "Close",
                glyph: Glyph::Cross,
            },
        ],
    }
}

#[derive(Debug, Default)]
pub struct TitleBarOptions {
    pub title: Option<String>,
}

struct Shared {
    title: String,
    maximized: AtomicBool,
    mounted: AtomicBool,
    sink: RenderSink,
}

impl Shared {
    // Updates from the initial query and from change notifications both land
    // here, in arrival order. Late arrivals after unmount are discarded.
    fn apply(&self, maximized: bool) {
        if !self.mounted.load(Ordering::Acquire) {
            return;
        }
        self.maximized.store(maximized, Ordering::Release);
        (self.sink)(render(&self.title, maximized));
    }
}

/// The title bar component. Mounting issues one asynchronous query for the
/// current maximized state and registers one change-notification
/// subscription; every update re-renders through the sink. A component is
/// mounted exactly once and unmounting is terminal.
pub struct TitleBar {
    shared: Arc<Shared>,
    service: Arc<dyn WindowControl>,
    watch: Option<MaximizedWatch>,
}

impl TitleBar {
    pub fn mount(
        service: Arc<dyn WindowControl>,
        options: TitleBarOptions,
        sink: RenderSink,
    ) -> Self {
        let shared = Arc::new(Shared {
            title: options
                .title
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            maximized: AtomicBool::new(false),
            mounted: AtomicBool::new(true),
            sink,
        });

        // Provisional frame before the host has reported anything.
        (shared.sink)(render(&shared.title, false));

        let query = service.query_maximized();
        let on_resolve = Arc::clone(&shared);
        tauri::async_runtime::spawn(async move {
            on_resolve.apply(query.await);
        });

        let on_change = Arc::clone(&shared);
        let watch = service.watch_maximized(Box::new(move |maximized| {
            on_change.apply(maximized);
        }));

        Self {
            shared,
            service,
            watch: Some(watch),
        }
    }

    pub fn view(&self) -> TitleBarView {
        render(
            &self.shared.title,
            self.shared.maximized.load(Ordering::Acquire),
        )
    }

    pub fn minimize(&self) {
        self.service.minimize();
    }

    pub fn toggle_maximize(&self) {
        self.service.toggle_maximize();
    }

    pub fn close(&self) {
        self.service.close();
    }

    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.shared.mounted.store(false, Ordering::Release);
        self.watch.take();
    }
}

impl Drop for TitleBar {
    fn drop(&mut self) {
        self.release();
    }
}
