use gtk4::Button;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::debug;

use crate::shell::{AnchorIndicator, GtkLayerBinding, LayerSurface, ShellBinding};

/// Layer surface of the demo window, with GTK buttons as anchor indicators
pub type DemoSurface = LayerSurface<GtkLayerBinding, Button>;
pub type DemoSurfaceHandle = SurfaceHandle<GtkLayerBinding, Button>;
pub type WeakDemoSurfaceHandle = WeakSurfaceHandle<GtkLayerBinding, Button>;

struct SurfaceCell<B: ShellBinding, I> {
    surface: RefCell<LayerSurface<B, I>>,
    commit_queued: Cell<bool>,
}

/// Shared access to a window's layer surface from signal handlers.
///
/// Every mutation goes through [`update`](Self::update), which queues a
/// single idle commit on the thread-default main context. Changes made inside
/// one callback therefore reach the compositor together once it returns.
pub struct SurfaceHandle<B: ShellBinding, I> {
    inner: Rc<SurfaceCell<B, I>>,
}

impl<B: ShellBinding, I> Clone for SurfaceHandle<B, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<B: ShellBinding + 'static, I: AnchorIndicator + 'static> SurfaceHandle<B, I> {
    pub fn new(surface: LayerSurface<B, I>) -> Self {
        Self {
            inner: Rc::new(SurfaceCell {
                surface: RefCell::new(surface),
                commit_queued: Cell::new(false),
            }),
        }
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut LayerSurface<B, I>) -> R) -> R {
        let result = f(&mut self.inner.surface.borrow_mut());
        self.schedule_commit();
        result
    }

    pub fn with<R>(&self, f: impl FnOnce(&LayerSurface<B, I>) -> R) -> R {
        f(&self.inner.surface.borrow())
    }

    /// Flush right away, for the initial configuration before first map
    pub fn commit_now(&self) {
        self.inner.commit_queued.set(false);
        self.inner.surface.borrow_mut().commit();
    }

    pub fn commit_queued(&self) -> bool {
        self.inner.commit_queued.get()
    }

    pub fn downgrade(&self) -> WeakSurfaceHandle<B, I> {
        WeakSurfaceHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    fn schedule_commit(&self) {
        if self.inner.commit_queued.get() || !self.inner.surface.borrow().needs_commit() {
            return;
        }
        self.inner.commit_queued.set(true);

        let weak = Rc::downgrade(&self.inner);
        glib::MainContext::ref_thread_default().spawn_local_with_priority(
            glib::Priority::DEFAULT_IDLE,
            async move {
                if let Some(inner) = weak.upgrade() {
                    inner.commit_queued.set(false);
                    inner.surface.borrow_mut().commit();
                } else {
                    debug!("Surface dropped before queued commit");
                }
            },
        );
    }
}

/// Non-owning handle held by widget signal closures
pub struct WeakSurfaceHandle<B: ShellBinding, I> {
    inner: Weak<SurfaceCell<B, I>>,
}

impl<B: ShellBinding, I> Clone for WeakSurfaceHandle<B, I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<B: ShellBinding, I> WeakSurfaceHandle<B, I> {
    pub fn upgrade(&self) -> Option<SurfaceHandle<B, I>> {
        self.inner.upgrade().map(|inner| SurfaceHandle { inner })
    }
}
