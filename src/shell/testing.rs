use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::anchor::AnchorIndicator;
use super::binding::ShellBinding;
use super::types::{AnchorEdge, ExclusiveZone, SurfaceLayer};
use crate::error::ShellError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingCall {
    Init,
    Layer(SurfaceLayer),
    Anchor(AnchorEdge, bool),
    ExclusiveZone(ExclusiveZone),
}

/// Binding that records every call instead of talking to a compositor
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingBinding {
    calls: Rc<RefCell<Vec<BindingCall>>>,
    unsupported: bool,
}

impl RecordingBinding {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn unsupported() -> Self {
        Self {
            unsupported: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<BindingCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub(crate) fn anchor_calls(&self, edge: AnchorEdge) -> Vec<bool> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                BindingCall::Anchor(e, anchored) if *e == edge => Some(*anchored),
                _ => None,
            })
            .collect()
    }
}

impl ShellBinding for RecordingBinding {
    fn init_for_window(&self) -> Result<(), ShellError> {
        if self.unsupported {
            return Err(ShellError::Unsupported);
        }
        self.calls.borrow_mut().push(BindingCall::Init);
        Ok(())
    }

    fn set_layer(&self, layer: SurfaceLayer) {
        self.calls.borrow_mut().push(BindingCall::Layer(layer));
    }

    fn set_anchor(&self, edge: AnchorEdge, anchored: bool) {
        self.calls.borrow_mut().push(BindingCall::Anchor(edge, anchored));
    }

    fn set_exclusive_zone(&self, zone: ExclusiveZone) {
        self.calls.borrow_mut().push(BindingCall::ExclusiveZone(zone));
    }
}

/// Indicator that remembers what it was last told to show
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingIndicator {
    shown: Rc<Cell<Option<bool>>>,
    updates: Rc<Cell<usize>>,
}

impl RecordingIndicator {
    pub(crate) fn shown(&self) -> Option<bool> {
        self.shown.get()
    }

    pub(crate) fn updates(&self) -> usize {
        self.updates.get()
    }
}

impl AnchorIndicator for RecordingIndicator {
    fn show_anchored(&self, anchored: bool) {
        self.shown.set(Some(anchored));
        self.updates.set(self.updates.get() + 1);
    }
}
