use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct ComponentKey {
    key: String,
}

impl ComponentKey {
    pub fn new(value: String) -> Self {
        Self { key: value }
    }

    pub fn value(&self) -> &String {
        &self.key
    }
}

/// The source file under view, as shared between the header and the other
/// views bound to it.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub struct SourceEntity {
    pub key: ComponentKey,
    pub name: String,
    pub fav: bool,
}

#[derive(Default, Clone, Copy, Eq, PartialEq, Debug)]
enum TogglePhase {
    #[default]
    Idle,
    Pending,
}

/// Shared view-model owning one [`SourceEntity`]. All mutations go through
/// [`EntityModel::set_fav`], which notifies every subscribed view, so `fav`
/// always reflects the last acknowledged registry state.
pub struct EntityModel {
    state: watch::Sender<SourceEntity>,
    toggle_phase: Mutex<TogglePhase>,
}

impl EntityModel {
    pub fn new(entity: SourceEntity) -> Self {
        let (state, _) = watch::channel(entity);

        Self {
            state,
            toggle_phase: Mutex::new(TogglePhase::Idle),
        }
    }

    pub fn entity(&self) -> SourceEntity {
        self.state.borrow().clone()
    }

    /// Views re-render whenever the returned receiver reports a change.
    pub fn subscribe(&self) -> watch::Receiver<SourceEntity> {
        self.state.subscribe()
    }

    pub fn set_fav(&self, fav: bool) {
        self.state.send_modify(|entity| entity.fav = fav);
    }

    /// Claims the entity's single toggle slot, or `None` while an earlier
    /// toggle is still waiting for the registry to acknowledge. The slot is
    /// released when the guard drops.
    pub fn begin_toggle(&self) -> Option<ToggleGuard<'_>> {
        let mut phase = self.toggle_phase.lock().unwrap();

        match *phase {
            TogglePhase::Pending => None,
            TogglePhase::Idle => {
                *phase = TogglePhase::Pending;

                Some(ToggleGuard { model: self })
            }
        }
    }
}

pub struct ToggleGuard<'a> {
    model: &'a EntityModel,
}

impl Drop for ToggleGuard<'_> {
    fn drop(&mut self) {
        *self.model.toggle_phase.lock().unwrap() = TogglePhase::Idle;
    }
}
