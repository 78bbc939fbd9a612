use url::Url;

use crate::model::SourceEntity;

/// A browsing context the header asks the host to open.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct WindowRequest {
    pub url: Url,
    /// Window name, reused when the same entity is opened again.
    pub name: String,
    pub params: &'static str,
}

pub trait WindowOpener {
    fn open(&self, request: WindowRequest);
}

/// Host for the overlays the header can launch. Rendering them is the
/// host's business; the header only forwards the trigger.
pub trait OverlayHost {
    fn show_measures(&self, entity: &SourceEntity);
    fn show_more_actions(&self, entity: &SourceEntity);
}
