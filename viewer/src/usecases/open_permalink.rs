use url::Url;

use crate::links::{self, WINDOW_PARAMS};
use crate::model::EntityModel;
use crate::windowing::{WindowOpener, WindowRequest};

/// Opens a shareable window on the viewed entity, pointing at the
/// highlighted line when there is one.
pub fn open_permalink(
    opener: &impl WindowOpener,
    base_url: &Url,
    model: &EntityModel,
    highlighted_line: Option<u32>,
) {
    let entity = model.entity();

    opener.open(WindowRequest {
        url: links::permalink(base_url, &entity.key, highlighted_line),
        name: entity.name,
        params: WINDOW_PARAMS,
    });
}
