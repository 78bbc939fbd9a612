use url::Url;

use crate::links::{self, WINDOW_PARAMS};
use crate::model::EntityModel;
use crate::windowing::{WindowOpener, WindowRequest};

/// Opens the entity's raw sources in a new window.
pub fn open_raw_source(opener: &impl WindowOpener, base_url: &Url, model: &EntityModel) {
    let entity = model.entity();

    opener.open(WindowRequest {
        url: links::raw_source(base_url, &entity.key),
        name: entity.name,
        params: WINDOW_PARAMS,
    });
}
