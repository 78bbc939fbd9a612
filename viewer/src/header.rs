use std::sync::Arc;

use url::Url;

use crate::favorites::FavoritesRegistry;
use crate::model::EntityModel;
use crate::usecases::{self, toggle_favorite};
use crate::windowing::{OverlayHost, WindowOpener};

/// One event per control in the header bar.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum HeaderEvent {
    ToggleFavorite,
    OpenPermalink,
    OpenRawSource,
    ShowMeasures,
    ShowMoreActions,
}

/// Header bar of the source viewer. Everything it does is glue: events come
/// in, and the favorites registry, the window opener, or the overlay host
/// gets called with state read from the shared model.
pub struct HeaderView<R, W, O> {
    model: Arc<EntityModel>,
    registry: R,
    windows: W,
    overlays: O,
    base_url: Url,
    /// Line highlighted in the viewer, carried into permalinks.
    pub highlighted_line: Option<u32>,
}

impl<R, W, O> HeaderView<R, W, O>
where
    R: FavoritesRegistry,
    W: WindowOpener,
    O: OverlayHost,
{
    pub fn new(model: Arc<EntityModel>, registry: R, windows: W, overlays: O, base_url: Url) -> Self {
        Self {
            model,
            registry,
            windows,
            overlays,
            base_url,
            highlighted_line: None,
        }
    }

    pub fn model(&self) -> &Arc<EntityModel> {
        &self.model
    }

    pub async fn handle(&self, event: HeaderEvent) -> Result<(), toggle_favorite::Error> {
        match event {
            HeaderEvent::ToggleFavorite => {
                usecases::toggle_favorite(&self.registry, &self.model).await?;
            }
            HeaderEvent::OpenPermalink => usecases::open_permalink(
                &self.windows,
                &self.base_url,
                &self.model,
                self.highlighted_line,
            ),
            HeaderEvent::OpenRawSource => {
                usecases::open_raw_source(&self.windows, &self.base_url, &self.model)
            }
            HeaderEvent::ShowMeasures => self.overlays.show_measures(&self.model.entity()),
            HeaderEvent::ShowMoreActions => self.overlays.show_more_actions(&self.model.entity()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use url::Url;

    use super::{HeaderEvent, HeaderView};
    use crate::favorites::{self, FavoritesRegistry};
    use crate::links::WINDOW_PARAMS;
    use crate::model::{ComponentKey, EntityModel, SourceEntity};
    use crate::windowing::{OverlayHost, WindowOpener, WindowRequest};

    struct AcceptingRegistry;

    impl FavoritesRegistry for AcceptingRegistry {
        async fn add(&self, _key: &ComponentKey) -> Result<(), favorites::Error> {
            Ok(())
        }

        async fn remove(&self, _key: &ComponentKey) -> Result<(), favorites::Error> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingWindows {
        opened: Mutex<Vec<WindowRequest>>,
    }

    impl WindowOpener for &RecordingWindows {
        fn open(&self, request: WindowRequest) {
            self.opened.lock().unwrap().push(request);
        }
    }

    #[derive(Default)]
    struct RecordingOverlays {
        measures: Mutex<usize>,
        more_actions: Mutex<usize>,
    }

    impl OverlayHost for &RecordingOverlays {
        fn show_measures(&self, _entity: &SourceEntity) {
            *self.measures.lock().unwrap() += 1;
        }

        fn show_more_actions(&self, _entity: &SourceEntity) {
            *self.more_actions.lock().unwrap() += 1;
        }
    }

    fn header<'a>(
        windows: &'a RecordingWindows,
        overlays: &'a RecordingOverlays,
    ) -> HeaderView<AcceptingRegistry, &'a RecordingWindows, &'a RecordingOverlays> {
        let model = Arc::new(EntityModel::new(SourceEntity {
            key: ComponentKey::new("abc def".into()),
            name: "def".into(),
            fav: false,
        }));

        HeaderView::new(
            model,
            AcceptingRegistry,
            windows,
            overlays,
            Url::parse("http://localhost:9000").unwrap(),
        )
    }

    #[tokio::test]
    async fn opens_the_permalink_window() {
        let windows = RecordingWindows::default();
        let overlays = RecordingOverlays::default();
        let mut header = header(&windows, &overlays);
        header.highlighted_line = Some(42);

        header.handle(HeaderEvent::OpenPermalink).await.unwrap();

        let opened = windows.opened.lock().unwrap();
        assert_eq!(opened.len(), 1);
        assert_eq!(
            opened[0].url.as_str(),
            "http://localhost:9000/component/index?id=abc%20def&line=42"
        );
        assert_eq!(opened[0].name, "def");
        assert_eq!(opened[0].params, WINDOW_PARAMS);
    }

    #[tokio::test]
    async fn opens_the_raw_source_window() {
        let windows = RecordingWindows::default();
        let overlays = RecordingOverlays::default();
        let header = header(&windows, &overlays);

        header.handle(HeaderEvent::OpenRawSource).await.unwrap();

        let opened = windows.opened.lock().unwrap();
        assert_eq!(
            opened[0].url.as_str(),
            "http://localhost:9000/api/sources/raw?key=abc%20def"
        );
    }

    #[tokio::test]
    async fn forwards_overlay_triggers() {
        let windows = RecordingWindows::default();
        let overlays = RecordingOverlays::default();
        let header = header(&windows, &overlays);

        header.handle(HeaderEvent::ShowMeasures).await.unwrap();
        header.handle(HeaderEvent::ShowMoreActions).await.unwrap();
        header.handle(HeaderEvent::ShowMoreActions).await.unwrap();

        assert_eq!(*overlays.measures.lock().unwrap(), 1);
        assert_eq!(*overlays.more_actions.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn toggling_updates_the_shared_model() {
        let windows = RecordingWindows::default();
        let overlays = RecordingOverlays::default();
        let header = header(&windows, &overlays);

        header.handle(HeaderEvent::ToggleFavorite).await.unwrap();

        assert!(header.model().entity().fav);
    }
}
