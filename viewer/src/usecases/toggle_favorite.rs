use crate::favorites::{self, FavoritesRegistry};
use crate::model::EntityModel;

/// Flips the entity's favorite flag in the remote registry. The local flag
/// only changes once the registry acknowledges, and at most one toggle may
/// be in flight per entity. Returns the new flag value.
pub async fn toggle_favorite(
    registry: &impl FavoritesRegistry,
    model: &EntityModel,
) -> Result<bool, Error> {
    let _guard = model.begin_toggle().ok_or(Error::ToggleInFlight)?;

    let entity = model.entity();
    let fav = if entity.fav {
        registry.remove(&entity.key).await?;
        false
    } else {
        registry.add(&entity.key).await?;
        true
    };

    model.set_fav(fav);

    Ok(fav)
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("a favorite toggle is already waiting for the registry")]
    ToggleInFlight,
    #[error("the favorites registry did not acknowledge the change")]
    Registry(#[from] favorites::Error),
}
