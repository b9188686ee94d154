use crate::Args;
use std::path::PathBuf;
use urania::{GeoLocation, LocationResolver};
use urania_config::UraniaConfig;

/// Coordinates from `--lat/--lon`, or `--location` looked up in the city catalog.
///
/// Returns `None` when neither is given; the engine reports that as a missing
/// location.
pub(crate) async fn resolve_place(
    args: &Args,
    config: &UraniaConfig,
) -> anyhow::Result<Option<GeoLocation>> {
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        return Ok(Some(GeoLocation::new(lat, lon)));
    }

    let Some(query) = &args.location else {
        return Ok(None);
    };

    let path: PathBuf = args
        .cities
        .clone()
        .or_else(|| config.cities_path.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("--location needs a city catalog (pass --cities or set [locations].cities_path)")
        })?;

    let catalog = urania_config::load_city_catalog(&path)?;
    let location = catalog.resolve(query).await?;
    Ok(Some(location))
}
