use anyhow::Result;
use mapboxapi::{Client, ForwardQuery, ForwardSearchQuery, Proximity};

fn main() -> Result<()> {
    // Token comes from MAPBOX_ACCESS_TOKEN or a `.mapboxrc` file.
    let client = Client::from_env()?;

    let pois = client.search_box().forward(&ForwardSearchQuery {
        language: Some("en".into()),
        limit: Some(5),
        ..ForwardSearchQuery::new("Colosseum Rome")
    })?;
    for feature in &pois.features {
        let c = feature.properties.coordinates;
        println!("{} ({}, {})", feature.properties.name, c.longitude, c.latitude);
    }

    let addresses = client.geocoding().forward(&ForwardQuery {
        proximity: Some(Proximity::Ip),
        ..ForwardQuery::new("1600 Pennsylvania Avenue NW")
    })?;
    if let Some(best) = addresses.features.first() {
        println!("{}", best.properties.full_address.as_deref().unwrap_or(&best.properties.name));
    }
    Ok(())
}
