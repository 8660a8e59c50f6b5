use enviroscan::{EnviroScan, EnviroScanError, LatLon};

#[tokio::main]
async fn main() -> Result<(), EnviroScanError> {
    let client = EnviroScan::from_env()?;

    let record = client
        .enrich()
        .location(LatLon(28.6139, 77.2090)) // Delhi
        .call()
        .await?;

    println!("{:#?}", record);
    Ok(())
}
