use enviroscan::{write_csv, write_ndjson, BoundingBox, EnviroScan};
use std::fs;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = EnviroScan::from_env()?;

    let regions = vec![
        BoundingBox::new(28.4, 28.9, 76.8, 77.4),    // Delhi
        BoundingBox::new(18.9, 19.3, 72.7, 72.95),   // Mumbai
        BoundingBox::new(12.85, 13.1, 77.5, 77.7),   // Bangalore
        BoundingBox::new(13.0, 13.2, 80.2, 80.35),   // Chennai
        BoundingBox::new(22.5, 22.7, 88.3, 88.45),   // Kolkata
    ];

    let dataset = client
        .collect_grid()
        .regions(regions)
        .step(0.10)
        .call()
        .await;
    println!("Total records collected: {}", dataset.len());

    let mut frame = dataset.to_frame()?;
    fs::create_dir_all("./data")?;
    write_csv(&mut frame, Path::new("./data/points.csv"))?;
    write_ndjson(&mut frame, Path::new("./data/points.ndjson"))?;

    println!("{}", frame.head(Some(5)));
    Ok(())
}
