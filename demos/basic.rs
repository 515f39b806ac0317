use chrono::{TimeZone, Utc};
use snowflake::{Snowflake, SnowflakeError};

fn main() -> Result<(), SnowflakeError> {
    // Machine 1, ids measured from 2016-01-01 UTC
    let epoch = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap();
    let generator = Snowflake::new(1, epoch)?;

    let id1 = generator.generate()?;
    let id2 = generator.generate()?;
    let id3 = generator.generate()?;

    println!("Generated IDs (guaranteed to be monotonic):");
    for id in [id1, id2, id3] {
        print_id(id, &generator);
    }

    // Or extract components individually
    let ts = generator.extract.timestamp(id2);
    let machine = generator.extract.machine(id2);
    let seq = generator.extract.sequence(id2);
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Timestamp: {ts} ms since epoch");
    println!("  Machine ID: {machine}");
    println!("  Sequence: {seq}");

    Ok(())
}

fn print_id(id: u64, generator: &Snowflake) {
    let (since_epoch, machine, sequence) = generator.extract.decompose(id);
    let issued = generator
        .extract
        .datetime(id)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default();

    println!("  ID: {id}, Since epoch: {since_epoch}ms, Issued: {issued}, Machine ID: {machine}, Sequence: {sequence}");
}
