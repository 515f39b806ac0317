use snowflake::{Snowflake, SnowflakeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 12 machine bits = 4096 machines, 1024 ids per ms each
    let config = SnowflakeConfig::builder()
        .machine_bits(12)?
        .epoch_date("2020-01-01")?
        .build();

    let generator = Snowflake::with_config(42, config)?;

    println!("Generator configuration:");
    println!("  Epoch: {} ms", generator.config().epoch_millis());
    println!("  Machine bits: {}", generator.config().machine_bits());
    println!("  Sequence bits: {}", generator.config().sequence_bits());
    println!("  Max machine ID: {}", generator.max_machine_id());
    println!("  Max sequence per ms: {}", generator.max_sequence());

    let id = generator.generate()?;
    let (ts, machine, seq) = generator.extract.decompose(id);

    println!("\nGenerated ID: {}", id);
    println!("Components:");
    println!("  Timestamp: {} ms since epoch", ts);
    println!("  Machine ID: {} (of {})", machine, generator.max_machine_id());
    println!("  Sequence: {} (of {})", seq, generator.max_sequence());

    Ok(())
}
