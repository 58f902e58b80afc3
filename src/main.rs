use guild_inventory::bench::{self, BenchConfig};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let json = std::env::args().skip(1).any(|arg| arg == "--json");
    let config = BenchConfig::default();
    let report = bench::run(&config)?;

    for (index, measurement) in report.measurements.iter().enumerate() {
        println!("{} Runtime: {} microseconds", measurement.label, measurement.micros);

        // Separator between the small and large runs
        if index == 1 {
            println!("{}", "-".repeat(72));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
