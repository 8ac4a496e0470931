pub fn run() -> anyhow::Result<()> {
    println!("altinat {}", env!("CARGO_PKG_VERSION"));
    println!("Friends' iNaturalist observations, bucketed by day, week and month");
    Ok(())
}
