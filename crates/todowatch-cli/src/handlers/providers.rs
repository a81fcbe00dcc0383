use anyhow::Result;
use todowatch_providers::all_providers;

pub fn handle() -> Result<()> {
    println!("{:<18} DEFAULT_ENDPOINT", "PROVIDER");
    println!("{}", "-".repeat(70));

    for provider in all_providers() {
        println!("{:<18} {}", provider.id(), provider.default_base_url());
    }

    Ok(())
}
