use anyhow::{Context, Result};
use fsroutes::{next_routes, RoutesOptions};

pub fn execute(options: &RoutesOptions) -> Result<()> {
    let routes = next_routes(options).with_context(|| {
        format!("Failed to build routes for {}", options.app_dir.display())
    })?;
    println!("{}", serde_json::to_string_pretty(&routes)?);
    Ok(())
}
