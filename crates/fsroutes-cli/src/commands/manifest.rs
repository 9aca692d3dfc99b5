use anyhow::Result;
use fsroutes::RoutesOptions;

use super::load_manifest;

pub fn execute(options: &RoutesOptions) -> Result<()> {
    let manifest = load_manifest(options)?;
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}
