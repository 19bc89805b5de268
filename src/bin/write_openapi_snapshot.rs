// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use attendance_audit::config::public_api_url_from_env;
use std::{env, path::PathBuf};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = env::var("OPENAPI_SNAPSHOT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("docs/openapi.json"));
    attendance_audit::presentation::http::openapi::write_openapi_snapshot(
        &output_path,
        &public_api_url_from_env(),
    )?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
