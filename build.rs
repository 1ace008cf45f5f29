use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MERGINGTON_BUILD_ID");

    // Logged at startup so a stale binary is easy to spot during dev.
    let build_id = std::env::var("MERGINGTON_BUILD_ID").unwrap_or_else(|_| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs().to_string())
            .unwrap_or_else(|_| "dev".to_string())
    });
    println!("cargo:rustc-env=MERGINGTON_BUILD_ID={}", build_id);
}
