// build.rs
use std::time::SystemTime;

fn main() {
    // Last-Modified of the served OpenAPI document.
    println!(
        "cargo:rustc-env=BUILD_DATE={}",
        httpdate::fmt_http_date(SystemTime::now())
    );
    println!("cargo:rerun-if-changed=src");
}
