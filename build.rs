// Stamps the build date into the binary so the window title can show it.

fn main() {
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=LAUNCHDECK_BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-changed=build.rs");
}
