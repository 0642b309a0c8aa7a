// build.rs
fn main() {
    // Only compile the resource for Windows targets
    if std::env::var("CARGO_CFG_TARGET_OS").unwrap() == "windows" {
        let mut res = winresource::WindowsResource::new();

        // Set file properties visible in Windows "Properties -> Details"
        res.set("ProductName", "Quotidie");
        res.set("FileDescription", "Daily quote desktop notifier");

        if let Err(e) = res.compile() {
            println!("cargo:warning=Failed to compile windows resource: {}", e);
        }
    }
}
