#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    let mut res = WindowsResource::new();
    if std::path::Path::new("res/rworkcycle.ico").exists() {
        res.set_icon("res/rworkcycle.ico");
    }
    res.set("FileDescription", "rWorkCycle CLI")
        .set("ProductName", "rWorkCycle")
        .set("OriginalFilename", "rworkcycle.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed version resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
