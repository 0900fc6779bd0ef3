use vergen::*;

fn main() {
    let flags = ConstantsFlags::all();
    if let Err(e) = gen(flags) {
        // Building from a source tarball: no git metadata to embed.
        println!("cargo:warning=unable to generate version keys: {}", e);
    }

    let mut features = vec![];
    for (k, _v) in std::env::vars() {
        match k.as_str() {
            "CARGO_FEATURE_PARALLEL" => features.push("parallel"),
            _ => {}
        }
    }
    let features = features.join(",");
    println!("cargo:rustc-env=ICS_FLUX_ACTIVE_FEATURES={}", features);
}
