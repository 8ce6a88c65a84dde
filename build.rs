use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

/// Stylesheet entry points and the bundle each one produces.
const BUNDLES: &[(&str, &str)] = &[
    ("assets/css/main.css", "assets/dist/bundle.css"),
];

fn bundle(entry: &str, output: &str) {
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    // Resolves the @import chain (chat, auth, modal, theme partials)
    let mut stylesheet = bundler
        .bundle(Path::new(entry))
        .unwrap_or_else(|e| panic!("Failed to bundle {entry}: {e}"));

    stylesheet
        .minify(MinifyOptions::default())
        .unwrap_or_else(|e| panic!("Failed to minify {entry}: {e}"));

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .unwrap_or_else(|e| panic!("Failed to print {entry}: {e}"));

    fs::write(output, css.code).unwrap_or_else(|e| panic!("Failed to write {output}: {e}"));
}

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    for (entry, output) in BUNDLES {
        bundle(entry, output);
    }
}
