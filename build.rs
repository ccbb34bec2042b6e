use std::fs;
use std::io::Write;
use std::path::Path;

static FIXTURES_DIR: &str = "tests/files";

/// Generate one classification test per bytecode fixture.  Every
/// `NAME.hex` under the fixture directory must come with a sibling
/// `NAME.expected` holding the code/data verdict (one `C` or `D` per
/// byte position), and yields a `test_NAME` function in the generated
/// include file.
fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let target = Path::new(&out_dir).join("classify_tests.rs");
    let mut f = fs::File::create(target).unwrap();
    // Collect the fixture names first, so the generated file does not
    // depend on directory iteration order.
    let mut names = Vec::new();
    for entry in fs::read_dir(FIXTURES_DIR).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().map_or(false, |e| e == "hex") {
            // A bytecode fixture without a verdict cannot be checked.
            assert!(path.with_extension("expected").exists(), "missing verdict for {path:?}");
            names.push(path.file_stem().unwrap().to_str().unwrap().to_string());
        }
    }
    names.sort();
    //
    for name in names {
        writeln!(f).unwrap();
        writeln!(f, "#[test]").unwrap();
        writeln!(f, "fn test_{name}() {{ check(\"{name}\"); }}").unwrap();
    }
}
