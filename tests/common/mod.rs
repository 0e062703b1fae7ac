use std::path::PathBuf;

use odds_bands::sources::SourceLocation;

pub fn fixture(name: &str) -> SourceLocation {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    SourceLocation::Path(path)
}

pub fn sample_sources() -> Vec<SourceLocation> {
    vec![
        fixture("serie_a_sample.csv"),
        fixture("serie_b_sample.csv"),
    ]
}
