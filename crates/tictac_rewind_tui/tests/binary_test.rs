//! Packaging checks for the terminal binary.

use std::path::Path;

#[test]
fn test_binary_name_differs_from_core_library() {
    let exe = Path::new(env!("CARGO_BIN_EXE_tictac-rewind-tui"));
    let stem = exe.file_stem().and_then(|s| s.to_str()).unwrap();

    assert_eq!(stem, "tictac-rewind-tui");
    assert_ne!(stem.replace('-', "_"), "tictac_rewind");
}
