use std::{
    fs,
    io::{Cursor, sink},
};

use bhask::interpreter::context::Context;
use walkdir::WalkDir;

#[test]
fn demo_programs_run_cleanly() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "bhask"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut context =
            Context::with_streams(Box::new(Cursor::new(Vec::new())), Box::new(sink()));
        if let Err(e) = context.run_source(&source) {
            panic!("Demo program {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}
