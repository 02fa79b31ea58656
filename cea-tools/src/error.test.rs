use std::path::PathBuf;

use super::*;

#[test]
fn ignored_path_maps_to_ignored_path_status() {
    let err = tool_error::IgnoredSnafu {
        path: PathBuf::from("/secret/.env"),
    }
    .build();
    assert_eq!(err.status_code(), StatusCode::IgnoredPath);
}

#[test]
fn binary_file_maps_to_binary_file_status() {
    let err = tool_error::BinarySnafu {
        path: PathBuf::from("/a.png"),
    }
    .build();
    assert_eq!(err.status_code(), StatusCode::BinaryFile);
}

#[test]
fn hashline_errors_pass_their_status_code_through() {
    let source = HashlineError::NoChanges {
        location: snafu::Location::new(file!(), line!(), column!()),
    };
    let err: ToolError = source.into();
    assert_eq!(err.status_code(), StatusCode::NoChanges);
}
