use crate::FileExistsPolicy;
use crate::cli::{StreamArgs, normalize_input, normalize_output};

#[test]
fn normalize_maps_stream_aliases_to_sentinel() {
    assert_eq!(normalize_input("-"), "-");
    assert_eq!(normalize_input("STDIN"), "-");
    assert_eq!(normalize_output("stdout"), "-");
    assert_eq!(normalize_output("out.yaml"), "out.yaml");
}

#[test]
fn at_prefix_forces_literal_path() {
    assert_eq!(normalize_input("@stdin"), "stdin");
    assert_eq!(normalize_output("@-"), "-");
}

#[test]
fn stream_args_default_to_standard_streams() {
    let args = StreamArgs::new();
    assert!(args.is_stdin());
    assert!(args.is_stdout());
    assert_eq!(args.file_exists_policy(), FileExistsPolicy::Overwrite);
}

#[test]
fn stream_args_policy_flags() {
    let args = StreamArgs::new().with_output("out.yaml").with_append();
    assert!(!args.is_stdout());
    assert_eq!(args.file_exists_policy(), FileExistsPolicy::Append);

    let args = args.with_no_clobber();
    assert_eq!(args.file_exists_policy(), FileExistsPolicy::Error);
}

#[test]
fn stream_args_open_files() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("in.yaml");
    let out_path = dir.path().join("out.yaml");
    std::fs::write(&in_path, "a: 1\n").unwrap();

    let args = StreamArgs::new()
        .with_input(in_path.to_str().unwrap())
        .with_output(out_path.to_str().unwrap());

    let value: serde_yaml::Value = args.open_input().unwrap().decode().unwrap();
    let mut out = args.open_output().unwrap();
    out.encode(&value).unwrap();
    out.close().unwrap();

    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "---\na: 1\n");
}
