use ifgprep::io::config::*;
use ifgprep::{IfgError, ParamValue};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_full_config_file() {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = write_config(
        "# PyRate style config\n\
         obsdir:       tests/obs\n\
         ifgfilelist:  ifms.list\n\
         outdir:       tests/out\n\
         basepflag:    false\n\
         ampflag:      true\n\
         nsets:        2\n\
         ifgcropopt:   4\n\
         ifglksx:      1\n\
         ifglksy:      1\n\
         ifgxfirst:    150.92\n\
         ifgxlast:     150.94\n\
         ifgyfirst:    -34.18\n\
         ifgylast:     -34.22\n",
    );

    let params = parse_config_file(config.path()).expect("Failed to parse config");

    assert_eq!(params.get_str(OBS_DIR), Some("tests/obs"));
    assert_eq!(params.get_str(IFG_FILE_LIST), Some("ifms.list"));
    assert_eq!(params.get_str(OUT_DIR), Some("tests/out"));
    assert_eq!(params.get_bool(PERP_BASELINE_FLAG), Some(false));
    assert_eq!(params.get_bool(AMPLITUDE_FLAG), Some(true));
    assert_eq!(params.get_int(NUM_SETS), Some(2));
    assert_eq!(params.get_int(IFG_CROP_OPT), Some(4));
    assert_eq!(params.get_int(IFG_LKSX), Some(1));
    assert_eq!(params.get_int(IFG_LKSY), Some(1));
    assert_eq!(params.get(IFG_XFIRST), Some(&ParamValue::Float(150.92)));
    assert_eq!(params.get_float(IFG_XLAST), Some(150.94));
    assert_eq!(params.get_float(IFG_YFIRST), Some(-34.18));
    assert_eq!(params.get_float(IFG_YLAST), Some(-34.22));

    let typed = ProcessingParams::from_parameters(&params).expect("Failed to build params");
    assert_eq!(typed.crop_option, Some(CropOption::AllSameSize));
    assert_eq!(typed.num_sets, 2);
}

#[test]
fn test_only_outdir() {
    let config = write_config("outdir: results\n");
    let params = parse_config_file(config.path()).expect("Failed to parse config");

    assert_eq!(params.get_str(OUT_DIR), Some("results"));
    assert_eq!(params.get_int(NUM_SETS), Some(1));
    assert_eq!(params.get_bool(AMPLITUDE_FLAG), Some(false));
    assert_eq!(params.get_bool(PERP_BASELINE_FLAG), Some(true));
    assert!(params.contains_key(IFG_CROP_OPT));
    assert_eq!(params.get(IFG_CROP_OPT), None);

    // Every recognized key is present
    for (key, _, _) in PARAM_CONVERSION.iter() {
        assert!(params.contains_key(key), "missing {}", key);
    }
}

#[test]
fn test_parse_twice_is_equal() {
    let config = write_config("% header\nnsets 3\nifgxfirst: 1.5\nextra value\n");

    let first = parse_config_file(config.path()).unwrap();
    let second = parse_config_file(config.path()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.get_str("extra"), Some("value"));
}

#[test]
fn test_from_file_matches_parse() {
    let config = write_config("ifglksx 2\nifglksy 3\n");

    let typed = ProcessingParams::from_file(config.path()).unwrap();
    assert_eq!(typed.ifg_looks_x, 2);
    assert_eq!(typed.ifg_looks_y, 3);
    assert_eq!(typed.crop_option, None);
}

#[test]
fn test_missing_config_file() {
    let result = parse_config_file("/nonexistent/pyrate.conf");
    assert!(matches!(result, Err(IfgError::Io(_))));
}

#[test]
fn test_bad_value_in_file() {
    let config = write_config("outdir out\nifglksx two\n");

    match parse_config_file(config.path()) {
        Err(IfgError::Conversion { key, value, .. }) => {
            assert_eq!(key, IFG_LKSX);
            assert_eq!(value, "two");
        }
        other => panic!("Expected conversion error, got {:?}", other),
    }
}
