use line_status::utils::config::{get_credential, get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("LS_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("LS_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("LS_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("LS_MISSING_VAR");
        let result: String = get_env_or_default("LS_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_port() {
    unsafe {
        env::set_var("LS_TEST_VAR_PORT", "9090");
        let result: u16 = get_env_or_default("LS_TEST_VAR_PORT", 8080);
        assert_eq!(result, 9090);
        env::remove_var("LS_TEST_VAR_PORT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("LS_TEST_VAR_INVALID", "70000");
        let result: u16 = get_env_or_default("LS_TEST_VAR_INVALID", 8080);
        assert_eq!(result, 8080); // out of range for u16
        env::remove_var("LS_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("LS_TEST_VAR_OPTION", " http://metrics.local ");
        let result: Option<String> = get_env_or_none("LS_TEST_VAR_OPTION");
        assert_eq!(result, Some("http://metrics.local".to_string()));
        env::remove_var("LS_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_or_none_with_blank_var() {
    unsafe {
        env::set_var("LS_TEST_VAR_BLANK", "   ");
        let result: Option<String> = get_env_or_none("LS_TEST_VAR_BLANK");
        assert_eq!(result, None);
        env::remove_var("LS_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_none_with_missing_var() {
    unsafe {
        env::remove_var("LS_MISSING_VAR_OPTION");
    }
    let result: Option<u16> = get_env_or_none("LS_MISSING_VAR_OPTION");
    assert_eq!(result, None);
}

#[test]
fn test_get_credential_keeps_value_verbatim() {
    unsafe {
        env::set_var("LS_TEST_CREDENTIAL", " pass word ");
        assert_eq!(get_credential("LS_TEST_CREDENTIAL"), " pass word ");
        env::remove_var("LS_TEST_CREDENTIAL");
    }
}

#[test]
fn test_get_credential_missing_is_empty() {
    unsafe {
        env::remove_var("LS_MISSING_CREDENTIAL");
    }
    assert_eq!(get_credential("LS_MISSING_CREDENTIAL"), "");
}
