//! Plain-text summaries of configured method metadata.

use std::fmt::Write;

use crate::intercept::metadata::MethodOverrides;
use crate::intercept::method::MethodSignature;
use crate::intercept::options::AutoLog;

/// One line for a configured method. Methods that log nothing but their
/// failures read "failures only".
pub fn describe_entry(identity: &str, auto_log: &AutoLog) -> String {
    let options = auto_log.options();
    if options.is_quiet() {
        format!("{identity}: failures only")
    } else {
        format!("{identity}: {options}")
    }
}

/// Count line followed by one indented line per method, sorted by identity.
pub fn describe_overrides(overrides: &MethodOverrides) -> String {
    let mut out = format!("{} observed method(s)", overrides.len());
    for (identity, auto_log) in overrides.entries() {
        let _ = write!(out, "\n  {}", describe_entry(identity, auto_log));
    }
    out
}

/// The options configured for `signature`, or "not observed".
pub fn describe_resolution(overrides: &MethodOverrides, signature: &MethodSignature) -> String {
    match overrides.get(signature) {
        Some(auto_log) => format!("{signature}: {}", auto_log.options()),
        None => format!("{signature}: not observed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::parse_config;

    fn overrides() -> MethodOverrides {
        let config = parse_config(
            r#"
            [methods."Cart::total()"]
            param = false
            result = false
            cost_time = false

            [methods."Cart::add(u32,String)"]
            cost_time = false
            "#,
        )
        .unwrap();
        MethodOverrides::from_config(&config)
    }

    #[test]
    fn test_describe_overrides_lists_sorted() {
        assert_eq!(
            describe_overrides(&overrides()),
            "2 observed method(s)\n\
             \x20 Cart::add(u32, String): param=true result=true cost_time=false\n\
             \x20 Cart::total(): failures only"
        );
        assert_eq!(describe_overrides(&MethodOverrides::new()), "0 observed method(s)");
    }

    #[test]
    fn test_describe_resolution() {
        let overrides = overrides();

        let add: MethodSignature = "Cart::add(u32, String)".parse().unwrap();
        assert_eq!(
            describe_resolution(&overrides, &add),
            "Cart::add(u32, String): param=true result=true cost_time=false"
        );

        let quiet: MethodSignature = "Cart::total()".parse().unwrap();
        assert_eq!(
            describe_resolution(&overrides, &quiet),
            "Cart::total(): param=false result=false cost_time=false"
        );

        let missing: MethodSignature = "Cart::clear()".parse().unwrap();
        assert_eq!(describe_resolution(&overrides, &missing), "Cart::clear(): not observed");
    }
}
