//! Parsing of raw analyzer output into dependency sets.
//!
//! `jdeps -recursive -verbose:class` mixes three line shapes:
//!
//! - archive headers at column zero, e.g. `classes -> /opt/jdk/lib/rt.jar`
//! - grouping lines naming the source class, e.g. `   com.example.App (classes)`
//! - dependency lines, indented and carrying an arrow plus a resolution
//!   annotation. Older JDKs put the arrow first (`      -> com.example.Util
//!   classes`), newer ones repeat the source on the left
//!   (`   com.example.App -> com.example.Util   classes`).
//!
//! Only the dependency lines contribute identifiers: the first whitespace
//! token after the arrow. Everything else is noise and is skipped. The
//! annotation (archive, module name, or `not found`) is not interpreted.

use std::collections::BTreeSet;

/// Extract the dependency identifiers from one invocation's raw output.
///
/// `entry` is the class the analyzer was invoked for; its self-references
/// are dropped unless `keep_self` is set. An output with no recognizable
/// dependency lines yields an empty set - a class may legitimately have
/// zero dependencies.
pub fn parse_report(raw: &str, entry: &str, keep_self: bool) -> BTreeSet<String> {
    let mut deps = BTreeSet::new();

    for line in raw.lines() {
        // Column-zero lines are archive headers, not dependencies.
        if !line.starts_with(char::is_whitespace) {
            continue;
        }
        let Some((_, rhs)) = line.split_once("->") else {
            continue;
        };
        let Some(target) = rhs.split_whitespace().next() else {
            continue;
        };
        if !keep_self && target == entry {
            continue;
        }
        deps.insert(target.to_string());
    }

    deps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parses_arrow_first_layout() {
        // JDK 8 style: grouping line, then arrow-first dependency lines.
        let raw = "\
classes -> /opt/jdk/jre/lib/rt.jar
   com.example.App (classes)
      -> com.example.Util                                 classes
      -> java.io.PrintStream                              rt.jar
      -> java.lang.Object                                 rt.jar
";
        assert_eq!(
            parse_report(raw, "com.example.App", false),
            set(&["com.example.Util", "java.io.PrintStream", "java.lang.Object"])
        );
    }

    #[test]
    fn test_parses_source_arrow_target_layout() {
        // Modern style: one line per edge, source repeated on the left.
        let raw = "\
classes -> java.base
   com.example.App      -> com.example.Util      classes
   com.example.App      -> java.lang.Object      java.base
";
        assert_eq!(
            parse_report(raw, "com.example.App", false),
            set(&["com.example.Util", "java.lang.Object"])
        );
    }

    #[test]
    fn test_header_lines_ignored_even_with_arrow() {
        let raw = "classes -> /opt/jdk/jre/lib/rt.jar\n";
        assert!(parse_report(raw, "com.example.App", false).is_empty());
    }

    #[test]
    fn test_grouping_lines_ignored() {
        let raw = "   com.example.App (classes)\n";
        assert!(parse_report(raw, "com.example.App", false).is_empty());
    }

    #[test]
    fn test_not_found_annotation_still_counts() {
        let raw = "      -> org.missing.Widget                           not found\n";
        assert_eq!(
            parse_report(raw, "com.example.App", false),
            set(&["org.missing.Widget"])
        );
    }

    #[test]
    fn test_self_reference_dropped_by_default() {
        let raw = "\
   com.example.App      -> com.example.App       classes
   com.example.App      -> com.example.Util      classes
";
        assert_eq!(
            parse_report(raw, "com.example.App", false),
            set(&["com.example.Util"])
        );
    }

    #[test]
    fn test_self_reference_kept_on_request() {
        let raw = "   com.example.App      -> com.example.App       classes\n";
        assert_eq!(
            parse_report(raw, "com.example.App", true),
            set(&["com.example.App"])
        );
    }

    #[test]
    fn test_empty_output_is_empty_set() {
        assert!(parse_report("", "com.example.App", false).is_empty());
    }

    #[test]
    fn test_dangling_arrow_ignored() {
        let raw = "      ->\n";
        assert!(parse_report(raw, "com.example.App", false).is_empty());
    }

    #[test]
    fn test_duplicate_lines_deduplicated() {
        let raw = "\
      -> java.lang.Object                                 rt.jar
      -> java.lang.Object                                 rt.jar
";
        assert_eq!(
            parse_report(raw, "com.example.App", false),
            set(&["java.lang.Object"])
        );
    }
}
