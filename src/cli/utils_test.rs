use crate::cli::utils::*;

#[test]
fn test_truncate_with_ellipsis_short_string() {
    let result = truncate_with_ellipsis("hello", 10);
    assert_eq!(result, "hello");
}

#[test]
fn test_truncate_with_ellipsis_exact_length() {
    let result = truncate_with_ellipsis("hello", 5);
    assert_eq!(result, "hello");
}

#[test]
fn test_truncate_with_ellipsis_long_string() {
    let result = truncate_with_ellipsis("hello world this is a long string", 10);
    assert_eq!(result, "hello w...");
}

#[test]
fn test_truncate_with_ellipsis_unicode() {
    let result = truncate_with_ellipsis("milch 牛乳", 8);
    assert_eq!(result, "milch 牛乳");

    let result2 = truncate_with_ellipsis("milch 牛乳", 7);
    assert_eq!(result2, "milc...");
}

#[test]
fn test_truncate_with_tiny_max_does_not_underflow() {
    assert_eq!(truncate_with_ellipsis("abcdef", 2), "...");
}

#[test]
fn test_format_completed() {
    assert_eq!(format_completed(true), "[x]");
    assert_eq!(format_completed(false), "[ ]");
}
