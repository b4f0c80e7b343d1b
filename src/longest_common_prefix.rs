#[derive(Debug, PartialEq, Eq)]
pub struct LcpResult<'a> {
    pub common_prefix: &'a str,
    pub left_rest: &'a str,
    pub right_rest: &'a str,
}

/// Splits off the longest common prefix of `left` and `right`, comparing unicode scalar values.
/// The split point is always a character boundary in both strings.
pub fn longest_common_prefix<'a>(left: &'a str, right: &'a str) -> LcpResult<'a> {
    let common_len = left
        // Iterate over unicode scalar values of both strings in lock-step.
        .char_indices()
        .zip(right.chars())
        // Stop at the first character difference...
        .find(|((_, l), r)| l != r)
        .map(|((byte_pos, _), _)| byte_pos)
        // ...or take the shorter of the two, if one is a prefix of the other.
        .unwrap_or(left.len().min(right.len()));

    let (common_prefix, left_rest) = left.split_at(common_len);
    LcpResult {
        common_prefix,
        left_rest,
        right_rest: &right[common_len..],
    }
}

#[test]
fn test() {
    let result = longest_common_prefix("", "");
    assert_eq!(result, LcpResult {
        common_prefix: "",
        left_rest: "",
        right_rest: "",
    }, "empty strings");

    let result = longest_common_prefix("bear", "bear");
    assert_eq!(result, LcpResult {
        common_prefix: "bear",
        left_rest: "",
        right_rest: "",
    }, "equal strings");

    let result = longest_common_prefix("bell", "bells");
    assert_eq!(result, LcpResult {
        common_prefix: "bell",
        left_rest: "",
        right_rest: "s",
    }, "left is prefix of right");

    let result = longest_common_prefix("bells", "bell");
    assert_eq!(result, LcpResult {
        common_prefix: "bell",
        left_rest: "s",
        right_rest: "",
    }, "right is prefix of left");

    let result = longest_common_prefix("stock", "bull");
    assert_eq!(result, LcpResult {
        common_prefix: "",
        left_rest: "stock",
        right_rest: "bull",
    }, "no common prefix");

    let result = longest_common_prefix("ear", "ell");
    assert_eq!(result, LcpResult {
        common_prefix: "e",
        left_rest: "ar",
        right_rest: "ll",
    }, "partial overlap");

    // 'ö' and 'ü' share their first UTF-8 byte, the split must not fall inside the character.
    let result = longest_common_prefix("föhn", "füße");
    assert_eq!(result, LcpResult {
        common_prefix: "f",
        left_rest: "öhn",
        right_rest: "üße",
    }, "multi-byte characters");
}
