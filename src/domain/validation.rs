use once_cell::sync::Lazy;
use regex::Regex;

// `\w` 仅匹配 ASCII 字符
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:[\w.-])+@((?-u:[\w-])+\.)+(?-u:\w){2,4}$").expect("invalid email regex.")
});
static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script.*?>.*?</script>").expect("invalid script regex."));
static SQL_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(SELECT|INSERT|UPDATE|DELETE|DROP|--)").expect("invalid keyword regex.")
});

/// 浏览器 `String.prototype.trim` 去除的空白：
/// Unicode 空白去掉 NEL (U+0085)，再加上 BOM (U+FEFF)
fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// 按浏览器规则去除首尾空白
pub fn trim_whitespace(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// 去除首尾空白后非空
pub fn is_non_empty(value: &str) -> bool {
    !trim_whitespace(value).is_empty()
}

/// 只检查 `local@label.tld` 的格式，不检查邮箱是否真实存在
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(trim_whitespace(value))
}

/// 清除留言中的 `<script>` 块和 SQL 关键字，然后去除首尾空白。
///
/// 只扫描一遍：删除后新拼出的 `<script>` 或关键字会被保留。
/// 接收方仍需把所有字段当作不可信输入处理。
pub fn sanitize_message(value: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(value, "");
    let without_keywords = SQL_KEYWORD.replace_all(&without_scripts, "");
    trim_whitespace(&without_keywords).to_string()
}
