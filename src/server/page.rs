//! HTML for the single form page.

use crate::utils::sanitize::escape_html;

/// What the form page shows.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    /// Text pre-filled in the textarea
    pub content: &'a str,
    /// Message lines shown above the form
    pub lines: &'a [String],
    pub check_presence: bool,
    pub include_pods: bool,
}

/// Renders the form page. Every user-supplied string is escaped.
pub fn render_page(view: &PageView<'_>) -> String {
    let message = if view.lines.is_empty() {
        String::new()
    } else {
        let joined = view
            .lines
            .iter()
            .map(|line| escape_html(line))
            .collect::<Vec<_>>()
            .join("<br>");
        format!("<p class=\"message\">{}</p>\n", joined)
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Add scouts</title>
</head>
<body>
{message}<form method="post" action="/">
<p>Killmail and battle report URLs, and scout names, one per line:</p>
<textarea name="content" rows="20" cols="80">{content}</textarea>
<p><label>Password <input type="password" name="password"></label></p>
<p><label><input type="checkbox" name="check" value="1"{check}> Skip scouts already on the killmail</label></p>
<p><label><input type="checkbox" name="pods" value="1"{pods}> Include pods</label></p>
<p><input type="submit" value="Add scouts"></p>
</form>
</body>
</html>
"#,
        message = message,
        content = escape_html(view.content),
        check = checked(view.check_presence),
        pods = checked(view.include_pods),
    )
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}
