//! # HTML Views
//!
//! Server-rendered pages. Plain `format!` templates; the only dynamic value
//! shown back to the browser is the username, which is escaped.

use crate::db::models::User;

const STYLE: &str = "body{font-family:sans-serif;max-width:28rem;margin:3rem auto;padding:0 1rem}\
form{display:flex;flex-direction:column;gap:.5rem}\
input{padding:.4rem}button{padding:.5rem;cursor:pointer}";

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head><body>
{body}
</body></html>"#
    )
}

/// Escape text for use inside HTML element content or a quoted attribute
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// GET / : welcome page when logged in, log-in form otherwise
pub fn render_index(user: Option<&User>) -> String {
    let body = match user {
        Some(user) => format!(
            r#"<h1>WELCOME BACK {}</h1>
<a href="/log-out">LOG OUT</a>"#,
            escape_html(&user.username)
        ),
        None => r#"<h1>please log in</h1>
<form action="/log-in" method="POST">
  <label for="username">Username</label>
  <input id="username" name="username" placeholder="username" type="text" autocomplete="username">
  <label for="password">Password</label>
  <input id="password" name="password" type="password" autocomplete="current-password">
  <button>Log In</button>
</form>
<p><a href="/sign-up">Sign up</a></p>"#
            .to_string(),
    };

    layout("Home", &body)
}

/// GET /sign-up
pub fn render_sign_up_form() -> String {
    layout(
        "Sign Up",
        r#"<h1>Sign Up</h1>
<form action="/sign-up" method="POST">
  <label for="username">Username</label>
  <input id="username" name="username" placeholder="username" type="text" autocomplete="username">
  <label for="password">Password</label>
  <input id="password" name="password" type="password" autocomplete="new-password">
  <button>Sign Up</button>
</form>"#,
    )
}

pub fn render_error_page() -> String {
    layout(
        "Error",
        r#"<h1>Something went wrong</h1>
<p><a href="/">Back to home</a></p>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_index_shows_login_form() {
        let page = render_index(None);

        assert!(page.contains("please log in"));
        assert!(page.contains(r#"action="/log-in""#));
        assert!(!page.contains("WELCOME BACK"));
    }

    #[test]
    fn authenticated_index_greets_user_with_escaped_name() {
        let user = User::new("<b>alice</b>".to_string(), "hash".to_string());
        let page = render_index(Some(&user));

        assert!(page.contains("WELCOME BACK &lt;b&gt;alice&lt;/b&gt;"));
        assert!(page.contains(r#"href="/log-out""#));
        assert!(!page.contains("<b>alice</b>"));
    }

    #[test]
    fn escape_handles_quotes_and_ampersands() {
        assert_eq!(escape_html(r#"a&b"c'd"#), "a&amp;b&quot;c&#x27;d");
    }
}
