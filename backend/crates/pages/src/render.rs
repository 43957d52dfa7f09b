//! Page Rendering
//!
//! [`PageRenderer`] is the seam between handlers and markup. Handlers build a
//! [`ViewModel`] and never produce HTML themselves, so tests can swap in a
//! renderer that exposes the view model directly.

use std::sync::Arc;

use axum::response::Html;

use crate::catalog::PRODUCTS;
use crate::view::{Template, ViewModel};

/// Turns a view model into a response body
pub trait PageRenderer: Send + Sync {
    fn render(&self, view: &ViewModel) -> Html<String>;
}

pub type SharedRenderer = Arc<dyn PageRenderer>;

/// Built-in server-side HTML renderer
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    app_name: String,
    recaptcha_site_key: String,
}

impl HtmlRenderer {
    pub fn new(app_name: impl Into<String>, recaptcha_site_key: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            recaptcha_site_key: recaptcha_site_key.into(),
        }
    }

    fn body(&self, view: &ViewModel) -> String {
        match view.template {
            Template::Home => home_body(view),
            Template::Login => login_body(view),
            Template::Auth => auth_body(view),
            Template::Register => self.register_body(),
            Template::Products => products_body(),
        }
    }

    fn register_body(&self) -> String {
        let key = escape(&self.recaptcha_site_key);
        let mut html = String::new();
        html.push_str("<h1>Create an account</h1>\n");
        html.push_str(&format!(
            "<script src=\"https://www.google.com/recaptcha/api.js?render={key}\"></script>\n"
        ));
        html.push_str("<form id=\"register-form\" method=\"post\" action=\"/register\">\n");
        html.push_str(
            "  <label for=\"email\">Email</label>\n  <input type=\"email\" id=\"email\" name=\"email\" required>\n",
        );
        html.push_str(
            "  <input type=\"hidden\" id=\"g-recaptcha-response\" name=\"g-recaptcha-response\">\n",
        );
        html.push_str("  <button type=\"submit\">Register</button>\n</form>\n");
        html.push_str(&format!(
            "<script>\ndocument.getElementById('register-form').addEventListener('submit', function (e) {{\n  e.preventDefault();\n  var form = this;\n  grecaptcha.ready(function () {{\n    grecaptcha.execute('{key}', {{ action: 'register' }}).then(function (token) {{\n      document.getElementById('g-recaptcha-response').value = token;\n      form.submit();\n    }});\n  }});\n}});\n</script>\n"
        ));
        html
    }
}

impl PageRenderer for HtmlRenderer {
    fn render(&self, view: &ViewModel) -> Html<String> {
        tracing::debug!(template = ?view.template, "Rendering page");

        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!(
            "<title>{} | {}</title>\n</head>\n<body>\n",
            escape(view.page_title),
            escape(&self.app_name)
        ));
        html.push_str(
            "<nav><a href=\"/\">Home</a> <a href=\"/products\">Products</a> <a href=\"/login\">Login</a> <a href=\"/register\">Register</a></nav>\n",
        );
        if let Some(error) = &view.error_message {
            html.push_str(&format!(
                "<p class=\"error\" role=\"alert\">{}</p>\n",
                escape(error)
            ));
        }
        html.push_str(&self.body(view));
        html.push_str("</body>\n</html>\n");
        Html(html)
    }
}

fn home_body(view: &ViewModel) -> String {
    let email = view.email.as_deref().unwrap_or(crate::view::GUEST);
    format!("<h1>Welcome, {}!</h1>\n", escape(email))
}

fn login_body(_view: &ViewModel) -> String {
    let mut html = String::from("<h1>Sign in</h1>\n");
    html.push_str("<form method=\"post\" action=\"/login\">\n");
    html.push_str("  <label for=\"inputEmail\">Email</label>\n");
    html.push_str(
        "  <input type=\"email\" id=\"inputEmail\" name=\"inputEmail\" required autofocus>\n",
    );
    html.push_str("  <button type=\"submit\">Send code</button>\n</form>\n");
    html
}

fn auth_body(view: &ViewModel) -> String {
    let email = view.email.as_deref().unwrap_or_default();
    let mut html = String::from("<h1>Enter your verification code</h1>\n");
    html.push_str(&format!(
        "<p>A code was sent to {}.</p>\n",
        escape(email)
    ));

    let Some(mfa) = &view.mfa else {
        return html;
    };

    html.push_str(&format!(
        "<p>Or scan this code with your authenticator app:</p>\n<img src=\"{}\" alt=\"QR code\" width=\"200\" height=\"200\">\n",
        escape(&mfa.qr_url)
    ));
    html.push_str("<form method=\"post\" action=\"/auth\">\n");
    for (name, value) in [
        ("inputEmail", email),
        ("secret", mfa.secret.as_str()),
        ("qrCode", mfa.qr_url.as_str()),
        ("challenge", mfa.challenge.as_str()),
    ] {
        html.push_str(&format!(
            "  <input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
            name,
            escape(value)
        ));
    }
    html.push_str("  <label for=\"userToken\">Code</label>\n");
    html.push_str(
        "  <input type=\"text\" id=\"userToken\" name=\"userToken\" inputmode=\"numeric\" autocomplete=\"one-time-code\" required>\n",
    );
    html.push_str("  <button type=\"submit\">Verify</button>\n</form>\n");
    html
}

fn products_body() -> String {
    let mut html = String::from("<h1>Products</h1>\n<ul class=\"products\">\n");
    for product in PRODUCTS {
        html.push_str(&format!(
            "  <li><h2>{}</h2><p>{}</p><span class=\"price\">{}</span></li>\n",
            escape(product.name),
            escape(product.description),
            product.display_price()
        ));
    }
    html.push_str("</ul>\n");
    html
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape(input: &str) -> String {
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
