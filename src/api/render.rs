//! HTML rendering for the form and admin pages.
//!
//! Plain string building; every value that came from a visitor goes
//! through [`escape`].

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::db::GiftWish;
use crate::models::{WishSubmission, WishesByClass};

const STYLE: &str = "body{font-family:sans-serif;background:#fdf2f2;margin:0;padding:2rem}\
main{max-width:60rem;margin:0 auto;background:#fff;border-radius:.5rem;padding:2rem}\
h1{color:#c53030}label{display:block;margin-top:1rem}\
input,textarea{width:100%;padding:.5rem;box-sizing:border-box}\
button{margin-top:1rem;padding:.5rem 1rem;background:#c53030;color:#fff;border:0;border-radius:.25rem}\
.error{background:#fed7d7;border:1px solid #fc8181;color:#9b2c2c;padding:.5rem;margin-top:1rem}\
table{width:100%;border-collapse:collapse;margin-bottom:2rem}\
th,td{text-align:left;padding:.5rem;border-bottom:1px solid #eee}\
.muted{color:#a0aec0}";

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Date in Polish short form, e.g. `5.12.2026`.
///
/// Shown in UTC; the admin table labels the column accordingly.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%-d.%m.%Y").to_string()
}

/// "1 uczeń", "3 uczniów"... with Polish plural rules.
pub fn pupil_count(n: usize) -> String {
    let noun = if n == 1 {
        "uczeń"
    } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
        "uczniowie"
    } else {
        "uczniów"
    };
    format!("{} {}", n, noun)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pl\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{}</title><style>{}</style></head><body><main>{}</main></body></html>",
        escape(title),
        STYLE,
        body
    )
}

fn error_box(message: Option<&str>) -> String {
    message
        .map(|m| format!("<div class=\"error\">{}</div>", escape(m)))
        .unwrap_or_default()
}

/// Submission form, refilled with `values` after a rejected submission.
pub fn form_page(values: &WishSubmission, error: Option<&str>) -> String {
    let link = values.gift_link.as_deref().unwrap_or("");
    let body = format!(
        "<h1>🎅 List do Świętego Mikołaja</h1>\
<form action=\"/\" method=\"post\">\
<label for=\"name\">Imię</label><input id=\"name\" name=\"name\" required value=\"{}\">\
<label for=\"class\">Klasa</label><input id=\"class\" name=\"class\" required value=\"{}\">\
<label for=\"age\">Wiek</label><input id=\"age\" name=\"age\" type=\"number\" min=\"0\" required value=\"{}\">\
<label for=\"giftWish\">Wymarzony prezent</label><textarea id=\"giftWish\" name=\"giftWish\" required>{}</textarea>\
<label for=\"giftLink\">Link do prezentu (opcjonalnie)</label><input id=\"giftLink\" name=\"giftLink\" type=\"url\" value=\"{}\">\
{}<button type=\"submit\">Wyślij list</button></form>",
        escape(&values.name),
        escape(&values.class),
        escape(&values.age),
        escape(&values.gift_wish),
        escape(link),
        error_box(error),
    );
    layout("List do Świętego Mikołaja", &body)
}

/// Confirmation after a stored wish.
pub fn thank_you_page(wish: &GiftWish) -> String {
    let body = format!(
        "<h1>🎄 Dziękujemy, {}!</h1><p>Twój list został wysłany do Świętego Mikołaja.</p>\
<p><a href=\"/\">Wyślij kolejny list</a></p>",
        escape(&wish.name)
    );
    layout("List wysłany", &body)
}

/// Password form for the admin view.
pub fn login_page(notice: Option<&str>) -> String {
    let body = format!(
        "<h1>🔒 Wprowadź hasło</h1>\
<form action=\"/admin\" method=\"get\">\
<label for=\"password\">Hasło</label><input id=\"password\" name=\"password\" type=\"password\" required>\
{}<button type=\"submit\">Zaloguj się</button></form>",
        error_box(notice)
    );
    layout("Panel administracyjny", &body)
}

/// Standalone error message page.
pub fn error_page(message: &str) -> String {
    layout("Błąd", &error_box(Some(message)))
}

/// One table per class, under a header with the total number of wishes.
pub fn admin_page(total: i64, grouped: &WishesByClass) -> String {
    let mut body = format!(
        "<h1>🎅 Lista życzeń uczniów</h1><p>Wszystkie życzenia dla Świętego Mikołaja</p>\
<p>Łącznie życzeń: <strong>{}</strong></p>",
        total
    );

    if grouped.is_empty() {
        body.push_str("<p class=\"muted\">Jeszcze nie ma żadnych życzeń 🎄</p>");
    }

    for (class, wishes) in grouped {
        let _ = write!(
            body,
            "<h2>Klasa {}</h2><p>{}</p><table><thead><tr>\
<th>Imię</th><th>Wiek</th><th>Prezent</th><th>Link</th><th>Data (UTC)</th>\
</tr></thead><tbody>",
            escape(class),
            pupil_count(wishes.len())
        );
        for wish in wishes {
            let link = match &wish.gift_link {
                Some(url) => format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">🔗 Link</a>",
                    escape(url)
                ),
                None => "<span class=\"muted\">Brak</span>".to_string(),
            };
            let _ = write!(
                body,
                "<tr><td>{}</td><td>{} lat</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&wish.name),
                wish.age,
                escape(&wish.gift_wish),
                link,
                format_date(&wish.created_at)
            );
        }
        body.push_str("</tbody></table>");
    }

    body.push_str("<p><a href=\"/\">← Powrót do formularza</a></p>");
    layout("Lista życzeń", &body)
}
