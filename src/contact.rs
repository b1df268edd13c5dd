#[derive(Debug, FromForm)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

/// Percent-encode for a mailto header value (spaces as %20, not '+').
fn mailto_encode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// `mailto:` link that opens the visitor's mail client with the message prefilled.
pub fn mailto_link(to: &str, form: &ContactForm) -> String {
    let name = form.name.trim();
    let subject = format!("Portfolio Contact: {}", name);
    let body = format!(
        "From: {} <{}>\n\n{}\n\n---\nSent from portfolio website",
        name,
        form.email.trim(),
        form.message.trim()
    );
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        mailto_encode(&subject),
        mailto_encode(&body)
    )
}
