//! Project links shown on the About panel and the feedback mail builder.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutLinks {
    pub app_name: String,
    pub repository: String,
    pub releases: String,
    pub website: String,
    pub issues: String,
    pub feedback_email: String,
    pub feedback_subject: String,
}

impl Default for AboutLinks {
    fn default() -> Self {
        Self {
            app_name: "Cherry Studio".to_string(),
            repository: "https://github.com/kangfenmao/cherry-studio".to_string(),
            releases: "https://github.com/kangfenmao/cherry-studio/releases".to_string(),
            website: "https://easys.run/cherry-studio".to_string(),
            issues: "https://github.com/kangfenmao/cherry-studio/issues".to_string(),
            feedback_email: "kangfenmao@qq.com".to_string(),
            feedback_subject: "Cherry Studio Feedback".to_string(),
        }
    }
}

impl AboutLinks {
    /// `mailto:` URL addressed to the feedback inbox. The body starts with two
    /// blank lines for the user, followed by the build version and platform.
    pub fn feedback_mailto(&self, version: &str, platform: &str) -> String {
        let body = format!("\n\nVersion: {version} | Platform: {platform}");
        format!(
            "mailto:{}?subject={}&body={}",
            self.feedback_email,
            percent_encode(&self.feedback_subject),
            percent_encode(&body)
        )
    }
}

/// RFC 3986 percent-encoding; only unreserved characters pass through.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
