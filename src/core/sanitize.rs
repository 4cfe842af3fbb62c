use regex::Regex;
use std::sync::LazyLock;

pub const ZERO_WIDTH_SPACE: char = '\u{200B}';
pub const MAX_FIELD_CHARS: usize = 2048;

static INVITE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)discord\.gg").unwrap());
static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)https?://").unwrap());

/// 依序打斷提及、邀請連結與網址，最後截斷長度
pub fn sanitize(text: &str) -> String {
    let mention = format!("@{}", ZERO_WIDTH_SPACE);
    let invite = format!("discord{}.gg", ZERO_WIDTH_SPACE);
    let scheme = format!("h{}ttp://", ZERO_WIDTH_SPACE);

    let mentions_broken = text.replace('@', &mention);
    let invites_broken = INVITE_RE.replace_all(&mentions_broken, invite.as_str());
    let links_broken = SCHEME_RE.replace_all(&invites_broken, scheme.as_str());

    links_broken.chars().take(MAX_FIELD_CHARS).collect()
}
