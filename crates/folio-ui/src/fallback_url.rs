//! Deterministic placeholder URL derivation.
//!
//! Both derivations are pure: the same seed always yields the same URL,
//! so repeated failures of the same subject show the same placeholder.

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x";
const PLACEHOLDER_BASE: &str = "https://picsum.photos";

pub const DEFAULT_AVATAR_STYLE: &str = "avataaars";
pub const DEFAULT_AVATAR_BACKGROUND: &str = "4f46e5";
pub const DEFAULT_AVATAR_SIZE: u32 = 100;

pub const DEFAULT_PLACEHOLDER_WIDTH: u32 = 600;
pub const DEFAULT_PLACEHOLDER_HEIGHT: u32 = 400;

/// Generated avatar URL for a seed, using the default style, background,
/// and size.
pub fn avatar_url(seed: &str) -> String {
    avatar_url_with(
        seed,
        DEFAULT_AVATAR_STYLE,
        DEFAULT_AVATAR_BACKGROUND,
        DEFAULT_AVATAR_SIZE,
    )
}

/// Generated avatar URL with explicit style, background color (hex
/// without `#`), and size in pixels.
pub fn avatar_url_with(seed: &str, style: &str, background_color: &str, size: u32) -> String {
    format!(
        "{AVATAR_BASE}/{style}/svg?seed={}&backgroundColor={}&radius=50&size={size}",
        encode_component(seed),
        encode_component(background_color),
    )
}

/// Placeholder image URL. A seed pins the image; the unseeded path is
/// allowed to vary between requests.
pub fn placeholder_url(width: u32, height: u32, seed: Option<&str>) -> String {
    match seed {
        Some(seed) => format!(
            "{PLACEHOLDER_BASE}/seed/{}/{width}/{height}",
            encode_component(seed)
        ),
        None => format!("{PLACEHOLDER_BASE}/{width}/{height}"),
    }
}

/// Percent-encodes everything outside the URL-unreserved set.
fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{byte:02X}"));
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_url_is_deterministic_per_seed() {
        let first = avatar_url("Jane Smith");
        let second = avatar_url("Jane Smith");
        assert_eq!(first, second);
        assert_eq!(
            first,
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Jane%20Smith&backgroundColor=4f46e5&radius=50&size=100"
        );
    }

    #[test]
    fn different_seeds_give_different_avatars() {
        assert_ne!(avatar_url("Jane Smith"), avatar_url("John Doe"));
    }

    #[test]
    fn avatar_url_with_honours_overrides() {
        assert_eq!(
            avatar_url_with("alex", "personas", "b6e3f4", 48),
            "https://api.dicebear.com/7.x/personas/svg?seed=alex&backgroundColor=b6e3f4&radius=50&size=48"
        );
    }

    #[test]
    fn seeded_placeholder_is_deterministic() {
        let first = placeholder_url(600, 400, Some("Weather Dashboard"));
        let second = placeholder_url(600, 400, Some("Weather Dashboard"));
        assert_eq!(first, second);
        assert_eq!(
            first,
            "https://picsum.photos/seed/Weather%20Dashboard/600/400"
        );
    }

    #[test]
    fn unseeded_placeholder_has_no_seed_segment() {
        assert_eq!(placeholder_url(300, 200, None), "https://picsum.photos/300/200");
    }

    #[test]
    fn component_encoding_covers_reserved_characters() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("plain-seed_1.0~x"), "plain-seed_1.0~x");
    }
}
