use std::fmt::Write;

use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::render::html_escape;

/// Draws the avatar shown on a contributor card, keyed by a seed string.
pub trait AvatarRenderer: Send + Sync {
    fn render(&self, seed: &str) -> String;

    /// Markup the page `<head>` needs for this avatar style, if any.
    fn head_markup(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AvatarStyle {
    /// `<rpg-character seed=...>` web component.
    Rpg,
    /// Self-contained SVG identicon.
    #[default]
    Identicon,
}

impl AvatarStyle {
    pub fn build(self, module_src: Option<String>) -> Box<dyn AvatarRenderer> {
        match self {
            AvatarStyle::Rpg => Box::new(RpgCharacterAvatar { module_src }),
            AvatarStyle::Identicon => Box::new(IdenticonAvatar),
        }
    }
}

/// Delegates drawing to the `rpg-character` custom element.
#[derive(Debug, Clone, Default)]
pub struct RpgCharacterAvatar {
    pub module_src: Option<String>,
}

impl AvatarRenderer for RpgCharacterAvatar {
    fn render(&self, seed: &str) -> String {
        format!(
            "<rpg-character seed=\"{}\"></rpg-character>",
            html_escape(seed)
        )
    }

    fn head_markup(&self) -> Option<String> {
        self.module_src.as_ref().map(|src| {
            format!(
                "<script type=\"module\" src=\"{}\"></script>",
                html_escape(src)
            )
        })
    }
}

const GRID: usize = 5;
// Columns 0..=2 are drawn; 3 and 4 mirror 1 and 0.
const HALF: usize = GRID / 2 + 1;

/// 5x5 mirrored identicon derived from SHA-256 of the seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdenticonAvatar;

impl IdenticonAvatar {
    fn cells(digest: &[u8]) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..GRID {
            for col in 0..HALF {
                // Bytes 2.. drive the pattern; 0 and 1 are the hue.
                if digest[2 + row * HALF + col] & 1 == 1 {
                    cells.push((col, row));
                    let mirrored = GRID - 1 - col;
                    if mirrored != col {
                        cells.push((mirrored, row));
                    }
                }
            }
        }
        cells
    }
}

impl AvatarRenderer for IdenticonAvatar {
    fn render(&self, seed: &str) -> String {
        let digest = Sha256::digest(seed.as_bytes());
        let hue = u16::from_be_bytes([digest[0], digest[1]]) % 360;

        let mut svg = String::new();
        let _ = write!(
            &mut svg,
            "<svg class=\"avatar\" viewBox=\"0 0 {GRID} {GRID}\" role=\"img\" aria-label=\"{}\" shape-rendering=\"crispEdges\">",
            html_escape(seed)
        );
        let _ = write!(
            &mut svg,
            "<rect width=\"{GRID}\" height=\"{GRID}\" fill=\"#f0f0f0\"/>"
        );
        let _ = write!(&mut svg, "<g fill=\"hsl({hue}, 55%, 55%)\">");
        for (x, y) in Self::cells(&digest) {
            let _ = write!(&mut svg, "<rect x=\"{x}\" y=\"{y}\" width=\"1\" height=\"1\"/>");
        }
        svg.push_str("</g></svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identicon_is_deterministic_per_seed() {
        let avatar = IdenticonAvatar;
        assert_eq!(avatar.render("octocat"), avatar.render("octocat"));
        assert_ne!(avatar.render("octocat"), avatar.render("hubot"));
    }

    #[test]
    fn identicon_is_horizontally_symmetric() {
        let digest = Sha256::digest(b"btopro");
        let cells = IdenticonAvatar::cells(&digest);
        for &(x, y) in &cells {
            assert!(cells.contains(&(GRID - 1 - x, y)), "missing mirror of {x},{y}");
        }
    }

    #[test]
    fn identicon_escapes_seed_in_label() {
        let svg = IdenticonAvatar.render("a\"<b>");
        assert!(svg.contains("aria-label=\"a&quot;&lt;b&gt;\""));
        assert!(svg.starts_with("<svg class=\"avatar\""));
        assert!(svg.ends_with("</g></svg>"));
    }

    #[test]
    fn rpg_character_carries_seed() {
        let avatar = RpgCharacterAvatar::default();
        assert_eq!(
            avatar.render("dependabot[bot]"),
            "<rpg-character seed=\"dependabot[bot]\"></rpg-character>"
        );
        assert_eq!(avatar.head_markup(), None);
    }

    #[test]
    fn rpg_character_module_goes_in_head() {
        let avatar = AvatarStyle::Rpg.build(Some("/js/rpg-character.js".to_string()));
        assert_eq!(
            avatar.head_markup().as_deref(),
            Some("<script type=\"module\" src=\"/js/rpg-character.js\"></script>")
        );
    }
}
