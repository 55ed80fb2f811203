use serde::{Deserialize, Serialize};

/// One of the two independent output documents built from a chapter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// English chapters, `chapter1.md`.
    Primary,
    /// Korean chapters, `chapter1-ko.md`.
    Secondary,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Primary, Variant::Secondary];

    /// File name marker of secondary-variant chapters.
    pub const SECONDARY_MARKER: &'static str = "-ko.md";

    /// Decides the variant of a chapter from its file name.
    pub fn of_file_name(name: &str) -> Self {
        if name.contains(Self::SECONDARY_MARKER) {
            Variant::Secondary
        } else {
            Variant::Primary
        }
    }

    /// Looks a variant up by its default language code.
    pub fn from_language(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.default_profile().language.eq_ignore_ascii_case(code))
    }

    pub fn default_profile(self) -> VariantProfile {
        match self {
            Variant::Primary => VariantProfile {
                variant: self,
                language: "en".to_string(),
                font: "Times New Roman".to_string(),
                subtitle: "Doctoral Dissertation".to_string(),
            },
            Variant::Secondary => VariantProfile {
                variant: self,
                language: "ko".to_string(),
                font: "Malgun Gothic".to_string(),
                subtitle: "박사학위논문".to_string(),
            },
        }
    }
}

/// Display language and font metadata of one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantProfile {
    pub variant: Variant,
    /// Language code, also used in output file names.
    pub language: String,
    pub font: String,
    /// Line under the title on the title page.
    pub subtitle: String,
}

impl VariantProfile {
    pub fn is_korean(&self) -> bool {
        self.language.eq_ignore_ascii_case("ko")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_from_file_name() {
        assert_eq!(Variant::of_file_name("chapter1.md"), Variant::Primary);
        assert_eq!(Variant::of_file_name("chapter1-ko.md"), Variant::Secondary);
        assert_eq!(Variant::of_file_name("chapter1-kor.md"), Variant::Primary);
    }

    #[test]
    fn variant_from_language() {
        assert_eq!(Variant::from_language("en"), Some(Variant::Primary));
        assert_eq!(Variant::from_language("KO"), Some(Variant::Secondary));
        assert_eq!(Variant::from_language("fr"), None);
    }

    #[test]
    fn default_profiles() {
        let ko = Variant::Secondary.default_profile();
        assert_eq!(ko.font, "Malgun Gothic");
        assert!(ko.is_korean());
        assert!(!Variant::Primary.default_profile().is_korean());
    }
}
