//! Closed option enums for the three generation tools.
//!
//! Every enum here is a closed string enum: it serializes to a stable
//! wire name (also used as the `<select>` value in the UI) and carries a
//! human-readable label. The sets mirror what the generation backend
//! accepts; adding a variant is a contract change.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Common surface of every closed option enum.
///
/// Lets the UI build `<select>` option lists generically instead of
/// repeating the mapping per enum.
pub trait ClosedEnum: Copy + Eq + 'static {
    /// All variants, in UI display order
    const ALL: &'static [Self];

    /// Stable wire name used in backend requests and form values
    fn as_str(&self) -> &'static str;

    /// Human-readable label for the UI
    fn label(&self) -> &'static str;
}

/// Declares a closed string enum with wire names and UI labels.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($wire:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// All variants, in UI display order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Stable wire name used in backend requests and form values
            pub fn as_str(&self) -> &'static str {
                match self { $( $name::$variant => $wire ),+ }
            }

            /// Human-readable label for the UI
            pub fn label(&self) -> &'static str {
                match self { $( $name::$variant => $label ),+ }
            }
        }

        impl ClosedEnum for $name {
            const ALL: &'static [$name] = $name::ALL;

            fn as_str(&self) -> &'static str {
                $name::as_str(self)
            }

            fn label(&self) -> &'static str {
                $name::label(self)
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    other => Err(DomainError::parse(format!(
                        "unknown {} value: {}",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }
    };
}

closed_enum! {
    /// The three content-generation tools
    ToolKind {
        SocialMedia => ("social", "Social Media Content"),
        Email => ("email", "Email Campaigns"),
        AdCopy => ("ad-copy", "Ad Copy Generator"),
    }
}

closed_enum! {
    /// Target platform for a social media post
    SocialPlatform {
        Facebook => ("facebook", "Facebook"),
        Instagram => ("instagram", "Instagram"),
        Linkedin => ("linkedin", "LinkedIn"),
    }
}

closed_enum! {
    /// Shape of the generated social content
    SocialContentType {
        Post => ("post", "Post"),
        Caption => ("caption", "Caption"),
        Hashtags => ("hashtags", "Hashtags"),
    }
}

closed_enum! {
    /// Voice of the generated social content
    SocialTone {
        Professional => ("professional", "Professional"),
        Casual => ("casual", "Casual"),
        Friendly => ("friendly", "Friendly"),
        Humorous => ("humorous", "Humorous"),
    }
}

closed_enum! {
    /// Kind of email campaign
    EmailType {
        Newsletter => ("newsletter", "Newsletter"),
        Promotional => ("promotional", "Promotional"),
        Announcement => ("announcement", "Announcement"),
        FollowUp => ("follow-up", "Follow-up"),
    }
}

closed_enum! {
    /// Voice of the generated email
    EmailTone {
        Professional => ("professional", "Professional"),
        Friendly => ("friendly", "Friendly"),
        Persuasive => ("persuasive", "Persuasive"),
        Urgent => ("urgent", "Urgent"),
    }
}

closed_enum! {
    /// Ad network the copy targets
    AdPlatform {
        Facebook => ("facebook", "Facebook Ads"),
        Google => ("google", "Google Ads"),
        Instagram => ("instagram", "Instagram Ads"),
    }
}

closed_enum! {
    /// Campaign objective for ad copy
    AdObjective {
        Awareness => ("awareness", "Brand Awareness"),
        Consideration => ("consideration", "Consideration"),
        Conversion => ("conversion", "Conversion"),
    }
}

closed_enum! {
    /// Voice of the generated ad copy
    AdTone {
        Professional => ("professional", "Professional"),
        Casual => ("casual", "Casual"),
        Urgent => ("urgent", "Urgent"),
        Persuasive => ("persuasive", "Persuasive"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for tone in AdTone::ALL {
            assert_eq!(tone.as_str().parse::<AdTone>(), Ok(*tone));
        }
        for kind in ToolKind::ALL {
            assert_eq!(kind.as_str().parse::<ToolKind>(), Ok(*kind));
        }
    }

    #[test]
    fn unknown_wire_name_is_a_parse_error() {
        let err = "twitter".parse::<SocialPlatform>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&EmailType::FollowUp).expect("serialize");
        assert_eq!(json, "\"follow-up\"");
    }
}
