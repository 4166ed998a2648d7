//! Static text tables for diagram captions and advisory lines.
//!
//! # Invariants
//! - Every locale provides text for every circle and region.
//! - Text here is fixed; user-provided text never flows through this module.

use crate::model::region::{Circle, Region};
use serde::{Deserialize, Serialize};

/// Display language for captions, advisories and placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    /// Parses a locale tag such as `ja`, `en`, `en-US`.
    pub fn parse(value: &str) -> Option<Locale> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next() {
            Some("ja") => Some(Locale::Ja),
            Some("en") => Some(Locale::En),
            _ => None,
        }
    }

    /// Caption drawn next to a circle.
    pub fn circle_caption(self, circle: Circle) -> &'static str {
        match (self, circle) {
            (Locale::Ja, Circle::Family) => "家族 Family",
            (Locale::Ja, Circle::Ownership) => "所有 Ownership",
            (Locale::Ja, Circle::Management) => "経営 Management",
            (Locale::En, Circle::Family) => "Family",
            (Locale::En, Circle::Ownership) => "Ownership",
            (Locale::En, Circle::Management) => "Management",
        }
    }

    /// Short label used by the legend.
    pub fn legend_label(self, circle: Circle) -> &'static str {
        match (self, circle) {
            (Locale::Ja, Circle::Family) => "家族",
            (Locale::Ja, Circle::Ownership) => "所有",
            (Locale::Ja, Circle::Management) => "経営",
            (Locale::En, _) => self.circle_caption(circle),
        }
    }

    /// Heading of a region box.
    pub fn region_caption(self, region: Region) -> &'static str {
        match (self, region) {
            (Locale::Ja, Region::Family) => "家族のみ",
            (Locale::Ja, Region::Ownership) => "所有のみ",
            (Locale::Ja, Region::Management) => "経営のみ",
            (Locale::Ja, Region::FamilyOwnership) => "家族×所有",
            (Locale::Ja, Region::FamilyManagement) => "家族×経営",
            (Locale::Ja, Region::OwnershipManagement) => "所有×経営",
            (Locale::Ja, Region::All) => "家族×所有×経営",
            (Locale::En, Region::Family) => "Family only",
            (Locale::En, Region::Ownership) => "Ownership only",
            (Locale::En, Region::Management) => "Management only",
            (Locale::En, Region::FamilyOwnership) => "Family × Ownership",
            (Locale::En, Region::FamilyManagement) => "Family × Management",
            (Locale::En, Region::OwnershipManagement) => "Ownership × Management",
            (Locale::En, Region::All) => "Family × Ownership × Management",
        }
    }

    /// Advisory line for a non-empty region holding `count` participants.
    pub fn advisory_line(self, region: Region, count: usize) -> String {
        match self {
            Locale::Ja => {
                let (head, tail) = match region {
                    Region::All => ("【家族×所有×経営】重なり", "役割の切替ルールを言語化。"),
                    Region::OwnershipManagement => {
                        ("【所有×経営（非家族）】", "評価基準と説明責任を明確化。")
                    }
                    Region::FamilyManagement => {
                        ("【家族×経営（非所有）】", "職務評価と家族感情の分離が鍵。")
                    }
                    Region::FamilyOwnership => {
                        ("【家族×所有（非経営）】", "情報共有の頻度と範囲を合意。")
                    }
                    Region::Management => ("【経営のみ】", "権限と裁量の明確化。"),
                    Region::Ownership => ("【所有のみ】", "配当方針と議決権運用。"),
                    Region::Family => ("【家族のみ】", "家族会議の目的と非公開ラインの先出し。"),
                };
                format!("{head}（{count}名）。{tail}")
            }
            Locale::En => {
                let (head, tail) = match region {
                    Region::All => (
                        "[Family × Ownership × Management] overlap",
                        "Put the rules for switching between roles into words.",
                    ),
                    Region::OwnershipManagement => (
                        "[Ownership × Management, non-family]",
                        "Make evaluation criteria and accountability explicit.",
                    ),
                    Region::FamilyManagement => (
                        "[Family × Management, non-owner]",
                        "Separating job evaluation from family feelings is key.",
                    ),
                    Region::FamilyOwnership => (
                        "[Family × Ownership, not in management]",
                        "Agree on how often and how widely information is shared.",
                    ),
                    Region::Management => (
                        "[Management only]",
                        "Clarify authority and discretion.",
                    ),
                    Region::Ownership => (
                        "[Ownership only]",
                        "Dividend policy and exercise of voting rights.",
                    ),
                    Region::Family => (
                        "[Family only]",
                        "State the purpose of family meetings and what stays private up front.",
                    ),
                };
                format!("{head} ({count}). {tail}")
            }
        }
    }

    /// Single line shown when no region has any participant.
    pub fn fallback_advisory(self) -> &'static str {
        match self {
            Locale::Ja => "重なりが少ない構成です。役割と言葉の定義から始めましょう。",
            Locale::En => {
                "Few overlaps in this setup. Start by defining the roles and the words used for them."
            }
        }
    }

    /// Closing note appended after region advisories.
    pub fn advisory_disclaimer(self) -> &'static str {
        match self {
            Locale::Ja => "※ 本出力は“診断”ではなく、対話のきっかけ資料です。",
            Locale::En => "* This output is not a diagnosis; it is material to start a conversation.",
        }
    }

    pub fn default_title(self) -> &'static str {
        match self {
            Locale::Ja => "スリーサークル図（家族／所有／経営）",
            Locale::En => "Three-circle diagram (Family / Ownership / Management)",
        }
    }

    /// Name given to imported records without a usable name.
    pub fn placeholder_name(self) -> &'static str {
        match self {
            Locale::Ja => "名無し",
            Locale::En => "Unnamed",
        }
    }

    /// Names of the built-in sample roster, in roster order.
    pub fn sample_names(self) -> [&'static str; 6] {
        match self {
            Locale::Ja => [
                "創業者（父）",
                "後継候補（長男）",
                "配偶者",
                "社外取締役A",
                "休眠株主（叔父）",
                "CFO",
            ],
            Locale::En => [
                "Founder (father)",
                "Successor candidate (eldest son)",
                "Spouse",
                "Outside director A",
                "Dormant shareholder (uncle)",
                "CFO",
            ],
        }
    }
}
