//! Ordered keyword rules. The first rule whose matcher fits wins, so adding
//! a topic means adding a row, and priority is row order.

use chrono::NaiveDate;

use super::age::{age_on, BIRTH_DATE};
use super::replies;
use crate::locale::{Locale, Localized};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Creator,
    Education,
    Skills,
    Projects,
    Certificates,
    Contact,
    Volunteer,
    Family,
    Greeting,
    Thanks,
    Age,
    BloodGroup,
}

/// Substring tests against the lowercased input. Not word-bounded.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    Any(&'static [&'static str]),
    All(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Matcher::Any(keywords) => keywords.iter().any(|k| normalized.contains(k)),
            Matcher::All(keywords) => keywords.iter().all(|k| normalized.contains(k)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Fixed(Localized<&'static str>),
    /// Template with an `{age}` slot filled from the birth date.
    Age(Localized<&'static str>),
}

impl Reply {
    pub fn render(&self, locale: Locale, today: NaiveDate) -> String {
        match self {
            Reply::Fixed(text) => text.get(locale).to_string(),
            Reply::Age(template) => {
                let age = locale.localize_digits(&age_on(BIRTH_DATE, today).to_string());
                template.get(locale).replace("{age}", &age)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReplyRule {
    pub topic: Topic,
    pub matcher: Matcher,
    pub reply: Reply,
}

pub const RULES: &[ReplyRule] = &[
    ReplyRule {
        topic: Topic::Creator,
        matcher: Matcher::Any(&[
            "developer", "creator", "who made you", "your creator", "zisan", "ridoan",
            "জিসান", "রিদওয়ান", "নির্মাতা",
        ]),
        reply: Reply::Fixed(replies::CREATOR),
    },
    ReplyRule {
        topic: Topic::Education,
        matcher: Matcher::Any(&[
            "education", "study", "school", "college",
            "শিক্ষা", "পড়াশোনা", "স্কুল", "কলেজ",
        ]),
        reply: Reply::Fixed(replies::EDUCATION),
    },
    ReplyRule {
        topic: Topic::Skills,
        matcher: Matcher::Any(&["skill", "expertise", "what can you do", "ability", "দক্ষতা"]),
        reply: Reply::Fixed(replies::SKILLS),
    },
    ReplyRule {
        topic: Topic::Projects,
        matcher: Matcher::Any(&["project", "work", "build", "developed", "প্রজেক্ট", "প্রকল্প"]),
        reply: Reply::Fixed(replies::PROJECTS),
    },
    ReplyRule {
        topic: Topic::Certificates,
        matcher: Matcher::Any(&[
            "certificate", "certification", "achievement", "award", "olympiad",
            "সার্টিফিকেট", "সনদ", "অলিম্পিয়াড",
        ]),
        reply: Reply::Fixed(replies::CERTIFICATES),
    },
    ReplyRule {
        topic: Topic::Contact,
        matcher: Matcher::Any(&[
            "contact", "email", "phone", "address", "reach", "connect",
            "যোগাযোগ", "ইমেইল", "ফোন",
        ]),
        reply: Reply::Fixed(replies::CONTACT),
    },
    // No bare "blood" here: it would shadow the blood group rule below.
    // "donat" covers donate/donation/donating.
    ReplyRule {
        topic: Topic::Volunteer,
        matcher: Matcher::Any(&[
            "volunteer", "donat", "donor", "bobdo", "youthhope",
            "স্বেচ্ছাসেবী", "রক্তদান",
        ]),
        reply: Reply::Fixed(replies::VOLUNTEER),
    },
    ReplyRule {
        topic: Topic::Family,
        matcher: Matcher::Any(&[
            "family", "father", "mother", "parent", "sibling",
            "পরিবার", "পিতা", "মাতা", "বাবা", "বোন",
        ]),
        reply: Reply::Fixed(replies::FAMILY),
    },
    ReplyRule {
        topic: Topic::Greeting,
        matcher: Matcher::Any(&["hello", "hi", "hey", "হ্যালো", "সালাম"]),
        reply: Reply::Fixed(replies::GREETING),
    },
    ReplyRule {
        topic: Topic::Thanks,
        matcher: Matcher::Any(&["thank", "thanks", "ধন্যবাদ"]),
        reply: Reply::Fixed(replies::THANKS),
    },
    ReplyRule {
        topic: Topic::Age,
        matcher: Matcher::Any(&["age", "old", "birth", "বয়স", "জন্ম"]),
        reply: Reply::Age(replies::AGE),
    },
    ReplyRule {
        topic: Topic::BloodGroup,
        matcher: Matcher::All(&["blood", "group"]),
        reply: Reply::Fixed(replies::BLOOD_GROUP),
    },
];

/// First rule matching `input`, if any.
pub fn classify(input: &str) -> Option<&'static ReplyRule> {
    let normalized = input.to_lowercase();
    RULES.iter().find(|rule| rule.matcher.matches(&normalized))
}
