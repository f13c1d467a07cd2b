//! Canned micro-moments and coaching suggestions for the demo pitches.

use crate::models::{MicroMoment, MomentType, Severity, SmartSuggestion, SuggestionType};

pub fn poor_moments() -> Vec<MicroMoment> {
    vec![
        MicroMoment::new(
            "bad-1",
            15,
            MomentType::Drop,
            55,
            "Speaking too fast - losing clarity",
            Severity::High,
        ),
        MicroMoment::new(
            "bad-2",
            45,
            MomentType::Drop,
            38,
            "Lost eye contact for extended period",
            Severity::High,
        ),
        MicroMoment::new(
            "bad-3",
            78,
            MomentType::Drop,
            28,
            "Monotone delivery - energy dropping",
            Severity::High,
        ),
        MicroMoment::new(
            "bad-4",
            95,
            MomentType::Neutral,
            42,
            "Attempted recovery with pricing discussion",
            Severity::Medium,
        ),
        MicroMoment::new(
            "bad-5",
            130,
            MomentType::Drop,
            35,
            "Weak closing - no clear call-to-action",
            Severity::High,
        ),
    ]
}

pub fn poor_suggestions() -> Vec<SmartSuggestion> {
    vec![
        SmartSuggestion::new(
            "sug-bad-1",
            15,
            "🎯 You're speaking too fast - slow down and breathe",
            SuggestionType::Warning,
            "⚠️",
        ),
        SmartSuggestion::new(
            "sug-bad-2",
            45,
            "👁️ Maintain eye contact - you're losing your audience",
            SuggestionType::Warning,
            "👁️",
        ),
        SmartSuggestion::new(
            "sug-bad-3",
            60,
            "📖 Add a customer success story here to re-engage",
            SuggestionType::Tip,
            "💡",
        ),
        SmartSuggestion::new(
            "sug-bad-4",
            78,
            "⚠️ Energy dropping critically - re-engage with enthusiasm!",
            SuggestionType::Warning,
            "🔴",
        ),
        SmartSuggestion::new(
            "sug-bad-5",
            110,
            "🎬 Prepare for strong closing - this is crucial",
            SuggestionType::Tip,
            "💪",
        ),
    ]
}

pub fn solid_moments() -> Vec<MicroMoment> {
    vec![
        MicroMoment::new(
            "good-1",
            8,
            MomentType::Peak,
            78,
            "Strong opening hook with compelling question",
            Severity::Low,
        ),
        MicroMoment::new(
            "good-2",
            42,
            MomentType::Neutral,
            62,
            "Slight pace issue during technical explanation",
            Severity::Medium,
        ),
        MicroMoment::new(
            "good-3",
            85,
            MomentType::Peak,
            82,
            "Powerful customer testimonial delivered well",
            Severity::Low,
        ),
        MicroMoment::new(
            "good-4",
            120,
            MomentType::Peak,
            84,
            "Clear value proposition with specific ROI",
            Severity::Low,
        ),
        MicroMoment::new(
            "good-5",
            155,
            MomentType::Peak,
            86,
            "Strong call-to-action with urgency",
            Severity::Low,
        ),
    ]
}

pub fn solid_suggestions() -> Vec<SmartSuggestion> {
    vec![
        SmartSuggestion::new(
            "sug-good-1",
            8,
            "✅ Excellent opening! Your hook is engaging",
            SuggestionType::Success,
            "🎯",
        ),
        SmartSuggestion::new(
            "sug-good-2",
            42,
            "💡 Simplify this technical section slightly",
            SuggestionType::Tip,
            "📊",
        ),
        SmartSuggestion::new(
            "sug-good-3",
            85,
            "🔥 Perfect storytelling moment - great delivery!",
            SuggestionType::Success,
            "⭐",
        ),
        SmartSuggestion::new(
            "sug-good-4",
            120,
            "💰 Strong value prop - numbers are convincing",
            SuggestionType::Success,
            "📈",
        ),
    ]
}

pub fn expert_moments() -> Vec<MicroMoment> {
    vec![
        MicroMoment::new(
            "expert-1",
            5,
            MomentType::Peak,
            88,
            "Captivating opening - immediate value stated",
            Severity::Low,
        ),
        MicroMoment::new(
            "expert-2",
            35,
            MomentType::Peak,
            91,
            "Perfect pacing with strategic pause",
            Severity::Low,
        ),
        MicroMoment::new(
            "expert-3",
            72,
            MomentType::Peak,
            93,
            "Emotional connection through relatable story",
            Severity::Low,
        ),
        MicroMoment::new(
            "expert-4",
            108,
            MomentType::Peak,
            94,
            "Data-driven claims with visual reinforcement",
            Severity::Low,
        ),
        MicroMoment::new(
            "expert-5",
            145,
            MomentType::Peak,
            96,
            "Powerful closing with clear next steps",
            Severity::Low,
        ),
        MicroMoment::new(
            "expert-6",
            165,
            MomentType::Peak,
            95,
            "Handled objections proactively",
            Severity::Low,
        ),
    ]
}

pub fn expert_suggestions() -> Vec<SmartSuggestion> {
    vec![
        SmartSuggestion::new(
            "sug-expert-1",
            5,
            "🌟 Perfect opening - you have their attention!",
            SuggestionType::Success,
            "🎯",
        ),
        SmartSuggestion::new(
            "sug-expert-2",
            35,
            "⭐ Excellent use of pause for emphasis",
            SuggestionType::Success,
            "👏",
        ),
        SmartSuggestion::new(
            "sug-expert-3",
            72,
            "❤️ Strong emotional connection established",
            SuggestionType::Success,
            "🔥",
        ),
        SmartSuggestion::new(
            "sug-expert-4",
            108,
            "📊 Data presentation is crystal clear",
            SuggestionType::Success,
            "💎",
        ),
        SmartSuggestion::new(
            "sug-expert-5",
            145,
            "🎬 Masterclass closing - this is how it's done!",
            SuggestionType::Success,
            "🏆",
        ),
    ]
}
