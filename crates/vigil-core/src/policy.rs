//! Policy table: rule data, confidence thresholds, and response templates.
//!
//! A [`PolicyConfig`] is plain declarative data (loadable from JSON); a
//! [`PolicyTable`] is its compiled, validated form. The table is built once
//! at engine construction and is read-only afterwards, so concurrent
//! checks share it without locking. All regexes are compiled here, never
//! on the per-call path.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexSet};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Confidence assigned when a literal keyword matches.
pub const KEYWORD_CONFIDENCE: f32 = 0.7;

/// Confidence assigned when a regex pattern matches.
pub const PATTERN_CONFIDENCE: f32 = 0.85;

/// Confidence forced when the sheer volume of evidence is conclusive,
/// independent of which rules fired.
pub const EVIDENCE_VOLUME_CONFIDENCE: f32 = 0.95;

/// Number of recorded matches beyond which volume alone is conclusive.
pub const EVIDENCE_VOLUME_THRESHOLD: usize = 4;

/// Confidence assigned when any harmful sub-category keyword matches.
///
/// Harmful detection saturates here no matter how many sub-categories
/// fire; unlike the crisis and medical scorers it has no volume
/// escalation. The asymmetry is intentional and load-bearing for tuning.
pub const HARMFUL_MATCH_CONFIDENCE: f32 = 0.75;

/// Fixed confidence for model-output compliance violations.
pub const OUTPUT_VIOLATION_CONFIDENCE: f32 = 0.9;

/// Fixed confidence for cross-turn escalation detections.
pub const ESCALATION_CONFIDENCE: f32 = 0.8;

/// Minimum crisis signals across user turns before escalation triggers.
pub const ESCALATION_SIGNAL_FLOOR: usize = 3;

/// Safety categories the engine scores content against.
///
/// Checks run in fixed priority order: crisis first, then medical, then
/// harmful, then the reply and history checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Imminent self-harm or suicide risk. Highest priority; hard block.
    Crisis,
    /// Requests for diagnosis, medication, or treatment guidance.
    Medical,
    /// Violence, illegal-activity, or harassment language.
    Harmful,
}

impl Category {
    /// Returns all available categories in priority order.
    pub fn all() -> &'static [Category] {
        &[Category::Crisis, Category::Medical, Category::Harmful]
    }

    /// Returns the category as a lowercase tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Crisis => "crisis",
            Category::Medical => "medical",
            Category::Harmful => "harmful",
        }
    }

    /// Returns a human-readable name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Crisis => "Crisis",
            Category::Medical => "Medical",
            Category::Harmful => "Harmful",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sensitivity profile selecting which confidence thresholds apply.
///
/// Immutable for the lifetime of a moderator instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyMode {
    /// Very sensitive; errs on the side of over-blocking.
    Strict,
    /// Balanced trade-off between sensitivity and user freedom.
    #[default]
    Balanced,
    /// Intervenes only on strong signals.
    Permissive,
}

impl SafetyMode {
    /// Returns all available modes.
    pub fn all() -> &'static [SafetyMode] {
        &[
            SafetyMode::Strict,
            SafetyMode::Balanced,
            SafetyMode::Permissive,
        ]
    }

    /// Returns the mode as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyMode::Strict => "strict",
            SafetyMode::Balanced => "balanced",
            SafetyMode::Permissive => "permissive",
        }
    }
}

impl fmt::Display for SafetyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SafetyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "strict" => Ok(SafetyMode::Strict),
            "balanced" => Ok(SafetyMode::Balanced),
            "permissive" => Ok(SafetyMode::Permissive),
            other => Err(ConfigError::UnknownSafetyMode(other.to_string())),
        }
    }
}

/// How keyword rules match against text.
///
/// `Substring` reproduces the aggressive matching the rule data was tuned
/// with: a short keyword can fire inside an unrelated longer word ("rob"
/// inside "problem"). `WordBoundary` wraps each keyword in `\b..\b` at
/// table construction. Which bias is right is a policy choice, so it is a
/// knob rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrictness {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Whole-word matching via word-boundary regexes.
    WordBoundary,
}

/// Per-category confidence thresholds for one safety mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryThresholds {
    /// Cutoff for the crisis detector.
    pub crisis: f32,
    /// Cutoff for the medical detector.
    pub medical: f32,
    /// Cutoff for the harmful detector.
    pub harmful: f32,
}

impl CategoryThresholds {
    /// Returns the threshold for the given category.
    pub fn for_category(&self, category: Category) -> f32 {
        match category {
            Category::Crisis => self.crisis,
            Category::Medical => self.medical,
            Category::Harmful => self.harmful,
        }
    }
}

/// The full mode-by-category threshold matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdMatrix {
    /// Thresholds applied in strict mode.
    pub strict: CategoryThresholds,
    /// Thresholds applied in balanced mode.
    pub balanced: CategoryThresholds,
    /// Thresholds applied in permissive mode.
    pub permissive: CategoryThresholds,
}

impl ThresholdMatrix {
    /// Returns the threshold row for the given mode.
    pub fn for_mode(&self, mode: SafetyMode) -> &CategoryThresholds {
        match mode {
            SafetyMode::Strict => &self.strict,
            SafetyMode::Balanced => &self.balanced,
            SafetyMode::Permissive => &self.permissive,
        }
    }

    /// Validates that every cell lies in [0, 1].
    pub fn validate(&self) -> Result<()> {
        for &mode in SafetyMode::all() {
            let row = self.for_mode(mode);
            for &category in Category::all() {
                let value = row.for_category(category);
                if !(0.0..=1.0).contains(&value) {
                    return Err(ConfigError::ThresholdOutOfRange {
                        mode,
                        category,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for ThresholdMatrix {
    fn default() -> Self {
        Self {
            strict: CategoryThresholds {
                crisis: 0.3,
                medical: 0.4,
                harmful: 0.5,
            },
            balanced: CategoryThresholds {
                crisis: 0.45,
                medical: 0.6,
                harmful: 0.6,
            },
            permissive: CategoryThresholds {
                crisis: 0.5,
                medical: 0.65,
                harmful: 0.8,
            },
        }
    }
}

/// Canned response texts substituted for model output on intervention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTemplates {
    /// Shown on a crisis block.
    pub crisis: String,
    /// Shown on a medical redirect and on output-compliance violations.
    pub medical: String,
    /// Shown on a harmful-content block.
    pub harmful: String,
    /// Session-opening disclaimer. May be empty; never required.
    pub disclaimer: String,
}

impl ResponseTemplates {
    /// Returns the template for the given category.
    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::Crisis => &self.crisis,
            Category::Medical => &self.medical,
            Category::Harmful => &self.harmful,
        }
    }

    /// Validates that every intervening category has a non-empty template.
    ///
    /// The disclaimer is exempt: an absent disclaimer renders as an empty
    /// string rather than an error.
    pub fn validate(&self) -> Result<()> {
        for &category in Category::all() {
            if self.for_category(category).trim().is_empty() {
                return Err(ConfigError::EmptyTemplate(category));
            }
        }
        Ok(())
    }
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            crisis: CRISIS_TEMPLATE.to_string(),
            medical: MEDICAL_TEMPLATE.to_string(),
            harmful: HARMFUL_TEMPLATE.to_string(),
            disclaimer: DISCLAIMER_TEMPLATE.to_string(),
        }
    }
}

/// A named group of harmful-content keywords.
///
/// Groups are kept in an ordered list rather than a map so scan order and
/// tag order are deterministic across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmfulGroup {
    /// Sub-category name recorded in result tags (e.g. "violence").
    pub name: String,
    /// Keywords that place text in this sub-category.
    pub keywords: Vec<String>,
}

impl HarmfulGroup {
    /// Creates a new harmful group.
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Declarative moderation policy data.
///
/// All fields default to the built-in supportive-counseling rule set, so
/// partial JSON documents override only what they name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Crisis keywords (case-insensitive).
    pub crisis_keywords: Vec<String>,
    /// Crisis regex patterns, matched against lowercased text.
    pub crisis_patterns: Vec<String>,
    /// Medical-request keywords (case-insensitive).
    pub medical_keywords: Vec<String>,
    /// Medical-request regex patterns, matched against lowercased text.
    pub medical_patterns: Vec<String>,
    /// Harmful sub-categories, scanned in order.
    pub harmful_groups: Vec<HarmfulGroup>,
    /// Diagnostic-phrasing patterns applied to model replies.
    pub diagnosis_patterns: Vec<String>,
    /// Treatment-recommendation patterns applied to model replies.
    pub treatment_patterns: Vec<String>,
    /// The mode-by-category threshold matrix.
    pub thresholds: ThresholdMatrix,
    /// Canned response templates.
    pub templates: ResponseTemplates,
    /// Keyword matching strictness.
    pub strictness: MatchStrictness,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::supportive_defaults()
    }
}

impl PolicyConfig {
    /// Built-in rule set for a pre-consultation support deployment.
    pub fn supportive_defaults() -> Self {
        Self {
            crisis_keywords: to_strings(&[
                "suicide",
                "su1cide",
                "sui-cide",
                "end my life",
                "kill myself",
                "kms",
                "want to die",
                "better off die",
                "hurt myself",
                "self-harm",
                "gun",
                "shoot myself",
                "stab myself",
                "poison",
                "suffocate",
                "choke myself",
                "bury myself",
                "goodbye forever",
                "final message",
                "end it all",
                "disappear forever",
                "don't want to live",
                "want to sleep forever",
                "never wake up",
                "nothing matters",
                "lost all purpose",
            ]),
            crisis_patterns: to_strings(&[
                r"\b(want|wanna|wanting|planning|plan|going|gonna|ready)\s+(to|2)\s+(die|kill( myself)?|end( my life| it all)?|hurt( myself)?)\b",
                r"\b(thinking|thought) about (suicide|dying|ending it)\b",
                r"\b(kms|unalive|off(ing)? myself)\b",
                r"\b(suicide|suicidal|su1cide)\b",
                r"\b(hang myself|overdose|take (too )?many pills|drown myself|jump off)\b",
                r"\b(no (reason|point|purpose) (to )?(live|continue)|nothing left|no way out)\b",
                r"\b(hopeless|worthless|a burden|better off dead|wish i (were|was) dead|tired of living|done with life)\b",
                "(💀|🔪|🔫|💊)",
            ]),
            medical_keywords: to_strings(&[
                "diagnose",
                "diagnosis",
                "self-diagnose",
                "self diagnosis",
                "what condition",
                "what disorder",
                "what illness",
                "what disease",
                "do i have",
                "could it be",
                "symptoms of",
                "signs of",
                "what's wrong with me",
                "check if i have",
                "professional diagnosis",
                "clinical opinion",
                "prescribe",
                "prescription",
                "give me medicine",
                "medication",
                "meds",
                "pills",
                "tablets",
                "antidepressant",
                "antianxiety",
                "ssri",
                "dosage",
                "side effects",
                "therapy plan",
                "treatment plan",
                "cure my depression",
                "cure my anxiety",
                "how to treat",
                "is it curable",
                "mental disorder",
                "psychiatric illness",
                "psychological evaluation",
                "am i depressed",
                "bipolar",
                "ocd",
                "ptsd",
                "adhd",
                "anxiety disorder",
                "panic disorder",
                "schizophrenia",
                "borderline personality disorder",
                "eating disorder",
                "substance abuse",
                "addiction",
                "alcoholism",
            ]),
            medical_patterns: to_strings(&[
                r"\b(can you |please )?(prescribe|recommend|suggest) (medication|medicine|pills|drugs|antidepressants?|ssri)\b",
                r"\b(refill|change|adjust|stop) (my )?(meds|medication|prescription|dosage)\b",
                r"\b(side effects?|effect of) (this )?(drug|medicine|medication|pill)\b",
                r"\b(do i|could i|might i|am i) (have|having|suffering from)\b",
                r"\bis this an? (disorder|condition|illness|disease)\b",
                r"\b(symptoms?|signs?) of\b",
                r"\bwhat('s| is) (wrong|happening)( with me)?\b",
                r"\bhow (do i|to) (treat|cure|heal|fix)\b",
                r"\b(treatment|therapy) (plan|options?|recommendations?)\b",
                r"\b(is there a|any) (cure|treatment)\b",
                r"\b(psychological|psychiatric) (evaluation|assessment|diagnosis)\b",
                r"\b(clinical|professional) (opinion|diagnosis)\b",
                r"\blife expectancy (with|for)\b",
            ]),
            harmful_groups: vec![
                HarmfulGroup::new(
                    "violence",
                    &[
                        "kill",
                        "murder",
                        "stab",
                        "shoot",
                        "bomb",
                        "torture",
                        "beat up",
                        "attack",
                        "blood",
                        "slaughter",
                        "assassinate",
                        "execute",
                        "lynch",
                        "massacre",
                        "terror",
                        "revenge",
                        "destroy",
                        "ruin",
                        "harm",
                        "hurt",
                        "wound",
                    ],
                ),
                HarmfulGroup::new(
                    "illegal",
                    &[
                        "drug deal",
                        "steal",
                        "rob",
                        "hack",
                        "pirate",
                        "bribe",
                        "smuggle",
                        "counterfeit",
                        "fraud",
                        "theft",
                        "assault",
                        "burglary",
                        "embezzle",
                        "sell drugs",
                    ],
                ),
                HarmfulGroup::new(
                    "harassment",
                    &[
                        "bully",
                        "harass",
                        "threaten",
                        "intimidate",
                        "stalk",
                        "dox",
                        "insult",
                        "mock",
                        "taunt",
                        "ridicule",
                        "discriminate",
                        "hate speech",
                        "hate you",
                        "worthless",
                        "stupid",
                        "idiot",
                        "loser",
                        "annoying",
                        "kill yourself",
                        "go die",
                    ],
                ),
            ],
            diagnosis_patterns: to_strings(&[
                r"\b(you have|you are suffering from|diagnosed with|it is likely you have)\b",
                r"\b(this means you have|this indicates you have|you may have)\b",
            ]),
            treatment_patterns: to_strings(&[
                r"\b(you should|you need to|it is recommended to|you must)\b.*\b(take|use|start|stop|change)\b.*\b(medication|therapy|treatment|drugs?)\b",
                r"\b(the best treatment is|the best medication is)\b",
                r"\btry (ssri|prozac|xanax|antidepressants)\b",
            ]),
            thresholds: ThresholdMatrix::default(),
            templates: ResponseTemplates::default(),
            strictness: MatchStrictness::default(),
        }
    }

    /// Parses declarative policy data from a JSON document.
    ///
    /// Fields absent from the document keep their built-in defaults.
    /// Parsing alone does not validate; validation happens when the
    /// config is compiled into a [`PolicyTable`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A compiled keyword list.
///
/// Keywords are lowercased once at construction. In word-boundary mode
/// each keyword also gets a pre-compiled `\b..\b` regex.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
    boundary: Option<Vec<Regex>>,
}

impl KeywordSet {
    fn compile(keywords: Vec<String>, strictness: MatchStrictness) -> Result<Self> {
        let keywords: Vec<String> = keywords.into_iter().map(|k| k.to_lowercase()).collect();
        let boundary = match strictness {
            MatchStrictness::Substring => None,
            MatchStrictness::WordBoundary => {
                let mut regexes = Vec::with_capacity(keywords.len());
                for keyword in &keywords {
                    let pattern = format!(r"\b{}\b", regex::escape(keyword));
                    let regex =
                        Regex::new(&pattern).map_err(|source| ConfigError::InvalidPattern {
                            pattern,
                            source,
                        })?;
                    regexes.push(regex);
                }
                Some(regexes)
            }
        };
        Ok(Self { keywords, boundary })
    }

    /// Returns the keywords matching `text`, in configuration order.
    ///
    /// `text` must already be lowercased.
    pub fn matches<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.keywords
            .iter()
            .enumerate()
            .filter(|(i, keyword)| match &self.boundary {
                Some(regexes) => regexes[*i].is_match(text),
                None => text.contains(keyword.as_str()),
            })
            .map(|(_, keyword)| keyword.as_str())
            .collect()
    }

    /// Returns true if any keyword matches `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.keywords
            .iter()
            .enumerate()
            .any(|(i, keyword)| match &self.boundary {
                Some(regexes) => regexes[i].is_match(text),
                None => text.contains(keyword.as_str()),
            })
    }

    /// Returns the number of configured keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns true if no keywords are configured.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// A compiled pattern list.
///
/// Keeps a `RegexSet` for the fast any-pattern check alongside the
/// individual regexes for attributing which pattern fired.
#[derive(Debug, Clone)]
pub struct PatternSet {
    set: RegexSet,
    regexes: Vec<Regex>,
    sources: Vec<String>,
}

impl PatternSet {
    fn compile(sources: Vec<String>) -> Result<Self> {
        let mut regexes = Vec::with_capacity(sources.len());
        for source_text in &sources {
            let regex =
                Regex::new(source_text).map_err(|source| ConfigError::InvalidPattern {
                    pattern: source_text.clone(),
                    source,
                })?;
            regexes.push(regex);
        }
        let set = RegexSet::new(&sources).map_err(|source| ConfigError::InvalidPattern {
            pattern: sources.join(" | "),
            source,
        })?;
        Ok(Self {
            set,
            regexes,
            sources,
        })
    }

    /// Returns the source form of every pattern matching `text`, in
    /// configuration order.
    pub fn matches<'a>(&'a self, text: &str) -> Vec<&'a str> {
        if !self.set.is_match(text) {
            return Vec::new();
        }
        self.regexes
            .iter()
            .zip(self.sources.iter())
            .filter(|(regex, _)| regex.is_match(text))
            .map(|(_, source)| source.as_str())
            .collect()
    }

    /// Returns the number of configured patterns.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Compiled keyword and pattern rules for one scored category.
#[derive(Debug, Clone)]
pub struct CategoryRules {
    /// Compiled keyword list.
    pub keywords: KeywordSet,
    /// Compiled pattern list.
    pub patterns: PatternSet,
}

/// A compiled harmful sub-category.
#[derive(Debug, Clone)]
pub struct HarmfulRules {
    /// Sub-category name recorded in result tags.
    pub name: String,
    /// Compiled keyword list.
    pub keywords: KeywordSet,
}

/// The compiled, immutable policy table shared by all detectors.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    crisis: CategoryRules,
    medical: CategoryRules,
    harmful: Vec<HarmfulRules>,
    diagnosis: PatternSet,
    treatment: PatternSet,
    thresholds: ThresholdMatrix,
    templates: ResponseTemplates,
    strictness: MatchStrictness,
}

impl PolicyTable {
    /// Validates and compiles a policy configuration.
    ///
    /// Fails if any threshold is outside [0, 1], any regex does not
    /// compile, or any intervening category lacks a fallback template.
    pub fn new(config: PolicyConfig) -> Result<Self> {
        config.thresholds.validate()?;
        config.templates.validate()?;

        let strictness = config.strictness;
        let crisis = CategoryRules {
            keywords: KeywordSet::compile(config.crisis_keywords, strictness)?,
            patterns: PatternSet::compile(config.crisis_patterns)?,
        };
        let medical = CategoryRules {
            keywords: KeywordSet::compile(config.medical_keywords, strictness)?,
            patterns: PatternSet::compile(config.medical_patterns)?,
        };
        let mut harmful = Vec::with_capacity(config.harmful_groups.len());
        for group in config.harmful_groups {
            harmful.push(HarmfulRules {
                name: group.name,
                keywords: KeywordSet::compile(group.keywords, strictness)?,
            });
        }

        Ok(Self {
            crisis,
            medical,
            harmful,
            diagnosis: PatternSet::compile(config.diagnosis_patterns)?,
            treatment: PatternSet::compile(config.treatment_patterns)?,
            thresholds: config.thresholds,
            templates: config.templates,
            strictness,
        })
    }

    /// Compiled crisis rules.
    pub fn crisis(&self) -> &CategoryRules {
        &self.crisis
    }

    /// Compiled medical rules.
    pub fn medical(&self) -> &CategoryRules {
        &self.medical
    }

    /// Compiled harmful sub-categories, in scan order.
    pub fn harmful(&self) -> &[HarmfulRules] {
        &self.harmful
    }

    /// Diagnostic-phrasing patterns for the output checker.
    pub fn diagnosis_patterns(&self) -> &PatternSet {
        &self.diagnosis
    }

    /// Treatment-recommendation patterns for the output checker.
    pub fn treatment_patterns(&self) -> &PatternSet {
        &self.treatment
    }

    /// Returns the threshold for the given mode and category.
    pub fn threshold(&self, mode: SafetyMode, category: Category) -> f32 {
        self.thresholds.for_mode(mode).for_category(category)
    }

    /// Returns the fallback template for the given category.
    pub fn template(&self, category: Category) -> &str {
        self.templates.for_category(category)
    }

    /// The configured response templates.
    pub fn templates(&self) -> &ResponseTemplates {
        &self.templates
    }

    /// The configured keyword matching strictness.
    pub fn strictness(&self) -> MatchStrictness {
        self.strictness
    }
}

const CRISIS_TEMPLATE: &str = "\
I'm deeply concerned about what you're sharing. Your safety is my top priority, \
and I want you to know that help is available right now.

Please reach out to trained crisis counselors immediately:
- National Suicide Prevention Lifeline (U.S.): 988 (24/7)
- Crisis Text Line: Text HOME to 741741
- Samaritans of Singapore 24-hour Hotline: 1767
- National Mindline 24-hour Helpline: 1771
- Institute of Mental Health (IMH) Emergency Helpline: 6389-2222

You are not alone in this. It takes courage to talk about what you're going \
through, and reaching out for help is a strong and important step. If you are \
in immediate danger of harming yourself, please call emergency services right \
now. You deserve safety and care, and there are people ready to support you \
through this.";

const MEDICAL_TEMPLATE: &str = "\
I understand you're looking for medical guidance, and I appreciate you \
reaching out. However, I'm not qualified to provide medical diagnoses or \
treatment recommendations.

For your health and safety, please consult with a licensed clinician for \
diagnosis and medication questions.

What I can do here is help you reflect on your experiences, identify patterns \
in your mood or behavior, and prepare questions you may want to bring to your \
healthcare provider. Your health is important, and reaching out to a qualified \
professional is the safest way to get the support you need.";

const HARMFUL_TEMPLATE: &str = "\
I cannot and will not provide assistance with that request as it could \
potentially cause harm.

This includes content related to violence, harassment, or illegal activities. \
If your message was not intended to promote harm, please feel free to rephrase \
so I can better understand your needs. I am here to help you with emotional \
reflection, safe coping strategies, and preparing for conversations with \
qualified professionals.

If you are experiencing thoughts of self-harm or harming others, please reach \
out to a crisis hotline or emergency services immediately.";

const DISCLAIMER_TEMPLATE: &str = "\
Welcome to the Psychological Pre-Consultation Support System.

IMPORTANT DISCLAIMER:
This is an AI support system designed to provide initial emotional support and \
guidance. Please note:
- I am not a licensed clinician and cannot diagnose, prescribe, or treat \
medical or psychological conditions.
- I cannot replace professional therapy, counseling, or medical care.
- I may not always fully understand your situation.

When to Seek Immediate Help:
- If you are in crisis or experiencing thoughts of self-harm
- If you have a medical emergency or urgent health concern

Crisis Resources:
- Samaritans of Singapore 24-hour Hotline: 1767
- National Mindline 24-hour Helpline: 1771
- Institute of Mental Health (IMH) Emergency Helpline: 6389-2222

Your wellbeing is important. How can I support you today?";
