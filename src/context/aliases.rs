//! Legacy field consolidation.
//!
//! Older survey versions used different field names for the same answer. Each
//! [`AliasRule`] names the stable output keys and the input keys that feed them,
//! highest priority first.

use crate::context::first_truthy;
use crate::value::Record;

/// Output keys fed from one precedence chain of input keys.
#[derive(Debug, Clone, Copy)]
pub struct AliasRule {
    /// Every output key receives the same resolved value.
    pub outputs: &'static [&'static str],
    /// Input keys in priority order; the first non-empty one wins.
    pub sources: &'static [&'static str],
}

const PROJECT_GOAL_SOURCES: &[&str] = &["strategische_ziele", "ki_ziele"];

pub const ALIAS_RULES: &[AliasRule] = &[
    AliasRule { outputs: &["HAUPTLEISTUNG"], sources: &["hauptleistung"] },
    AliasRule { outputs: &["VISION_PRIORITAET"], sources: &["vision_prioritaet"] },
    AliasRule { outputs: &["ZEITBUDGET"], sources: &["zeitbudget"] },
    AliasRule { outputs: &["KI_KNOWHOW"], sources: &["ki_kompetenz"] },
    AliasRule { outputs: &["PROJEKTZIEL"], sources: PROJECT_GOAL_SOURCES },
    AliasRule { outputs: &["DATENSCHUTZ"], sources: &["technische_massnahmen"] },
    AliasRule { outputs: &["GOVERNANCE"], sources: &["governance_richtlinien"] },
    AliasRule { outputs: &["DATENSCHUTZBEAUFTRAGTER"], sources: &["datenschutzbeauftragter"] },
    AliasRule { outputs: &["AI_ACT_KENNTNIS"], sources: &["ai_act_kenntnis"] },
    // LOECHREGELN is a misspelling older templates still read.
    AliasRule { outputs: &["LOESCHREGELN", "LOECHREGELN"], sources: &["loeschregeln"] },
    AliasRule { outputs: &["PROZESSE_PAPIERLOS"], sources: &["prozesse_papierlos"] },
    AliasRule { outputs: &["vision"], sources: &["vision_3_jahre"] },
    AliasRule { outputs: &["projektziele"], sources: PROJECT_GOAL_SOURCES },
];

pub fn consolidate_aliases(form: &Record, ctx: &mut Record) {
    for rule in ALIAS_RULES {
        let value = first_truthy(form, rule.sources);
        for output in rule.outputs {
            ctx.insert(output.to_string(), value.clone());
        }
    }
}
